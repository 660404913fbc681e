use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::args::{
    ApplyArgs, Cli, DashboardCommand, ImportArgs, ProviderArgs, ProviderCommand, ResourceArgs,
    StateArgs,
};
use crate::error::NrdashError;
use crate::output::{render_dashboard_tree, render_state_table};
use crate::providers::newrelic::dashboard::{self, DashboardData, RESOURCE_TYPE};
use crate::providers::{Provider, get_provider};
use crate::resource::ResourceError;
use crate::terraform::{StateError, StateFile, default_state_path};

pub async fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), NrdashError> {
    match cli.command {
        ProviderCommand::Newrelic { command } => match command {
            DashboardCommand::Validate(args) => validate(&args.config, out),
            DashboardCommand::Plan(args) => plan(&args.config, out),
            DashboardCommand::Create(args) => create(args, out).await,
            DashboardCommand::Read(args) => read(args, out).await,
            DashboardCommand::Update(args) => update(args, out).await,
            DashboardCommand::Delete(args) => delete(args, out).await,
            DashboardCommand::Import(args) => import(args, out).await,
            DashboardCommand::Show(args) => show(&args, out),
        },
    }
}

fn load_raw_config(path: &Path) -> Result<Value, NrdashError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| NrdashError::Config(format!("failed to parse {}: {}", path.display(), e)))
}

fn state_path(args: &StateArgs) -> Result<PathBuf, NrdashError> {
    match &args.state {
        Some(path) => Ok(path.clone()),
        None => default_state_path().ok_or(NrdashError::State(StateError::NoDefaultLocation)),
    }
}

fn connect(args: ProviderArgs) -> Result<Box<dyn Provider>, NrdashError> {
    Ok(get_provider("newrelic", &args.into())?)
}

fn stored_dashboard(state: &StateFile, name: &str) -> Result<DashboardData, NrdashError> {
    let resource = state
        .get(name)
        .ok_or_else(|| NrdashError::Config(format!("no resource named '{}' in state", name)))?;
    Ok(dashboard::from_resource_state(resource)?)
}

fn ensure_absent(state: &StateFile, name: &str) -> Result<(), NrdashError> {
    if state.get(name).is_some() {
        return Err(NrdashError::Config(format!(
            "resource '{}' already exists in state",
            name
        )));
    }
    Ok(())
}

// NOTE: A cleared id drops the entry
fn persist(
    state: &mut StateFile,
    path: &Path,
    name: &str,
    d: &DashboardData,
) -> Result<(), NrdashError> {
    if d.exists() {
        state.upsert(name, dashboard::to_resource_state(d)?);
    } else {
        state.remove(name);
    }
    state.save(path)?;
    Ok(())
}

fn vanished<W: Write>(out: &mut W, name: &str) -> Result<(), NrdashError> {
    writeln!(
        out,
        "{}.{} no longer exists remotely; removed from state",
        RESOURCE_TYPE, name
    )?;
    Ok(())
}

fn validate<W: Write>(path: &Path, out: &mut W) -> Result<(), NrdashError> {
    let raw = load_raw_config(path)?;
    let diagnostics = dashboard::validate(&raw);

    if diagnostics.is_empty() {
        writeln!(out, "Configuration is valid.")?;
        return Ok(());
    }

    for diagnostic in &diagnostics {
        writeln!(out, "Error: {}", diagnostic)?;
    }
    Err(ResourceError::InvalidConfig(diagnostics).into())
}

fn plan<W: Write>(path: &Path, out: &mut W) -> Result<(), NrdashError> {
    let config = dashboard::bind(load_raw_config(path)?)?;
    let payload = dashboard::build_dashboard_struct(&config);
    writeln!(out, "{}", render_dashboard_tree(&payload))?;
    Ok(())
}

async fn create<W: Write>(args: ApplyArgs, out: &mut W) -> Result<(), NrdashError> {
    let path = state_path(&args.state)?;
    let mut state = StateFile::load(&path)?;
    ensure_absent(&state, &args.name)?;

    let config = dashboard::bind(load_raw_config(&args.config)?)?;
    let provider = connect(args.provider)?;

    let mut d = DashboardData::new(config);
    let outcome = dashboard::create(provider.dashboard_api()?, &mut d).await;

    // NOTE: An id assigned before a failed refresh is still recorded
    if d.exists() {
        persist(&mut state, &path, &args.name, &d)?;
        tracing::info!(name = %args.name, id = %d.id(), "dashboard recorded in state");
    }
    outcome?;

    if d.exists() {
        writeln!(out, "Created {}.{} (id {})", RESOURCE_TYPE, args.name, d.id())?;
    } else {
        writeln!(
            out,
            "{}.{} was created but no longer exists remotely; not recorded in state",
            RESOURCE_TYPE, args.name
        )?;
    }
    Ok(())
}

async fn read<W: Write>(args: ResourceArgs, out: &mut W) -> Result<(), NrdashError> {
    let path = state_path(&args.state)?;
    let mut state = StateFile::load(&path)?;
    let mut d = stored_dashboard(&state, &args.name)?;
    let provider = connect(args.provider)?;

    dashboard::read(provider.dashboard_api()?, &mut d).await?;
    persist(&mut state, &path, &args.name, &d)?;

    if d.exists() {
        writeln!(out, "Refreshed {}.{} (id {})", RESOURCE_TYPE, args.name, d.id())?;
    } else {
        vanished(out, &args.name)?;
    }
    Ok(())
}

async fn update<W: Write>(args: ApplyArgs, out: &mut W) -> Result<(), NrdashError> {
    let path = state_path(&args.state)?;
    let mut state = StateFile::load(&path)?;
    let mut d = stored_dashboard(&state, &args.name)?;

    d.set_config(dashboard::bind(load_raw_config(&args.config)?)?);
    let provider = connect(args.provider)?;

    let id = d.id().to_string();
    let outcome = dashboard::update(provider.dashboard_api()?, &mut d).await;
    persist(&mut state, &path, &args.name, &d)?;
    outcome?;

    if d.exists() {
        writeln!(out, "Updated {}.{} (id {})", RESOURCE_TYPE, args.name, id)?;
    } else {
        vanished(out, &args.name)?;
    }
    Ok(())
}

async fn delete<W: Write>(args: ResourceArgs, out: &mut W) -> Result<(), NrdashError> {
    let path = state_path(&args.state)?;
    let mut state = StateFile::load(&path)?;
    let mut d = stored_dashboard(&state, &args.name)?;
    let provider = connect(args.provider)?;

    let id = d.id().to_string();
    dashboard::delete(provider.dashboard_api()?, &mut d).await?;
    persist(&mut state, &path, &args.name, &d)?;

    writeln!(out, "Deleted {}.{} (id {})", RESOURCE_TYPE, args.name, id)?;
    Ok(())
}

async fn import<W: Write>(args: ImportArgs, out: &mut W) -> Result<(), NrdashError> {
    let path = state_path(&args.state)?;
    let mut state = StateFile::load(&path)?;
    ensure_absent(&state, &args.name)?;

    let provider = connect(args.provider)?;
    let d = dashboard::import(provider.dashboard_api()?, &args.id).await?;
    persist(&mut state, &path, &args.name, &d)?;

    writeln!(
        out,
        "{}",
        provider.generate_import(RESOURCE_TYPE, &args.name, d.id())
    )?;
    Ok(())
}

fn show<W: Write>(args: &StateArgs, out: &mut W) -> Result<(), NrdashError> {
    let path = state_path(args)?;
    let state = StateFile::load(&path)?;
    writeln!(out, "{}", render_state_table(&state))?;
    Ok(())
}
