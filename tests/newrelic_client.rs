use nrdash::providers::newrelic::{
    DashboardApi, DashboardDetail, DashboardPayload, Editable, Icon, NewRelicClient, NewRelicError,
    Visibility,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dashboard_json(id: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "dashboard": {
            "id": id,
            "title": title,
            "icon": "bar-chart",
            "created_at": "2017-08-16T19:06:25Z",
            "updated_at": "2017-08-16T19:06:25Z",
            "visibility": "all",
            "editable": "editable_by_all",
            "ui_url": format!("https://insights.newrelic.com/accounts/1/dashboards/{}", id),
            "api_url": format!("https://api.newrelic.com/v2/dashboards/{}", id),
            "owner_email": "ops@example.com",
            "metadata": { "version": 1 },
            "filter": null,
            "widgets": []
        }
    })
}

fn request_payload(title: &str) -> DashboardPayload {
    let mut dashboard = DashboardDetail::new(title, Icon::BarChart);
    dashboard.visibility = Some(Visibility::All);
    DashboardPayload { dashboard }
}

fn client_for(server: &MockServer) -> NewRelicClient {
    NewRelicClient::with_base_url("test_key".to_string(), server.uri()).unwrap()
}

#[tokio::test]
async fn test_create_dashboard_posts_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dashboards.json"))
        .and(header("x-api-key", "test_key"))
        .and(body_partial_json(serde_json::json!({
            "dashboard": {
                "title": "Ops",
                "icon": "bar-chart",
                "visibility": "all",
                "editable": "editable_by_all",
                "metadata": { "version": 1 }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_json(129507, "Ops")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let created = client.create_dashboard(&request_payload("Ops")).await.unwrap();

    assert_eq!(created.dashboard.id, Some(129507));
    assert_eq!(created.dashboard.title, "Ops");
}

#[tokio::test]
async fn test_get_dashboard_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboards/129507.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_json(129507, "Ops")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let dashboard = client.get_dashboard(129507).await.unwrap();

    assert_eq!(dashboard.id, Some(129507));
    assert_eq!(dashboard.icon, Icon::BarChart);
    assert_eq!(dashboard.visibility, Some(Visibility::All));
    assert_eq!(dashboard.editable, Editable::EditableByAll);
    assert_eq!(dashboard.owner_email.as_deref(), Some("ops@example.com"));
}

#[tokio::test]
async fn test_get_dashboard_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboards/404.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": { "title": "Dashboard not found" }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_dashboard(404).await;

    assert!(matches!(result, Err(NewRelicError::NotFound)));
}

#[tokio::test]
async fn test_update_dashboard_puts_to_id_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/dashboards/42.json"))
        .and(body_partial_json(serde_json::json!({
            "dashboard": { "id": 42, "title": "Ops v2" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_json(42, "Ops v2")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut payload = request_payload("Ops v2");
    payload.dashboard.id = Some(42);

    let updated = client.update_dashboard(42, &payload).await.unwrap();
    assert_eq!(updated.dashboard.title, "Ops v2");
}

#[tokio::test]
async fn test_delete_dashboard_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/dashboards/42.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_json(42, "Ops")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.delete_dashboard(42).await.is_ok());
}

#[tokio::test]
async fn test_delete_dashboard_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/dashboards/42.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.delete_dashboard(42).await;

    assert!(matches!(result, Err(NewRelicError::NotFound)));
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboards/1.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "title": "Invalid API key" }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_dashboard(1).await;

    if let Err(NewRelicError::Auth { message }) = result {
        assert_eq!(message, "Invalid API key");
    } else {
        panic!("Expected NewRelicError::Auth, got {:?}", result);
    }
}

#[tokio::test]
async fn test_server_error_keeps_status_and_title() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dashboards.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "error": { "title": "Widget visualization is invalid" }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.create_dashboard(&request_payload("Ops")).await;

    if let Err(NewRelicError::Api { status, message }) = result {
        assert_eq!(status, 422);
        assert_eq!(message, "Widget visualization is invalid");
    } else {
        panic!("Expected NewRelicError::Api, got {:?}", result);
    }
}

#[tokio::test]
async fn test_server_error_without_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboards/1.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_dashboard(1).await;

    if let Err(NewRelicError::Api { status, message }) = result {
        assert_eq!(status, 500);
        assert_eq!(message, "Internal Server Error");
    } else {
        panic!("Expected NewRelicError::Api, got {:?}", result);
    }
}

#[tokio::test]
async fn test_rate_limited_reads_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboards/1.json"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_dashboard(1).await;

    assert!(matches!(
        result,
        Err(NewRelicError::RateLimited { retry_after: 30 })
    ));
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboards/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "unexpected": true
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_dashboard(1).await;

    if let Err(NewRelicError::Api { status, message }) = result {
        assert_eq!(status, 200);
        assert!(message.contains("Failed to parse response"));
    } else {
        panic!("Expected NewRelicError::Api, got {:?}", result);
    }
}

#[tokio::test]
async fn test_error_does_not_contain_api_key() {
    let mock_server = MockServer::start().await;
    let secret_key = "NRAK-super-secret-xyz789";

    Mock::given(method("GET"))
        .and(path("/dashboards/1.json"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": { "title": "Forbidden" }
        })))
        .mount(&mock_server)
        .await;

    let client =
        NewRelicClient::with_base_url(secret_key.to_string(), mock_server.uri()).unwrap();
    let result = client.get_dashboard(1).await;
    let error_string = format!("{:?}", result);

    assert!(
        !error_string.contains(secret_key),
        "Error output must not contain the API key"
    );
}
