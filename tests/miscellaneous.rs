//! Aircraft, disruption and schedule endpoints.

use aeroapi::{AeroApi, ClientConfig, PageParams, ScheduleQuery};
use serde_json::json;
use wiremock::matchers::{path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> AeroApi {
    AeroApi::with_config(ClientConfig::new("test-key").with_base_url(server.uri())).unwrap()
}

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"ok": true}))
}

#[tokio::test]
async fn test_aircraft_endpoints() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/aircraft/N12345/owner"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(path("/aircraft/types/B738"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    assert!(api.miscellaneous().aircraft_owner("N12345").await.is_some());
    assert!(api.miscellaneous().aircraft_type("B738").await.is_some());
}

#[tokio::test]
async fn test_disruption_counts() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/disruption_counts/airline"))
        .and(query_param("time_period", "today"))
        .and(query_param("max_pages", "1"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(path("/disruption_counts/origin/KSFO"))
        .and(query_param("time_period", "yesterday"))
        .and(query_param_is_missing("max_pages"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let misc = api.miscellaneous();
    assert!(misc
        .global_disruption_counts("airline", "today", &PageParams::default())
        .await
        .is_some());
    assert!(misc
        .disruption_counts("origin", "KSFO", "yesterday")
        .await
        .is_some());
}

#[tokio::test]
async fn test_scheduled_flights() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/schedules/2024-05-01/2024-05-02"))
        .and(query_param("origin", "KSFO"))
        .and(query_param("include_codeshares", "false"))
        .and(query_param("include_regional", "true"))
        .and(query_param_is_missing("destination"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let query = ScheduleQuery {
        origin: Some("KSFO".to_string()),
        include_codeshares: false,
        ..Default::default()
    };
    assert!(api
        .miscellaneous()
        .scheduled_flights("2024-05-01", "2024-05-02", &query)
        .await
        .is_some());
}
