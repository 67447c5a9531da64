//! History wrapper paths and query parameters.

use aeroapi::{AeroApi, ClientConfig, FlightInfoQuery, MapQuery};
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
async fn test_flight_map_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/history/flights/UAL1-1700000000-airline-0001/map"))
        .and(query_param("height", "480"))
        .and(query_param("width", "640"))
        .and(query_param_is_missing("layer_on"))
        .and(query_param_is_missing("show_airports"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    assert!(api
        .history()
        .flight_map("UAL1-1700000000-airline-0001", &MapQuery::default())
        .await
        .is_some());
}

#[tokio::test]
async fn test_route_track_and_last_flight() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/history/flights/F1/route"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(path("/history/flights/F1/track"))
        .and(query_param("include_estimated_positions", "true"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(path("/history/aircraft/N12345/last_flight"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let history = api.history();
    assert!(history.flight_route("F1").await.is_some());
    assert!(history.flight_track("F1", Some(true)).await.is_some());
    assert!(history.last_flight("N12345").await.is_some());
}

#[tokio::test]
async fn test_flight_info() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/history/flights/UAL1"))
        .and(query_param("ident_type", "designator"))
        .and(query_param("max_pages", "1"))
        .and(query_param_is_missing("start"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let query = FlightInfoQuery {
        ident_type: Some("designator".to_string()),
        ..Default::default()
    };
    assert!(api.history().flight_info("UAL1", &query).await.is_some());
}
