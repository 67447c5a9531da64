//! Operator wrapper paths and pagination.

use aeroapi::{next_cursor, AeroApi, ClientConfig, OperatorFlightsQuery, PageParams};
use chrono::{TimeZone, Utc};
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
async fn test_list_then_follow_cursor_manually() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/operators"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "operators": [{"code": "UAL"}],
            "links": {"next": "/operators?cursor=page2"},
            "num_pages": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(path("/operators"))
        .and(query_param("cursor", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "operators": [{"code": "DAL"}],
            "links": null,
            "num_pages": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let first = api.operators().list(&PageParams::default()).await.unwrap();
    let cursor = next_cursor(&first).unwrap();

    let second = api
        .operators()
        .list(&PageParams::from_cursor(cursor))
        .await
        .unwrap();
    assert_eq!(second["operators"][0]["code"], "DAL");
    assert_eq!(next_cursor(&second), None);
}

#[tokio::test]
async fn test_get_and_canonical() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/operators/UAL"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(path("/operators/UA/canonical"))
        .and(query_param("country_code", "US"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    assert!(api.operators().get("UAL").await.is_some());
    assert!(api.operators().canonical("UA", Some("US")).await.is_some());
}

#[tokio::test]
async fn test_operator_flights() {
    let mock_server = MockServer::start().await;

    Mock::given(path("/operators/UAL/flights"))
        .and(query_param("end", "2024-05-02T00:00:00Z"))
        .and(query_param_is_missing("start"))
        .and(query_param("max_pages", "1"))
        .respond_with(ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let query = OperatorFlightsQuery {
        end: Some(Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap()),
        ..Default::default()
    };
    assert!(api.operators().flights("UAL", &query).await.is_some());
}
