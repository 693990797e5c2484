use std::time::Duration;

use homework_core::ApiError;
use homework_engine::{ApiClient, ClientSettings, ReqwestApiClient};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATUSES_PATH: &str = "/api/user_api/homework_statuses/";

fn client_for(server: &MockServer) -> ReqwestApiClient {
    let endpoint = Url::parse(&format!("{}{}", server.uri(), STATUSES_PATH)).unwrap();
    ReqwestApiClient::new(ClientSettings::new(endpoint, "practicum-token")).unwrap()
}

#[tokio::test]
async fn fetch_sends_token_and_cursor_and_decodes_body() {
    let server = MockServer::start().await;
    let body = json!({"homeworks": [{"homework_name": "hw1", "status": "approved"}], "current_date": 1000});
    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .and(header("Authorization", "OAuth practicum-token"))
        .and(query_param("from_date", "900"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server).fetch(900).await.expect("fetch ok");
    assert_eq!(value, body);
}

#[tokio::test]
async fn one_client_serves_consecutive_cycles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .and(header("Authorization", "OAuth practicum-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"homeworks": [], "current_date": 5})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.fetch(1).await.expect("first fetch ok");
    let second = client.fetch(5).await.expect("second fetch ok");
    assert_eq!(first, second);
}

#[tokio::test]
async fn non_success_status_is_reported_with_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(0).await.unwrap_err();
    assert_eq!(err, ApiError::HttpStatus { code: 500 });
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"homeworks\": ["))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(0).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let endpoint = Url::parse("http://127.0.0.1:1/homework_statuses/").unwrap();
    let client = ReqwestApiClient::new(ClientSettings::new(endpoint, "token")).unwrap();

    let err = client.fetch(0).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn slow_response_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"homeworks": [], "current_date": 1})),
        )
        .mount(&server)
        .await;

    let endpoint = Url::parse(&format!("{}{}", server.uri(), STATUSES_PATH)).unwrap();
    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::new(endpoint, "token")
    };
    let err = ReqwestApiClient::new(settings).unwrap().fetch(0).await.unwrap_err();
    match err {
        ApiError::Transport { message, .. } => assert!(message.starts_with("timed out")),
        other => panic!("expected transport error, got {other:?}"),
    }
}
