use homework_engine::{DeliveryError, MessagingClient, TelegramClient};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEND_PATH: &str = "/bot123-abc/sendMessage";

fn client_for(server: &MockServer) -> TelegramClient {
    TelegramClient::new(Url::parse(&server.uri()).unwrap(), "123-abc").unwrap()
}

#[tokio::test]
async fn send_message_posts_chat_and_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_json(json!({"chat_id": "42", "text": "привет"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .send_message("42", "привет")
        .await
        .expect("delivered");
}

#[tokio::test]
async fn one_client_sends_several_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.send_message("42", "first").await.expect("first delivered");
    client.send_message("42", "second").await.expect("second delivered");
}

#[test]
fn api_base_with_trailing_slash_is_accepted() {
    let with_slash = TelegramClient::new(Url::parse("https://api.telegram.org/").unwrap(), "t");
    let without = TelegramClient::new(Url::parse("https://api.telegram.org").unwrap(), "t");
    assert!(with_slash.is_ok());
    assert!(without.is_ok());
}

#[tokio::test]
async fn error_status_is_reported_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("chat not found"))
        .mount(&server)
        .await;

    let err = client_for(&server).send_message("42", "hi").await.unwrap_err();
    assert_eq!(
        err,
        DeliveryError::HttpStatus {
            code: 400,
            body: "chat not found".to_string()
        }
    );
}

#[tokio::test]
async fn ok_false_reply_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": false, "description": "bot was blocked"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).send_message("42", "hi").await.unwrap_err();
    assert_eq!(err, DeliveryError::Rejected("bot was blocked".to_string()));
}

#[tokio::test]
async fn transport_error_does_not_leak_token() {
    let client =
        TelegramClient::new(Url::parse("http://127.0.0.1:1").unwrap(), "secret-token").unwrap();

    let err = client.send_message("42", "hi").await.unwrap_err();
    assert!(matches!(err, DeliveryError::Transport(_)));
    assert!(!err.to_string().contains("secret-token"));
}
