use article_relay::domain::delivery::{AttemptError, WebhookTransport};
use article_relay::domain::entities::{ArticleRequest, DeliveryPayload};
use article_relay::infrastructure::webhook::HttpWebhookTransport;
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> DeliveryPayload {
    let request = ArticleRequest::new("a@b.com", "https://example.com/article").unwrap();
    DeliveryPayload::for_request(&request)
}

fn transport(server: &MockServer, timeout: Duration) -> HttpWebhookTransport {
    let url = Url::parse(&format!("{}/webhook", server.uri())).unwrap();
    HttpWebhookTransport::new(url, timeout).unwrap()
}

#[tokio::test]
async fn test_send_posts_json_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let payload = payload();
    let result = transport(&server, Duration::from_secs(10))
        .send(&payload)
        .await;

    assert_eq!(result, Ok(()));

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(
        body,
        json!({
            "email": "a@b.com",
            "article_url": "https://example.com/article",
            "session_id": payload.session_id.to_string(),
        })
    );
}

#[tokio::test]
async fn test_any_2xx_is_accepted() {
    for status in [200u16, 201, 202, 204] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let result = transport(&server, Duration::from_secs(10))
            .send(&payload())
            .await;

        assert_eq!(result, Ok(()), "status {status} should be accepted");
    }
}

#[tokio::test]
async fn test_non_2xx_is_failed_attempt() {
    for status in [400u16, 404, 429, 500, 503] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let result = transport(&server, Duration::from_secs(10))
            .send(&payload())
            .await;

        assert_eq!(result, Err(AttemptError::Status(status)));
    }
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let result = transport(&server, Duration::from_millis(100))
        .send(&payload())
        .await;

    assert_eq!(result, Err(AttemptError::Timeout));
}

#[tokio::test]
async fn test_unreachable_destination_is_connect_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{addr}/webhook")).unwrap();
    let transport = HttpWebhookTransport::new(url, Duration::from_secs(10)).unwrap();

    let result = transport.send(&payload()).await;

    assert!(matches!(result, Err(AttemptError::Connect(_))));
}
