//! Integration tests for the locale loader: one fetch attempt per call,
//! each failure class mapped to its own `LoadFailure` variant.

use std::time::Duration;

use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrine_locales::{Direction, LoadFailure, LocaleClient, LocaleConfig};

fn test_config(server: &MockServer) -> LocaleConfig {
    LocaleConfig {
        base_url: format!("{}/assets/lang", server.uri()),
        timeout: Duration::from_secs(2),
        user_agent: "vitrine-test/1.0".to_string(),
    }
}

async fn mount_locale(server: &MockServer, code: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/assets/lang/{code}.json")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string(body.to_string()),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn load_success_returns_resource() {
    let server = MockServer::start().await;
    mount_locale(
        &server,
        "es",
        r#"{"lang_name":"Español","hero_title":"Construye tu tienda"}"#,
    )
    .await;

    let client = LocaleClient::new(&test_config(&server)).expect("client builds");
    let resource = client.load("es").await.expect("load succeeds");

    assert_eq!(resource.label("es"), "Español");
    assert_eq!(resource.get("hero_title"), Some("Construye tu tienda"));
    assert_eq!(resource.direction(), Direction::Ltr);
}

#[tokio::test]
async fn load_reads_rtl_direction() {
    let server = MockServer::start().await;
    mount_locale(
        &server,
        "he",
        r#"{"direction":"rtl","lang_name":"עברית","hero_title":"בנה את החנות שלך"}"#,
    )
    .await;

    let client = LocaleClient::new(&test_config(&server)).expect("client builds");
    let resource = client.load("he").await.expect("load succeeds");

    assert_eq!(resource.direction(), Direction::Rtl);
    assert_eq!(resource.label("he"), "עברית");
}

#[tokio::test]
async fn missing_resource_is_status_failure() {
    let server = MockServer::start().await;
    mount_locale(&server, "en", r#"{"hero_title":"Build your store"}"#).await;

    let client = LocaleClient::new(&test_config(&server)).expect("client builds");
    let err = client.load("xx").await.expect_err("404 must fail");

    match err {
        LoadFailure::Status { code, status } => {
            assert_eq!(code, "xx");
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("expected Status failure, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_status_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/lang/en.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = LocaleClient::new(&test_config(&server)).expect("client builds");
    let err = client.load("en").await.expect_err("503 must fail");
    assert!(matches!(
        err,
        LoadFailure::Status { status, .. } if status.as_u16() == 503
    ));
}

#[tokio::test]
async fn malformed_body_is_parse_failure() {
    let server = MockServer::start().await;
    mount_locale(&server, "fr", "<html>not json</html>").await;

    let client = LocaleClient::new(&test_config(&server)).expect("client builds");
    let err = client.load("fr").await.expect_err("bad body must fail");
    assert!(matches!(err, LoadFailure::Parse { code, .. } if code == "fr"));
}

#[tokio::test]
async fn non_string_values_are_parse_failure() {
    let server = MockServer::start().await;
    mount_locale(&server, "en", r#"{"hero_title": {"nested": true}}"#).await;

    let client = LocaleClient::new(&test_config(&server)).expect("client builds");
    let err = client.load("en").await.expect_err("nested body must fail");
    assert!(matches!(err, LoadFailure::Parse { .. }));
}

#[tokio::test]
async fn unreachable_server_is_transport_failure() {
    // Bind-then-drop leaves a port with nothing listening.
    let server = MockServer::start().await;
    let config = test_config(&server);
    drop(server);

    let client = LocaleClient::new(&config).expect("client builds");
    let err = client.load("en").await.expect_err("refused must fail");
    assert!(matches!(err, LoadFailure::Transport { code, .. } if code == "en"));
}

#[tokio::test]
async fn slow_server_times_out_as_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/lang/en.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut config = test_config(&server);
    config.timeout = Duration::from_millis(100);

    let client = LocaleClient::new(&config).expect("client builds");
    let err = client.load("en").await.expect_err("timeout must fail");
    assert!(matches!(err, LoadFailure::Transport { .. }));
}

#[tokio::test]
async fn each_load_is_a_single_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/lang/en.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = LocaleClient::new(&test_config(&server)).expect("client builds");
    let _ = client.load("en").await;
    // MockServer verifies the expectation (exactly one request) on drop.
}

#[tokio::test]
async fn bad_base_url_fails_at_construction() {
    let config = LocaleConfig {
        base_url: "not a url".to_string(),
        ..LocaleConfig::default()
    };
    assert!(matches!(
        LocaleClient::new(&config),
        Err(LoadFailure::BadUrl { .. })
    ));
}
