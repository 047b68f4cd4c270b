use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chfx::core::ConversionHistory;
use chfx::core::config::ExchangeRateProviderConfig;
use chfx::providers::exchangerate_api::ExchangeRateApiProvider;
use chfx::web::{AppState, router};
use secrecy::SecretString;
use std::fs;
use std::sync::Arc;
use tower::ServiceExt;
use tracing::info;

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const RATES_RESPONSE: &str = r#"{
        "result": "success",
        "base_code": "CHF",
        "conversion_rates": {
            "CHF": 1,
            "USD": 1.1,
            "EUR": 0.95,
            "GBP": 0.88,
            "JPY": 165.2
        }
    }"#;

    pub async fn create_mock_server(status: u16, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v6/test-key/latest/CHF"))
            .respond_with(ResponseTemplate::new(status).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }
}

fn app_state(base_url: &str) -> AppState {
    let config = ExchangeRateProviderConfig {
        base_url: base_url.to_string(),
        retry_delay_ms: 0,
        ..Default::default()
    };
    let provider =
        ExchangeRateApiProvider::new(&config, Some(SecretString::from("test-key"))).unwrap();
    AppState::new(Arc::new(provider), ConversionHistory::new())
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[test_log::test(tokio::test)]
async fn test_index_lists_chf_rates() {
    let mock_server = test_utils::create_mock_server(200, test_utils::RATES_RESPONSE).await;
    let app = router(app_state(&mock_server.uri()));

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    info!(len = html.len(), "Rendered index page");
    assert!(html.contains("<td>1 CHF</td><td>1.1000 USD</td>"));
    assert!(html.contains("<td>1 CHF</td><td>165.2000 JPY</td>"));
    let usd = html.find("USD</td>").unwrap();
    let eur = html.find("EUR</td>").unwrap();
    assert!(usd < eur, "rates follow the fixed display order");
}

#[test_log::test(tokio::test)]
async fn test_conversion_then_history() {
    let mock_server = test_utils::create_mock_server(200, test_utils::RATES_RESPONSE).await;
    let state = app_state(&mock_server.uri());
    let app = router(state.clone());

    let response = app
        .clone()
        .oneshot(post_form("amount=100&from_currency=usd&to_currency=eur"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("100.00 USD entspricht <strong>86.36 EUR</strong>"));

    let response = app
        .clone()
        .oneshot(post_form("amount=10&from_currency=CHF&to_currency=GBP"))
        .await
        .unwrap();
    assert!(body_text(response).await.contains("8.80 GBP"));

    let response = app.oneshot(get("/history")).await.unwrap();
    let html = body_text(response).await;
    let first = html.find("100.00 USD").unwrap();
    let second = html.find("10.00 CHF").unwrap();
    assert!(first < second);
    assert_eq!(state.history.len().await, 2);
}

#[test_log::test(tokio::test)]
async fn test_failed_conversions_show_generic_error() {
    let mock_server = test_utils::create_mock_server(200, test_utils::RATES_RESPONSE).await;
    let state = app_state(&mock_server.uri());
    let app = router(state.clone());

    for form in [
        "amount=50&from_currency=CHF&to_currency=CHF",
        "amount=50&from_currency=XYZ&to_currency=CHF",
        "amount=abc&from_currency=USD&to_currency=CHF",
        "from_currency=USD&to_currency=CHF",
    ] {
        let response = app.clone().oneshot(post_form(form)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(
            html.contains("Die Umrechnung konnte nicht durchgeführt werden."),
            "{form}"
        );
    }

    assert!(state.history.is_empty().await);
}

#[test_log::test(tokio::test)]
async fn test_upstream_failure_gives_empty_table() {
    let mock_server = test_utils::create_mock_server(403, "").await;
    let state = app_state(&mock_server.uri());
    let app = router(state.clone());

    let html = body_text(app.clone().oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains("Keine Wechselkurse verfügbar."));

    let html = body_text(
        app.oneshot(post_form("amount=100&from_currency=USD&to_currency=EUR"))
            .await
            .unwrap(),
    )
    .await;
    assert!(!html.contains("entspricht"));
    assert!(html.contains("Keine Wechselkurse verfügbar."));
    assert!(state.history.is_empty().await);
}

#[test_log::test(tokio::test)]
async fn test_missing_conversion_rates_gives_empty_table() {
    let mock_server = test_utils::create_mock_server(200, r#"{"result": "success"}"#).await;
    let app = router(app_state(&mock_server.uri()));

    let html = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains("Keine Wechselkurse verfügbar."));
}

#[test_log::test(tokio::test)]
async fn test_empty_conversion_rates_ignores_submission() {
    let mock_server = test_utils::create_mock_server(
        200,
        r#"{"result": "success", "base_code": "CHF", "conversion_rates": {}}"#,
    )
    .await;
    let state = app_state(&mock_server.uri());
    let app = router(state.clone());

    let html = body_text(
        app.oneshot(post_form("amount=100&from_currency=USD&to_currency=EUR"))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("Keine Wechselkurse verfügbar."));
    assert!(!html.contains("Die Umrechnung konnte nicht durchgeführt werden."));
    assert!(state.history.is_empty().await);
}

#[test_log::test(tokio::test)]
async fn test_unknown_route() {
    let mock_server = test_utils::create_mock_server(200, test_utils::RATES_RESPONSE).await;
    let app = router(app_state(&mock_server.uri()));

    let response = app.oneshot(get("/api/rates")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_mock() {
    let mock_server = test_utils::create_mock_server(200, test_utils::RATES_RESPONSE).await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_path = config_file.path();
    let config_content = format!(
        r#"
        api_key: "test-key"
        providers:
          exchangerate:
            base_url: {}
    "#,
        mock_server.uri()
    );
    fs::write(config_path, &config_content).expect("Failed to write config file");

    let result = chfx::run_command(
        chfx::AppCommand::Rates,
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await;
    assert!(result.is_ok(), "Rates command failed with: {:?}", result.err());

    let result = chfx::run_command(
        chfx::AppCommand::Convert {
            amount: 100.0,
            from: "usd".to_string(),
            to: "eur".to_string(),
        },
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await;
    assert!(result.is_ok(), "Convert command failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_api_key_override_reaches_upstream() {
    let mock_server = test_utils::create_mock_server(200, test_utils::RATES_RESPONSE).await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_content = format!(
        "api_key: \"wrong-key\"\nproviders:\n  exchangerate:\n    base_url: {}\n",
        mock_server.uri()
    );
    fs::write(config_file.path(), &config_content).expect("Failed to write config file");

    let result = chfx::run_command(
        chfx::AppCommand::Convert {
            amount: 1.0,
            from: "CHF".to_string(),
            to: "USD".to_string(),
        },
        config_file.path().to_str(),
        Some("test-key".to_string()),
    )
    .await;
    assert!(result.is_ok(), "Convert command failed with: {:?}", result.err());
}
