#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use std::collections::HashMap;
use std::time::{Duration, Instant};

use axum::http::StatusCode;
use wcsbridge_core::proxy::{build_bridge_router, AppState, Bridge};
use wcsbridge_types::BridgeConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

async fn setup_server() -> MockServer {
    MockServer::start().await
}

fn bridge_for(upstream_url: String, capabilities: &std::path::Path) -> axum_test::TestServer {
    bridge_with_config(BridgeConfig {
        upstream_url,
        capabilities_path: capabilities.to_path_buf(),
        ..BridgeConfig::default()
    })
}

fn bridge_with_config(config: BridgeConfig) -> axum_test::TestServer {
    let bridge = Bridge::from_config(&config).expect("bridge builds");
    axum_test::TestServer::new(build_bridge_router(AppState::new(bridge))).expect("test server")
}

async fn received_queries(server: &MockServer) -> Vec<HashMap<String, String>> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|req| req.url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect())
        .collect()
}

#[tokio::test]
async fn test_getmap_forwarded_as_getcoverage() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .and(path("/wcs"))
        .and(query_param("COVERAGE", "rivers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(PNG_MAGIC.to_vec())
                .insert_header("content-type", "application/x-upstream-declared"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let bridge = bridge_for(format!("{}/wcs", server.uri()), &dir.path().join("caps.xml"));

    let response = bridge
        .get("/services")
        .add_query_param("REQUEST", "GetCoverage")
        .add_query_param("LAYERS", "rivers")
        .add_query_param("SRS", "EPSG:4326")
        .add_query_param("BBOX", "0,0,10,10")
        .add_query_param("FORMAT", "image/png")
        .add_query_param("WIDTH", "256")
        .add_query_param("HEIGHT", "256")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(response.as_bytes().as_ref(), PNG_MAGIC);

    let queries = received_queries(&server).await;
    assert_eq!(queries.len(), 1);
    let expected: HashMap<String, String> = [
        ("COVERAGE", "rivers"),
        ("CRS", "EPSG:4326"),
        ("BBOX", "0,0,10,10"),
        ("FORMAT", "image/png"),
        ("WIDTH", "256"),
        ("HEIGHT", "256"),
        ("REQUEST", "GetCoverage"),
        ("SERVICE", "WCS"),
        ("VERSION", "1.0.0"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(queries[0], expected);
}

#[tokio::test]
async fn test_caller_identity_params_are_overridden() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let bridge = bridge_for(format!("{}/wcs", server.uri()), &dir.path().join("caps.xml"));

    bridge
        .get("/services")
        .add_query_param("SERVICE", "WMS")
        .add_query_param("VERSION", "1.1.1")
        .add_query_param("LAYERS", "dem")
        .await
        .assert_status_ok();

    let queries = received_queries(&server).await;
    let sent = &queries[0];
    assert_eq!(sent.get("SERVICE").map(String::as_str), Some("WCS"));
    assert_eq!(sent.get("VERSION").map(String::as_str), Some("1.0.0"));
    assert_eq!(sent.get("REQUEST").map(String::as_str), Some("GetCoverage"));
    for absent in ["CRS", "BBOX", "FORMAT", "WIDTH", "HEIGHT"] {
        assert!(!sent.contains_key(absent), "{} should not be invented", absent);
    }
}

#[tokio::test]
async fn test_upstream_500_becomes_generic_failure() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("<ServiceException>secret detail</ServiceException>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let bridge = bridge_for(format!("{}/wcs", server.uri()), &dir.path().join("caps.xml"));

    let response = bridge.get("/services").add_query_param("LAYERS", "rivers").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let text = response.text();
    assert!(!text.contains("secret detail"));
    assert_eq!(text, "Internal Server Error");
}

#[tokio::test]
async fn test_upstream_404_is_not_forwarded() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such coverage"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let bridge = bridge_for(format!("{}/wcs", server.uri()), &dir.path().join("caps.xml"));

    let response = bridge.get("/services").add_query_param("LAYERS", "missing").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("Internal Server Error");
}

#[tokio::test]
async fn test_unreachable_upstream_becomes_generic_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bridge = bridge_for("http://127.0.0.1:1/wcs".to_string(), &dir.path().join("caps.xml"));

    let response = bridge.get("/services").add_query_param("LAYERS", "rivers").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("Internal Server Error");
}

#[tokio::test]
async fn test_slow_upstream_times_out_as_generic_failure() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late coverage")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let bridge = bridge_with_config(BridgeConfig {
        upstream_url: format!("{}/wcs", server.uri()),
        capabilities_path: dir.path().join("caps.xml"),
        request_timeout_secs: Some(1),
        ..BridgeConfig::default()
    });

    let started = Instant::now();
    let response = bridge
        .get("/services")
        .add_query_param("LAYERS", "rivers")
        .add_query_param("FORMAT", "image/png")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("Internal Server Error");
    assert!(started.elapsed() < Duration::from_secs(3), "timeout not applied: {:?}", started.elapsed());
}

#[tokio::test]
async fn test_capabilities_and_fallback_never_reach_upstream() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let caps = dir.path().join("caps.xml");
    let doc = "<?xml version=\"1.0\"?>\n<WMT_MS_Capabilities version=\"1.1.1\"></WMT_MS_Capabilities>";
    std::fs::write(&caps, doc).expect("write capabilities");
    let bridge = bridge_for(format!("{}/wcs", server.uri()), &caps);

    let capabilities =
        bridge.get("/services").add_query_param("REQUEST", "GetCapabilities").await;
    capabilities.assert_status_ok();
    assert_eq!(capabilities.header("content-type"), "text/xml");
    capabilities.assert_text(doc);

    let fallback = bridge.get("/other").await;
    fallback.assert_status_ok();
    fallback.assert_text(BridgeConfig::default().fallback_message);

    assert!(received_queries(&server).await.is_empty());
}

#[tokio::test]
async fn test_missing_capabilities_only_fails_that_request() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("coverage"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let bridge = bridge_for(format!("{}/wcs", server.uri()), &dir.path().join("absent.xml"));

    bridge
        .get("/services")
        .add_query_param("REQUEST", "GetCapabilities")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let coverage = bridge.get("/services").add_query_param("FORMAT", "image/jpeg").await;
    coverage.assert_status_ok();
    assert_eq!(coverage.header("content-type"), "image/jpeg");
}
