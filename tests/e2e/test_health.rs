use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    assert_eq!(response.text(), "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_describe_the_service_at_root(ctx: &TestContext) {
    let response = ctx.client.get("/").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.field("message"), Some("Shh-elf API Server"));
    assert_eq!(response.field("status"), Some("online"));
    assert!(response.field("version").is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ready_status(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.field("status"), Some("ready"));
    assert_eq!(response.field("database"), Some("connected"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_not_ready_without_database(ctx: &TestContext) {
    ctx.fakes.database.set_connected(false);

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.field("status"), Some("not_ready"));
    assert_eq!(response.field("database"), Some("disconnected"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_configured_services(ctx: &TestContext) {
    let response = ctx.client.get("/api/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.field("status"), Some("healthy"));

    let services = response.body.as_ref().unwrap().get("services").unwrap();
    assert_eq!(services["openai"], "configured");
    assert_eq!(services["elevenlabs"], "configured");
    assert_eq!(services["azure_speech"], "configured");
    assert_eq!(services["email"], "configured");
    // Test config leaves object storage out
    assert_eq!(services["cloudinary"], "missing");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/api/share/00000000").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_caller_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/health", &[("x-request-id", "proxy-abc-123")])
        .await
        .unwrap();

    response.assert_header("x-request-id", "proxy-abc-123");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_allow_cross_origin_requests(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/api/health", &[("origin", "https://hz2784.github.io")])
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    response.assert_header_exists("access-control-allow-origin");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}
