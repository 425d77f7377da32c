use crate::e2e::helpers;

use helpers::{fixtures::TEST_PASSWORD, TestContext, TEST_FRONTEND_URL};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

fn registration(username: &str, email: &str) -> serde_json::Value {
    json!({
        "username": username,
        "email": email,
        "password": "secret-pass"
    })
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_register_and_send_verification_email(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/register", &registration("reader", "reader@example.com"))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["email_sent"], true);
    assert!(body["user_id"].as_str().is_some());
    assert!(body.get("access_token").is_none());

    let sent = ctx.fakes.email.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "reader@example.com");
    assert!(sent[0].text.contains("http://api.test/api/verify-email?token="));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_auto_verify_when_email_is_unavailable(ctx: &TestContext) {
    ctx.fakes.email.set_delivering(false);

    let response = ctx
        .client
        .post("/api/register", &registration("offline", "offline@example.com"))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["username"], "offline");
    let token = body["access_token"].as_str().unwrap();

    // The returned token works straight away
    ctx.client
        .get_with_auth("/api/me", token)
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    // And so does logging in
    ctx.client
        .post(
            "/api/login",
            &json!({ "username": "offline", "password": "secret-pass" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_registration_fields(ctx: &TestContext) {
    let cases = [
        (
            registration("ab", "ab@example.com"),
            "Username must be between 3-20 characters",
        ),
        (
            registration("a_very_long_username_1", "long@example.com"),
            "Username must be between 3-20 characters",
        ),
        (
            json!({ "username": "shortpw", "email": "pw@example.com", "password": "12345" }),
            "Password must be at least 6 characters",
        ),
        (
            registration("bademail", "not-an-email"),
            "Invalid email address",
        ),
    ];

    for (request, message) in cases {
        ctx.client
            .post("/api/register", &request)
            .await
            .unwrap()
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_message(message);
    }

    assert!(ctx.fakes.email.sent().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_duplicate_username_and_email(ctx: &TestContext) {
    ctx.fixtures.create_user("taken").await.unwrap();
    ctx.fixtures.create_unverified_user("pending").await.unwrap();

    ctx.client
        .post("/api/register", &registration("taken", "new@example.com"))
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Username already exists");

    ctx.client
        .post("/api/register", &registration("newname", "taken@example.com"))
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("already registered and verified");

    ctx.client
        .post("/api/register", &registration("newname", "pending@example.com"))
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("already registered but not verified");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_login_verified_user(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("reader").await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/login",
            &json!({ "username": "reader", "password": TEST_PASSWORD }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.field("token_type"), Some("bearer"));
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["user"]["id"], user.id.to_string());
    assert_eq!(body["user"]["email"], "reader@example.com");
    assert!(body["user"].get("password_hash").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_wrong_credentials(ctx: &TestContext) {
    ctx.fixtures.create_user("reader").await.unwrap();

    ctx.client
        .post(
            "/api/login",
            &json!({ "username": "reader", "password": "wrong-password" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Incorrect username or password");

    ctx.client
        .post(
            "/api/login",
            &json!({ "username": "nobody", "password": TEST_PASSWORD }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Incorrect username or password");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_login_before_verification(ctx: &TestContext) {
    ctx.fixtures.create_unverified_user("pending").await.unwrap();

    ctx.client
        .post(
            "/api/login",
            &json!({ "username": "pending", "password": TEST_PASSWORD }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Please verify your email address first");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_verify_email_and_redirect_to_frontend(ctx: &TestContext) {
    ctx.client
        .post("/api/register", &registration("reader", "reader@example.com"))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    let token = ctx
        .fakes
        .email
        .verification_token_for("reader@example.com")
        .unwrap();

    let response = ctx
        .client
        .get(&format!("/api/verify-email?token={}", token))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let page = response.text();
    assert!(page.contains("Email Verified"));
    assert!(page.contains(&format!("url={}?token=", TEST_FRONTEND_URL)));

    // Welcome email follows the verification
    let sent = ctx.fakes.email.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].subject, "Welcome to SHH-ELF!");

    ctx.client
        .post(
            "/api/login",
            &json!({ "username": "reader", "password": "secret-pass" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    // A second click still lands on the frontend
    let again = ctx
        .client
        .get(&format!("/api/verify-email?token={}", token))
        .await
        .unwrap();
    again.assert_status(StatusCode::OK);
    assert!(again.text().contains("Email Already Verified"));
    assert_eq!(ctx.fakes.email.sent().len(), 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_verification_token(ctx: &TestContext) {
    ctx.client
        .get("/api/verify-email?token=deadbeef")
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Invalid or expired verification link");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_resend_verification_with_fresh_token(ctx: &TestContext) {
    ctx.client
        .post("/api/register", &registration("reader", "reader@example.com"))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    let first = ctx
        .fakes
        .email
        .verification_token_for("reader@example.com")
        .unwrap();

    let response = ctx
        .client
        .post_empty("/api/resend-verification?username=reader")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.field("message"), Some("Verification email sent"));

    let second = ctx
        .fakes
        .email
        .verification_token_for("reader@example.com")
        .unwrap();
    assert_ne!(first, second);

    // Only the newest link works
    ctx.client
        .get(&format!("/api/verify-email?token={}", first))
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST);
    ctx.client
        .get(&format!("/api/verify-email?token={}", second))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refuse_resend_for_unknown_or_verified_user(ctx: &TestContext) {
    ctx.fixtures.create_user("verified").await.unwrap();

    ctx.client
        .post_empty("/api/resend-verification?username=ghost")
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("User not found");

    ctx.client
        .post_empty("/api/resend-verification?username=verified")
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Email is already verified");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_resend_delivery_failure(ctx: &TestContext) {
    ctx.fixtures.create_unverified_user("pending").await.unwrap();
    ctx.fakes.email.set_delivering(false);

    ctx.client
        .post_empty("/api/resend-verification?username=pending")
        .await
        .unwrap()
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("Failed to send verification email");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_check_email_availability(ctx: &TestContext) {
    ctx.fixtures.create_user("verified").await.unwrap();
    ctx.fixtures.create_unverified_user("pending").await.unwrap();

    let free = ctx
        .client
        .get("/api/check-email?email=free%40example.com")
        .await
        .unwrap();
    free.assert_status(StatusCode::OK);
    assert_eq!(
        free.body.as_ref().unwrap(),
        &json!({ "available": true, "message": "Email address is available" })
    );

    let verified = ctx
        .client
        .get("/api/check-email?email=verified%40example.com")
        .await
        .unwrap();
    let body = verified.body.as_ref().unwrap();
    assert_eq!(body["available"], false);
    assert_eq!(body["verified"], true);

    let pending = ctx
        .client
        .get("/api/check-email?email=pending%40example.com")
        .await
        .unwrap();
    let body = pending.body.as_ref().unwrap();
    assert_eq!(body["available"], false);
    assert_eq!(body["verified"], false);
}
