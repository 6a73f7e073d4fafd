//! Router-level checks for paths that never reach the database.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use marquee_store::router::build_router;
use marquee_store::state::AppState;
use marquee_testing::auth::{MockAuth, test_session_settings};

fn server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        session: test_session_settings(),
        media_url: Arc::from("/media/"),
    };
    TestServer::new(build_router(state, "media")).unwrap()
}

#[tokio::test]
async fn should_answer_liveness() {
    server().get("/healthz").await.assert_status_ok();
}

#[tokio::test]
async fn should_report_unready_without_database() {
    let response = server().get("/readyz").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_return_json_not_found_for_unknown_route() {
    let response = server().get("/no/such/page/").await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["kind"], "NOT_FOUND");
}

#[tokio::test]
async fn should_redirect_anonymous_cart_to_login() {
    let response = server().get("/cart/").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.header("location"),
        "/accounts/login/?next=%2Fcart%2F"
    );
}

#[tokio::test]
async fn should_redirect_anonymous_mutations_to_login() {
    let server = server();
    for path in [
        "/place_order/",
        "/add_to_cart/1/",
        "/remove_from_cart/1/",
        "/review/1/delete/",
    ] {
        let response = server.post(path).await;
        response.assert_status(StatusCode::SEE_OTHER);
        let location = response.header("location");
        assert_eq!(
            location.to_str().unwrap(),
            format!("/accounts/login/?next={}", path.replace('/', "%2F"))
        );
    }
}

#[tokio::test]
async fn should_encode_query_in_next() {
    let response = server().get("/orders/?page=2").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.header("location"),
        "/accounts/login/?next=%2Forders%2F%3Fpage%3D2"
    );
}

#[tokio::test]
async fn should_serve_register_form() {
    let response = server().get("/accounts/register/").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(
        body["fields"],
        serde_json::json!(["username", "email", "password1", "password2"])
    );
}

#[tokio::test]
async fn should_reject_invalid_registration_with_field_errors() {
    let response = server()
        .post("/accounts/register/")
        .form(&[
            ("username", "bad name!"),
            ("password1", "kurosawa-1950"),
            ("password2", "kurosawa-1951"),
        ])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "INVALID_FORM");
    assert!(body["errors"]["username"].is_array());
    assert_eq!(
        body["errors"]["password2"][0],
        "The two password fields didn’t match."
    );
}

#[tokio::test]
async fn should_require_login_fields() {
    let response = server().post("/accounts/login/").form(&[("next", "/cart/")]).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["errors"]["username"][0], "This field is required.");
    assert_eq!(body["errors"]["password"][0], "This field is required.");
}

#[tokio::test]
async fn should_treat_bodyless_login_as_empty_form() {
    let response = server().post("/accounts/login/").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "INVALID_FORM");
    assert_eq!(body["errors"]["username"][0], "This field is required.");
}

#[tokio::test]
async fn should_reject_non_form_body_as_json_error() {
    let response = server()
        .post("/accounts/register/")
        .json(&serde_json::json!({ "username": "alice" }))
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(response.json::<Value>()["kind"], "MALFORMED_FORM");
}

#[tokio::test]
async fn should_carry_safe_next_into_login_form() {
    let local = server().get("/accounts/login/?next=%2Fcart%2F").await;
    let offsite = server()
        .get("/accounts/login/?next=https://evil.example/")
        .await;

    assert_eq!(local.json::<Value>()["next"], "/cart/");
    assert_eq!(offsite.json::<Value>()["next"], "/");
}

#[tokio::test]
async fn should_clear_session_on_logout() {
    let (name, value) = MockAuth::new(1, "alice").cookie_header();
    let response = server().post("/accounts/logout/").add_header(name, value).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
    let cookie = response.header("set-cookie");
    let cookie = cookie.to_str().unwrap();
    assert!(cookie.starts_with("marquee_session="), "got {cookie}");
    assert!(cookie.contains("Max-Age=0"), "got {cookie}");
}

#[tokio::test]
async fn should_show_password_change_pages_to_logged_in_user() {
    let server = server();
    let (name, value) = MockAuth::new(7, "alice").cookie_header();

    let form = server
        .get("/accounts/password_change/")
        .add_header(name.clone(), value.clone())
        .await;
    let done = server
        .get("/accounts/password_change/done/")
        .add_header(name, value)
        .await;

    form.assert_status_ok();
    assert_eq!(form.json::<Value>()["fields"][0], "old_password");
    done.assert_status_ok();
    assert_eq!(done.json::<Value>()["user"]["username"], "alice");
}

#[tokio::test]
async fn should_treat_forged_session_as_anonymous() {
    let response = server()
        .get("/accounts/password_change/")
        .add_header(
            axum::http::header::COOKIE,
            axum::http::HeaderValue::from_static("marquee_session=forged.token.value"),
        )
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
}
