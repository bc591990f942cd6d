use super::*;
use crate::api::client::RequestBody;
use crate::state::session;
use httpmock::prelude::*;
use reqwest::Method;
use serde_json::json;

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

fn profile_json(id: i64, username: &str, email: &str) -> serde_json::Value {
    json!({ "id": id, "username": username, "email": email })
}

#[tokio::test]
async fn login_stores_token_and_falls_back_when_me_fails() {
    session::clear_session();
    let server = MockServer::start_async().await;
    let login_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .json_body(json!({ "email": "a@b.com", "password": "pw" }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "access_token": "t" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(500)
                .header("content-type", "application/json")
                .json_body(json!({ "detail": "boom" }));
        })
        .await;

    let client = api_client(&server);
    let token = client.login("a@b.com", "pw").await.unwrap();
    assert_eq!(token.access_token, "t");
    assert_eq!(session::auth_token().as_deref(), Some("t"));
    assert_eq!(
        session::current_user(),
        Some(UserProfile {
            id: 0,
            username: "a".into(),
            email: "a@b.com".into(),
        })
    );
    login_mock.assert_async().await;
}

#[tokio::test]
async fn login_prefers_the_profile_endpoint_when_it_responds() {
    session::clear_session();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "access_token": "t" }));
        })
        .await;
    let me_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/auth/me")
                .header("authorization", "Bearer t");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(profile_json(5, "alice", "alice@example.com"));
        })
        .await;

    let client = api_client(&server);
    client.login("alice@example.com", "pw").await.unwrap();
    assert_eq!(
        session::current_user(),
        Some(UserProfile {
            id: 5,
            username: "alice".into(),
            email: "alice@example.com".into(),
        })
    );
    me_mock.assert_async().await;
}

#[tokio::test]
async fn register_falls_back_to_the_chosen_username() {
    session::clear_session();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/register").json_body(json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "Abcdef12"
            }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "access_token": "t2" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(503);
        })
        .await;

    let client = api_client(&server);
    client
        .register("alice", "alice@example.com", "Abcdef12")
        .await
        .unwrap();
    let user = session::current_user().unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
}

#[tokio::test]
async fn unauthorized_authenticated_request_clears_the_session() {
    session::clear_session();
    session::set_auth_token("stale");
    session::set_current_user(&UserProfile {
        id: 9,
        username: "old".into(),
        email: "old@example.com".into(),
    });
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(json!({ "detail": "Token expired" }));
        })
        .await;

    let err = api_client(&server).get_me().await.unwrap_err();
    assert_eq!(err.status, Some(401));
    assert_eq!(err.error, "Token expired");
    assert!(err.is_unauthorized());
    assert_eq!(session::auth_token(), None);
    assert_eq!(session::current_user(), None);
}

#[tokio::test]
async fn unauthorized_unauthenticated_request_keeps_the_session() {
    session::clear_session();
    session::set_auth_token("keep-me");
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(json!({ "detail": "Bad credentials" }));
        })
        .await;

    let err = api_client(&server)
        .login("a@b.com", "nope")
        .await
        .unwrap_err();
    assert_eq!(err.status, Some(401));
    assert_eq!(session::auth_token().as_deref(), Some("keep-me"));
}

#[tokio::test]
async fn error_messages_come_from_detail_then_message_then_generic() {
    session::clear_session();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/forgot-password");
            then.status(400)
                .header("content-type", "application/json")
                .json_body(json!({ "message": "Unknown address" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/reset-password");
            then.status(500).body("<html>oops</html>");
        })
        .await;

    let client = api_client(&server);
    let err = client.forgot_password("a@b.com").await.unwrap_err();
    assert_eq!(err.error, "Unknown address");

    let err = client.reset_password("tok", "Abcdef12").await.unwrap_err();
    assert_eq!(err.error, "Request failed.");
    assert_eq!(err.status, Some(500));
}

#[tokio::test]
async fn empty_and_non_json_success_bodies_decode_to_none() {
    session::clear_session();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/jobs");
            then.status(204);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/export");
            then.status(200)
                .header("content-type", "text/plain")
                .body("done");
        })
        .await;

    let client = api_client(&server);
    let body = client
        .request(Method::POST, "/api/jobs", RequestBody::Empty, false)
        .await
        .unwrap();
    assert_eq!(body, None);

    let body = client
        .request(Method::GET, "/api/export", RequestBody::Empty, false)
        .await
        .unwrap();
    assert_eq!(body, None);
}

#[tokio::test]
async fn api_key_header_is_attached_when_configured() {
    session::clear_session();
    session::set_auth_token("tok");
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/auth/me")
                .header("x-api-key", "secret")
                .header("authorization", "Bearer tok");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(profile_json(1, "alice", "alice@example.com"));
        })
        .await;

    let client = api_client(&server).with_api_key("secret");
    let me = client.get_me().await.unwrap();
    assert_eq!(me.username, "alice");
    mock.assert_async().await;
}

#[tokio::test]
async fn analyze_posts_a_multipart_form() {
    session::clear_session();
    session::set_auth_token("tok");
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/analyze")
                .header("authorization", "Bearer tok")
                .body_contains("email_text")
                .body_contains("Quarterly report attached");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "category": "Productive",
                    "suggested_subject": "Re: Quarterly report",
                    "suggested_reply": "Thanks, received."
                }));
        })
        .await;

    let client = api_client(&server);
    let analysis = client
        .analyze("Quarterly report attached", None)
        .await
        .unwrap();
    assert_eq!(analysis.category, "Productive");
    assert_eq!(analysis.suggested_subject, "Re: Quarterly report");
    assert_eq!(analysis.suggested_reply, "Thanks, received.");
    mock.assert_async().await;
}

#[tokio::test]
async fn analyze_includes_the_uploaded_file() {
    session::clear_session();
    session::set_auth_token("tok");
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/analyze")
                .body_contains("report.txt")
                .body_contains("file body");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "category": "Unproductive",
                    "suggested_subject": "",
                    "suggested_reply": ""
                }));
        })
        .await;

    let upload = AnalyzeUpload {
        file_name: "report.txt".into(),
        bytes: b"file body".to_vec(),
    };
    let analysis = api_client(&server).analyze("", Some(upload)).await.unwrap();
    assert_eq!(analysis.category, "Unproductive");
    mock.assert_async().await;
}

#[tokio::test]
async fn password_reset_endpoints_return_their_messages() {
    session::clear_session();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/auth/forgot-password")
                .json_body(json!({ "email": "a@b.com" }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "message": "Reset link sent." }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/auth/reset-password")
                .json_body(json!({ "token": "one-time", "new_password": "Abcdef12" }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "message": "Password updated." }));
        })
        .await;

    let client = api_client(&server);
    let sent = client.forgot_password("a@b.com").await.unwrap();
    assert_eq!(sent.message, "Reset link sent.");
    let updated = client.reset_password("one-time", "Abcdef12").await.unwrap();
    assert_eq!(updated.message, "Password updated.");
}

#[tokio::test]
async fn trailing_slash_in_the_base_url_is_tolerated() {
    session::clear_session();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/forgot-password");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "message": "ok" }));
        })
        .await;

    let client = ApiClient::new_with_base_url(format!("{}/", server.base_url()));
    let response = client.forgot_password("a@b.com").await.unwrap();
    assert_eq!(response.message, "ok");
    mock.assert_async().await;
}
