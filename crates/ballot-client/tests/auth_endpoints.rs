mod common;

use ballot_client::ApiError;
use ballot_core::enums::Role;
use ballot_core::requests::{Credentials, SignupRequest};
use common::{server_and_client, user_json};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn login_posts_json_credentials() {
    let (server, client) = server_and_client().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"email": "a@x.com", "password": "pw"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "abc", "token_type": "bearer"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = client
        .login(&Credentials::new("a@x.com", "pw"))
        .await
        .expect("login succeeds");
    assert_eq!(token.access_token, "abc");
}

#[tokio::test]
async fn login_failure_surfaces_detail() {
    let (server, client) = server_and_client().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})))
        .mount(&server)
        .await;

    let err = client
        .login(&Credentials::new("a@x.com", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn blank_credentials_never_hit_the_network() {
    let (server, client) = server_and_client().await;

    let err = client.login(&Credentials::new("", "pw")).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn me_sends_bearer_token() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("admin")))
        .expect(1)
        .mount(&server)
        .await;

    let identity = client.with_token("abc").me().await.expect("me succeeds");
    assert_eq!(identity.id, "u1");
    assert_eq!(identity.role, Role::Admin);
}

#[tokio::test]
async fn anonymous_requests_carry_no_authorization() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})))
        .mount(&server)
        .await;

    let err = client.me().await.unwrap_err();
    assert!(err.is_unauthorized());

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn signup_returns_created_user() {
    let (server, client) = server_and_client().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/signup"))
        .and(body_json(json!({
            "email": "a@x.com",
            "full_name": "A",
            "password": "pw",
            "role": "user"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("user")))
        .mount(&server)
        .await;

    let user = client
        .signup(&SignupRequest {
            email: "a@x.com".into(),
            full_name: "A".into(),
            password: "pw".into(),
            role: Some(Role::User),
        })
        .await
        .expect("signup succeeds");
    assert_eq!(user.role, Role::User);
}

#[tokio::test]
async fn get_user_by_id() {
    let (server, client) = server_and_client().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("user")))
        .mount(&server)
        .await;

    let user = client.get_user("u1").await.expect("user found");
    assert_eq!(user.email, "a@x.com");
}
