use crate::helpers::{get_random_email, TestApp};
use reqwest::Url;
use secrecy::Secret;
use serde_json::json;
use taskboard::domain::{Email, Principal, UserId};
use test_context::test_context;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

fn plant_cookie(app: &TestApp, token: &str) {
    let url = Url::parse(&app.address).unwrap();
    app.cookie_jar.add_cookie_str(
        &format!("session-token={token}; Path=/"),
        &url,
    );
}

// An opaque token the local JWT decode cannot handle must fall through to
// the auth collaborator's identity endpoint.
#[test_context(TestApp)]
#[tokio::test]
async fn opaque_tokens_are_verified_remotely(app: &mut TestApp) {
    let user_id = UserId::default();
    let email = get_random_email();

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": user_id.as_ref().to_string(),
            "email": email,
        })))
        .expect(1)
        .mount(&app.auth_server)
        .await;

    plant_cookie(app, "opaque-session-token");

    let response = app.get_user_invites().await;
    assert_eq!(response.status().as_u16(), 200);
}

#[test_context(TestApp)]
#[tokio::test]
async fn unknown_tokens_resolve_to_anonymous(app: &mut TestApp) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.auth_server)
        .await;

    plant_cookie(app, "expired-or-revoked-token");

    let response = app.get_user_invites().await;
    assert_eq!(response.status().as_u16(), 401);
}

// A cache entry for the token takes precedence over everything else, so no
// request may reach the auth server.
#[test_context(TestApp)]
#[tokio::test]
async fn cached_sessions_skip_the_auth_server(app: &mut TestApp) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&app.auth_server)
        .await;

    let principal = Principal::new(
        UserId::default(),
        Email::parse(Secret::new(get_random_email())).unwrap(),
    );
    app.session_cache
        .write()
        .await
        .insert("cached-token".to_owned(), principal);
    plant_cookie(app, "cached-token");

    let response = app.get_user_invites().await;
    assert_eq!(response.status().as_u16(), 200);
}
