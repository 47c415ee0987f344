use crate::helpers::{get_random_email, TestApp};
use chrono::{Duration, Utc};
use secrecy::Secret;
use serde_json::json;
use taskboard::domain::{Email, Invite, InviteStatus, InviteStore};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn lists_own_pending_invites_newest_first(app: &mut TestApp) {
    let email = get_random_email();
    app.log_in(&email);
    let project_id = app.seed_project("Apollo").await;

    let mut older = Invite::new(
        project_id.clone(),
        Email::parse(Secret::new(email.clone())).unwrap(),
    );
    older.created_at = Utc::now() - Duration::minutes(10);
    app.invite_store
        .write()
        .await
        .add_invite(&older)
        .await
        .unwrap();
    let newer = app.seed_invite(&project_id, &email).await;

    let response = app.get_user_invites().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let invites = body["invites"].as_array().unwrap();
    assert_eq!(invites.len(), 2);
    assert_eq!(invites[0]["id"], json!(newer.id.as_ref().to_string()));
    assert_eq!(invites[1]["id"], json!(older.id.as_ref().to_string()));
    for invite in invites {
        assert_eq!(invite["projectName"], "Apollo");
        assert_eq!(invite["status"], "pending");
        assert_eq!(invite["email"], json!(email));
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn excludes_resolved_invites_and_other_recipients(app: &mut TestApp) {
    let email = get_random_email();
    app.log_in(&email);
    let project_id = app.seed_project("Apollo").await;

    let mine = app.seed_invite(&project_id, &email).await;
    app.seed_invite(&project_id, &get_random_email()).await;

    let mut declined = Invite::new(
        project_id.clone(),
        Email::parse(Secret::new(email.clone())).unwrap(),
    );
    declined.status = InviteStatus::Declined;
    app.invite_store
        .write()
        .await
        .add_invite(&declined)
        .await
        .unwrap();

    let response = app.get_user_invites().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let invites = body["invites"].as_array().unwrap();
    assert_eq!(invites.len(), 1);
    assert_eq!(invites[0]["id"], json!(mine.id.as_ref().to_string()));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_if_not_authenticated(app: &mut TestApp) {
    let response = app.get_user_invites().await;
    assert_eq!(response.status().as_u16(), 401);
}
