use crate::helpers::{get_random_email, TestApp};
use serde_json::json;
use taskboard::{
    domain::{InviteStatus, InviteStore, ProjectId},
    ErrorResponse,
};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_and_a_pending_invite(app: &mut TestApp) {
    app.log_in(&get_random_email());
    let project_id = app.seed_project("Apollo").await;
    let invitee = get_random_email();

    let response = app
        .post_invite(
            &project_id.as_ref().to_string(),
            &json!({ "email": invitee }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "success": { "type": "boolean" },
        "invite": {
          "type": "object",
          "properties": {
            "id": { "type": "string", "minLength": 36, "maxLength": 36 },
            "projectId": { "type": "string" },
            "email": { "type": "string" },
            "status": { "type": "string" },
            "createdAt": { "type": "string" }
          },
          "required": ["id", "projectId", "email", "status", "createdAt"]
        }
      },
      "required": ["success", "invite"]
    });

    let body: serde_json::Value =
        response.json().await.expect("Failed to parse JSON");
    assert!(
        jsonschema::is_valid(&schema, &body),
        "response does not match schema"
    );
    assert_eq!(body["success"], true);
    assert_eq!(body["invite"]["status"], "pending");
    assert_eq!(body["invite"]["email"], invitee);

    let invite_id = taskboard::domain::InviteId::parse(
        body["invite"]["id"].as_str().unwrap(),
    )
    .expect("invite ID should be a valid UUID");
    let stored = app
        .invite_store
        .read()
        .await
        .get_invite(&invite_id)
        .await
        .expect("invite should have been persisted");
    assert_eq!(stored.status, InviteStatus::Pending);
    assert_eq!(stored.project_id, project_id);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_invalid_email(app: &mut TestApp) {
    app.log_in(&get_random_email());
    let project_id = app.seed_project("Apollo").await;

    for bad_email in ["", "not-an-email", "@x.com"] {
        let response = app
            .post_invite(
                &project_id.as_ref().to_string(),
                &json!({ "email": bad_email }),
            )
            .await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should reject email: {bad_email:?}"
        );
        assert_eq!(
            response
                .json::<ErrorResponse>()
                .await
                .expect("Could not deserialise response body to ErrorResponse")
                .error,
            "Invalid email address"
        );
    }

    // Rejected invites must not leave rows behind
    assert_eq!(app.invite_store.read().await.invite_count(), 0);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_when_email_is_missing(app: &mut TestApp) {
    app.log_in(&get_random_email());
    let project_id = app.seed_project("Apollo").await;

    let response = app
        .post_invite(&project_id.as_ref().to_string(), &json!({}))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.json::<ErrorResponse>().await.unwrap().error,
        "Email required"
    );
    assert_eq!(app.invite_store.read().await.invite_count(), 0);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_invalid_project_id(app: &mut TestApp) {
    app.log_in(&get_random_email());

    let response = app
        .post_invite("not-a-uuid", &json!({ "email": get_random_email() }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.json::<ErrorResponse>().await.unwrap().error,
        "Invalid project ID"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_if_not_authenticated(app: &mut TestApp) {
    let project_id = ProjectId::default();

    let response = app
        .post_invite(
            &project_id.as_ref().to_string(),
            &json!({ "email": get_random_email() }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_malformed_request(app: &mut TestApp) {
    app.log_in(&get_random_email());
    let project_id = app.seed_project("Apollo").await;

    // A present field of the wrong type still fails in the extractor; an
    // absent field is a 400, covered above.
    let test_cases = [json!({ "email": true }), json!({ "email": 42 })];
    for test_case in test_cases.iter() {
        let response = app
            .post_invite(&project_id.as_ref().to_string(), test_case)
            .await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {test_case:?}"
        );
    }
}
