use crate::helpers::{get_random_email, TestApp};
use taskboard::domain::UserId;
use test_context::test_context;

async fn seed_standard_tasks(app: &TestApp, user_id: &UserId) {
    app.seed_task(user_id, "Ship the quarterly report", true).await;
    app.seed_task(user_id, "Draft the quarterly REPORT", false).await;
    app.seed_task(user_id, "Water the plants", false).await;
    // Someone else's task must never show up
    app.seed_task(&UserId::default(), "Not my task", false).await;
}

fn titles(body: &serde_json::Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|task| task["title"].as_str().unwrap().to_owned())
        .collect()
}

#[test_context(TestApp)]
#[tokio::test]
async fn lists_only_the_principals_tasks(app: &mut TestApp) {
    let principal = app.log_in(&get_random_email());
    seed_standard_tasks(app, &principal.id).await;

    let response = app.get_tasks(&[]).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let titles = titles(&body);
    assert_eq!(titles.len(), 3);
    assert!(!titles.contains(&"Not my task".to_owned()));
}

#[test_context(TestApp)]
#[tokio::test]
async fn status_filter_splits_on_completed_flag(app: &mut TestApp) {
    let principal = app.log_in(&get_random_email());
    seed_standard_tasks(app, &principal.id).await;

    let response = app.get_tasks(&[("status", "completed")]).await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(titles(&body), vec!["Ship the quarterly report"]);

    let response = app.get_tasks(&[("status", "pending")]).await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(titles(&body).len(), 2);
    for task in body.as_array().unwrap() {
        assert_eq!(task["completed"], false);
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn unknown_status_values_are_ignored(app: &mut TestApp) {
    let principal = app.log_in(&get_random_email());
    seed_standard_tasks(app, &principal.id).await;

    let response = app.get_tasks(&[("status", "archived")]).await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(titles(&body).len(), 3);
}

#[test_context(TestApp)]
#[tokio::test]
async fn search_matches_titles_case_insensitively(app: &mut TestApp) {
    let principal = app.log_in(&get_random_email());
    seed_standard_tasks(app, &principal.id).await;

    let response = app.get_tasks(&[("search", "report")]).await;
    let body: serde_json::Value = response.json().await.unwrap();
    let titles = titles(&body);
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Ship the quarterly report".to_owned()));
    assert!(titles.contains(&"Draft the quarterly REPORT".to_owned()));
}

#[test_context(TestApp)]
#[tokio::test]
async fn search_and_status_compose_conjunctively(app: &mut TestApp) {
    let principal = app.log_in(&get_random_email());
    seed_standard_tasks(app, &principal.id).await;

    let response = app
        .get_tasks(&[("search", "report"), ("status", "pending")])
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(titles(&body), vec!["Draft the quarterly REPORT"]);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_if_not_authenticated(app: &mut TestApp) {
    let response = app.get_tasks(&[]).await;
    assert_eq!(response.status().as_u16(), 401);
}
