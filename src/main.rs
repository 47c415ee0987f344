use std::{collections::HashMap, sync::Arc};

use sqlx::PgPool;
use tokio::sync::RwLock;

use taskboard::{
    app_state::AppState,
    get_postgres_pool,
    services::{
        data_stores::{
            PostgresInviteStore, PostgresMembershipStore, PostgresTaskStore,
        },
        http_auth_client::HttpAuthClient,
    },
    utils::{
        constants::{prod, AUTH_SERVICE_URL, DATABASE_URL},
        tracing::init_tracing,
    },
    Application,
};

#[tokio::main]
async fn main() {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    let pg_pool = configure_postgresql().await;
    let invite_store =
        Arc::new(RwLock::new(PostgresInviteStore::new(pg_pool.clone())));
    let membership_store =
        Arc::new(RwLock::new(PostgresMembershipStore::new(pg_pool.clone())));
    let task_store = Arc::new(RwLock::new(PostgresTaskStore::new(pg_pool)));

    let http_client = reqwest::Client::builder()
        .timeout(prod::auth_client::TIMEOUT)
        .build()
        .expect("Failed to build HTTP client");
    let auth_client = Arc::new(HttpAuthClient::new(
        AUTH_SERVICE_URL.to_owned(),
        http_client,
    ));

    let session_cache = Arc::new(RwLock::new(HashMap::new()));

    let app_state = AppState::new(
        invite_store,
        membership_store,
        task_store,
        auth_client,
        session_cache,
    );

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .expect("Failed to build application");

    app.run().await.expect("Failed to run application");
}

async fn configure_postgresql() -> PgPool {
    let pg_pool = get_postgres_pool(&DATABASE_URL)
        .await
        .expect("Failed to create Postgres connection pool!");

    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .expect("Failed to run migrations");

    pg_pool
}
