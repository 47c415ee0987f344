use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref JWT_SECRET: Secret<String> = set_token();
    pub static ref DATABASE_URL: Secret<String> = get_db_url();
    pub static ref AUTH_SERVICE_URL: String = load_or_default(
        env::AUTH_SERVICE_URL_ENV_VAR,
        prod::auth_client::BASE_URL
    );
}

fn load_env() {
    dotenv().ok();
}

fn set_token() -> Secret<String> {
    load_env();
    Secret::new(load_or_default(
        env::JWT_SECRET_ENV_VAR,
        "insecure-dev-secret",
    ))
}

fn get_db_url() -> Secret<String> {
    load_env();
    let db_url =
        std_env::var(env::DATABASE_URL_ENV_VAR).expect("DATABASE_URL must be set.");
    if db_url.is_empty() {
        panic!("DATABASE_URL must not be empty.");
    }
    Secret::new(db_url)
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const AUTH_SERVICE_URL_ENV_VAR: &str = "AUTH_SERVICE_URL";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
}

pub const SESSION_COOKIE_NAME: &str = "session-token";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod auth_client {
        use std::time::Duration;

        pub const BASE_URL: &str = "http://localhost:9999/auth/v1";
        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod auth_client {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
