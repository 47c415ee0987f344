use color_eyre::eyre::{Result, WrapErr};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::{AuthClient, Email, Principal, UserId};

/// Talks to the authentication collaborator's identity endpoint. Used as
/// the last step of the identity resolver, when neither the session cache
/// nor a local token decode produced a principal.
pub struct HttpAuthClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(base_url: String, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url,
        }
    }
}

#[async_trait::async_trait]
impl AuthClient for HttpAuthClient {
    #[tracing::instrument(
        name = "Fetching identity from auth service",
        skip_all
    )]
    async fn get_identity(
        &self,
        token: &Secret<String>,
    ) -> Result<Option<Principal>> {
        let url = format!("{}/user", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .wrap_err("Failed to reach the auth service")?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let body = match response.json::<IdentityResponse>().await {
            Ok(body) => body,
            // A 2xx with an unreadable body counts as "no live session"
            // rather than a hard failure.
            Err(_) => return Ok(None),
        };

        let id = match UserId::parse(&body.id) {
            Ok(id) => id,
            Err(_) => return Ok(None),
        };
        let email = match Email::parse(Secret::new(body.email)) {
            Ok(email) => email,
            Err(_) => return Ok(None),
        };

        Ok(Some(Principal::new(id, email)))
    }
}

#[derive(Deserialize)]
struct IdentityResponse {
    id: String,
    email: String,
}
