use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use color_eyre::eyre::{eyre, Context, ContextCompat, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::{
    app_state::{AuthClientType, SessionCacheType},
    domain::{APIError, Email, Principal, UserId},
};

use super::constants::{JWT_SECRET, SESSION_COOKIE_NAME};

// Create cookie with a new session token
#[tracing::instrument(name = "Generating session cookie", skip_all)]
pub fn generate_auth_cookie(principal: &Principal) -> Result<Cookie<'static>> {
    let token = generate_session_token(principal)?;
    Ok(create_auth_cookie(token))
}

// Create cookie and set the value to the passed-in token string
#[tracing::instrument(name = "Creating session cookie", skip_all)]
fn create_auth_cookie(token: Secret<String>) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token.expose_secret().to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

// This value determines how long a session token is valid for
pub const TOKEN_TTL_SECONDS: i64 = 600; // 10 minutes

#[tracing::instrument(name = "Generating session token", skip_all)]
pub fn generate_session_token(
    principal: &Principal,
) -> Result<Secret<String>> {
    let delta = chrono::Duration::try_seconds(TOKEN_TTL_SECONDS)
        .wrap_err("Failed to create 10 minute time delta")?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(eyre!("failed to add to current time"))?
        .timestamp();

    let exp: usize = exp.try_into().wrap_err(format!(
        "failed to cast exp time to usize. exp time: {}",
        exp
    ))?;

    let claims = Claims {
        sub: principal.email.as_ref().expose_secret().to_owned(),
        user_id: principal.id.as_ref().to_string(),
        exp,
    };

    let token_string = encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.expose_secret().as_bytes()),
    )
    .wrap_err("failed to create token")?;

    Ok(Secret::new(token_string))
}

// Decode a session token using the shared secret; expiry is validated
#[tracing::instrument(name = "Decoding session token", skip_all)]
pub fn decode_session_token(token: &Secret<String>) -> Result<Claims> {
    decode::<Claims>(
        token.expose_secret(),
        &DecodingKey::from_secret(JWT_SECRET.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .wrap_err("failed to decode token")
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub user_id: String,
    pub exp: usize,
}

impl Claims {
    fn to_principal(&self) -> Result<Principal> {
        let id = UserId::parse(&self.user_id)
            .wrap_err("token carries a malformed user ID")?;
        let email = Email::parse(Secret::new(self.sub.clone()))
            .wrap_err("token carries a malformed email")?;
        Ok(Principal::new(id, email))
    }
}

/// Resolves the principal behind a request, or `None` for anonymous.
///
/// Ordered fallback, stopping at the first hit:
/// 1. the in-process session cache, keyed by the cookie's token;
/// 2. a local decode of the session token itself;
/// 3. a verified lookup against the auth collaborator's identity endpoint.
///
/// No step writes anywhere; failures only fall through to the next step.
#[tracing::instrument(name = "Resolving principal", skip_all)]
pub async fn resolve_principal(
    jar: &CookieJar,
    session_cache: &SessionCacheType,
    auth_client: &AuthClientType,
) -> Option<Principal> {
    let cookie = jar.get(SESSION_COOKIE_NAME)?;
    let token = Secret::new(cookie.value().to_owned());

    if let Some(principal) =
        session_cache.read().await.get(token.expose_secret())
    {
        return Some(principal.clone());
    }

    if let Ok(claims) = decode_session_token(&token) {
        if let Ok(principal) = claims.to_principal() {
            return Some(principal);
        }
    }

    match auth_client.get_identity(&token).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!("identity lookup failed: {e}");
            None
        }
    }
}

/// Like [`resolve_principal`] but fails the operation when no principal can
/// be resolved.
pub async fn require_principal(
    jar: &CookieJar,
    session_cache: &SessionCacheType,
    auth_client: &AuthClientType,
) -> Result<Principal, APIError> {
    resolve_principal(jar, session_cache, auth_client)
        .await
        .ok_or(APIError::Unauthenticated)
}
