use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{APIError, InviteId, ValidationError},
    utils::{auth::require_principal, invitations},
    AppState,
};

#[tracing::instrument(name = "Resolve invite route handler", skip_all)]
pub async fn resolve_invite(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<ResolveInviteRequest>,
) -> Result<(StatusCode, CookieJar, Json<ResolveInviteResponse>), APIError> {
    let principal =
        require_principal(&jar, &state.session_cache, &state.auth_client)
            .await?;

    // An absent ID is a client error like an unparseable one, so it gets a
    // 400 rather than the extractor's 422.
    let invite_id = request.invite_id.ok_or_else(|| {
        ValidationError::new("Invite ID required".to_owned())
    })?;
    let invite_id = InviteId::parse(&invite_id)?;

    invitations::resolve_invite(
        &state.invite_store,
        &state.membership_store,
        &principal,
        &invite_id,
        request.accept,
    )
    .await?;

    Ok((
        StatusCode::OK,
        jar,
        Json(ResolveInviteResponse { success: true }),
    ))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct ResolveInviteRequest {
    #[serde(rename = "inviteId")]
    pub invite_id: Option<String>,
    pub accept: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolveInviteResponse {
    pub success: bool,
}
