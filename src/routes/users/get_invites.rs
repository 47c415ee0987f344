use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{APIError, PendingInvite},
    utils::auth::require_principal,
    AppState,
};

#[tracing::instrument(name = "Get pending invites route handler", skip_all)]
pub async fn get_invites(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar, Json<InviteListResponse>), APIError> {
    let principal =
        require_principal(&jar, &state.session_cache, &state.auth_client)
            .await?;

    let pending = state
        .invite_store
        .read()
        .await
        .list_pending_for_email(&principal.email)
        .await
        .map_err(|e| APIError::StorageError(eyre!(e)))?;

    let response = Json(InviteListResponse {
        invites: pending.iter().map(PendingInviteBody::from).collect(),
    });

    Ok((StatusCode::OK, jar, response))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct InviteListResponse {
    pub invites: Vec<PendingInviteBody>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingInviteBody {
    pub id: uuid::Uuid,
    #[serde(rename = "projectId")]
    pub project_id: uuid::Uuid,
    #[serde(rename = "projectName")]
    pub project_name: String,
    pub email: String,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<&PendingInvite> for PendingInviteBody {
    fn from(pending: &PendingInvite) -> Self {
        Self {
            id: *pending.invite.id.as_ref(),
            project_id: *pending.invite.project_id.as_ref(),
            project_name: pending.project_name.as_ref().to_owned(),
            email: pending.invite.email.as_ref().expose_secret().to_owned(),
            status: pending.invite.status.as_str().to_owned(),
            created_at: pending.invite.created_at.to_rfc3339(),
        }
    }
}
