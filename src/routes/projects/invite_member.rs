use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{APIError, Email, Invite, ProjectId, ValidationError},
    utils::{auth::require_principal, invitations},
    AppState,
};

#[tracing::instrument(name = "Invite member route handler", skip_all)]
pub async fn invite_member(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    jar: CookieJar,
    Json(request): Json<InviteMemberRequest>,
) -> Result<(StatusCode, CookieJar, Json<InviteMemberResponse>), APIError> {
    let principal =
        require_principal(&jar, &state.session_cache, &state.auth_client)
            .await?;

    let project_id = ProjectId::parse(&project_id)?;
    // An absent email is a client error like an invalid one, so it gets a
    // 400 rather than the extractor's 422.
    let email = request
        .email
        .ok_or_else(|| ValidationError::new("Email required".to_owned()))?;
    let email = Email::parse(Secret::new(email))?;

    let invite = invitations::create_invite(
        &state.invite_store,
        &project_id,
        email,
        &principal,
    )
    .await?;

    let response = Json(InviteMemberResponse {
        success: true,
        invite: InviteBody::from(&invite),
    });

    Ok((StatusCode::CREATED, jar, response))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct InviteMemberRequest {
    pub email: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct InviteMemberResponse {
    pub success: bool,
    pub invite: InviteBody,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct InviteBody {
    pub id: uuid::Uuid,
    #[serde(rename = "projectId")]
    pub project_id: uuid::Uuid,
    pub email: String,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<&Invite> for InviteBody {
    fn from(invite: &Invite) -> Self {
        Self {
            id: *invite.id.as_ref(),
            project_id: *invite.project_id.as_ref(),
            email: invite.email.as_ref().expose_secret().to_owned(),
            status: invite.status.as_str().to_owned(),
            created_at: invite.created_at.to_rfc3339(),
        }
    }
}
