use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Email, InviteId, ProjectId, ProjectName, ValidationError};

/// Status of a project invite. An invite starts out `Pending` and moves to
/// exactly one of the terminal states when the invitee resolves it. The
/// only write back out of a terminal state is the membership-insert
/// rollback in the invitation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Pending,
    Accepted,
    Declined,
}

impl InviteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteStatus::Pending => "pending",
            InviteStatus::Accepted => "accepted",
            InviteStatus::Declined => "declined",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "pending" => Ok(InviteStatus::Pending),
            "accepted" => Ok(InviteStatus::Accepted),
            "declined" => Ok(InviteStatus::Declined),
            other => Err(ValidationError::new(format!(
                "Invalid invite status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invite {
    pub id: InviteId,
    pub project_id: ProjectId,
    pub email: Email,
    pub status: InviteStatus,
    pub created_at: DateTime<Utc>,
}

impl Invite {
    pub fn new(project_id: ProjectId, email: Email) -> Self {
        Self {
            id: InviteId::default(),
            project_id,
            email,
            status: InviteStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

/// A pending invite joined with the name of the project it belongs to, as
/// returned by the invite listing endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingInvite {
    pub invite: Invite,
    pub project_name: ProjectName,
}
