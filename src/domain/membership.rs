use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ProjectId, RoleId, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MembershipId(Uuid);

impl MembershipId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = Uuid::try_parse(id).map_err(|_| {
            ValidationError::new("Invalid membership ID".to_owned())
        })?;
        Ok(Self(parsed))
    }
}

impl Default for MembershipId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AsRef<Uuid> for MembershipId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

/// A user's confirmed participation in a project. Created only when an
/// invite is accepted; never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub id: MembershipId,
    pub project_id: ProjectId,
    pub user_id: UserId,
    pub role_id: Option<RoleId>,
    pub joined_at: DateTime<Utc>,
}

impl Membership {
    pub fn new(project_id: ProjectId, user_id: UserId) -> Self {
        Self {
            id: MembershipId::default(),
            project_id,
            user_id,
            role_id: None,
            joined_at: Utc::now(),
        }
    }
}
