use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InviteId(Uuid);

impl InviteId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = Uuid::try_parse(id).map_err(|_| {
            ValidationError::new("Invalid invite ID".to_owned())
        })?;
        Ok(Self(parsed))
    }

    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for InviteId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AsRef<Uuid> for InviteId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

#[test]
fn test_valid_invite_ids() {
    let valid_id = "0d3cc1b5-39f1-4f96-889f-4b7dd2a1023f";
    let parsed = InviteId::parse(valid_id).expect(valid_id);
    assert_eq!(
        parsed.as_ref().to_string(),
        valid_id,
        "ID does not match expected value"
    );
}

#[test]
fn test_invalid_invite_ids() {
    for invalid_id in ["", "not-a-uuid", "0d3cc1b539f1-4f96-889f"] {
        let result = InviteId::parse(invalid_id);
        let error = result.expect_err(invalid_id);
        assert_eq!(error.to_string(), "Invalid invite ID");
    }
}
