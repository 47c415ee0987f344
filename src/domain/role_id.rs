use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(Uuid);

impl RoleId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = Uuid::try_parse(id)
            .map_err(|_| ValidationError::new("Invalid role ID".to_owned()))?;
        Ok(Self(parsed))
    }

    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl AsRef<Uuid> for RoleId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

#[test]
fn test_invalid_role_ids() {
    let result = RoleId::parse("nope");
    assert_eq!(result.unwrap_err().to_string(), "Invalid role ID");
}
