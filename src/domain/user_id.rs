use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = Uuid::try_parse(id)
            .map_err(|_| ValidationError::new("Invalid user ID".to_owned()))?;
        Ok(Self(parsed))
    }

    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AsRef<Uuid> for UserId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

#[test]
fn test_valid_user_ids() {
    let valid_id = "1fce32c9-7cbb-4b45-a3ae-0db798cb9d83";
    let parsed = UserId::parse(valid_id).expect(valid_id);
    assert_eq!(parsed.as_ref().to_string(), valid_id);
}

#[test]
fn test_invalid_user_ids() {
    let invalid_id = "1fce32c97cbb-4b45-a3ae";
    let result = UserId::parse(invalid_id);
    let error = result.expect_err(invalid_id);
    assert_eq!(error.to_string(), "Invalid user ID");
}
