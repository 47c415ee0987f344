use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(Uuid);

impl ProjectId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = Uuid::try_parse(id).map_err(|_| {
            ValidationError::new("Invalid project ID".to_owned())
        })?;
        Ok(Self(parsed))
    }

    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AsRef<Uuid> for ProjectId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

#[test]
fn test_valid_project_ids() {
    let valid_id = "5e90ca28-e1ad-4795-a190-089959c16e0b";
    let parsed = ProjectId::parse(valid_id).expect(valid_id);
    assert_eq!(parsed.as_ref().to_string(), valid_id);
}

#[test]
fn test_invalid_project_ids() {
    let invalid_id = "5b5b32e3a66cc-45bc-82d1-d41582139f1e";
    let result = ProjectId::parse(invalid_id);
    let error = result.expect_err(invalid_id);
    assert_eq!(error.to_string(), "Invalid project ID");
}
