use crate::domain::{Membership, MembershipStore, MembershipStoreError};

#[derive(Default)]
pub struct HashmapMembershipStore {
    memberships: Vec<Membership>,
}

impl HashmapMembershipStore {
    pub fn memberships(&self) -> &[Membership] {
        &self.memberships
    }
}

#[async_trait::async_trait]
impl MembershipStore for HashmapMembershipStore {
    async fn add_membership(
        &mut self,
        membership: &Membership,
    ) -> Result<(), MembershipStoreError> {
        // No uniqueness check on (project_id, user_id); the schema does not
        // enforce one either.
        self.memberships.push(membership.clone());
        Ok(())
    }
}
