use std::collections::HashMap;

use color_eyre::eyre::eyre;

use crate::domain::{
    Email, Invite, InviteId, InviteStatus, InviteStore, InviteStoreError,
    PendingInvite, ProjectId, ProjectName,
};

/// In-memory invite store. Projects have to be registered up front so the
/// pending-invite listing can join their names, mirroring the SQL join in
/// the Postgres store.
#[derive(Default)]
pub struct HashmapInviteStore {
    invites: HashMap<InviteId, Invite>,
    project_names: HashMap<ProjectId, ProjectName>,
}

impl HashmapInviteStore {
    pub fn add_project_name(&mut self, id: ProjectId, name: ProjectName) {
        self.project_names.insert(id, name);
    }

    pub fn invite_count(&self) -> usize {
        self.invites.len()
    }
}

#[async_trait::async_trait]
impl InviteStore for HashmapInviteStore {
    async fn add_invite(
        &mut self,
        invite: &Invite,
    ) -> Result<(), InviteStoreError> {
        self.invites.insert(invite.id.clone(), invite.clone());
        Ok(())
    }

    async fn get_invite(
        &self,
        id: &InviteId,
    ) -> Result<Invite, InviteStoreError> {
        match self.invites.get(id) {
            Some(invite) => Ok(invite.clone()),
            None => Err(InviteStoreError::InviteNotFound),
        }
    }

    async fn transition_status(
        &mut self,
        id: &InviteId,
        from: InviteStatus,
        to: InviteStatus,
    ) -> Result<(), InviteStoreError> {
        let invite = self
            .invites
            .get_mut(id)
            .ok_or(InviteStoreError::InviteNotFound)?;
        if invite.status != from {
            return Err(InviteStoreError::StatusMismatch);
        }
        invite.status = to;
        Ok(())
    }

    async fn list_pending_for_email(
        &self,
        email: &Email,
    ) -> Result<Vec<PendingInvite>, InviteStoreError> {
        let mut pending: Vec<&Invite> = self
            .invites
            .values()
            .filter(|invite| {
                invite.status == InviteStatus::Pending
                    && &invite.email == email
            })
            .collect();
        pending.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        pending
            .into_iter()
            .map(|invite| {
                let project_name = self
                    .project_names
                    .get(&invite.project_id)
                    .cloned()
                    .ok_or_else(|| {
                        InviteStoreError::UnexpectedError(eyre!(
                            "No project registered with ID {}",
                            invite.project_id.as_ref()
                        ))
                    })?;
                Ok(PendingInvite {
                    invite: invite.clone(),
                    project_name,
                })
            })
            .collect()
    }
}
