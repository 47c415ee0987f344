use color_eyre::eyre::Report;
use thiserror::Error;

use super::{
    Email, Invite, InviteId, InviteStatus, Membership, PendingInvite, Task,
    TaskFilter, UserId,
};

#[async_trait::async_trait]
pub trait InviteStore {
    async fn add_invite(
        &mut self,
        invite: &Invite,
    ) -> Result<(), InviteStoreError>;
    async fn get_invite(
        &self,
        id: &InviteId,
    ) -> Result<Invite, InviteStoreError>;
    /// Compare-and-swap status update: only succeeds if the stored status
    /// still equals `from`.
    async fn transition_status(
        &mut self,
        id: &InviteId,
        from: InviteStatus,
        to: InviteStatus,
    ) -> Result<(), InviteStoreError>;
    async fn list_pending_for_email(
        &self,
        email: &Email,
    ) -> Result<Vec<PendingInvite>, InviteStoreError>;
}

#[derive(Debug, Error)]
pub enum InviteStoreError {
    #[error("Invite not found")]
    InviteNotFound,
    #[error("Invite status changed since it was read")]
    StatusMismatch,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for InviteStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::InviteNotFound, Self::InviteNotFound)
                | (Self::StatusMismatch, Self::StatusMismatch)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait MembershipStore {
    async fn add_membership(
        &mut self,
        membership: &Membership,
    ) -> Result<(), MembershipStoreError>;
}

#[derive(Debug, Error)]
pub enum MembershipStoreError {
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for MembershipStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait TaskStore {
    /// Lists the tasks visible to `user_id`, newest first, with `filter`
    /// applied conjunctively.
    async fn list_tasks(
        &self,
        user_id: &UserId,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, TaskStoreError>;
}

#[derive(Debug, Error)]
pub enum TaskStoreError {
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for TaskStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
