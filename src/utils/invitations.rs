use color_eyre::eyre::{eyre, WrapErr};

use crate::{
    app_state::{InviteStoreType, MembershipStoreType},
    domain::{
        APIError, Email, Invite, InviteId, InviteStatus, InviteStoreError,
        Membership, Principal, ProjectId,
    },
};

/// Records a pending invite for `email` to join `project_id`.
///
/// Who may invite is enforced by the storage layer's row policies, not
/// here; the handler only guarantees the caller is authenticated.
#[tracing::instrument(
    name = "Create invite",
    skip_all,
    fields(inviter = %principal.id.as_ref())
)]
pub async fn create_invite(
    invite_store: &InviteStoreType,
    project_id: &ProjectId,
    email: Email,
    principal: &Principal,
) -> Result<Invite, APIError> {
    let invite = Invite::new(project_id.clone(), email);

    invite_store
        .write()
        .await
        .add_invite(&invite)
        .await
        .map_err(|e| APIError::StorageError(eyre!(e)))?;

    Ok(invite)
}

/// Resolves a pending invite: flips its status, and on acceptance
/// materializes the membership row.
///
/// The status flip and the membership insert are two separate writes with
/// no transaction around them. If the insert fails, one compensating write
/// puts the invite back to `pending` so the invitee can retry; if that
/// compensation also fails the invite is left accepted without a
/// membership row. Both status writes are compare-and-swap updates, so two
/// racing resolutions cannot both get past the pending gate.
#[tracing::instrument(
    name = "Resolve invite",
    skip_all,
    fields(invite_id = %invite_id.as_ref(), accept = accept)
)]
pub async fn resolve_invite(
    invite_store: &InviteStoreType,
    membership_store: &MembershipStoreType,
    principal: &Principal,
    invite_id: &InviteId,
    accept: bool,
) -> Result<(), APIError> {
    let invite = invite_store
        .read()
        .await
        .get_invite(invite_id)
        .await
        .map_err(|e| match e {
            InviteStoreError::InviteNotFound => {
                APIError::NotFound("Invite not found".to_owned())
            }
            e => APIError::StorageError(eyre!(e)),
        })?;

    // Only the principal the invite is addressed to may resolve it. The
    // storage policies check this too; this is the application-level layer
    // of that check.
    if invite.email != principal.email {
        return Err(APIError::Forbidden(
            "Not authorized for this invite".to_owned(),
        ));
    }

    if invite.status != InviteStatus::Pending {
        return Err(APIError::Conflict("Invite already processed".to_owned()));
    }

    let new_status = if accept {
        InviteStatus::Accepted
    } else {
        InviteStatus::Declined
    };

    invite_store
        .write()
        .await
        .transition_status(invite_id, InviteStatus::Pending, new_status)
        .await
        .map_err(|e| match e {
            // Another request resolved the invite between our read and this
            // write.
            InviteStoreError::StatusMismatch => {
                APIError::Conflict("Invite already processed".to_owned())
            }
            InviteStoreError::InviteNotFound => {
                APIError::NotFound("Invite not found".to_owned())
            }
            e => APIError::StorageError(eyre!(e)),
        })?;

    if accept {
        let membership =
            Membership::new(invite.project_id.clone(), principal.id.clone());

        let inserted = membership_store
            .write()
            .await
            .add_membership(&membership)
            .await
            .wrap_err("Failed to join project");

        if let Err(e) = inserted {
            // One compensating write, not retried: put the invite back so
            // the invitee can try again.
            if let Err(revert_error) = invite_store
                .write()
                .await
                .transition_status(invite_id, new_status, InviteStatus::Pending)
                .await
            {
                tracing::error!(
                    "failed to revert invite {} after membership insert \
                     failure: {revert_error}",
                    invite_id.as_ref()
                );
            }
            return Err(APIError::StorageError(e));
        }
    }

    Ok(())
}
