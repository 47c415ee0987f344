use color_eyre::eyre::eyre;
use secrecy::{ExposeSecret, Secret};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::{
    Email, Invite, InviteId, InviteStatus, InviteStore, InviteStoreError,
    PendingInvite, ProjectId, ProjectName,
};

pub struct PostgresInviteStore {
    pool: PgPool,
}

impl PostgresInviteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn invite_from_row(row: &PgRow) -> Result<Invite, InviteStoreError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| InviteStoreError::UnexpectedError(e.into()))?;
    let project_id: Uuid = row
        .try_get("project_id")
        .map_err(|e| InviteStoreError::UnexpectedError(e.into()))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| InviteStoreError::UnexpectedError(e.into()))?;
    let status: String = row
        .try_get("status")
        .map_err(|e| InviteStoreError::UnexpectedError(e.into()))?;
    let created_at = row
        .try_get("created_at")
        .map_err(|e| InviteStoreError::UnexpectedError(e.into()))?;

    Ok(Invite {
        id: InviteId::new(id),
        project_id: ProjectId::new(project_id),
        email: Email::parse(Secret::new(email))
            .map_err(|e| InviteStoreError::UnexpectedError(eyre!(e)))?,
        status: InviteStatus::parse(&status)
            .map_err(|e| InviteStoreError::UnexpectedError(eyre!(e)))?,
        created_at,
    })
}

#[async_trait::async_trait]
impl InviteStore for PostgresInviteStore {
    #[tracing::instrument(name = "Adding invite to PostgreSQL", skip_all)]
    async fn add_invite(
        &mut self,
        invite: &Invite,
    ) -> Result<(), InviteStoreError> {
        sqlx::query(
            r#"
            INSERT INTO project_invites (id, project_id, email, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(invite.id.as_ref())
        .bind(invite.project_id.as_ref())
        .bind(invite.email.as_ref().expose_secret())
        .bind(invite.status.as_str())
        .bind(invite.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| InviteStoreError::UnexpectedError(e.into()))?;
        Ok(())
    }

    #[tracing::instrument(name = "Getting invite from PostgreSQL", skip_all)]
    async fn get_invite(
        &self,
        id: &InviteId,
    ) -> Result<Invite, InviteStoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, project_id, email, status, created_at
            FROM project_invites
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| InviteStoreError::UnexpectedError(e.into()))?
        .ok_or(InviteStoreError::InviteNotFound)?;

        invite_from_row(&row)
    }

    #[tracing::instrument(
        name = "Transitioning invite status in PostgreSQL",
        skip_all
    )]
    async fn transition_status(
        &mut self,
        id: &InviteId,
        from: InviteStatus,
        to: InviteStatus,
    ) -> Result<(), InviteStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE project_invites SET status = $1 WHERE id = $2 AND status = $3
            "#,
        )
        .bind(to.as_str())
        .bind(id.as_ref())
        .bind(from.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| InviteStoreError::UnexpectedError(e.into()))?;

        // Zero rows means either the invite vanished or another request got
        // to it first; both fold into the CAS failure.
        if result.rows_affected() == 0 {
            return Err(InviteStoreError::StatusMismatch);
        }
        Ok(())
    }

    #[tracing::instrument(
        name = "Listing pending invites from PostgreSQL",
        skip_all
    )]
    async fn list_pending_for_email(
        &self,
        email: &Email,
    ) -> Result<Vec<PendingInvite>, InviteStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT i.id, i.project_id, i.email, i.status, i.created_at,
                   p.name AS project_name
            FROM project_invites i
            INNER JOIN projects p ON p.id = i.project_id
            WHERE i.email = $1 AND i.status = 'pending'
            ORDER BY i.created_at DESC
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| InviteStoreError::UnexpectedError(e.into()))?;

        rows.into_iter()
            .map(|row| {
                let invite = invite_from_row(&row)?;
                let project_name: String = row
                    .try_get("project_name")
                    .map_err(|e| InviteStoreError::UnexpectedError(e.into()))?;
                let project_name = ProjectName::parse(&project_name)
                    .map_err(|e| InviteStoreError::UnexpectedError(eyre!(e)))?;
                Ok(PendingInvite {
                    invite,
                    project_name,
                })
            })
            .collect()
    }
}
