use sqlx::PgPool;

use crate::domain::{Membership, MembershipStore, MembershipStoreError};

pub struct PostgresMembershipStore {
    pool: PgPool,
}

impl PostgresMembershipStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MembershipStore for PostgresMembershipStore {
    #[tracing::instrument(name = "Adding membership to PostgreSQL", skip_all)]
    async fn add_membership(
        &mut self,
        membership: &Membership,
    ) -> Result<(), MembershipStoreError> {
        sqlx::query(
            r#"
            INSERT INTO project_members (id, project_id, user_id, role_id, joined_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(membership.id.as_ref())
        .bind(membership.project_id.as_ref())
        .bind(membership.user_id.as_ref())
        .bind(membership.role_id.as_ref().map(|role| *role.as_ref()))
        .bind(membership.joined_at)
        .execute(&self.pool)
        .await
        .map_err(|e| MembershipStoreError::UnexpectedError(e.into()))?;
        Ok(())
    }
}
