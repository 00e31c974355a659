//! PostgreSQL implementation of FlagRepository
//!
//! Mirrors the reaction repository: instance create/delete bundle the
//! count update into the same transaction, direct updates never touch it.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use comment_core::entities::{Flag, FlagInstance};
use comment_core::error::DomainError;
use comment_core::traits::{FlagRepository, RepoResult};
use comment_core::value_objects::{FlagReason, Snowflake};

use crate::models::{FlagInstanceModel, FlagModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FlagRepository
#[derive(Clone)]
pub struct PgFlagRepository {
    pool: PgPool,
}

impl PgFlagRepository {
    /// Create a new PgFlagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn apply_increment(
        tx: &mut Transaction<'_, Postgres>,
        flag_id: Snowflake,
    ) -> RepoResult<()> {
        sqlx::query("UPDATE flags SET count = count + 1 WHERE id = $1")
            .bind(flag_id.into_inner())
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }

    async fn apply_decrement(
        tx: &mut Transaction<'_, Postgres>,
        flag_id: Snowflake,
    ) -> RepoResult<()> {
        sqlx::query("UPDATE flags SET count = GREATEST(count - 1, 0) WHERE id = $1")
            .bind(flag_id.into_inner())
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

#[async_trait]
impl FlagRepository for PgFlagRepository {
    #[instrument(skip(self))]
    async fn find_by_comment(&self, comment_id: Snowflake) -> RepoResult<Option<Flag>> {
        let result = sqlx::query_as::<_, FlagModel>(
            "SELECT id, comment_id, count FROM flags WHERE comment_id = $1",
        )
        .bind(comment_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Flag::from))
    }

    #[instrument(skip(self))]
    async fn find_instance(
        &self,
        flag_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<FlagInstance>> {
        let result = sqlx::query_as::<_, FlagInstanceModel>(
            r"
            SELECT id, flag_id, user_id, reason, info, flagged_at
            FROM flag_instances
            WHERE flag_id = $1 AND user_id = $2
            ",
        )
        .bind(flag_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FlagInstance::try_from).transpose()
    }

    #[instrument(skip(self, instance))]
    async fn create_instance(&self, instance: &FlagInstance) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO flag_instances (id, flag_id, user_id, reason, info, flagged_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(instance.id.into_inner())
        .bind(instance.flag_id.into_inner())
        .bind(instance.user_id.into_inner())
        .bind(instance.reason.value())
        .bind(instance.info.as_deref())
        .bind(instance.flagged_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::FlagAlreadyExists))?;

        Self::apply_increment(&mut tx, instance.flag_id).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_instance(&self, flag_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM flag_instances WHERE flag_id = $1 AND user_id = $2")
            .bind(flag_id.into_inner())
            .bind(user_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let removed = result.rows_affected() > 0;
        if removed {
            Self::apply_decrement(&mut tx, flag_id).await?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(removed)
    }

    #[instrument(skip(self, info))]
    async fn update_instance(
        &self,
        flag_id: Snowflake,
        user_id: Snowflake,
        reason: FlagReason,
        info: Option<&str>,
    ) -> RepoResult<()> {
        // Deliberately no count statement: sync fires on create/delete only
        sqlx::query(
            r"
            UPDATE flag_instances
            SET reason = $3, info = $4
            WHERE flag_id = $1 AND user_id = $2
            ",
        )
        .bind(flag_id.into_inner())
        .bind(user_id.into_inner())
        .bind(reason.value())
        .bind(info)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear_instances(&self, flag_id: Snowflake) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM flag_instances WHERE flag_id = $1")
            .bind(flag_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("UPDATE flags SET count = 0 WHERE id = $1")
            .bind(flag_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn increment(&self, flag_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        Self::apply_increment(&mut tx, flag_id).await?;
        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn decrement(&self, flag_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        Self::apply_decrement(&mut tx, flag_id).await?;
        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgFlagRepository>();
    }
}
