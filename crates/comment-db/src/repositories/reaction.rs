//! PostgreSQL implementation of ReactionRepository
//!
//! Counter synchronization lives here: instance create/delete/replace run
//! the counter update inside the same transaction as the row mutation, so
//! neither ever commits without the other. Update paths issue no counter
//! statement at all.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use comment_core::entities::{Reaction, ReactionInstance};
use comment_core::error::DomainError;
use comment_core::traits::{ReactionRepository, RepoResult};
use comment_core::value_objects::{ReactionType, Snowflake};

use crate::models::{ReactionInstanceModel, ReactionModel};

use super::error::{map_db_error, map_unique_violation};

/// Counter column backing a reaction type
const fn counter_column(reaction_type: ReactionType) -> &'static str {
    match reaction_type {
        ReactionType::Like => "likes",
        ReactionType::Dislike => "dislikes",
    }
}

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn apply_increment(
        tx: &mut Transaction<'_, Postgres>,
        reaction_id: Snowflake,
        reaction_type: ReactionType,
    ) -> RepoResult<()> {
        let column = counter_column(reaction_type);
        sqlx::query(&format!(
            "UPDATE reactions SET {column} = {column} + 1 WHERE id = $1"
        ))
        .bind(reaction_id.into_inner())
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;
        Ok(())
    }

    async fn apply_decrement(
        tx: &mut Transaction<'_, Postgres>,
        reaction_id: Snowflake,
        reaction_type: ReactionType,
    ) -> RepoResult<()> {
        let column = counter_column(reaction_type);
        sqlx::query(&format!(
            "UPDATE reactions SET {column} = GREATEST({column} - 1, 0) WHERE id = $1"
        ))
        .bind(reaction_id.into_inner())
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;
        Ok(())
    }

    async fn insert_instance(
        tx: &mut Transaction<'_, Postgres>,
        instance: &ReactionInstance,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reaction_instances (id, reaction_id, user_id, reaction_type, reacted_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(instance.id.into_inner())
        .bind(instance.reaction_id.into_inner())
        .bind(instance.user_id.into_inner())
        .bind(instance.reaction_type.value())
        .bind(instance.reacted_at)
        .execute(&mut **tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ReactionAlreadyExists))?;
        Ok(())
    }

    async fn remove_instance(
        tx: &mut Transaction<'_, Postgres>,
        reaction_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<ReactionType>> {
        let removed = sqlx::query_scalar::<_, i16>(
            r"
            DELETE FROM reaction_instances
            WHERE reaction_id = $1 AND user_id = $2
            RETURNING reaction_type
            ",
        )
        .bind(reaction_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_db_error)?;

        removed.map(ReactionType::try_from).transpose()
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_comment(&self, comment_id: Snowflake) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            "SELECT id, comment_id, likes, dislikes FROM reactions WHERE comment_id = $1",
        )
        .bind(comment_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn find_instance(
        &self,
        reaction_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<ReactionInstance>> {
        let result = sqlx::query_as::<_, ReactionInstanceModel>(
            r"
            SELECT id, reaction_id, user_id, reaction_type, reacted_at
            FROM reaction_instances
            WHERE reaction_id = $1 AND user_id = $2
            ",
        )
        .bind(reaction_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ReactionInstance::try_from).transpose()
    }

    #[instrument(skip(self, instance))]
    async fn create_instance(&self, instance: &ReactionInstance) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        Self::insert_instance(&mut tx, instance).await?;
        Self::apply_increment(&mut tx, instance.reaction_id, instance.reaction_type).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_instance(
        &self,
        reaction_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<ReactionType>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let removed = Self::remove_instance(&mut tx, reaction_id, user_id).await?;
        if let Some(reaction_type) = removed {
            Self::apply_decrement(&mut tx, reaction_id, reaction_type).await?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(removed)
    }

    #[instrument(skip(self, instance))]
    async fn replace_instance(&self, instance: &ReactionInstance) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Delete-then-create: the old counter goes down, the new one up,
        // all inside one transaction.
        let removed =
            Self::remove_instance(&mut tx, instance.reaction_id, instance.user_id).await?;
        if let Some(old_type) = removed {
            Self::apply_decrement(&mut tx, instance.reaction_id, old_type).await?;
        }

        Self::insert_instance(&mut tx, instance).await?;
        Self::apply_increment(&mut tx, instance.reaction_id, instance.reaction_type).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_instance_type(
        &self,
        reaction_id: Snowflake,
        user_id: Snowflake,
        reaction_type: ReactionType,
    ) -> RepoResult<()> {
        // Deliberately no counter statement: sync fires on create/delete only
        sqlx::query(
            r"
            UPDATE reaction_instances
            SET reaction_type = $3
            WHERE reaction_id = $1 AND user_id = $2
            ",
        )
        .bind(reaction_id.into_inner())
        .bind(user_id.into_inner())
        .bind(reaction_type.value())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment(
        &self,
        reaction_id: Snowflake,
        reaction_type: ReactionType,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        Self::apply_increment(&mut tx, reaction_id, reaction_type).await?;
        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn decrement(
        &self,
        reaction_id: Snowflake,
        reaction_type: ReactionType,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        Self::apply_decrement(&mut tx, reaction_id, reaction_type).await?;
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
        assert_send_sync::<PgReactionRepository>();
    }

    #[test]
    fn test_counter_column_mapping() {
        assert_eq!(counter_column(ReactionType::Like), "likes");
        assert_eq!(counter_column(ReactionType::Dislike), "dislikes");
    }
}
