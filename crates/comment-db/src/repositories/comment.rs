//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use comment_core::entities::Comment;
use comment_core::traits::{CommentRepository, RepoResult};
use comment_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::{comment_not_found, map_db_error};

const COMMENT_COLUMNS: &str =
    "id, user_id, content_type, object_id, content, parent_id, posted_at, edited_at";

/// PostgreSQL implementation of CommentRepository
///
/// Listing queries join the flags table so flagged-into-hiding comments
/// disappear from every listing path while staying reachable by ID.
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, flags_allowed: i32) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(&format!(
            r"
            SELECT c.{COMMENT_COLUMNS}
            FROM comments c
            JOIN flags f ON f.comment_id = c.id
            WHERE ($1 <= 0 OR f.count < $1)
            ORDER BY c.posted_at DESC
            "
        ))
        .bind(flags_allowed)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_parents(&self, flags_allowed: i32) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(&format!(
            r"
            SELECT c.{COMMENT_COLUMNS}
            FROM comments c
            JOIN flags f ON f.comment_id = c.id
            WHERE c.parent_id IS NULL AND ($1 <= 0 OR f.count < $1)
            ORDER BY c.posted_at DESC
            "
        ))
        .bind(flags_allowed)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_object(
        &self,
        content_type: &str,
        object_id: Snowflake,
        flags_allowed: i32,
    ) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(&format!(
            r"
            SELECT c.{COMMENT_COLUMNS}
            FROM comments c
            JOIN flags f ON f.comment_id = c.id
            WHERE c.content_type = $1 AND c.object_id = $2 AND ($3 <= 0 OR f.count < $3)
            ORDER BY c.posted_at DESC
            "
        ))
        .bind(content_type)
        .bind(object_id.into_inner())
        .bind(flags_allowed)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_parents_by_object(
        &self,
        content_type: &str,
        object_id: Snowflake,
        flags_allowed: i32,
    ) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(&format!(
            r"
            SELECT c.{COMMENT_COLUMNS}
            FROM comments c
            JOIN flags f ON f.comment_id = c.id
            WHERE c.content_type = $1 AND c.object_id = $2
              AND c.parent_id IS NULL AND ($3 <= 0 OR f.count < $3)
            ORDER BY c.posted_at DESC
            "
        ))
        .bind(content_type)
        .bind(object_id.into_inner())
        .bind(flags_allowed)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_replies(
        &self,
        parent_id: Snowflake,
        flags_allowed: i32,
    ) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(&format!(
            r"
            SELECT c.{COMMENT_COLUMNS}
            FROM comments c
            JOIN flags f ON f.comment_id = c.id
            WHERE c.parent_id = $1 AND ($2 <= 0 OR f.count < $2)
            ORDER BY c.posted_at ASC
            "
        ))
        .bind(parent_id.into_inner())
        .bind(flags_allowed)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment))]
    async fn create(
        &self,
        comment: &Comment,
        reaction_id: Snowflake,
        flag_id: Snowflake,
    ) -> RepoResult<()> {
        // One transaction: a comment never exists without its aggregates
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO comments (id, user_id, content_type, object_id, content, parent_id, posted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.user_id.into_inner())
        .bind(&comment.content_type)
        .bind(comment.object_id.into_inner())
        .bind(&comment.content)
        .bind(comment.parent_id.map(Snowflake::into_inner))
        .bind(comment.posted_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("INSERT INTO reactions (id, comment_id) VALUES ($1, $2)")
            .bind(reaction_id.into_inner())
            .bind(comment.id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("INSERT INTO flags (id, comment_id) VALUES ($1, $2)")
            .bind(flag_id.into_inner())
            .bind(comment.id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, content))]
    async fn update_content(&self, id: Snowflake, content: &str) -> RepoResult<Comment> {
        // SET expressions see the old row, so the CASE compares the stored
        // content: edited_at moves only when the text actually changes.
        let result = sqlx::query_as::<_, CommentModel>(&format!(
            r"
            UPDATE comments
            SET edited_at = CASE WHEN content IS DISTINCT FROM $2 THEN now() ELSE edited_at END,
                content = $2
            WHERE id = $1
            RETURNING {COMMENT_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .bind(content)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Comment::from).ok_or_else(|| comment_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommentRepository>();
    }
}
