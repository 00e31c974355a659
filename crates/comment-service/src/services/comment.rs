//! Comment service
//!
//! Posting, listing, editing, and deleting comments. Every listing path
//! reads the live flags-allowed threshold so hidden comments disappear the
//! moment the count crosses it.

use comment_core::entities::Comment;
use comment_core::Snowflake;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a comment on a content object
    ///
    /// Returns `Ok(None)` when the resolver does not recognize the target;
    /// a missing target is an expected outcome for the caller to handle,
    /// not an error. On success the comment is persisted together with its
    /// zeroed reaction and flag aggregates in one transaction.
    #[instrument(skip(self, content))]
    pub async fn create_comment(
        &self,
        content_type: &str,
        object_id: Snowflake,
        content: &str,
        user_id: Snowflake,
        parent_id: Option<Snowflake>,
    ) -> ServiceResult<Option<Comment>> {
        if content.trim().is_empty() {
            return Err(ServiceError::validation("comment content is empty"));
        }

        let Some(target) = self.ctx.resolver().resolve(content_type, object_id).await? else {
            return Ok(None);
        };

        let comment = match parent_id {
            None => Comment::new(
                self.ctx.generate_id(),
                user_id,
                &target,
                content.to_string(),
            ),
            Some(parent_id) => {
                let parent = self
                    .ctx
                    .comment_repo()
                    .find_by_id(parent_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Comment", parent_id.to_string()))?;

                // Threads are one level deep
                if parent.is_reply() {
                    return Err(ServiceError::validation("cannot reply to a reply"));
                }
                if parent.target() != target {
                    return Err(ServiceError::validation(
                        "parent comment belongs to a different content object",
                    ));
                }

                Comment::new_reply(
                    self.ctx.generate_id(),
                    user_id,
                    &target,
                    content.to_string(),
                    parent_id,
                )
            }
        };

        let reaction_id = self.ctx.generate_id();
        let flag_id = self.ctx.generate_id();
        self.ctx
            .comment_repo()
            .create(&comment, reaction_id, flag_id)
            .await?;

        info!(comment_id = %comment.id, user_id = %user_id, "Comment created");

        Ok(Some(comment))
    }

    /// Get a comment by ID
    ///
    /// Direct lookup returns hidden comments too.
    #[instrument(skip(self))]
    pub async fn get_comment(&self, id: Snowflake) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", id.to_string()))
    }

    /// List all visible comments
    #[instrument(skip(self))]
    pub async fn list_comments(&self) -> ServiceResult<Vec<Comment>> {
        let threshold = self.ctx.moderation().flags_allowed();
        Ok(self.ctx.comment_repo().list(threshold).await?)
    }

    /// List all visible top-level comments
    #[instrument(skip(self))]
    pub async fn list_parent_comments(&self) -> ServiceResult<Vec<Comment>> {
        let threshold = self.ctx.moderation().flags_allowed();
        Ok(self.ctx.comment_repo().list_parents(threshold).await?)
    }

    /// List visible comments on a content object
    #[instrument(skip(self))]
    pub async fn comments_for(
        &self,
        content_type: &str,
        object_id: Snowflake,
    ) -> ServiceResult<Vec<Comment>> {
        let threshold = self.ctx.moderation().flags_allowed();
        Ok(self
            .ctx
            .comment_repo()
            .list_by_object(content_type, object_id, threshold)
            .await?)
    }

    /// List visible top-level comments on a content object
    #[instrument(skip(self))]
    pub async fn parents_for(
        &self,
        content_type: &str,
        object_id: Snowflake,
    ) -> ServiceResult<Vec<Comment>> {
        let threshold = self.ctx.moderation().flags_allowed();
        Ok(self
            .ctx
            .comment_repo()
            .list_parents_by_object(content_type, object_id, threshold)
            .await?)
    }

    /// List visible replies to a comment
    #[instrument(skip(self))]
    pub async fn replies(&self, parent_id: Snowflake) -> ServiceResult<Vec<Comment>> {
        let threshold = self.ctx.moderation().flags_allowed();
        Ok(self
            .ctx
            .comment_repo()
            .list_replies(parent_id, threshold)
            .await?)
    }

    /// Edit a comment's content
    ///
    /// `edited_at` moves only when the stored text actually changes.
    #[instrument(skip(self, content))]
    pub async fn edit_content(&self, id: Snowflake, content: &str) -> ServiceResult<Comment> {
        if content.trim().is_empty() {
            return Err(ServiceError::validation("comment content is empty"));
        }

        let comment = self.ctx.comment_repo().update_content(id, content).await?;

        info!(comment_id = %id, "Comment edited");

        Ok(comment)
    }

    /// Delete a comment, cascading to its aggregates and instances
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.comment_repo().delete(id).await?;

        info!(comment_id = %id, "Comment deleted");

        Ok(())
    }
}
