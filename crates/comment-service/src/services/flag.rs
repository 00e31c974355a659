//! Flag service
//!
//! User flagging, the auto-hide threshold check, and the moderation paths
//! that edit or clear flags.

use comment_core::entities::{clean_flag_request, Flag, FlagInstance, FlagOutcome};
use comment_core::error::DomainError;
use comment_core::Snowflake;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Flag service
pub struct FlagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FlagService<'a> {
    /// Create a new FlagService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the flag aggregate for a comment
    #[instrument(skip(self))]
    pub async fn flag_for(&self, comment_id: Snowflake) -> ServiceResult<Flag> {
        self.ctx
            .flag_repo()
            .find_by_comment(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Flag", comment_id.to_string()))
    }

    /// Whether the comment has collected enough flags to be hidden
    ///
    /// The threshold is read from the live moderation settings at call
    /// time, so changing it reclassifies existing comments immediately.
    #[instrument(skip(self))]
    pub async fn is_flagged(&self, comment_id: Snowflake) -> ServiceResult<bool> {
        let flag = self.flag_for(comment_id).await?;
        Ok(flag.is_flagged(self.ctx.moderation().flags_allowed()))
    }

    /// Toggle a user's flag on a comment
    ///
    /// A request with a reason flags the comment; a request without one
    /// removes the user's existing flag. Re-flagging and unflagging a
    /// never-flagged comment are both validation errors, reported through
    /// the same channel as a malformed reason.
    #[instrument(skip(self, reason, info))]
    pub async fn set_flag(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
        reason: Option<&str>,
        info: Option<&str>,
    ) -> ServiceResult<FlagOutcome> {
        let flag = self.flag_for(comment_id).await?;

        if reason.is_some() {
            // Validate the request before looking at instance state
            let (reason, info) = clean_flag_request(reason, info)?;

            if self
                .ctx
                .flag_repo()
                .find_instance(flag.id, user_id)
                .await?
                .is_some()
            {
                return Err(DomainError::AlreadyFlagged.into());
            }

            let instance =
                FlagInstance::new(self.ctx.generate_id(), flag.id, user_id, reason, info);
            self.ctx.flag_repo().create_instance(&instance).await?;

            info!(comment_id = %comment_id, user_id = %user_id, reason = %reason, "Comment flagged");

            Ok(FlagOutcome::Flagged)
        } else {
            let removed = self.ctx.flag_repo().delete_instance(flag.id, user_id).await?;
            if !removed {
                return Err(DomainError::NotFlagged.into());
            }

            info!(comment_id = %comment_id, user_id = %user_id, "Comment unflagged");

            Ok(FlagOutcome::Unflagged)
        }
    }

    /// Edit a user's existing flag without touching the count
    ///
    /// Re-runs request validation; the user must have flagged the comment.
    #[instrument(skip(self, reason, info))]
    pub async fn update_flag(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
        reason: Option<&str>,
        info: Option<&str>,
    ) -> ServiceResult<()> {
        let (reason, info) = clean_flag_request(reason, info)?;

        let flag = self.flag_for(comment_id).await?;
        if self
            .ctx
            .flag_repo()
            .find_instance(flag.id, user_id)
            .await?
            .is_none()
        {
            return Err(DomainError::NotFlagged.into());
        }

        self.ctx
            .flag_repo()
            .update_instance(flag.id, user_id, reason, info.as_deref())
            .await?;

        Ok(())
    }

    /// Remove every flag from a comment, un-hiding it
    ///
    /// Returns the number of removed flag instances.
    #[instrument(skip(self))]
    pub async fn clear_flags(&self, comment_id: Snowflake) -> ServiceResult<u64> {
        let flag = self.flag_for(comment_id).await?;
        let cleared = self.ctx.flag_repo().clear_instances(flag.id).await?;

        info!(comment_id = %comment_id, cleared, "Flags cleared");

        Ok(cleared)
    }

    /// Author of a (possibly hidden) comment, for moderation review
    #[instrument(skip(self))]
    pub async fn comment_author(&self, comment_id: Snowflake) -> ServiceResult<Snowflake> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;
        Ok(comment.user_id)
    }
}
