//! Reaction service
//!
//! Like/dislike toggling and counter queries. `set_reaction` validates the
//! raw type before looking at instance state, so an invalid request fails
//! the same way whether or not the user already reacted.

use comment_core::entities::{Reaction, ReactionInstance, ReactionToggle};
use comment_core::value_objects::ReactionType;
use comment_core::Snowflake;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the reaction aggregate for a comment
    #[instrument(skip(self))]
    pub async fn reaction_for(&self, comment_id: Snowflake) -> ServiceResult<Reaction> {
        self.ctx
            .reaction_repo()
            .find_by_comment(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Reaction", comment_id.to_string()))
    }

    /// Current like count for a comment
    pub async fn likes(&self, comment_id: Snowflake) -> ServiceResult<i32> {
        Ok(self.reaction_for(comment_id).await?.likes)
    }

    /// Current dislike count for a comment
    pub async fn dislikes(&self, comment_id: Snowflake) -> ServiceResult<i32> {
        Ok(self.reaction_for(comment_id).await?.dislikes)
    }

    /// The type a user currently has on a comment, if any
    #[instrument(skip(self))]
    pub async fn user_reaction(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<Option<ReactionType>> {
        let reaction = self.reaction_for(comment_id).await?;
        let instance = self
            .ctx
            .reaction_repo()
            .find_instance(reaction.id, user_id)
            .await?;
        Ok(instance.map(|i| i.reaction_type))
    }

    /// Directly create a reaction instance for a user
    ///
    /// Unlike [`set_reaction`](Self::set_reaction) this does not toggle: if
    /// the user already reacted the uniqueness conflict propagates to the
    /// caller as [`comment_core::DomainError::ReactionAlreadyExists`].
    #[instrument(skip(self))]
    pub async fn create_reaction_instance(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
        raw_type: &str,
    ) -> ServiceResult<ReactionInstance> {
        let reaction_type = ReactionType::clean(raw_type)?;
        let reaction = self.reaction_for(comment_id).await?;

        let instance =
            ReactionInstance::new(self.ctx.generate_id(), reaction.id, user_id, reaction_type);
        self.ctx.reaction_repo().create_instance(&instance).await?;

        info!(comment_id = %comment_id, user_id = %user_id, reaction_type = %reaction_type, "Reaction added");

        Ok(instance)
    }

    /// Toggle a user's reaction on a comment
    ///
    /// No existing instance: one is created. Same type again: the instance
    /// is removed. Different type: the instance is replaced. Counters move
    /// with the instance rows in every case. Returns the updated aggregate.
    #[instrument(skip(self))]
    pub async fn set_reaction(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
        raw_type: &str,
    ) -> ServiceResult<Reaction> {
        // Validate before touching state
        let requested = ReactionType::clean(raw_type)?;

        let reaction = self.reaction_for(comment_id).await?;
        let existing = self
            .ctx
            .reaction_repo()
            .find_instance(reaction.id, user_id)
            .await?
            .map(|i| i.reaction_type);

        match ReactionToggle::plan(existing, requested) {
            ReactionToggle::Add => {
                let instance =
                    ReactionInstance::new(self.ctx.generate_id(), reaction.id, user_id, requested);
                self.ctx.reaction_repo().create_instance(&instance).await?;
                info!(comment_id = %comment_id, user_id = %user_id, reaction_type = %requested, "Reaction added");
            }
            ReactionToggle::Remove => {
                self.ctx
                    .reaction_repo()
                    .delete_instance(reaction.id, user_id)
                    .await?;
                info!(comment_id = %comment_id, user_id = %user_id, reaction_type = %requested, "Reaction removed");
            }
            ReactionToggle::Switch { from } => {
                let instance =
                    ReactionInstance::new(self.ctx.generate_id(), reaction.id, user_id, requested);
                self.ctx.reaction_repo().replace_instance(&instance).await?;
                info!(comment_id = %comment_id, user_id = %user_id, from = %from, to = %requested, "Reaction switched");
            }
        }

        self.reaction_for(comment_id).await
    }

    /// Directly edit a user's instance type without moving any counter
    ///
    /// Counter synchronization fires on create and delete only; this is
    /// the escape hatch for moderation tooling that edits rows in place.
    #[instrument(skip(self))]
    pub async fn edit_reaction_type(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
        reaction_type: ReactionType,
    ) -> ServiceResult<()> {
        let reaction = self.reaction_for(comment_id).await?;
        if self
            .ctx
            .reaction_repo()
            .find_instance(reaction.id, user_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found(
                "Reaction instance",
                user_id.to_string(),
            ));
        }
        self.ctx
            .reaction_repo()
            .update_instance_type(reaction.id, user_id, reaction_type)
            .await?;
        Ok(())
    }
}
