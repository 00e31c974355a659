//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer
//! provides the implementation. Counter synchronization is part of the
//! contract: any method that creates or deletes an instance row must apply
//! the matching aggregate counter change in the same transaction, and no
//! update method may touch a counter.

use async_trait::async_trait;

use crate::entities::{Comment, Flag, FlagInstance, Reaction, ReactionInstance};
use crate::error::DomainError;
use crate::value_objects::{FlagReason, ReactionType, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a comment by ID
    ///
    /// Direct lookup bypasses the flagged-comment filter: hidden comments
    /// are still retrievable by ID.
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// List all visible comments (parents and replies)
    ///
    /// `flags_allowed` is the active hiding threshold; comments whose flag
    /// count has reached it are excluded. A non-positive threshold disables
    /// filtering. The same applies to every other listing method.
    async fn list(&self, flags_allowed: i32) -> RepoResult<Vec<Comment>>;

    /// List all visible top-level comments
    async fn list_parents(&self, flags_allowed: i32) -> RepoResult<Vec<Comment>>;

    /// List all visible comments for a content object
    async fn list_by_object(
        &self,
        content_type: &str,
        object_id: Snowflake,
        flags_allowed: i32,
    ) -> RepoResult<Vec<Comment>>;

    /// List visible top-level comments for a content object
    async fn list_parents_by_object(
        &self,
        content_type: &str,
        object_id: Snowflake,
        flags_allowed: i32,
    ) -> RepoResult<Vec<Comment>>;

    /// List visible replies to a comment
    async fn list_replies(&self, parent_id: Snowflake, flags_allowed: i32)
        -> RepoResult<Vec<Comment>>;

    /// Persist a comment together with its zeroed reaction and flag aggregates
    ///
    /// The three inserts are one transaction: a comment must never exist
    /// without exactly one reaction and one flag.
    async fn create(
        &self,
        comment: &Comment,
        reaction_id: Snowflake,
        flag_id: Snowflake,
    ) -> RepoResult<()>;

    /// Update comment content
    ///
    /// Bumps `edited_at` only when the stored content actually changes.
    /// Returns the updated comment.
    async fn update_content(&self, id: Snowflake, content: &str) -> RepoResult<Comment>;

    /// Delete a comment, cascading to its aggregates and their instances
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Get the reaction aggregate for a comment
    async fn find_by_comment(&self, comment_id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// Get a user's reaction instance, if any
    async fn find_instance(
        &self,
        reaction_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<ReactionInstance>>;

    /// Create an instance and increment the matching counter (one transaction)
    ///
    /// A second instance for the same (reaction, user) pair fails with
    /// [`DomainError::ReactionAlreadyExists`].
    async fn create_instance(&self, instance: &ReactionInstance) -> RepoResult<()>;

    /// Delete a user's instance and decrement the matching counter (one
    /// transaction). Returns the removed type, or `None` if nothing existed.
    async fn delete_instance(
        &self,
        reaction_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<ReactionType>>;

    /// Replace a user's instance with one of a different type
    ///
    /// Delete-then-create in a single transaction: the old counter goes
    /// down by one and the new counter up by one.
    async fn replace_instance(&self, instance: &ReactionInstance) -> RepoResult<()>;

    /// Directly edit an instance's type without touching any counter
    ///
    /// Count synchronization fires on create and delete only, never update.
    async fn update_instance_type(
        &self,
        reaction_id: Snowflake,
        user_id: Snowflake,
        reaction_type: ReactionType,
    ) -> RepoResult<()>;

    /// Atomically add one to a counter
    async fn increment(&self, reaction_id: Snowflake, reaction_type: ReactionType)
        -> RepoResult<()>;

    /// Atomically subtract one from a counter, never going below zero
    async fn decrement(&self, reaction_id: Snowflake, reaction_type: ReactionType)
        -> RepoResult<()>;
}

// ============================================================================
// Flag Repository
// ============================================================================

#[async_trait]
pub trait FlagRepository: Send + Sync {
    /// Get the flag aggregate for a comment
    async fn find_by_comment(&self, comment_id: Snowflake) -> RepoResult<Option<Flag>>;

    /// Get a user's flag instance, if any
    async fn find_instance(
        &self,
        flag_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<FlagInstance>>;

    /// Create an instance and increment the count (one transaction)
    ///
    /// A second instance for the same (flag, user) pair fails with
    /// [`DomainError::FlagAlreadyExists`].
    async fn create_instance(&self, instance: &FlagInstance) -> RepoResult<()>;

    /// Delete a user's instance and decrement the count (one transaction)
    ///
    /// Returns `true` if an instance was removed.
    async fn delete_instance(&self, flag_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Directly edit an instance's reason/info without touching the count
    async fn update_instance(
        &self,
        flag_id: Snowflake,
        user_id: Snowflake,
        reason: FlagReason,
        info: Option<&str>,
    ) -> RepoResult<()>;

    /// Delete all instances and reset the count to zero (one transaction)
    async fn clear_instances(&self, flag_id: Snowflake) -> RepoResult<u64>;

    /// Atomically add one to the count
    async fn increment(&self, flag_id: Snowflake) -> RepoResult<()>;

    /// Atomically subtract one from the count, never going below zero
    async fn decrement(&self, flag_id: Snowflake) -> RepoResult<()>;
}
