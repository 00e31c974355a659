//! Service context - dependency container for services
//!
//! Holds the repositories, the content resolver, the live moderation
//! settings, and the ID generator shared by all services.

use std::sync::Arc;

use comment_common::ModerationSettings;
use comment_core::traits::{CommentRepository, ContentResolver, FlagRepository, ReactionRepository};
use comment_core::{Snowflake, SnowflakeGenerator};

/// Service context containing all dependencies
///
/// The host application assembles one of these (usually through
/// [`ServiceContextBuilder`]) and hands it to the services. The content
/// resolver is the only host-specific piece; everything else is owned by
/// the subsystem.
#[derive(Clone)]
pub struct ServiceContext {
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    flag_repo: Arc<dyn FlagRepository>,
    resolver: Arc<dyn ContentResolver>,
    moderation: Arc<ModerationSettings>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        flag_repo: Arc<dyn FlagRepository>,
        resolver: Arc<dyn ContentResolver>,
        moderation: Arc<ModerationSettings>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            comment_repo,
            reaction_repo,
            flag_repo,
            resolver,
            moderation,
            snowflake_generator,
        }
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the flag repository
    pub fn flag_repo(&self) -> &dyn FlagRepository {
        self.flag_repo.as_ref()
    }

    /// Get the content resolver
    pub fn resolver(&self) -> &dyn ContentResolver {
        self.resolver.as_ref()
    }

    /// Get the live moderation settings
    pub fn moderation(&self) -> &ModerationSettings {
        self.moderation.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("flags_allowed", &self.moderation.flags_allowed())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    flag_repo: Option<Arc<dyn FlagRepository>>,
    resolver: Option<Arc<dyn ContentResolver>>,
    moderation: Option<Arc<ModerationSettings>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            comment_repo: None,
            reaction_repo: None,
            flag_repo: None,
            resolver: None,
            moderation: None,
            snowflake_generator: None,
        }
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn flag_repo(mut self, repo: Arc<dyn FlagRepository>) -> Self {
        self.flag_repo = Some(repo);
        self
    }

    pub fn resolver(mut self, resolver: Arc<dyn ContentResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn moderation(mut self, moderation: Arc<ModerationSettings>) -> Self {
        self.moderation = Some(moderation);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is
    /// missing. Moderation settings default to hiding disabled.
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.flag_repo
                .ok_or_else(|| ServiceError::validation("flag_repo is required"))?,
            self.resolver
                .ok_or_else(|| ServiceError::validation("resolver is required"))?,
            self.moderation
                .unwrap_or_else(|| Arc::new(ModerationSettings::default())),
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
