//! # comment-core
//!
//! Domain layer for the commenting subsystem: entities, value objects,
//! repository traits, and domain errors. This crate has zero dependencies
//! on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, Flag, FlagInstance, FlagOutcome, Reaction, ReactionInstance, ReactionToggle,
    clean_flag_request,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, ContentResolver, FlagRepository, ReactionRepository, RepoResult,
};
pub use value_objects::{
    ContentRef, FlagReason, ReactionType, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
