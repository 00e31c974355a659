//! Ports - traits the domain layer needs implemented by the outside world

mod repositories;
mod resolver;

pub use repositories::{CommentRepository, FlagRepository, ReactionRepository, RepoResult};
pub use resolver::ContentResolver;
