//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod flag;
mod reaction;

pub use comment::CommentModel;
pub use flag::{FlagInstanceModel, FlagModel};
pub use reaction::{ReactionInstanceModel, ReactionModel};
