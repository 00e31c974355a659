//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! comment-core. Each repository handles database operations for one
//! aggregate; instance create/delete methods bundle the counter update
//! into the same transaction.

mod comment;
mod error;
mod flag;
mod reaction;

pub use comment::PgCommentRepository;
pub use flag::PgFlagRepository;
pub use reaction::PgReactionRepository;
