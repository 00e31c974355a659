//! Business logic services
//!
//! Validation and orchestration of domain operations. Each service borrows
//! the shared [`ServiceContext`] and delegates persistence to the
//! repository traits.

pub mod comment;
pub mod context;
pub mod error;
pub mod flag;
pub mod reaction;

pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use flag::FlagService;
pub use reaction::ReactionService;
