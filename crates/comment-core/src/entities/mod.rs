//! Domain entities - core business objects

mod comment;
mod flag;
mod reaction;

pub use comment::Comment;
pub use flag::{clean_flag_request, Flag, FlagInstance, FlagOutcome};
pub use reaction::{Reaction, ReactionInstance, ReactionToggle};
