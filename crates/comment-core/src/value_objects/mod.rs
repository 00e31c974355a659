//! Value objects - immutable types that represent domain concepts

mod content_ref;
mod flag_reason;
mod reaction_type;
mod snowflake;

pub use content_ref::ContentRef;
pub use flag_reason::FlagReason;
pub use reaction_type::ReactionType;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
