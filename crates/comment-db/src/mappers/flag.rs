//! Flag entity <-> model mappers

use comment_core::entities::{Flag, FlagInstance};
use comment_core::error::DomainError;
use comment_core::value_objects::{FlagReason, Snowflake};

use crate::models::{FlagInstanceModel, FlagModel};

impl From<FlagModel> for Flag {
    fn from(model: FlagModel) -> Self {
        Flag {
            id: Snowflake::new(model.id),
            comment_id: Snowflake::new(model.comment_id),
            count: model.count,
        }
    }
}

// Fallible: the stored smallint has to parse into the closed enum
impl TryFrom<FlagInstanceModel> for FlagInstance {
    type Error = DomainError;

    fn try_from(model: FlagInstanceModel) -> Result<Self, Self::Error> {
        Ok(FlagInstance {
            id: Snowflake::new(model.id),
            flag_id: Snowflake::new(model.flag_id),
            user_id: Snowflake::new(model.user_id),
            reason: FlagReason::try_from(model.reason)?,
            info: model.info,
            flagged_at: model.flagged_at,
        })
    }
}
