//! Reaction entity <-> model mappers

use comment_core::entities::{Reaction, ReactionInstance};
use comment_core::error::DomainError;
use comment_core::value_objects::{ReactionType, Snowflake};

use crate::models::{ReactionInstanceModel, ReactionModel};

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: Snowflake::new(model.id),
            comment_id: Snowflake::new(model.comment_id),
            likes: model.likes,
            dislikes: model.dislikes,
        }
    }
}

// Fallible: the stored smallint has to parse into the closed enum
impl TryFrom<ReactionInstanceModel> for ReactionInstance {
    type Error = DomainError;

    fn try_from(model: ReactionInstanceModel) -> Result<Self, Self::Error> {
        Ok(ReactionInstance {
            id: Snowflake::new(model.id),
            reaction_id: Snowflake::new(model.reaction_id),
            user_id: Snowflake::new(model.user_id),
            reaction_type: ReactionType::try_from(model.reaction_type)?,
            reacted_at: model.reacted_at,
        })
    }
}
