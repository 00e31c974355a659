//! Reaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub comment_id: i64,
    pub likes: i32,
    pub dislikes: i32,
}

/// Database model for the reaction_instances table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionInstanceModel {
    pub id: i64,
    pub reaction_id: i64,
    pub user_id: i64,
    pub reaction_type: i16,
    pub reacted_at: DateTime<Utc>,
}
