//! Reaction entities - per-comment like/dislike aggregate and per-user instances

use chrono::{DateTime, Utc};

use crate::value_objects::{ReactionType, Snowflake};

/// Reaction aggregate, paired 1:1 with a comment
///
/// `likes` and `dislikes` are cached counters; the database keeps them in
/// sync with the live instance rows on every instance create/delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Snowflake,
    pub comment_id: Snowflake,
    pub likes: i32,
    pub dislikes: i32,
}

impl Reaction {
    /// Create a fresh aggregate with zero counts
    pub fn new(id: Snowflake, comment_id: Snowflake) -> Self {
        Self {
            id,
            comment_id,
            likes: 0,
            dislikes: 0,
        }
    }

    /// Counter value for the given reaction type
    #[inline]
    pub fn count(&self, reaction_type: ReactionType) -> i32 {
        match reaction_type {
            ReactionType::Like => self.likes,
            ReactionType::Dislike => self.dislikes,
        }
    }
}

/// A single user's reaction on a comment
///
/// At most one instance exists per (reaction, user) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionInstance {
    pub id: Snowflake,
    pub reaction_id: Snowflake,
    pub user_id: Snowflake,
    pub reaction_type: ReactionType,
    pub reacted_at: DateTime<Utc>,
}

impl ReactionInstance {
    /// Create a new instance
    pub fn new(
        id: Snowflake,
        reaction_id: Snowflake,
        user_id: Snowflake,
        reaction_type: ReactionType,
    ) -> Self {
        Self {
            id,
            reaction_id,
            user_id,
            reaction_type,
            reacted_at: Utc::now(),
        }
    }
}

/// Planned effect of a set-reaction toggle
///
/// Pure decision over the user's current instance and the requested type;
/// the repository executes the plan transactionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionToggle {
    /// No instance yet: create one, counter +1
    Add,
    /// Same type requested again: remove the instance, counter -1
    Remove,
    /// Different type requested: replace, old counter -1, new counter +1
    Switch { from: ReactionType },
}

impl ReactionToggle {
    /// Decide what a toggle request does given the user's current reaction
    pub fn plan(existing: Option<ReactionType>, requested: ReactionType) -> Self {
        match existing {
            None => Self::Add,
            Some(current) if current == requested => Self::Remove,
            Some(current) => Self::Switch { from: current },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_aggregate_starts_at_zero() {
        let reaction = Reaction::new(Snowflake::new(1), Snowflake::new(2));
        assert_eq!(reaction.likes, 0);
        assert_eq!(reaction.dislikes, 0);
        assert_eq!(reaction.count(ReactionType::Like), 0);
        assert_eq!(reaction.count(ReactionType::Dislike), 0);
    }

    #[test]
    fn test_count_selects_matching_counter() {
        let reaction = Reaction {
            id: Snowflake::new(1),
            comment_id: Snowflake::new(2),
            likes: 3,
            dislikes: 1,
        };
        assert_eq!(reaction.count(ReactionType::Like), 3);
        assert_eq!(reaction.count(ReactionType::Dislike), 1);
    }

    #[test]
    fn test_toggle_plan_add() {
        assert_eq!(
            ReactionToggle::plan(None, ReactionType::Like),
            ReactionToggle::Add
        );
    }

    #[test]
    fn test_toggle_plan_remove_on_same_type() {
        assert_eq!(
            ReactionToggle::plan(Some(ReactionType::Like), ReactionType::Like),
            ReactionToggle::Remove
        );
        assert_eq!(
            ReactionToggle::plan(Some(ReactionType::Dislike), ReactionType::Dislike),
            ReactionToggle::Remove
        );
    }

    #[test]
    fn test_toggle_plan_switch_on_other_type() {
        assert_eq!(
            ReactionToggle::plan(Some(ReactionType::Like), ReactionType::Dislike),
            ReactionToggle::Switch {
                from: ReactionType::Like
            }
        );
    }
}
