//! Comment entity - a threaded comment on a content object

use std::fmt;

use chrono::{DateTime, Utc};

use crate::value_objects::{ContentRef, Snowflake};

/// Comment entity
///
/// A comment either sits at the top level of its content object
/// (`parent_id` is `None`) or is a single-level reply to another comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub content_type: String,
    pub object_id: Snowflake,
    pub content: String,
    pub parent_id: Option<Snowflake>,
    pub posted_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Create a new top-level comment
    pub fn new(id: Snowflake, user_id: Snowflake, target: &ContentRef, content: String) -> Self {
        Self {
            id,
            user_id,
            content_type: target.content_type.clone(),
            object_id: target.object_id,
            content,
            parent_id: None,
            posted_at: Utc::now(),
            edited_at: None,
        }
    }

    /// Create a reply to an existing comment
    pub fn new_reply(
        id: Snowflake,
        user_id: Snowflake,
        target: &ContentRef,
        content: String,
        parent_id: Snowflake,
    ) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new(id, user_id, target, content)
        }
    }

    /// Check if this is a top-level comment
    #[inline]
    pub fn is_parent(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if this comment is a reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Check if the content has been edited since posting
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.edited_at.is_some()
    }

    /// The content object this comment belongs to
    pub fn target(&self) -> ContentRef {
        ContentRef::new(self.content_type.clone(), self.object_id)
    }

    /// Check if comment content is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    fn content_preview(&self) -> &str {
        let mut end = self.content.len().min(20);
        while !self.content.is_char_boundary(end) {
            end -= 1;
        }
        &self.content[..end]
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_parent() { "comment" } else { "reply" };
        write!(f, "{kind} by {}: {}", self.user_id, self.content_preview())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> ContentRef {
        ContentRef::new("post", Snowflake::new(10))
    }

    #[test]
    fn test_comment_creation() {
        let comment = Comment::new(
            Snowflake::new(1),
            Snowflake::new(100),
            &target(),
            "Hello, world!".to_string(),
        );
        assert!(comment.is_parent());
        assert!(!comment.is_reply());
        assert!(!comment.is_edited());
        assert!(!comment.is_empty());
        assert_eq!(comment.target(), target());
    }

    #[test]
    fn test_reply_creation() {
        let reply = Comment::new_reply(
            Snowflake::new(2),
            Snowflake::new(100),
            &target(),
            "A reply".to_string(),
            Snowflake::new(1),
        );
        assert!(!reply.is_parent());
        assert!(reply.is_reply());
        assert_eq!(reply.parent_id, Some(Snowflake::new(1)));
    }

    #[test]
    fn test_display_truncates_content() {
        let comment = Comment::new(
            Snowflake::new(1),
            Snowflake::new(100),
            &target(),
            "this content is longer than twenty characters".to_string(),
        );
        assert_eq!(comment.to_string(), "comment by 100: this content is long");

        let reply = Comment::new_reply(
            Snowflake::new(2),
            Snowflake::new(100),
            &target(),
            "short".to_string(),
            Snowflake::new(1),
        );
        assert_eq!(reply.to_string(), "reply by 100: short");
    }

    #[test]
    fn test_display_respects_char_boundaries() {
        let comment = Comment::new(
            Snowflake::new(1),
            Snowflake::new(100),
            &target(),
            "ééééééééééééééééééééé".to_string(),
        );
        // must not panic on a multi-byte boundary
        let _ = comment.to_string();
    }
}
