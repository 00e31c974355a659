//! Content reference - a resolved pointer to the item being commented on

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Snowflake;

/// A resolved reference to a content object (e.g. a blog post)
///
/// Produced by a [`crate::traits::ContentResolver`]; the commenting
/// subsystem never inspects the target beyond this pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRef {
    /// Type label of the target model, e.g. "post"
    pub content_type: String,
    /// Primary key of the target object
    pub object_id: Snowflake,
}

impl ContentRef {
    /// Create a new ContentRef
    pub fn new(content_type: impl Into<String>, object_id: Snowflake) -> Self {
        Self {
            content_type: content_type.into(),
            object_id,
        }
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.content_type, self.object_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let content = ContentRef::new("post", Snowflake::new(7));
        assert_eq!(content.to_string(), "post:7");
    }
}
