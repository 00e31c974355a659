//! Comment entity <-> model mapper

use comment_core::entities::Comment;
use comment_core::value_objects::Snowflake;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            content_type: model.content_type,
            object_id: Snowflake::new(model.object_id),
            content: model.content,
            parent_id: model.parent_id.map(Snowflake::new),
            posted_at: model.posted_at,
            edited_at: model.edited_at,
        }
    }
}
