//! Content resolver port - lookup of the objects comments attach to
//!
//! The commenting subsystem is generic over the host application's content
//! models. The host injects an implementation of this trait; test suites
//! use an in-memory registry.

use async_trait::async_trait;

use crate::value_objects::{ContentRef, Snowflake};
use super::repositories::RepoResult;

/// Resolves a (type label, primary key) pair to a content object
#[async_trait]
pub trait ContentResolver: Send + Sync {
    /// Resolve a content reference
    ///
    /// `Ok(None)` covers both an unrecognized type label and a missing
    /// object id; callers cannot and should not distinguish the two.
    async fn resolve(&self, content_type: &str, object_id: Snowflake)
        -> RepoResult<Option<ContentRef>>;
}
