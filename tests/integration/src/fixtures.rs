//! Test fixtures and data generators
//!
//! Provides an in-memory content resolver and reusable test data.

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use comment_core::traits::{ContentResolver, RepoResult};
use comment_core::value_objects::{ContentRef, Snowflake};

/// Counter for unique test IDs
static COUNTER: AtomicI64 = AtomicI64::new(5_000_000);

/// Generate a unique test Snowflake ID
pub fn test_id() -> Snowflake {
    Snowflake::new(COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// In-memory content registry standing in for the host application's models
///
/// Resolves only the (type, id) pairs that were registered; everything else
/// comes back as `Ok(None)`, exactly like a real resolver facing a deleted
/// post or an unknown type label.
#[derive(Debug, Default)]
pub struct MemoryContentResolver {
    objects: Mutex<HashSet<(String, Snowflake)>>,
}

impl MemoryContentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a content object so the resolver recognizes it
    pub fn register(&self, content_type: &str, object_id: Snowflake) {
        self.objects
            .lock()
            .expect("resolver lock poisoned")
            .insert((content_type.to_string(), object_id));
    }

    /// Remove a content object, simulating its deletion in the host app
    pub fn unregister(&self, content_type: &str, object_id: Snowflake) {
        self.objects
            .lock()
            .expect("resolver lock poisoned")
            .remove(&(content_type.to_string(), object_id));
    }
}

#[async_trait]
impl ContentResolver for MemoryContentResolver {
    async fn resolve(
        &self,
        content_type: &str,
        object_id: Snowflake,
    ) -> RepoResult<Option<ContentRef>> {
        let known = self
            .objects
            .lock()
            .expect("resolver lock poisoned")
            .contains(&(content_type.to_string(), object_id));
        Ok(known.then(|| ContentRef::new(content_type, object_id)))
    }
}

/// A registered post plus two distinct users, the standard scenario setup
pub struct Scenario {
    pub content_type: &'static str,
    pub object_id: Snowflake,
    pub user_a: Snowflake,
    pub user_b: Snowflake,
}

impl Scenario {
    /// Register a fresh post on the resolver and mint two user IDs
    pub fn seed(resolver: &MemoryContentResolver) -> Self {
        let object_id = test_id();
        resolver.register("post", object_id);
        Self {
            content_type: "post",
            object_id,
            user_a: test_id(),
            user_b: test_id(),
        }
    }
}
