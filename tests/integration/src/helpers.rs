//! Test helpers for integration tests
//!
//! Assembles the full service stack (PostgreSQL repositories, resolver,
//! moderation settings) for end-to-end tests.

use std::sync::Arc;

use comment_common::ModerationSettings;
use comment_core::SnowflakeGenerator;
use comment_db::{
    run_migrations, PgCommentRepository, PgFlagRepository, PgPool, PgReactionRepository,
};
use comment_service::{ServiceContext, ServiceContextBuilder};

use crate::fixtures::MemoryContentResolver;

/// Connect to the test database, running migrations first
///
/// Returns `None` when `DATABASE_URL` is not set so tests can skip.
pub async fn get_test_pool() -> Option<PgPool> {
    let _ = dotenvy::dotenv();
    let database_url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPool::connect(&database_url).await.ok()?;
    run_migrations(&pool).await.ok()?;
    Some(pool)
}

/// Fully assembled test stack
pub struct TestStack {
    pub ctx: ServiceContext,
    pub resolver: Arc<MemoryContentResolver>,
    pub moderation: Arc<ModerationSettings>,
}

/// Build a service context over the given pool
///
/// Hiding starts disabled; tests flip the threshold through the returned
/// moderation handle.
pub fn build_stack(pool: PgPool) -> anyhow::Result<TestStack> {
    let resolver = Arc::new(MemoryContentResolver::new());
    let moderation = Arc::new(ModerationSettings::new(0));

    let ctx = ServiceContextBuilder::new()
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .flag_repo(Arc::new(PgFlagRepository::new(pool)))
        .resolver(resolver.clone())
        .moderation(moderation.clone())
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(0)))
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build context: {e}"))?;

    Ok(TestStack {
        ctx,
        resolver,
        moderation,
    })
}
