//! # comment-db
//!
//! Database layer implementing the repository traits with PostgreSQL via
//! SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository
//! traits defined in `comment-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ model mappers
//! - Repository implementations, including the counter-synchronization
//!   transactions that keep aggregate counts equal to their live instance
//!   rows
//!
//! ## Usage
//!
//! ```rust,ignore
//! use comment_db::pool::{create_pool, DatabaseConfig};
//! use comment_db::{run_migrations, PgCommentRepository};
//! use comment_core::traits::CommentRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let comment_repo = PgCommentRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgCommentRepository, PgFlagRepository, PgReactionRepository};
