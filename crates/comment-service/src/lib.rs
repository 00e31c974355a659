//! # comment-service
//!
//! Application layer containing the comment, reaction, and flag services.

pub mod services;

pub use services::{
    CommentService, FlagService, ReactionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
