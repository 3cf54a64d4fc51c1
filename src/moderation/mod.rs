//! Moderation module for jobdesk.
//!
//! This module provides the job review audit log: append-only records of
//! which moderator reviewed which job, unique per (moderator, job,
//! employer) triple.

mod repository;
mod service;
mod types;

pub use repository::JobReviewRepository;
pub use service::ModerationService;
pub use types::{JobReview, NewJobReview};
