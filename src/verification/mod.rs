//! Verification module for jobdesk.
//!
//! This module provides the verification queue workflow:
//! - Registration-time enqueue of pending applicant/employer checks
//! - Promotion-time auto-approval of the promoted student
//! - Moderator decisions over the pending queues
//! - Current-status accessors over the append-only history

mod applicant_repository;
mod employer_repository;
mod service;
mod types;

pub use applicant_repository::ApplicantVerificationRepository;
pub use employer_repository::EmployerVerificationRepository;
pub use service::VerificationService;
pub use types::{
    ApplicantVerification, AutoApprovalOutcome, Decision, EmployerVerification, EnqueueOutcome,
    NewApplicantVerification, NewEmployerVerification,
};
