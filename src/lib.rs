//! jobdesk - Job Board Verification & Moderation Backend
//!
//! A job-board backend built around its verification workflow: students
//! and employers register with Pending status, moderators work the
//! verification queues, promoted students are auto-approved, and job
//! reviews are recorded in an append-only audit log.

pub mod config;
pub mod db;
pub mod error;
pub mod identity;
pub mod jobs;
pub mod logging;
pub mod moderation;
pub mod verification;

pub use config::Config;
pub use db::Database;
pub use error::{JobdeskError, Result};
pub use identity::{
    hash_password, promote_to_moderator, register, verify_password, Account, AccountRole,
    Applicant, Employer, Moderator, PasswordError, Promotion, RegisteredProfile, Registration,
    RegistrationError, RegistrationProfile, RegistrationRequest, Student, ValidationError,
    VerificationStatus,
};
pub use jobs::{Application, ApplicationStatus, Job, JobService, NewJob};
pub use moderation::{JobReview, ModerationService};
pub use verification::{
    ApplicantVerification, AutoApprovalOutcome, Decision, EmployerVerification, EnqueueOutcome,
    VerificationService,
};
