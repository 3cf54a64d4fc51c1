//! Verification queue entities for jobdesk.
//!
//! Verification rows are the audit history of moderator decisions about
//! applicants and employers. Rows are never deleted; a row is only mutated
//! when its Pending state is resolved.

use chrono::NaiveDate;

use crate::identity::VerificationStatus;

/// One applicant verification event.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApplicantVerification {
    /// Unique row ID.
    pub id: i64,
    /// Moderator assigned to (or who made) the decision.
    pub moderator_ucid: i64,
    /// Student under verification.
    pub applicant_ucid: i64,
    /// Decision state of this row.
    pub status: VerificationStatus,
    /// Date the row was created or resolved.
    pub verified_on: NaiveDate,
}

/// Data for creating a new applicant verification row.
#[derive(Debug, Clone)]
pub struct NewApplicantVerification {
    /// Moderator assigned to the decision.
    pub moderator_ucid: i64,
    /// Student under verification.
    pub applicant_ucid: i64,
    /// Initial decision state.
    pub status: VerificationStatus,
    /// Event date.
    pub verified_on: NaiveDate,
}

/// One employer verification event, symmetric with the applicant side.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmployerVerification {
    /// Unique row ID.
    pub id: i64,
    /// Moderator assigned to (or who made) the decision.
    pub moderator_ucid: i64,
    /// Employer under verification.
    pub employer_id: i64,
    /// Decision state of this row.
    pub status: VerificationStatus,
    /// Date the row was created or resolved.
    pub verified_on: NaiveDate,
}

/// Data for creating a new employer verification row.
#[derive(Debug, Clone)]
pub struct NewEmployerVerification {
    /// Moderator assigned to the decision.
    pub moderator_ucid: i64,
    /// Employer under verification.
    pub employer_id: i64,
    /// Initial decision state.
    pub status: VerificationStatus,
    /// Event date.
    pub verified_on: NaiveDate,
}

/// A moderator's resolution of a pending verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Clear the subject.
    Approve,
    /// Decline the subject.
    Reject,
}

impl Decision {
    /// The verification status this decision resolves to.
    pub fn status(&self) -> VerificationStatus {
        match self {
            Decision::Approve => VerificationStatus::Approved,
            Decision::Reject => VerificationStatus::Rejected,
        }
    }
}

/// Result of a registration-time verification enqueue.
///
/// Enqueue is best-effort: the caller logs the outcome and completes the
/// registration either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueOutcome {
    /// A pending row was created and assigned to a moderator.
    Enqueued {
        /// The created verification row.
        verification_id: i64,
        /// Moderator the check was assigned to.
        moderator_ucid: i64,
    },
    /// No moderator is available; the subject stays unverified with no
    /// queue entry.
    NoModerator,
}

/// Result of the promotion-time auto-approval trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoApprovalOutcome {
    /// An existing pending row was resolved to Approved in place.
    ResolvedPending {
        /// The resolved verification row.
        verification_id: i64,
    },
    /// No pending row existed; a new Approved row was inserted, verified
    /// by a moderator other than the subject.
    InsertedApproved {
        /// The created verification row.
        verification_id: i64,
        /// Moderator recorded as the verifier.
        moderator_ucid: i64,
    },
    /// The subject already has an Approved row; nothing was changed.
    AlreadyApproved,
    /// No independent moderator exists; the subject stays Pending.
    LeftPending,
}
