//! Job review entities for jobdesk.

/// Record that a moderator reviewed a job posted by an employer.
///
/// Append-only audit log; the (moderator, job, employer) triple appears
/// at most once.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobReview {
    /// Unique row ID.
    pub id: i64,
    /// Reviewing moderator.
    pub moderator_ucid: i64,
    /// Reviewed job.
    pub job_id: i64,
    /// Employer that posted the job.
    pub employer_id: i64,
    /// Review timestamp.
    pub reviewed_at: String,
}

/// Data for recording a new job review.
#[derive(Debug, Clone, Copy)]
pub struct NewJobReview {
    /// Reviewing moderator.
    pub moderator_ucid: i64,
    /// Reviewed job.
    pub job_id: i64,
    /// Employer that posted the job.
    pub employer_id: i64,
}
