//! Applicant repository for jobdesk.

use sqlx::SqlitePool;

use super::types::{Applicant, NewApplicant, VerificationStatus};
use crate::{JobdeskError, Result};

/// Repository for applicant profiles.
pub struct ApplicantRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ApplicantRepository<'a> {
    /// Create a new ApplicantRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new applicant profile with status Pending.
    pub async fn create(&self, new_applicant: &NewApplicant) -> Result<Applicant> {
        sqlx::query("INSERT INTO applicants (ucid, gpa, resume) VALUES (?, ?, ?)")
            .bind(new_applicant.ucid)
            .bind(new_applicant.gpa)
            .bind(&new_applicant.resume)
            .execute(self.pool)
            .await
            .map_err(|e| JobdeskError::Database(e.to_string()))?;

        self.get(new_applicant.ucid)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("applicant".to_string()))
    }

    /// Get an applicant by UCID.
    pub async fn get(&self, ucid: i64) -> Result<Option<Applicant>> {
        let result = sqlx::query_as::<_, Applicant>(
            "SELECT ucid, gpa, resume, verification_status
             FROM applicants WHERE ucid = ?",
        )
        .bind(ucid)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Set the denormalized verification status.
    ///
    /// Returns false when the student has no applicant profile. Promotion
    /// of a student without one is legal, so callers treat that as a no-op.
    pub async fn set_status(&self, ucid: i64, status: VerificationStatus) -> Result<bool> {
        let result = sqlx::query("UPDATE applicants SET verification_status = ? WHERE ucid = ?")
            .bind(status.as_str())
            .bind(ucid)
            .execute(self.pool)
            .await
            .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count all applicants.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM applicants")
            .fetch_one(self.pool)
            .await
            .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(count.0)
    }
}
