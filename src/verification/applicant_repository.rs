//! Applicant verification repository for jobdesk.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use super::types::{ApplicantVerification, NewApplicantVerification};
use crate::identity::VerificationStatus;
use crate::{JobdeskError, Result};

/// Repository for applicant verification history rows.
pub struct ApplicantVerificationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ApplicantVerificationRepository<'a> {
    /// Create a new ApplicantVerificationRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new verification row.
    pub async fn create(
        &self,
        new_verification: &NewApplicantVerification,
    ) -> Result<ApplicantVerification> {
        let result = sqlx::query(
            "INSERT INTO applicant_verifications (moderator_ucid, applicant_ucid, status, verified_on)
             VALUES (?, ?, ?, ?)",
        )
        .bind(new_verification.moderator_ucid)
        .bind(new_verification.applicant_ucid)
        .bind(new_verification.status.as_str())
        .bind(new_verification.verified_on)
        .execute(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get(id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("applicant verification".to_string()))
    }

    /// Get a verification row by ID.
    pub async fn get(&self, id: i64) -> Result<Option<ApplicantVerification>> {
        let result = sqlx::query_as::<_, ApplicantVerification>(
            "SELECT id, moderator_ucid, applicant_ucid, status, verified_on
             FROM applicant_verifications WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get the most recent verification row for an applicant.
    ///
    /// Rows from the same day are ordered by insertion, newest first.
    pub async fn latest_for(&self, applicant_ucid: i64) -> Result<Option<ApplicantVerification>> {
        let result = sqlx::query_as::<_, ApplicantVerification>(
            "SELECT id, moderator_ucid, applicant_ucid, status, verified_on
             FROM applicant_verifications WHERE applicant_ucid = ?
             ORDER BY verified_on DESC, id DESC LIMIT 1",
        )
        .bind(applicant_ucid)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get the most recent pending row for an applicant.
    pub async fn pending_for(&self, applicant_ucid: i64) -> Result<Option<ApplicantVerification>> {
        let result = sqlx::query_as::<_, ApplicantVerification>(
            "SELECT id, moderator_ucid, applicant_ucid, status, verified_on
             FROM applicant_verifications WHERE applicant_ucid = ? AND status = 'pending'
             ORDER BY id DESC LIMIT 1",
        )
        .bind(applicant_ucid)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Check if an applicant has any row with the given status.
    pub async fn has_with_status(
        &self,
        applicant_ucid: i64,
        status: VerificationStatus,
    ) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM applicant_verifications
             WHERE applicant_ucid = ? AND status = ?)",
        )
        .bind(applicant_ucid)
        .bind(status.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(exists.0)
    }

    /// List all pending verification rows, oldest first.
    pub async fn list_pending(&self) -> Result<Vec<ApplicantVerification>> {
        let result = sqlx::query_as::<_, ApplicantVerification>(
            "SELECT id, moderator_ucid, applicant_ucid, status, verified_on
             FROM applicant_verifications WHERE status = 'pending'
             ORDER BY id",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Resolve a pending row in place.
    ///
    /// Returns false when the row is missing or no longer pending; the
    /// status guard makes concurrent resolutions settle on a single winner.
    pub async fn resolve(
        &self,
        id: i64,
        status: VerificationStatus,
        date: NaiveDate,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE applicant_verifications SET status = ?, verified_on = ?
             WHERE id = ? AND status = 'pending'",
        )
        .bind(status.as_str())
        .bind(date)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count verification rows for an applicant.
    pub async fn count_for(&self, applicant_ucid: i64) -> Result<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM applicant_verifications WHERE applicant_ucid = ?")
                .bind(applicant_ucid)
                .fetch_one(self.pool)
                .await
                .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(count.0)
    }
}
