//! Job review repository for jobdesk.

use sqlx::SqlitePool;

use super::types::{JobReview, NewJobReview};
use crate::{JobdeskError, Result};

/// Repository for the job review audit log.
pub struct JobReviewRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> JobReviewRepository<'a> {
    /// Create a new JobReviewRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a review record.
    ///
    /// A duplicate (moderator, job, employer) triple is a conflict.
    pub async fn create(&self, new_review: &NewJobReview) -> Result<JobReview> {
        let result = sqlx::query(
            "INSERT INTO job_reviews (moderator_ucid, job_id, employer_id) VALUES (?, ?, ?)",
        )
        .bind(new_review.moderator_ucid)
        .bind(new_review.job_id)
        .bind(new_review.employer_id)
        .execute(self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                JobdeskError::Conflict("job review".to_string())
            }
            _ => JobdeskError::Database(e.to_string()),
        })?;

        let id = result.last_insert_rowid();
        self.get(id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("job review".to_string()))
    }

    /// Get a review record by ID.
    pub async fn get(&self, id: i64) -> Result<Option<JobReview>> {
        let result = sqlx::query_as::<_, JobReview>(
            "SELECT id, moderator_ucid, job_id, employer_id, reviewed_at
             FROM job_reviews WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Check if a (moderator, job, employer) triple is already recorded.
    pub async fn exists(&self, moderator_ucid: i64, job_id: i64, employer_id: i64) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM job_reviews
             WHERE moderator_ucid = ? AND job_id = ? AND employer_id = ?)",
        )
        .bind(moderator_ucid)
        .bind(job_id)
        .bind(employer_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(exists.0)
    }

    /// List reviews of a job, oldest first.
    pub async fn list_for_job(&self, job_id: i64) -> Result<Vec<JobReview>> {
        let result = sqlx::query_as::<_, JobReview>(
            "SELECT id, moderator_ucid, job_id, employer_id, reviewed_at
             FROM job_reviews WHERE job_id = ? ORDER BY id",
        )
        .bind(job_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List reviews made by a moderator, oldest first.
    pub async fn list_for_moderator(&self, moderator_ucid: i64) -> Result<Vec<JobReview>> {
        let result = sqlx::query_as::<_, JobReview>(
            "SELECT id, moderator_ucid, job_id, employer_id, reviewed_at
             FROM job_reviews WHERE moderator_ucid = ? ORDER BY id",
        )
        .bind(moderator_ucid)
        .fetch_all(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Count all review records.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM job_reviews")
            .fetch_one(self.pool)
            .await
            .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(count.0)
    }
}
