//! Job application repository for jobdesk.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use super::types::Application;
use crate::{JobdeskError, Result};

/// Repository for job applications.
pub struct ApplicationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ApplicationRepository<'a> {
    /// Create a new ApplicationRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an application with status Submitted.
    ///
    /// A second application by the same student to the same job is a
    /// conflict.
    pub async fn create(&self, ucid: i64, job_id: i64, applied_on: NaiveDate) -> Result<Application> {
        let result = sqlx::query(
            "INSERT INTO applications (ucid, job_id, applied_on) VALUES (?, ?, ?)",
        )
        .bind(ucid)
        .bind(job_id)
        .bind(applied_on)
        .execute(self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                JobdeskError::Conflict("application".to_string())
            }
            _ => JobdeskError::Database(e.to_string()),
        })?;

        let id = result.last_insert_rowid();
        self.get(id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("application".to_string()))
    }

    /// Get an application by ID.
    pub async fn get(&self, id: i64) -> Result<Option<Application>> {
        let result = sqlx::query_as::<_, Application>(
            "SELECT id, ucid, job_id, status, applied_on FROM applications WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List applications for a job, oldest first.
    pub async fn list_for_job(&self, job_id: i64) -> Result<Vec<Application>> {
        let result = sqlx::query_as::<_, Application>(
            "SELECT id, ucid, job_id, status, applied_on
             FROM applications WHERE job_id = ? ORDER BY id",
        )
        .bind(job_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List applications submitted by a student, newest first.
    pub async fn list_for_applicant(&self, ucid: i64) -> Result<Vec<Application>> {
        let result = sqlx::query_as::<_, Application>(
            "SELECT id, ucid, job_id, status, applied_on
             FROM applications WHERE ucid = ? ORDER BY id DESC",
        )
        .bind(ucid)
        .fetch_all(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Count applications for a job.
    pub async fn count_for_job(&self, job_id: i64) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM applications WHERE job_id = ?")
            .bind(job_id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(count.0)
    }
}
