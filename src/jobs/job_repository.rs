//! Job posting repository for jobdesk.

use sqlx::SqlitePool;

use super::types::{Job, NewJob};
use crate::{JobdeskError, Result};

/// Repository for job postings.
pub struct JobRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> JobRepository<'a> {
    /// Create a new JobRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new job posting.
    ///
    /// Returns the created job with the assigned ID.
    pub async fn create(&self, new_job: &NewJob) -> Result<Job> {
        let result = sqlx::query(
            "INSERT INTO jobs (employer_id, title, description, salary, location, deadline)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(new_job.employer_id)
        .bind(&new_job.title)
        .bind(&new_job.description)
        .bind(new_job.salary)
        .bind(&new_job.location)
        .bind(new_job.deadline)
        .execute(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get(id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("job".to_string()))
    }

    /// Get a job by ID.
    pub async fn get(&self, id: i64) -> Result<Option<Job>> {
        let result = sqlx::query_as::<_, Job>(
            "SELECT id, employer_id, title, description, salary, location, deadline, created_at
             FROM jobs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Check if a job exists.
    pub async fn exists(&self, id: i64) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM jobs WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(exists.0)
    }

    /// List jobs posted by an employer, newest first.
    pub async fn list_by_employer(&self, employer_id: i64) -> Result<Vec<Job>> {
        let result = sqlx::query_as::<_, Job>(
            "SELECT id, employer_id, title, description, salary, location, deadline, created_at
             FROM jobs WHERE employer_id = ? ORDER BY id DESC",
        )
        .bind(employer_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List all jobs, newest first.
    pub async fn list_all(&self) -> Result<Vec<Job>> {
        let result = sqlx::query_as::<_, Job>(
            "SELECT id, employer_id, title, description, salary, location, deadline, created_at
             FROM jobs ORDER BY id DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Count all jobs.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs")
            .fetch_one(self.pool)
            .await
            .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(count.0)
    }
}
