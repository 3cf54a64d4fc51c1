//! Moderation assignment service for jobdesk.
//!
//! Records which moderator reviewed which job. The log is append-only;
//! there is no update or delete.

use crate::db::Database;
use crate::identity::{EmployerRepository, ModeratorRepository};
use crate::jobs::JobRepository;
use crate::{JobdeskError, Result};

use super::repository::JobReviewRepository;
use super::types::{JobReview, NewJobReview};

/// Service for moderation assignment operations.
pub struct ModerationService<'a> {
    db: &'a Database,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Record that a moderator reviewed a job posted by an employer.
    ///
    /// All three referents must exist, the job must belong to the named
    /// employer, and the triple must not already be recorded.
    pub async fn record_review(
        &self,
        moderator_ucid: i64,
        job_id: i64,
        employer_id: i64,
    ) -> Result<JobReview> {
        if !ModeratorRepository::new(self.db.pool())
            .exists(moderator_ucid)
            .await?
        {
            return Err(JobdeskError::NotFound("moderator".to_string()));
        }

        let job = JobRepository::new(self.db.pool())
            .get(job_id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("job".to_string()))?;

        if !EmployerRepository::new(self.db.pool())
            .exists(employer_id)
            .await?
        {
            return Err(JobdeskError::NotFound("employer".to_string()));
        }

        if job.employer_id != employer_id {
            return Err(JobdeskError::Validation(format!(
                "job {job_id} does not belong to employer {employer_id}"
            )));
        }

        JobReviewRepository::new(self.db.pool())
            .create(&NewJobReview {
                moderator_ucid,
                job_id,
                employer_id,
            })
            .await
    }

    /// List reviews of a job, oldest first.
    pub async fn reviews_for_job(&self, job_id: i64) -> Result<Vec<JobReview>> {
        if !JobRepository::new(self.db.pool()).exists(job_id).await? {
            return Err(JobdeskError::NotFound("job".to_string()));
        }
        JobReviewRepository::new(self.db.pool())
            .list_for_job(job_id)
            .await
    }

    /// List reviews made by a moderator, oldest first.
    pub async fn reviews_by_moderator(&self, moderator_ucid: i64) -> Result<Vec<JobReview>> {
        if !ModeratorRepository::new(self.db.pool())
            .exists(moderator_ucid)
            .await?
        {
            return Err(JobdeskError::NotFound("moderator".to_string()));
        }
        JobReviewRepository::new(self.db.pool())
            .list_for_moderator(moderator_ucid)
            .await
    }
}
