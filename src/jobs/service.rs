//! Job posting and application service for jobdesk.
//!
//! Posting and applying are the two access-control decisions that read the
//! denormalized verification status: only approved employers post, only
//! approved applicants apply.

use chrono::{Local, NaiveDate};

use crate::db::Database;
use crate::identity::{ApplicantRepository, EmployerRepository};
use crate::{JobdeskError, Result};

use super::application_repository::ApplicationRepository;
use super::job_repository::JobRepository;
use super::types::{Application, Job, NewJob};

/// Maximum length for job titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length for job descriptions (in characters).
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// Validate a job title.
fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(JobdeskError::Validation(
            "job title cannot be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(JobdeskError::Validation(format!(
            "job title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a job description.
fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(JobdeskError::Validation(
            "job description cannot be empty".to_string(),
        ));
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(JobdeskError::Validation(format!(
            "job description must be at most {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Today's date in local time.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Service for job posting and application operations.
pub struct JobService<'a> {
    db: &'a Database,
}

impl<'a> JobService<'a> {
    /// Create a new JobService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Post a new job.
    ///
    /// Only employers whose verification status is Approved may post.
    pub async fn post_job(&self, new_job: &NewJob) -> Result<Job> {
        validate_title(&new_job.title)?;
        validate_description(&new_job.description)?;
        if let Some(salary) = new_job.salary {
            if !salary.is_finite() || salary < 0.0 {
                return Err(JobdeskError::Validation(
                    "salary must be non-negative".to_string(),
                ));
            }
        }

        let employer = EmployerRepository::new(self.db.pool())
            .get(new_job.employer_id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("employer".to_string()))?;

        if !employer.verification_status.is_approved() {
            return Err(JobdeskError::Permission(
                "employer is not verified".to_string(),
            ));
        }

        JobRepository::new(self.db.pool()).create(new_job).await
    }

    /// Apply to a job.
    ///
    /// Only applicants whose verification status is Approved may apply,
    /// at most once per job, and only before the deadline.
    pub async fn apply(&self, ucid: i64, job_id: i64) -> Result<Application> {
        let applicant = ApplicantRepository::new(self.db.pool())
            .get(ucid)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("applicant".to_string()))?;

        let job = JobRepository::new(self.db.pool())
            .get(job_id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("job".to_string()))?;

        if !applicant.verification_status.is_approved() {
            return Err(JobdeskError::Permission(
                "applicant is not verified".to_string(),
            ));
        }

        let now = today();
        if job.deadline < now {
            return Err(JobdeskError::Validation(
                "application deadline has passed".to_string(),
            ));
        }

        ApplicationRepository::new(self.db.pool())
            .create(ucid, job_id, now)
            .await
    }

    /// Get a job by ID.
    pub async fn get_job(&self, job_id: i64) -> Result<Job> {
        JobRepository::new(self.db.pool())
            .get(job_id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("job".to_string()))
    }

    /// List all jobs, newest first.
    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        JobRepository::new(self.db.pool()).list_all().await
    }

    /// List jobs posted by an employer, newest first.
    pub async fn jobs_by_employer(&self, employer_id: i64) -> Result<Vec<Job>> {
        if !EmployerRepository::new(self.db.pool())
            .exists(employer_id)
            .await?
        {
            return Err(JobdeskError::NotFound("employer".to_string()));
        }
        JobRepository::new(self.db.pool())
            .list_by_employer(employer_id)
            .await
    }

    /// List applications received for a job, oldest first.
    pub async fn applications_for_job(&self, job_id: i64) -> Result<Vec<Application>> {
        if !JobRepository::new(self.db.pool()).exists(job_id).await? {
            return Err(JobdeskError::NotFound("job".to_string()));
        }
        ApplicationRepository::new(self.db.pool())
            .list_for_job(job_id)
            .await
    }
}
