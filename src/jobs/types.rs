//! Job posting and application entities for jobdesk.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// A job posting.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Job {
    /// Unique job ID.
    pub id: i64,
    /// Employer that posted the job.
    pub employer_id: i64,
    /// Job title.
    pub title: String,
    /// Job description.
    pub description: String,
    /// Annual salary (optional).
    pub salary: Option<f64>,
    /// Work location.
    pub location: String,
    /// Application deadline.
    pub deadline: NaiveDate,
    /// Posting timestamp.
    pub created_at: String,
}

/// Data for creating a new job posting.
#[derive(Debug, Clone)]
pub struct NewJob {
    /// Employer posting the job.
    pub employer_id: i64,
    /// Job title.
    pub title: String,
    /// Job description.
    pub description: String,
    /// Annual salary (optional).
    pub salary: Option<f64>,
    /// Work location.
    pub location: String,
    /// Application deadline.
    pub deadline: NaiveDate,
}

/// State of a submitted application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Received, awaiting employer review.
    #[default]
    Submitted,
    /// Shortlisted by the employer.
    Shortlisted,
    /// Declined by the employer.
    Declined,
}

impl ApplicationStatus {
    /// Convert status to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "submitted" => Ok(ApplicationStatus::Submitted),
            "shortlisted" => Ok(ApplicationStatus::Shortlisted),
            "declined" => Ok(ApplicationStatus::Declined),
            _ => Err(format!("unknown application status: {s}")),
        }
    }
}

/// A student's application to a job.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Application {
    /// Unique application ID.
    pub id: i64,
    /// Applying student.
    pub ucid: i64,
    /// Job applied to.
    pub job_id: i64,
    /// Application state.
    pub status: ApplicationStatus,
    /// Date the application was submitted.
    pub applied_on: NaiveDate,
}
