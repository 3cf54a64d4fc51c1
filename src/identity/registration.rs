//! User registration for jobdesk.
//!
//! Registration creates the account row plus the role-specific profile,
//! then hands the new subject to the verification queue. The enqueue is
//! best-effort by contract: its outcome is logged, and registration
//! succeeds whether or not a queue entry could be created.

use thiserror::Error;
use tracing::{info, warn};

use crate::db::Database;
use crate::identity::password::{hash_password, PasswordError};
use crate::identity::validation::{validate_registration, ValidationError};
use crate::identity::{
    Account, AccountRepository, Applicant, ApplicantRepository, Employer, EmployerRepository,
    NewAccount, NewApplicant, NewEmployer, NewStudent, RegistrationProfile, Student,
    StudentRepository,
};
use crate::verification::{EnqueueOutcome, VerificationService};
use crate::JobdeskError;

/// Registration-specific errors.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Email is already registered.
    #[error("email already registered")]
    EmailExists,

    /// UCID is already registered.
    #[error("UCID already registered")]
    UcidExists,

    /// Password hashing failed.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    /// Database error.
    #[error("database error: {0}")]
    Database(String),
}

impl From<JobdeskError> for RegistrationError {
    fn from(e: JobdeskError) -> Self {
        RegistrationError::Database(e.to_string())
    }
}

/// Registration request data.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Login email address.
    pub email: String,
    /// Plaintext password (8-128 characters); hashed before storage.
    pub password: String,
    /// Role-specific profile data.
    pub profile: RegistrationProfile,
}

impl RegistrationRequest {
    /// Create a new registration request.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        profile: RegistrationProfile,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            profile,
        }
    }
}

/// The role-specific records created by a registration.
#[derive(Debug, Clone)]
pub enum RegisteredProfile {
    /// Student registration created a student plus an applicant profile.
    Student {
        /// The created student row.
        student: Student,
        /// The created applicant profile.
        applicant: Applicant,
    },
    /// Employer registration created an employer row.
    Employer(Employer),
}

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct Registration {
    /// The created account.
    pub account: Account,
    /// The created role-specific records.
    pub profile: RegisteredProfile,
    /// Outcome of the verification enqueue, or None when the enqueue
    /// itself failed (already logged).
    pub enqueue: Option<EnqueueOutcome>,
}

/// Register a new user.
///
/// This function:
/// 1. Validates all input fields
/// 2. Checks that the email (and UCID, for students) is unused
/// 3. Hashes the password
/// 4. Creates the account plus the role-specific profile
/// 5. Enqueues a pending verification for the new subject
///
/// Step 5 never fails the registration: an enqueue error is logged and
/// reported through [`Registration::enqueue`].
pub async fn register(
    db: &Database,
    request: RegistrationRequest,
) -> std::result::Result<Registration, RegistrationError> {
    validate_registration(&request.email, &request.password, &request.profile)?;

    let accounts = AccountRepository::new(db.pool());
    if accounts.email_exists(&request.email).await? {
        return Err(RegistrationError::EmailExists);
    }
    if let RegistrationProfile::Student { ucid, .. } = &request.profile {
        if StudentRepository::new(db.pool()).exists(*ucid).await? {
            return Err(RegistrationError::UcidExists);
        }
    }

    let password_hash = hash_password(&request.password)?;

    let account = accounts
        .create(&NewAccount {
            email: request.email.clone(),
            password: password_hash,
            role: request.profile.role(),
        })
        .await?;

    let verification = VerificationService::new(db);

    let (profile, enqueue) = match request.profile {
        RegistrationProfile::Student {
            ucid,
            name,
            major,
            graduation_year,
            gpa,
            resume,
        } => {
            let student = StudentRepository::new(db.pool())
                .create(&NewStudent {
                    ucid,
                    account_id: account.id,
                    name,
                    major,
                    graduation_year,
                })
                .await?;
            let applicant = ApplicantRepository::new(db.pool())
                .create(&NewApplicant { ucid, gpa, resume })
                .await?;

            let enqueue = match verification.enqueue_applicant(ucid).await {
                Ok(outcome) => {
                    if outcome == EnqueueOutcome::NoModerator {
                        warn!(ucid, "no moderator available, applicant not enqueued");
                    }
                    Some(outcome)
                }
                Err(e) => {
                    warn!(ucid, error = %e, "applicant verification enqueue failed");
                    None
                }
            };

            info!(ucid, account_id = account.id, "student registered");
            (RegisteredProfile::Student { student, applicant }, enqueue)
        }
        RegistrationProfile::Employer {
            company_name,
            industry,
            website,
            description,
        } => {
            let employer = EmployerRepository::new(db.pool())
                .create(&NewEmployer {
                    account_id: account.id,
                    company_name,
                    industry,
                    website,
                    description,
                })
                .await?;

            let enqueue = match verification.enqueue_employer(employer.id).await {
                Ok(outcome) => {
                    if outcome == EnqueueOutcome::NoModerator {
                        warn!(
                            employer_id = employer.id,
                            "no moderator available, employer not enqueued"
                        );
                    }
                    Some(outcome)
                }
                Err(e) => {
                    warn!(
                        employer_id = employer.id,
                        error = %e,
                        "employer verification enqueue failed"
                    );
                    None
                }
            };

            info!(
                employer_id = employer.id,
                account_id = account.id,
                "employer registered"
            );
            (RegisteredProfile::Employer(employer), enqueue)
        }
    };

    Ok(Registration {
        account,
        profile,
        enqueue,
    })
}
