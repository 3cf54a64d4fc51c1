//! Identity entities for jobdesk.
//!
//! Accounts carry the role discriminant; students, applicants, employers
//! and moderators are the role-specific records hanging off them.

use std::fmt;
use std::str::FromStr;

/// Account role discriminant.
///
/// Decided once at registration; the typed [`RegistrationProfile`] carries
/// the role-specific fields so the role is never re-derived from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
pub enum AccountRole {
    /// Student account, backed by a students row.
    Student,
    /// Employer account, backed by an employers row.
    Employer,
}

impl AccountRole {
    /// Convert role to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Student => "student",
            AccountRole::Employer => "employer",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(AccountRole::Student),
            "employer" => Ok(AccountRole::Employer),
            _ => Err(format!("unknown account role: {s}")),
        }
    }
}

/// Verification state of an applicant or employer.
///
/// The denormalized copy of this value on the subject row is what
/// access-control decisions read; verification history rows keep the
/// audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Awaiting a moderator decision.
    #[default]
    Pending,
    /// Cleared by a moderator.
    Approved,
    /// Declined by a moderator.
    Rejected,
}

impl VerificationStatus {
    /// Convert status to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Rejected => "rejected",
        }
    }

    /// Whether the subject has been cleared.
    pub fn is_approved(&self) -> bool {
        *self == VerificationStatus::Approved
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(VerificationStatus::Pending),
            "approved" => Ok(VerificationStatus::Approved),
            "rejected" => Ok(VerificationStatus::Rejected),
            _ => Err(format!("unknown verification status: {s}")),
        }
    }
}

/// Account entity representing a registered user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID.
    pub id: i64,
    /// Login email address (unique).
    pub email: String,
    /// Password hash (Argon2).
    pub password: String,
    /// Role discriminant.
    pub role: AccountRole,
    /// Account creation timestamp.
    pub created_at: String,
}

/// Data for creating a new account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Login email address.
    pub email: String,
    /// Password hash (should be pre-hashed with Argon2).
    pub password: String,
    /// Role discriminant.
    pub role: AccountRole,
}

/// Student entity, keyed by the eight-digit campus ID.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Student {
    /// Eight-digit campus ID.
    pub ucid: i64,
    /// Owning account.
    pub account_id: i64,
    /// Full name.
    pub name: String,
    /// Declared major (optional).
    pub major: Option<String>,
    /// Expected graduation year (optional).
    pub graduation_year: Option<i64>,
}

/// Data for creating a new student.
#[derive(Debug, Clone)]
pub struct NewStudent {
    /// Eight-digit campus ID.
    pub ucid: i64,
    /// Owning account.
    pub account_id: i64,
    /// Full name.
    pub name: String,
    /// Declared major (optional).
    pub major: Option<String>,
    /// Expected graduation year (optional).
    pub graduation_year: Option<i64>,
}

/// Applicant profile attached to a student.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Applicant {
    /// Student this profile belongs to.
    pub ucid: i64,
    /// Grade point average, 0.00-4.00.
    pub gpa: f64,
    /// Resume reference (optional).
    pub resume: Option<String>,
    /// Denormalized current verification status.
    pub verification_status: VerificationStatus,
}

/// Data for creating a new applicant profile.
#[derive(Debug, Clone)]
pub struct NewApplicant {
    /// Student this profile belongs to.
    pub ucid: i64,
    /// Grade point average, 0.00-4.00.
    pub gpa: f64,
    /// Resume reference (optional).
    pub resume: Option<String>,
}

/// Employer entity.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Employer {
    /// Unique employer ID.
    pub id: i64,
    /// Owning account.
    pub account_id: i64,
    /// Company name.
    pub company_name: String,
    /// Industry (optional).
    pub industry: Option<String>,
    /// Company website (optional).
    pub website: Option<String>,
    /// Company description (optional).
    pub description: Option<String>,
    /// Denormalized current verification status.
    pub verification_status: VerificationStatus,
}

/// Data for creating a new employer.
#[derive(Debug, Clone)]
pub struct NewEmployer {
    /// Owning account.
    pub account_id: i64,
    /// Company name.
    pub company_name: String,
    /// Industry (optional).
    pub industry: Option<String>,
    /// Company website (optional).
    pub website: Option<String>,
    /// Company description (optional).
    pub description: Option<String>,
}

/// Moderator grant, one-to-one with a student.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Moderator {
    /// Student holding the grant.
    pub ucid: i64,
    /// When the grant was issued.
    pub granted_at: String,
}

/// Role-specific registration data.
///
/// Constructed once by the caller; everything downstream branches on the
/// variant instead of a string field.
#[derive(Debug, Clone)]
pub enum RegistrationProfile {
    /// Student registration: creates a student plus an applicant profile.
    Student {
        /// Eight-digit campus ID.
        ucid: i64,
        /// Full name.
        name: String,
        /// Declared major (optional).
        major: Option<String>,
        /// Expected graduation year (optional).
        graduation_year: Option<i64>,
        /// Grade point average.
        gpa: f64,
        /// Resume reference (optional).
        resume: Option<String>,
    },
    /// Employer registration: creates an employer row.
    Employer {
        /// Company name.
        company_name: String,
        /// Industry (optional).
        industry: Option<String>,
        /// Company website (optional).
        website: Option<String>,
        /// Company description (optional).
        description: Option<String>,
    },
}

impl RegistrationProfile {
    /// The account role this profile registers.
    pub fn role(&self) -> AccountRole {
        match self {
            RegistrationProfile::Student { .. } => AccountRole::Student,
            RegistrationProfile::Employer { .. } => AccountRole::Employer,
        }
    }
}
