//! Input validation for jobdesk registration.
//!
//! Validates campus IDs, emails, passwords, and the role-specific
//! profile fields before anything touches the database.

use thiserror::Error;

use super::types::RegistrationProfile;

/// Lowest valid eight-digit campus ID.
pub const UCID_MIN: i64 = 10_000_000;

/// Highest valid eight-digit campus ID.
pub const UCID_MAX: i64 = 99_999_999;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Maximum email length.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum name / company name length.
pub const MAX_NAME_LENGTH: usize = 255;

/// Highest GPA on the 4-point scale.
pub const GPA_MAX: f64 = 4.0;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// UCID is not an eight-digit number.
    #[error("UCID must be an eight-digit number")]
    UcidOutOfRange,

    /// Email is empty.
    #[error("email cannot be empty")]
    EmailEmpty,

    /// Email is too long.
    #[error("email must be at most {MAX_EMAIL_LENGTH} characters")]
    EmailTooLong,

    /// Email format is invalid.
    #[error("invalid email format")]
    EmailInvalidFormat,

    /// Password is too short.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    /// Password is too long.
    #[error("password must be at most {MAX_PASSWORD_LENGTH} characters")]
    PasswordTooLong,

    /// Name is empty.
    #[error("name cannot be empty")]
    NameEmpty,

    /// Name is too long.
    #[error("name must be at most {MAX_NAME_LENGTH} characters")]
    NameTooLong,

    /// GPA is outside the 4-point scale.
    #[error("GPA must be between 0.0 and {GPA_MAX}")]
    GpaOutOfRange,

    /// Graduation year is implausible.
    #[error("graduation year is out of range")]
    GraduationYearOutOfRange,

    /// Company name is empty.
    #[error("company name cannot be empty")]
    CompanyNameEmpty,

    /// Company name is too long.
    #[error("company name must be at most {MAX_NAME_LENGTH} characters")]
    CompanyNameTooLong,
}

/// Validate an eight-digit campus ID.
pub fn validate_ucid(ucid: i64) -> Result<(), ValidationError> {
    if !(UCID_MIN..=UCID_MAX).contains(&ucid) {
        return Err(ValidationError::UcidOutOfRange);
    }
    Ok(())
}

/// Validate an email address.
///
/// Checks length and basic shape (one `@`, a dotted domain). Full RFC
/// compliance is left to the mail system.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailEmpty);
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::EmailTooLong);
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::EmailInvalidFormat);
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::EmailInvalidFormat);
    }
    if email.contains(char::is_whitespace) {
        return Err(ValidationError::EmailInvalidFormat);
    }

    Ok(())
}

/// Validate a password.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooLong);
    }
    Ok(())
}

/// Validate a personal name.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

/// Validate a GPA on the 4-point scale.
pub fn validate_gpa(gpa: f64) -> Result<(), ValidationError> {
    if !gpa.is_finite() || !(0.0..=GPA_MAX).contains(&gpa) {
        return Err(ValidationError::GpaOutOfRange);
    }
    Ok(())
}

/// Validate a graduation year.
pub fn validate_graduation_year(year: i64) -> Result<(), ValidationError> {
    if !(1950..=2100).contains(&year) {
        return Err(ValidationError::GraduationYearOutOfRange);
    }
    Ok(())
}

/// Validate a company name.
pub fn validate_company_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::CompanyNameEmpty);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::CompanyNameTooLong);
    }
    Ok(())
}

/// Validate a full registration request.
pub fn validate_registration(
    email: &str,
    password: &str,
    profile: &RegistrationProfile,
) -> Result<(), ValidationError> {
    validate_email(email)?;
    validate_password(password)?;

    match profile {
        RegistrationProfile::Student {
            ucid,
            name,
            graduation_year,
            gpa,
            ..
        } => {
            validate_ucid(*ucid)?;
            validate_name(name)?;
            validate_gpa(*gpa)?;
            if let Some(year) = graduation_year {
                validate_graduation_year(*year)?;
            }
        }
        RegistrationProfile::Employer { company_name, .. } => {
            validate_company_name(company_name)?;
        }
    }

    Ok(())
}
