//! Test helpers for jobdesk integration tests.
//!
//! Drives the public registration/promotion API so every test exercises
//! the same entry points external callers use.

#![allow(dead_code)]

use chrono::{Days, Local, NaiveDate};

use jobdesk::{
    register, Database, NewJob, Promotion, RegisteredProfile, Registration, RegistrationProfile,
    RegistrationRequest,
};

/// Open a fresh in-memory database with all migrations applied.
pub async fn setup_db() -> Database {
    Database::open_in_memory()
        .await
        .expect("Failed to create test database")
}

/// Today's date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Register a student through the public registration flow.
pub async fn register_student(db: &Database, ucid: i64, email: &str) -> Registration {
    register(
        db,
        RegistrationRequest::new(
            email,
            "password123",
            RegistrationProfile::Student {
                ucid,
                name: format!("Student {ucid}"),
                major: Some("Computer Science".to_string()),
                graduation_year: Some(2027),
                gpa: 3.4,
                resume: Some(format!("resumes/{ucid}.pdf")),
            },
        ),
    )
    .await
    .expect("student registration failed")
}

/// Register an employer through the public registration flow.
///
/// Returns the registration and the created employer ID.
pub async fn register_employer(db: &Database, email: &str, company: &str) -> (Registration, i64) {
    let registration = register(
        db,
        RegistrationRequest::new(
            email,
            "password123",
            RegistrationProfile::Employer {
                company_name: company.to_string(),
                industry: Some("Software".to_string()),
                website: None,
                description: None,
            },
        ),
    )
    .await
    .expect("employer registration failed");

    let RegisteredProfile::Employer(employer) = &registration.profile else {
        panic!("expected employer profile");
    };
    let employer_id = employer.id;
    (registration, employer_id)
}

/// Promote a student to moderator.
pub async fn promote(db: &Database, ucid: i64) -> Promotion {
    jobdesk::promote_to_moderator(db, ucid)
        .await
        .expect("promotion failed")
}

/// A valid job posting with a deadline one month out.
pub fn sample_job(employer_id: i64, title: &str) -> NewJob {
    NewJob {
        employer_id,
        title: title.to_string(),
        description: "Work on backend services.".to_string(),
        salary: Some(65000.0),
        location: "Calgary".to_string(),
        deadline: today() + Days::new(30),
    }
}
