//! Database schema and migrations for jobdesk.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Accounts table
    r#"
-- Accounts table: one row per registered user, student or employer
CREATE TABLE accounts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    email       TEXT NOT NULL UNIQUE,
    password    TEXT NOT NULL,           -- Argon2 hash
    role        TEXT NOT NULL,           -- 'student' or 'employer'
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_accounts_role ON accounts(role);
"#,
    // v2: Student-side tables
    r#"
-- Students table, keyed by the eight-digit campus ID
CREATE TABLE students (
    ucid            INTEGER PRIMARY KEY,
    account_id      INTEGER NOT NULL UNIQUE REFERENCES accounts(id) ON DELETE CASCADE,
    name            TEXT NOT NULL,
    major           TEXT,
    graduation_year INTEGER
);

-- Applicant profile: students eligible to apply to jobs
CREATE TABLE applicants (
    ucid                INTEGER PRIMARY KEY REFERENCES students(ucid) ON DELETE CASCADE,
    gpa                 REAL NOT NULL,
    resume              TEXT,
    verification_status TEXT NOT NULL DEFAULT 'pending'
);

-- Moderator grants, one-to-one with students
CREATE TABLE moderators (
    ucid        INTEGER PRIMARY KEY REFERENCES students(ucid) ON DELETE CASCADE,
    granted_at  TEXT NOT NULL DEFAULT (datetime('now'))
);
"#,
    // v3: Employers table
    r#"
CREATE TABLE employers (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    account_id          INTEGER NOT NULL UNIQUE REFERENCES accounts(id) ON DELETE CASCADE,
    company_name        TEXT NOT NULL,
    industry            TEXT,
    website             TEXT,
    description         TEXT,
    verification_status TEXT NOT NULL DEFAULT 'pending'
);
"#,
    // v4: Jobs and applications
    r#"
CREATE TABLE jobs (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    employer_id INTEGER NOT NULL REFERENCES employers(id) ON DELETE CASCADE,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    salary      REAL,
    location    TEXT NOT NULL,
    deadline    TEXT NOT NULL,           -- ISO date
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_jobs_employer_id ON jobs(employer_id);

CREATE TABLE applications (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    ucid        INTEGER NOT NULL REFERENCES applicants(ucid) ON DELETE CASCADE,
    job_id      INTEGER NOT NULL REFERENCES jobs(id) ON DELETE CASCADE,
    status      TEXT NOT NULL DEFAULT 'submitted',
    applied_on  TEXT NOT NULL,           -- ISO date
    UNIQUE(ucid, job_id)
);

CREATE INDEX idx_applications_job_id ON applications(job_id);
"#,
    // v5: Verification history
    r#"
-- Applicant verification history; rows are never deleted
CREATE TABLE applicant_verifications (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    moderator_ucid INTEGER NOT NULL REFERENCES moderators(ucid),
    applicant_ucid INTEGER NOT NULL REFERENCES students(ucid),
    status         TEXT NOT NULL DEFAULT 'pending',
    verified_on    TEXT NOT NULL        -- ISO date
);

CREATE INDEX idx_applicant_verifications_applicant ON applicant_verifications(applicant_ucid);
CREATE INDEX idx_applicant_verifications_status ON applicant_verifications(status);

-- Employer verification history, symmetric with the applicant side
CREATE TABLE employer_verifications (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    moderator_ucid INTEGER NOT NULL REFERENCES moderators(ucid),
    employer_id    INTEGER NOT NULL REFERENCES employers(id),
    status         TEXT NOT NULL DEFAULT 'pending',
    verified_on    TEXT NOT NULL        -- ISO date
);

CREATE INDEX idx_employer_verifications_employer ON employer_verifications(employer_id);
CREATE INDEX idx_employer_verifications_status ON employer_verifications(status);
"#,
    // v6: Job review audit log
    r#"
-- Records that a moderator reviewed a job; append-only
CREATE TABLE job_reviews (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    moderator_ucid INTEGER NOT NULL REFERENCES moderators(ucid),
    job_id         INTEGER NOT NULL REFERENCES jobs(id),
    employer_id    INTEGER NOT NULL REFERENCES employers(id),
    reviewed_at    TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE(moderator_ucid, job_id, employer_id)
);

CREATE INDEX idx_job_reviews_job_id ON job_reviews(job_id);
"#,
];
