//! Moderation Workflow Tests
//!
//! End-to-end tests for employer verification, verification-gated job
//! postings and applications, and the job review audit log.

mod common;

use common::{promote, register_employer, register_student, sample_job, setup_db};
use jobdesk::{
    Decision, EnqueueOutcome, JobService, JobdeskError, ModerationService, VerificationService,
    VerificationStatus,
};

/// Set up one moderator and one approved employer, returning the
/// moderator UCID and employer ID.
async fn seed_moderated_employer(db: &jobdesk::Database) -> (i64, i64) {
    register_student(db, 30000001, "mod@ucalgary.ca").await;
    promote(db, 30000001).await;

    let (_, employer_id) = register_employer(db, "hr@acme.com", "Acme Corp").await;
    let service = VerificationService::new(db);
    let pending = service.pending_employer_verifications().await.unwrap();
    service
        .decide_employer(pending[0].id, Decision::Approve)
        .await
        .unwrap();

    (30000001, employer_id)
}

#[tokio::test]
async fn employer_registration_enqueues_verification() {
    let db = setup_db().await;

    register_student(&db, 30000001, "mod@ucalgary.ca").await;
    promote(&db, 30000001).await;

    let (registration, employer_id) = register_employer(&db, "hr@acme.com", "Acme Corp").await;
    assert_eq!(
        registration.enqueue,
        Some(EnqueueOutcome::Enqueued {
            verification_id: 1,
            moderator_ucid: 30000001,
        })
    );

    let service = VerificationService::new(&db);
    let pending = service.pending_employer_verifications().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].employer_id, employer_id);
}

#[tokio::test]
async fn unverified_employer_cannot_post_jobs() {
    let db = setup_db().await;

    let (_, employer_id) = register_employer(&db, "hr@acme.com", "Acme Corp").await;
    let jobs = JobService::new(&db);

    let result = jobs.post_job(&sample_job(employer_id, "Intern")).await;
    assert!(matches!(result, Err(JobdeskError::Permission(_))));
}

#[tokio::test]
async fn approved_employer_posts_and_verified_student_applies() {
    let db = setup_db().await;
    let (_, employer_id) = seed_moderated_employer(&db).await;

    let jobs = JobService::new(&db);
    let job = jobs
        .post_job(&sample_job(employer_id, "Backend Intern"))
        .await
        .unwrap();

    // Student registers, gets verified, applies
    register_student(&db, 30000002, "sam@ucalgary.ca").await;
    let verification = VerificationService::new(&db);
    let pending = verification.pending_applicant_verifications().await.unwrap();
    verification
        .decide_applicant(pending[0].id, Decision::Approve)
        .await
        .unwrap();

    let application = jobs.apply(30000002, job.id).await.unwrap();
    assert_eq!(application.job_id, job.id);
    assert_eq!(jobs.applications_for_job(job.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn unverified_student_cannot_apply() {
    let db = setup_db().await;
    let (_, employer_id) = seed_moderated_employer(&db).await;

    let jobs = JobService::new(&db);
    let job = jobs
        .post_job(&sample_job(employer_id, "Backend Intern"))
        .await
        .unwrap();

    register_student(&db, 30000002, "sam@ucalgary.ca").await;
    let result = jobs.apply(30000002, job.id).await;
    assert!(matches!(result, Err(JobdeskError::Permission(_))));
}

#[tokio::test]
async fn rejected_employer_cannot_post() {
    let db = setup_db().await;

    register_student(&db, 30000001, "mod@ucalgary.ca").await;
    promote(&db, 30000001).await;
    let (_, employer_id) = register_employer(&db, "hr@acme.com", "Acme Corp").await;

    let verification = VerificationService::new(&db);
    let pending = verification.pending_employer_verifications().await.unwrap();
    verification
        .decide_employer(pending[0].id, Decision::Reject)
        .await
        .unwrap();
    assert_eq!(
        verification.current_employer_status(employer_id).await.unwrap(),
        Some(VerificationStatus::Rejected)
    );

    let result = JobService::new(&db)
        .post_job(&sample_job(employer_id, "Intern"))
        .await;
    assert!(matches!(result, Err(JobdeskError::Permission(_))));
}

#[tokio::test]
async fn review_is_recorded_once_per_triple() {
    let db = setup_db().await;
    let (moderator, employer_id) = seed_moderated_employer(&db).await;

    let job = JobService::new(&db)
        .post_job(&sample_job(employer_id, "Backend Intern"))
        .await
        .unwrap();

    let moderation = ModerationService::new(&db);
    moderation
        .record_review(moderator, job.id, employer_id)
        .await
        .unwrap();

    // The exact triple again is rejected; exactly one row persists
    let dup = moderation.record_review(moderator, job.id, employer_id).await;
    assert!(matches!(dup, Err(JobdeskError::Conflict(_))));
    assert_eq!(moderation.reviews_for_job(job.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn distinct_moderators_may_review_the_same_job() {
    let db = setup_db().await;
    let (first, employer_id) = seed_moderated_employer(&db).await;

    register_student(&db, 30000002, "second@ucalgary.ca").await;
    promote(&db, 30000002).await;

    let job = JobService::new(&db)
        .post_job(&sample_job(employer_id, "Backend Intern"))
        .await
        .unwrap();

    let moderation = ModerationService::new(&db);
    moderation.record_review(first, job.id, employer_id).await.unwrap();
    moderation
        .record_review(30000002, job.id, employer_id)
        .await
        .unwrap();

    assert_eq!(moderation.reviews_for_job(job.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn review_referents_are_checked() {
    let db = setup_db().await;
    let (moderator, employer_id) = seed_moderated_employer(&db).await;

    let job = JobService::new(&db)
        .post_job(&sample_job(employer_id, "Backend Intern"))
        .await
        .unwrap();

    let moderation = ModerationService::new(&db);
    assert!(matches!(
        moderation.record_review(39999999, job.id, employer_id).await,
        Err(JobdeskError::NotFound(_))
    ));
    assert!(matches!(
        moderation.record_review(moderator, 999, employer_id).await,
        Err(JobdeskError::NotFound(_))
    ));

    // A real employer that did not post the job is a validation error
    let (_, other_employer) = register_employer(&db, "hr@globex.com", "Globex").await;
    assert!(matches!(
        moderation.record_review(moderator, job.id, other_employer).await,
        Err(JobdeskError::Validation(_))
    ));
}
