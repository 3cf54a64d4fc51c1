//! Verification workflow service for jobdesk.
//!
//! High-level operations over the verification queues: the registration-time
//! enqueue, the promotion-time auto-approval trigger, moderator decisions,
//! and the current-status accessors.
//!
//! Two status readings exist for every subject. The denormalized
//! `verification_status` column on the applicant/employer row is the
//! authoritative value for access control and is kept in sync by every
//! resolving operation here; `current_applicant_status` /
//! `current_employer_status` read the latest history row and serve audit.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::db::Database;
use crate::identity::{
    ApplicantRepository, EmployerRepository, ModeratorRepository, VerificationStatus,
};
use crate::{JobdeskError, Result};

use super::applicant_repository::ApplicantVerificationRepository;
use super::employer_repository::EmployerVerificationRepository;
use super::types::{
    ApplicantVerification, AutoApprovalOutcome, Decision, EmployerVerification, EnqueueOutcome,
    NewApplicantVerification, NewEmployerVerification,
};

/// Today's date in local time.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Service for verification queue operations.
pub struct VerificationService<'a> {
    db: &'a Database,
}

impl<'a> VerificationService<'a> {
    /// Create a new VerificationService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Enqueue a pending verification for a newly registered applicant.
    ///
    /// Assigns the check to an existing moderator other than the subject.
    /// With no such moderator the applicant stays unverified with no queue
    /// entry. Callers treat any error as best-effort: log it and complete
    /// the registration.
    pub async fn enqueue_applicant(&self, applicant_ucid: i64) -> Result<EnqueueOutcome> {
        let applicants = ApplicantRepository::new(self.db.pool());
        if applicants.get(applicant_ucid).await?.is_none() {
            return Err(JobdeskError::NotFound("applicant".to_string()));
        }

        let moderators = ModeratorRepository::new(self.db.pool());
        let Some(moderator) = moderators.any_other_than(applicant_ucid).await? else {
            debug!(applicant_ucid, "no moderator available, skipping enqueue");
            return Ok(EnqueueOutcome::NoModerator);
        };

        let row = ApplicantVerificationRepository::new(self.db.pool())
            .create(&NewApplicantVerification {
                moderator_ucid: moderator.ucid,
                applicant_ucid,
                status: VerificationStatus::Pending,
                verified_on: today(),
            })
            .await?;

        debug!(
            applicant_ucid,
            moderator_ucid = moderator.ucid,
            verification_id = row.id,
            "applicant verification enqueued"
        );
        Ok(EnqueueOutcome::Enqueued {
            verification_id: row.id,
            moderator_ucid: moderator.ucid,
        })
    }

    /// Enqueue a pending verification for a newly registered employer.
    pub async fn enqueue_employer(&self, employer_id: i64) -> Result<EnqueueOutcome> {
        let employers = EmployerRepository::new(self.db.pool());
        if !employers.exists(employer_id).await? {
            return Err(JobdeskError::NotFound("employer".to_string()));
        }

        let moderators = ModeratorRepository::new(self.db.pool());
        let Some(moderator) = moderators.any().await? else {
            debug!(employer_id, "no moderator available, skipping enqueue");
            return Ok(EnqueueOutcome::NoModerator);
        };

        let row = EmployerVerificationRepository::new(self.db.pool())
            .create(&NewEmployerVerification {
                moderator_ucid: moderator.ucid,
                employer_id,
                status: VerificationStatus::Pending,
                verified_on: today(),
            })
            .await?;

        debug!(
            employer_id,
            moderator_ucid = moderator.ucid,
            verification_id = row.id,
            "employer verification enqueued"
        );
        Ok(EnqueueOutcome::Enqueued {
            verification_id: row.id,
            moderator_ucid: moderator.ucid,
        })
    }

    /// Resolve verification for a student who was just promoted to moderator.
    ///
    /// Moderator status implies trustworthiness, so any open check on the
    /// promoted student resolves to Approved:
    /// an existing pending row is resolved in place; otherwise a new
    /// Approved row is inserted, verified by a moderator other than the
    /// subject. With no independent moderator available the subject stays
    /// Pending. Re-running the trigger changes nothing once an Approved
    /// row exists.
    pub async fn auto_approve_promoted(&self, ucid: i64) -> Result<AutoApprovalOutcome> {
        let moderators = ModeratorRepository::new(self.db.pool());
        if !moderators.exists(ucid).await? {
            return Err(JobdeskError::NotFound("moderator".to_string()));
        }

        let verifications = ApplicantVerificationRepository::new(self.db.pool());
        let applicants = ApplicantRepository::new(self.db.pool());
        let now = today();

        if let Some(pending) = verifications.pending_for(ucid).await? {
            if verifications
                .resolve(pending.id, VerificationStatus::Approved, now)
                .await?
            {
                applicants
                    .set_status(ucid, VerificationStatus::Approved)
                    .await?;
                debug!(
                    ucid,
                    verification_id = pending.id,
                    "pending verification auto-approved on promotion"
                );
                return Ok(AutoApprovalOutcome::ResolvedPending {
                    verification_id: pending.id,
                });
            }
        }

        if verifications
            .has_with_status(ucid, VerificationStatus::Approved)
            .await?
        {
            applicants
                .set_status(ucid, VerificationStatus::Approved)
                .await?;
            return Ok(AutoApprovalOutcome::AlreadyApproved);
        }

        // A moderator must not stand as their own verifier
        let Some(verifier) = moderators.any_other_than(ucid).await? else {
            debug!(ucid, "no independent moderator, promotion leaves status pending");
            return Ok(AutoApprovalOutcome::LeftPending);
        };

        let row = verifications
            .create(&NewApplicantVerification {
                moderator_ucid: verifier.ucid,
                applicant_ucid: ucid,
                status: VerificationStatus::Approved,
                verified_on: now,
            })
            .await?;
        applicants
            .set_status(ucid, VerificationStatus::Approved)
            .await?;

        debug!(
            ucid,
            moderator_ucid = verifier.ucid,
            verification_id = row.id,
            "approved verification inserted on promotion"
        );
        Ok(AutoApprovalOutcome::InsertedApproved {
            verification_id: row.id,
            moderator_ucid: verifier.ucid,
        })
    }

    /// List open applicant verifications, oldest first.
    pub async fn pending_applicant_verifications(&self) -> Result<Vec<ApplicantVerification>> {
        ApplicantVerificationRepository::new(self.db.pool())
            .list_pending()
            .await
    }

    /// List open employer verifications, oldest first.
    pub async fn pending_employer_verifications(&self) -> Result<Vec<EmployerVerification>> {
        EmployerVerificationRepository::new(self.db.pool())
            .list_pending()
            .await
    }

    /// Resolve a pending applicant verification.
    ///
    /// The row is updated in place with today's date, and the denormalized
    /// status on the applicant follows the decision. Resolving a row that
    /// is no longer pending is a conflict.
    pub async fn decide_applicant(
        &self,
        verification_id: i64,
        decision: Decision,
    ) -> Result<ApplicantVerification> {
        let verifications = ApplicantVerificationRepository::new(self.db.pool());
        let row = verifications
            .get(verification_id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("applicant verification".to_string()))?;

        let status = decision.status();
        if !verifications.resolve(row.id, status, today()).await? {
            return Err(JobdeskError::Conflict(
                "verification decision".to_string(),
            ));
        }

        ApplicantRepository::new(self.db.pool())
            .set_status(row.applicant_ucid, status)
            .await?;

        verifications
            .get(row.id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("applicant verification".to_string()))
    }

    /// Resolve a pending employer verification.
    pub async fn decide_employer(
        &self,
        verification_id: i64,
        decision: Decision,
    ) -> Result<EmployerVerification> {
        let verifications = EmployerVerificationRepository::new(self.db.pool());
        let row = verifications
            .get(verification_id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("employer verification".to_string()))?;

        let status = decision.status();
        if !verifications.resolve(row.id, status, today()).await? {
            return Err(JobdeskError::Conflict(
                "verification decision".to_string(),
            ));
        }

        EmployerRepository::new(self.db.pool())
            .set_status(row.employer_id, status)
            .await?;

        verifications
            .get(row.id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("employer verification".to_string()))
    }

    /// Status of the latest history row for an applicant.
    ///
    /// Audit accessor; access control reads the denormalized column on the
    /// applicant row instead.
    pub async fn current_applicant_status(
        &self,
        applicant_ucid: i64,
    ) -> Result<Option<VerificationStatus>> {
        let latest = ApplicantVerificationRepository::new(self.db.pool())
            .latest_for(applicant_ucid)
            .await?;
        Ok(latest.map(|row| row.status))
    }

    /// Status of the latest history row for an employer.
    pub async fn current_employer_status(
        &self,
        employer_id: i64,
    ) -> Result<Option<VerificationStatus>> {
        let latest = EmployerVerificationRepository::new(self.db.pool())
            .latest_for(employer_id)
            .await?;
        Ok(latest.map(|row| row.status))
    }
}
