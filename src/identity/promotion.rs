//! Moderator promotion for jobdesk.
//!
//! Promotion is an administrative action: it grants a student the
//! moderator capability, then fires the auto-approval trigger for any
//! open verification on that student. The trigger is best-effort by
//! contract: its outcome is logged, and the grant stands whether or not
//! the trigger succeeded.

use tracing::{info, warn};

use crate::db::Database;
use crate::identity::{Moderator, ModeratorRepository, StudentRepository};
use crate::verification::{AutoApprovalOutcome, VerificationService};
use crate::{JobdeskError, Result};

/// Result of a promotion.
#[derive(Debug, Clone)]
pub struct Promotion {
    /// The created moderator grant.
    pub moderator: Moderator,
    /// Outcome of the auto-approval trigger, or None when the trigger
    /// itself failed (already logged).
    pub auto_approval: Option<AutoApprovalOutcome>,
}

/// Promote a student to moderator.
///
/// The student must exist and must not already hold a grant. After the
/// grant is created, any pending verification on the student resolves to
/// Approved through [`VerificationService::auto_approve_promoted`]; with
/// no independent moderator available the student stays Pending.
pub async fn promote_to_moderator(db: &Database, ucid: i64) -> Result<Promotion> {
    let students = StudentRepository::new(db.pool());
    if !students.exists(ucid).await? {
        return Err(JobdeskError::NotFound("student".to_string()));
    }

    let moderators = ModeratorRepository::new(db.pool());
    if moderators.exists(ucid).await? {
        return Err(JobdeskError::Conflict("moderator grant".to_string()));
    }

    let moderator = moderators.create(ucid).await?;
    info!(ucid, "student promoted to moderator");

    let auto_approval = match VerificationService::new(db).auto_approve_promoted(ucid).await {
        Ok(outcome) => {
            if outcome == AutoApprovalOutcome::LeftPending {
                warn!(ucid, "no independent moderator, promoted student stays pending");
            }
            Some(outcome)
        }
        Err(e) => {
            warn!(ucid, error = %e, "auto-approval trigger failed");
            None
        }
    };

    Ok(Promotion {
        moderator,
        auto_approval,
    })
}
