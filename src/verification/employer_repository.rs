//! Employer verification repository for jobdesk.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use super::types::{EmployerVerification, NewEmployerVerification};
use crate::identity::VerificationStatus;
use crate::{JobdeskError, Result};

/// Repository for employer verification history rows.
pub struct EmployerVerificationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EmployerVerificationRepository<'a> {
    /// Create a new EmployerVerificationRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new verification row.
    pub async fn create(
        &self,
        new_verification: &NewEmployerVerification,
    ) -> Result<EmployerVerification> {
        let result = sqlx::query(
            "INSERT INTO employer_verifications (moderator_ucid, employer_id, status, verified_on)
             VALUES (?, ?, ?, ?)",
        )
        .bind(new_verification.moderator_ucid)
        .bind(new_verification.employer_id)
        .bind(new_verification.status.as_str())
        .bind(new_verification.verified_on)
        .execute(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get(id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("employer verification".to_string()))
    }

    /// Get a verification row by ID.
    pub async fn get(&self, id: i64) -> Result<Option<EmployerVerification>> {
        let result = sqlx::query_as::<_, EmployerVerification>(
            "SELECT id, moderator_ucid, employer_id, status, verified_on
             FROM employer_verifications WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get the most recent verification row for an employer.
    pub async fn latest_for(&self, employer_id: i64) -> Result<Option<EmployerVerification>> {
        let result = sqlx::query_as::<_, EmployerVerification>(
            "SELECT id, moderator_ucid, employer_id, status, verified_on
             FROM employer_verifications WHERE employer_id = ?
             ORDER BY verified_on DESC, id DESC LIMIT 1",
        )
        .bind(employer_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List all pending verification rows, oldest first.
    pub async fn list_pending(&self) -> Result<Vec<EmployerVerification>> {
        let result = sqlx::query_as::<_, EmployerVerification>(
            "SELECT id, moderator_ucid, employer_id, status, verified_on
             FROM employer_verifications WHERE status = 'pending'
             ORDER BY id",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Resolve a pending row in place.
    ///
    /// Returns false when the row is missing or no longer pending.
    pub async fn resolve(
        &self,
        id: i64,
        status: VerificationStatus,
        date: NaiveDate,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE employer_verifications SET status = ?, verified_on = ?
             WHERE id = ? AND status = 'pending'",
        )
        .bind(status.as_str())
        .bind(date)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count verification rows for an employer.
    pub async fn count_for(&self, employer_id: i64) -> Result<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM employer_verifications WHERE employer_id = ?")
                .bind(employer_id)
                .fetch_one(self.pool)
                .await
                .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{
        AccountRepository, AccountRole, EmployerRepository, ModeratorRepository, NewAccount,
        NewEmployer, NewStudent, StudentRepository,
    };
    use crate::Database;

    async fn seed_moderator(db: &Database, ucid: i64, email: &str) {
        let account = AccountRepository::new(db.pool())
            .create(&NewAccount {
                email: email.to_string(),
                password: "hash".to_string(),
                role: AccountRole::Student,
            })
            .await
            .unwrap();
        StudentRepository::new(db.pool())
            .create(&NewStudent {
                ucid,
                account_id: account.id,
                name: "Mod".to_string(),
                major: None,
                graduation_year: None,
            })
            .await
            .unwrap();
        ModeratorRepository::new(db.pool())
            .create(ucid)
            .await
            .unwrap();
    }

    async fn seed_employer(db: &Database, email: &str) -> i64 {
        let account = AccountRepository::new(db.pool())
            .create(&NewAccount {
                email: email.to_string(),
                password: "hash".to_string(),
                role: AccountRole::Employer,
            })
            .await
            .unwrap();
        EmployerRepository::new(db.pool())
            .create(&NewEmployer {
                account_id: account.id,
                company_name: "Acme".to_string(),
                industry: None,
                website: None,
                description: None,
            })
            .await
            .unwrap()
            .id
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_create_latest_and_resolve() {
        let db = Database::open_in_memory().await.unwrap();
        seed_moderator(&db, 30000001, "m@ucalgary.ca").await;
        let employer_id = seed_employer(&db, "hr@acme.com").await;
        let repo = EmployerVerificationRepository::new(db.pool());

        let row = repo
            .create(&NewEmployerVerification {
                moderator_ucid: 30000001,
                employer_id,
                status: VerificationStatus::Pending,
                verified_on: date("2026-08-01"),
            })
            .await
            .unwrap();
        assert_eq!(row.status, VerificationStatus::Pending);

        let latest = repo.latest_for(employer_id).await.unwrap().unwrap();
        assert_eq!(latest.id, row.id);

        let resolved = repo
            .resolve(row.id, VerificationStatus::Approved, date("2026-08-04"))
            .await
            .unwrap();
        assert!(resolved);

        let updated = repo.get(row.id).await.unwrap().unwrap();
        assert_eq!(updated.status, VerificationStatus::Approved);
        assert_eq!(repo.count_for(employer_id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_pending_excludes_resolved() {
        let db = Database::open_in_memory().await.unwrap();
        seed_moderator(&db, 30000001, "m@ucalgary.ca").await;
        let employer_id = seed_employer(&db, "hr@acme.com").await;
        let repo = EmployerVerificationRepository::new(db.pool());

        let row = repo
            .create(&NewEmployerVerification {
                moderator_ucid: 30000001,
                employer_id,
                status: VerificationStatus::Pending,
                verified_on: date("2026-08-01"),
            })
            .await
            .unwrap();
        assert_eq!(repo.list_pending().await.unwrap().len(), 1);

        repo.resolve(row.id, VerificationStatus::Rejected, date("2026-08-02"))
            .await
            .unwrap();
        assert!(repo.list_pending().await.unwrap().is_empty());
    }
}
