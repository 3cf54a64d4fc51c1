//! Employer repository for jobdesk.

use sqlx::SqlitePool;

use super::types::{Employer, NewEmployer, VerificationStatus};
use crate::{JobdeskError, Result};

/// Repository for employer rows.
pub struct EmployerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EmployerRepository<'a> {
    /// Create a new EmployerRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new employer with status Pending.
    ///
    /// Returns the created employer with the assigned ID.
    pub async fn create(&self, new_employer: &NewEmployer) -> Result<Employer> {
        let result = sqlx::query(
            "INSERT INTO employers (account_id, company_name, industry, website, description)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(new_employer.account_id)
        .bind(&new_employer.company_name)
        .bind(&new_employer.industry)
        .bind(&new_employer.website)
        .bind(&new_employer.description)
        .execute(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get(id)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("employer".to_string()))
    }

    /// Get an employer by ID.
    pub async fn get(&self, id: i64) -> Result<Option<Employer>> {
        let result = sqlx::query_as::<_, Employer>(
            "SELECT id, account_id, company_name, industry, website, description, verification_status
             FROM employers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Check if an employer exists.
    pub async fn exists(&self, id: i64) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM employers WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(exists.0)
    }

    /// Set the denormalized verification status.
    pub async fn set_status(&self, id: i64, status: VerificationStatus) -> Result<bool> {
        let result = sqlx::query("UPDATE employers SET verification_status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count all employers.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employers")
            .fetch_one(self.pool)
            .await
            .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{AccountRepository, AccountRole, NewAccount};
    use crate::Database;

    async fn seed_account(db: &Database, email: &str) -> i64 {
        AccountRepository::new(db.pool())
            .create(&NewAccount {
                email: email.to_string(),
                password: "hash".to_string(),
                role: AccountRole::Employer,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_defaults_to_pending() {
        let db = Database::open_in_memory().await.unwrap();
        let account_id = seed_account(&db, "hr@acme.com").await;
        let repo = EmployerRepository::new(db.pool());

        let employer = repo
            .create(&NewEmployer {
                account_id,
                company_name: "Acme Corp".to_string(),
                industry: Some("Manufacturing".to_string()),
                website: Some("https://acme.example.com".to_string()),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(employer.id, 1);
        assert_eq!(employer.company_name, "Acme Corp");
        assert_eq!(employer.verification_status, VerificationStatus::Pending);
    }

    #[tokio::test]
    async fn test_set_status() {
        let db = Database::open_in_memory().await.unwrap();
        let account_id = seed_account(&db, "hr@acme.com").await;
        let repo = EmployerRepository::new(db.pool());

        let employer = repo
            .create(&NewEmployer {
                account_id,
                company_name: "Acme Corp".to_string(),
                industry: None,
                website: None,
                description: None,
            })
            .await
            .unwrap();

        assert!(repo
            .set_status(employer.id, VerificationStatus::Approved)
            .await
            .unwrap());

        let reloaded = repo.get(employer.id).await.unwrap().unwrap();
        assert_eq!(reloaded.verification_status, VerificationStatus::Approved);

        assert!(!repo.set_status(999, VerificationStatus::Approved).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists() {
        let db = Database::open_in_memory().await.unwrap();
        let account_id = seed_account(&db, "hr@acme.com").await;
        let repo = EmployerRepository::new(db.pool());

        assert!(!repo.exists(1).await.unwrap());
        repo.create(&NewEmployer {
            account_id,
            company_name: "Acme Corp".to_string(),
            industry: None,
            website: None,
            description: None,
        })
        .await
        .unwrap();
        assert!(repo.exists(1).await.unwrap());
    }
}
