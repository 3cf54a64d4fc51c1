//! Moderator repository for jobdesk.

use sqlx::SqlitePool;

use super::types::Moderator;
use crate::{JobdeskError, Result};

/// Repository for moderator grants.
pub struct ModeratorRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ModeratorRepository<'a> {
    /// Create a new ModeratorRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Grant moderator capability to a student.
    pub async fn create(&self, ucid: i64) -> Result<Moderator> {
        sqlx::query("INSERT INTO moderators (ucid) VALUES (?)")
            .bind(ucid)
            .execute(self.pool)
            .await
            .map_err(|e| JobdeskError::Database(e.to_string()))?;

        self.get(ucid)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("moderator".to_string()))
    }

    /// Get a moderator by UCID.
    pub async fn get(&self, ucid: i64) -> Result<Option<Moderator>> {
        let result = sqlx::query_as::<_, Moderator>(
            "SELECT ucid, granted_at FROM moderators WHERE ucid = ?",
        )
        .bind(ucid)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Check if a student holds a moderator grant.
    pub async fn exists(&self, ucid: i64) -> Result<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM moderators WHERE ucid = ?)")
                .bind(ucid)
                .fetch_one(self.pool)
                .await
                .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(exists.0)
    }

    /// Pick any moderator, lowest UCID first.
    pub async fn any(&self) -> Result<Option<Moderator>> {
        let result = sqlx::query_as::<_, Moderator>(
            "SELECT ucid, granted_at FROM moderators ORDER BY ucid LIMIT 1",
        )
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Pick any moderator other than the given student.
    ///
    /// The choice only needs to be some existing independent moderator;
    /// lowest UCID keeps it deterministic.
    pub async fn any_other_than(&self, ucid: i64) -> Result<Option<Moderator>> {
        let result = sqlx::query_as::<_, Moderator>(
            "SELECT ucid, granted_at FROM moderators WHERE ucid != ? ORDER BY ucid LIMIT 1",
        )
        .bind(ucid)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Count all moderators.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM moderators")
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
        AccountRepository, AccountRole, NewAccount, NewStudent, StudentRepository,
    };
    use crate::Database;

    async fn seed_student(db: &Database, ucid: i64, email: &str) {
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
                name: "Test Student".to_string(),
                major: None,
                graduation_year: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_and_exists() {
        let db = Database::open_in_memory().await.unwrap();
        seed_student(&db, 30000001, "a@ucalgary.ca").await;
        let repo = ModeratorRepository::new(db.pool());

        assert!(!repo.exists(30000001).await.unwrap());

        let moderator = repo.create(30000001).await.unwrap();
        assert_eq!(moderator.ucid, 30000001);
        assert!(repo.exists(30000001).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_grant_rejected() {
        let db = Database::open_in_memory().await.unwrap();
        seed_student(&db, 30000001, "a@ucalgary.ca").await;
        let repo = ModeratorRepository::new(db.pool());

        repo.create(30000001).await.unwrap();
        assert!(repo.create(30000001).await.is_err());
    }

    #[tokio::test]
    async fn test_any_other_than() {
        let db = Database::open_in_memory().await.unwrap();
        seed_student(&db, 30000001, "a@ucalgary.ca").await;
        seed_student(&db, 30000002, "b@ucalgary.ca").await;
        let repo = ModeratorRepository::new(db.pool());

        assert!(repo.any_other_than(30000001).await.unwrap().is_none());

        repo.create(30000001).await.unwrap();

        // The only moderator is the subject itself
        assert!(repo.any_other_than(30000001).await.unwrap().is_none());

        let other = repo.any_other_than(30000002).await.unwrap().unwrap();
        assert_eq!(other.ucid, 30000001);

        repo.create(30000002).await.unwrap();
        let other = repo.any_other_than(30000002).await.unwrap().unwrap();
        assert_eq!(other.ucid, 30000001);
    }

    #[tokio::test]
    async fn test_grant_requires_student() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = ModeratorRepository::new(db.pool());

        assert!(repo.create(30000001).await.is_err());
    }
}
