//! Student repository for jobdesk.

use sqlx::SqlitePool;

use super::types::{NewStudent, Student};
use crate::{JobdeskError, Result};

/// Repository for student rows.
pub struct StudentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StudentRepository<'a> {
    /// Create a new StudentRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new student.
    pub async fn create(&self, new_student: &NewStudent) -> Result<Student> {
        sqlx::query(
            "INSERT INTO students (ucid, account_id, name, major, graduation_year)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(new_student.ucid)
        .bind(new_student.account_id)
        .bind(&new_student.name)
        .bind(&new_student.major)
        .bind(new_student.graduation_year)
        .execute(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        self.get(new_student.ucid)
            .await?
            .ok_or_else(|| JobdeskError::NotFound("student".to_string()))
    }

    /// Get a student by UCID.
    pub async fn get(&self, ucid: i64) -> Result<Option<Student>> {
        let result = sqlx::query_as::<_, Student>(
            "SELECT ucid, account_id, name, major, graduation_year
             FROM students WHERE ucid = ?",
        )
        .bind(ucid)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| JobdeskError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Check if a UCID is already taken.
    pub async fn exists(&self, ucid: i64) -> Result<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM students WHERE ucid = ?)")
                .bind(ucid)
                .fetch_one(self.pool)
                .await
                .map_err(|e| JobdeskError::Database(e.to_string()))?;
        Ok(exists.0)
    }

    /// Count all students.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
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
                role: AccountRole::Student,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_and_get_student() {
        let db = Database::open_in_memory().await.unwrap();
        let account_id = seed_account(&db, "sam@ucalgary.ca").await;
        let repo = StudentRepository::new(db.pool());

        let student = repo
            .create(&NewStudent {
                ucid: 30000001,
                account_id,
                name: "Sam Doe".to_string(),
                major: Some("Computer Science".to_string()),
                graduation_year: Some(2027),
            })
            .await
            .unwrap();

        assert_eq!(student.ucid, 30000001);
        assert_eq!(student.name, "Sam Doe");
        assert_eq!(student.major.as_deref(), Some("Computer Science"));

        assert!(repo.exists(30000001).await.unwrap());
        assert!(!repo.exists(30000002).await.unwrap());
        assert!(repo.get(30000002).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_ucid_rejected() {
        let db = Database::open_in_memory().await.unwrap();
        let first = seed_account(&db, "a@ucalgary.ca").await;
        let second = seed_account(&db, "b@ucalgary.ca").await;
        let repo = StudentRepository::new(db.pool());

        repo.create(&NewStudent {
            ucid: 30000001,
            account_id: first,
            name: "A".to_string(),
            major: None,
            graduation_year: None,
        })
        .await
        .unwrap();

        let result = repo
            .create(&NewStudent {
                ucid: 30000001,
                account_id: second,
                name: "B".to_string(),
                major: None,
                graduation_year: None,
            })
            .await;
        assert!(result.is_err());
    }
}
