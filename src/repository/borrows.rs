//! Borrow-list repository for database operations

use sqlx::SqlitePool;

use crate::{error::AppResult, models::borrow::BorrowEntry};

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: SqlitePool,
}

impl BorrowsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all active borrow entries for a user
    pub async fn get_by_user(&self, user_id: i64) -> AppResult<Vec<BorrowEntry>> {
        let entries = sqlx::query_as::<_, BorrowEntry>(
            "SELECT id, user_id, book_id FROM borrowlist WHERE user_id = ?1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Get a borrow entry by (user_id, book_id)
    pub async fn get_by_user_and_book(
        &self,
        user_id: i64,
        book_id: i64,
    ) -> AppResult<Option<BorrowEntry>> {
        let entry = sqlx::query_as::<_, BorrowEntry>(
            "SELECT id, user_id, book_id FROM borrowlist WHERE user_id = ?1 AND book_id = ?2",
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Insert a new borrow entry, returning the stored row with its assigned ID
    pub async fn create(&self, user_id: i64, book_id: i64) -> AppResult<BorrowEntry> {
        let created = sqlx::query_as::<_, BorrowEntry>(
            r#"
            INSERT INTO borrowlist (user_id, book_id)
            VALUES (?1, ?2)
            RETURNING id, user_id, book_id
            "#,
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
