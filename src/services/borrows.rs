//! Borrow-list management service

use crate::{
    error::{AppError, AppResult},
    models::borrow::BorrowEntry,
    repository::Repository,
};

/// Detail message returned when a borrow lookup yields nothing. An unknown
/// user and a user with zero active borrows produce the same response;
/// callers cannot tell the two apart from the status code alone.
pub const NO_BORROWS_DETAIL: &str = "User not found or no book being borrowed by the user";

#[derive(Clone)]
pub struct BorrowsService {
    repository: Repository,
}

impl BorrowsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new borrow entry linking an existing user and book
    pub async fn create_entry(&self, user_id: i64, book_id: i64) -> AppResult<BorrowEntry> {
        if !self.repository.users.exists(user_id).await? {
            return Err(AppError::BadRequest(format!(
                "user_id {} does not reference an existing user",
                user_id
            )));
        }

        if !self.repository.books.exists(book_id).await? {
            return Err(AppError::BadRequest(format!(
                "book_id {} does not reference an existing book",
                book_id
            )));
        }

        self.repository.borrows.create(user_id, book_id).await
    }

    /// Get all active borrow entries for a user.
    ///
    /// An empty result is a 404 regardless of whether the user exists.
    pub async fn get_user_borrows(&self, user_id: i64) -> AppResult<Vec<BorrowEntry>> {
        let entries = self.repository.borrows.get_by_user(user_id).await?;

        if entries.is_empty() {
            return Err(AppError::NotFound(NO_BORROWS_DETAIL.to_string()));
        }

        Ok(entries)
    }
}
