//! Borrow-list model and related types
//!
//! A borrow entry's existence means an active borrow. There is no
//! return/checkout timestamp; entries disappear only when their user or
//! book is deleted.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Borrow-list entry from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowEntry {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
}

/// Create borrow-list entry request (query parameters)
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CreateBorrowEntry {
    /// Borrowing user, must exist
    #[validate(required(message = "user_id is required"))]
    pub user_id: Option<i64>,
    /// Borrowed book, must exist
    #[validate(required(message = "book_id is required"))]
    pub book_id: Option<i64>,
}
