//! Borrow-list endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::borrow::{BorrowEntry, CreateBorrowEntry},
};

/// Create a new borrow-list entry
#[utoipa::path(
    post,
    path = "/borrowlist/",
    tag = "borrowlist",
    params(CreateBorrowEntry),
    responses(
        (status = 200, description = "Borrow entry created", body = BorrowEntry),
        (status = 400, description = "user_id or book_id does not reference an existing row", body = crate::error::ErrorResponse),
        (status = 422, description = "Missing user_id or book_id", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_borrow_entry(
    State(state): State<crate::AppState>,
    Query(entry): Query<CreateBorrowEntry>,
) -> AppResult<Json<BorrowEntry>> {
    entry.validate()?;

    let (Some(user_id), Some(book_id)) = (entry.user_id, entry.book_id) else {
        return Err(AppError::Validation(
            "user_id and book_id are required".to_string(),
        ));
    };

    let created = state.services.borrows.create_entry(user_id, book_id).await?;
    Ok(Json(created))
}

/// Get all borrow entries for a user
#[utoipa::path(
    get,
    path = "/borrowlist/{user_id}",
    tag = "borrowlist",
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Active borrow entries for the user", body = Vec<BorrowEntry>),
        (status = 404, description = "User not found or no book being borrowed by the user", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user_borrows(
    State(state): State<crate::AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<BorrowEntry>>> {
    let entries = state.services.borrows.get_user_borrows(user_id).await?;
    Ok(Json(entries))
}
