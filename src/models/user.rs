//! User model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// User model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub fullname: String,
}

/// Create user request (query parameters)
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CreateUser {
    /// Unique login name
    #[serde(default)]
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    /// Display name
    #[serde(default)]
    pub fullname: String,
}
