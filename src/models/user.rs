//! User (member) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// User model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: Option<i32>,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "User name must not be blank"))]
    pub name: String,
    pub age: Option<i32>,
}

/// Update user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 1, message = "User name must not be blank"))]
    pub name: String,
}

/// Delete user query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct DeleteUserQuery {
    /// Exact user name
    pub name: String,
}
