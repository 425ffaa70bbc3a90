//! Loan history model and per-user history views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::user::User;

/// Loan history row from database; one row per loan event.
/// `book_name` is a snapshot taken at loan time, not a live reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserLoanHistory {
    pub id: i32,
    pub user_id: i32,
    pub book_name: String,
    pub is_return: bool,
    pub loan_date: Option<DateTime<Utc>>,
    pub return_date: Option<DateTime<Utc>>,
}

/// Loan / return request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoanRequest {
    #[validate(length(min = 1, message = "User name must not be blank"))]
    pub user_name: String,
    #[validate(length(min = 1, message = "Book name must not be blank"))]
    pub book_name: String,
}

/// One book entry in a user's loan history view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookHistoryResponse {
    pub name: String,
    pub is_return: bool,
}

impl From<&UserLoanHistory> for BookHistoryResponse {
    fn from(history: &UserLoanHistory) -> Self {
        BookHistoryResponse {
            name: history.book_name.clone(),
            is_return: history.is_return,
        }
    }
}

/// Per-user loan history view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserLoanHistoryResponse {
    pub name: String,
    pub books: Vec<BookHistoryResponse>,
}

impl UserLoanHistoryResponse {
    /// Project a loaded user and its history rows into the response view,
    /// preserving insertion order
    pub fn project(user: &User, histories: &[UserLoanHistory]) -> Self {
        UserLoanHistoryResponse {
            name: user.name.clone(),
            books: histories.iter().map(BookHistoryResponse::from).collect(),
        }
    }
}
