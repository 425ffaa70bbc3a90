//! Loan endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::loan::{LoanRequest, UserLoanHistory},
};

/// Loan response
#[derive(Serialize, ToSchema)]
pub struct LoanResponse {
    /// History record ID
    pub id: i32,
    /// Name of the loaned book
    pub book_name: String,
    /// Status message
    pub message: String,
}

/// Return response
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    /// Return status
    pub status: String,
    /// The closed history record
    pub loan: UserLoanHistory,
}

/// Loan a book to a user
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 201, description = "Loan created", body = LoanResponse),
        (status = 404, description = "User or book not found"),
        (status = 409, description = "Book already on loan")
    )
)]
pub async fn loan_book(
    State(state): State<crate::AppState>,
    Json(request): Json<LoanRequest>,
) -> AppResult<(StatusCode, Json<LoanResponse>)> {
    let history = state.services.loans.loan_book(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(LoanResponse {
            id: history.id,
            book_name: history.book_name,
            message: "Book loaned successfully".to_string(),
        }),
    ))
}

/// Return a loaned book
#[utoipa::path(
    post,
    path = "/loans/return",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 200, description = "Book returned", body = ReturnResponse),
        (status = 404, description = "User not found or no active loan")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Json(request): Json<LoanRequest>,
) -> AppResult<Json<ReturnResponse>> {
    let history = state.services.loans.return_book(request).await?;

    Ok(Json(ReturnResponse {
        status: "returned".to_string(),
        loan: history,
    }))
}
