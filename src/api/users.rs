//! User management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        loan::UserLoanHistoryResponse,
        user::{CreateUser, DeleteUserQuery, UpdateUser, User},
    },
};

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<crate::AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Blank name")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    Json(user): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let created = state.services.users.create_user(user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Rename a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Blank name"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(update): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = state.services.users.update_user_name(id, update).await?;
    Ok(Json(user))
}

/// Delete a user by exact name
#[utoipa::path(
    delete,
    path = "/users",
    tag = "users",
    params(DeleteUserQuery),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    Query(query): Query<DeleteUserQuery>,
) -> AppResult<StatusCode> {
    state.services.users.delete_user(&query.name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Loan history for one user
#[utoipa::path(
    get,
    path = "/users/{id}/history",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User's loan history", body = UserLoanHistoryResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_history(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserLoanHistoryResponse>> {
    let history = state.services.users.loan_history(id).await?;
    Ok(Json(history))
}

/// Loan histories for every user
#[utoipa::path(
    get,
    path = "/users/histories",
    tag = "users",
    responses(
        (status = 200, description = "Loan history per user", body = Vec<UserLoanHistoryResponse>)
    )
)]
pub async fn list_user_histories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<UserLoanHistoryResponse>>> {
    let histories = state.services.users.loan_histories().await?;
    Ok(Json(histories))
}
