//! Loan histories repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::loan::UserLoanHistory,
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Loan histories for a user, in insertion order
    pub async fn get_user_histories(&self, user_id: i32) -> AppResult<Vec<UserLoanHistory>> {
        let histories = sqlx::query_as::<_, UserLoanHistory>(
            "SELECT * FROM user_loan_histories WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(histories)
    }

    /// Record a loan. The partial unique index on un-returned rows makes the
    /// "title not already on loan" check atomic with the insert: a conflicting
    /// row turns the statement into a no-op, reported as Conflict.
    pub async fn create(&self, user_id: i32, book_name: &str) -> AppResult<UserLoanHistory> {
        sqlx::query_as::<_, UserLoanHistory>(
            r#"
            INSERT INTO user_loan_histories (user_id, book_name, is_return)
            VALUES ($1, $2, FALSE)
            ON CONFLICT (book_name) WHERE NOT is_return DO NOTHING
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(book_name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::Conflict(format!("Book '{}' is already on loan", book_name)))
    }

    /// Mark the earliest un-returned loan of this book by this user as
    /// returned. No matching row means there is nothing to return.
    pub async fn return_loan(&self, user_id: i32, book_name: &str) -> AppResult<UserLoanHistory> {
        sqlx::query_as::<_, UserLoanHistory>(
            r#"
            UPDATE user_loan_histories
            SET is_return = TRUE, return_date = NOW()
            WHERE id = (
                SELECT id FROM user_loan_histories
                WHERE user_id = $1 AND book_name = $2 AND NOT is_return
                ORDER BY id
                LIMIT 1
            )
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(book_name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No active loan of '{}' for this user", book_name))
        })
    }
}
