//! Loan lifecycle service

use validator::Validate;

use crate::{
    error::AppResult,
    models::loan::{LoanRequest, UserLoanHistory},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Loan a book to a member. The history row snapshots the catalog name
    /// at loan time.
    pub async fn loan_book(&self, request: LoanRequest) -> AppResult<UserLoanHistory> {
        request.validate()?;

        let book = self.repository.books.get_by_name(&request.book_name).await?;
        let user = self.repository.users.get_by_name(&request.user_name).await?;
        let history = self.repository.loans.create(user.id, &book.name).await?;

        tracing::info!(
            "Loans: user id={} loaned book name={:?} (history id={})",
            user.id,
            history.book_name,
            history.id
        );
        Ok(history)
    }

    /// Return a loaned book
    pub async fn return_book(&self, request: LoanRequest) -> AppResult<UserLoanHistory> {
        request.validate()?;

        let user = self.repository.users.get_by_name(&request.user_name).await?;
        let history = self
            .repository
            .loans
            .return_loan(user.id, &request.book_name)
            .await?;

        tracing::info!(
            "Loans: user id={} returned book name={:?} (history id={})",
            user.id,
            history.book_name,
            history.id
        );
        Ok(history)
    }
}
