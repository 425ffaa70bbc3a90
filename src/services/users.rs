//! Member management service and history aggregation

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        ensure_not_blank,
        loan::UserLoanHistoryResponse,
        user::{CreateUser, UpdateUser, User},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new member
    pub async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        user.validate()?;
        ensure_not_blank("User name", &user.name)?;

        let created = self.repository.users.create(&user).await?;
        tracing::info!(
            "Users: created user id={} name={:?}",
            created.id,
            created.name
        );
        Ok(created)
    }

    /// List all members
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Rename a member; the non-blank rule applies on rename as on creation
    pub async fn update_user_name(&self, id: i32, update: UpdateUser) -> AppResult<User> {
        update.validate()?;
        ensure_not_blank("User name", &update.name)?;
        self.repository.users.update_name(id, &update.name).await
    }

    /// Delete a member by exact name
    pub async fn delete_user(&self, name: &str) -> AppResult<()> {
        self.repository.users.delete_by_name(name).await?;
        tracing::info!("Users: deleted user name={:?}", name);
        Ok(())
    }

    /// Loan history view for one member
    pub async fn loan_history(&self, user_id: i32) -> AppResult<UserLoanHistoryResponse> {
        let user = self.repository.users.get_by_id(user_id).await?;
        let histories = self.repository.loans.get_user_histories(user.id).await?;
        Ok(UserLoanHistoryResponse::project(&user, &histories))
    }

    /// Loan history views for every member
    pub async fn loan_histories(&self) -> AppResult<Vec<UserLoanHistoryResponse>> {
        let users = self.repository.users.list().await?;

        let mut result = Vec::with_capacity(users.len());
        for user in &users {
            let histories = self.repository.loans.get_user_histories(user.id).await?;
            result.push(UserLoanHistoryResponse::project(user, &histories));
        }
        Ok(result)
    }
}
