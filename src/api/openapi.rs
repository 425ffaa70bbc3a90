//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "0.1.0",
        description = "Library Lending System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Users
        users::list_users,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::get_user_history,
        users::list_user_histories,
        // Loans
        loans::loan_book,
        loans::return_book,
    ),
    components(
        schemas(
            // Catalog
            crate::models::book::Book,
            crate::models::book::BookType,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Loans
            crate::models::loan::UserLoanHistory,
            crate::models::loan::LoanRequest,
            crate::models::loan::BookHistoryResponse,
            crate::models::loan::UserLoanHistoryResponse,
            loans::LoanResponse,
            loans::ReturnResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog management"),
        (name = "users", description = "User management and loan histories"),
        (name = "loans", description = "Loan lifecycle")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
