//! Catalog management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook, UpdateBook},
        ensure_not_blank,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new book in the catalog
    pub async fn register_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;
        ensure_not_blank("Book name", &book.name)?;

        let created = self.repository.books.create(&book).await?;
        tracing::info!(
            "Catalog: registered book id={} name={:?}",
            created.id,
            created.name
        );
        Ok(created)
    }

    /// Get a book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// List the catalog
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Rename a book; the non-blank rule applies on rename as on creation
    pub async fn rename_book(&self, id: i32, update: UpdateBook) -> AppResult<Book> {
        update.validate()?;
        ensure_not_blank("Book name", &update.name)?;
        self.repository.books.update_name(id, &update.name).await
    }

    /// Remove a book from the catalog
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Catalog: deleted book id={}", id);
        Ok(())
    }
}
