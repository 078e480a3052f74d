use async_trait::async_trait;

use crate::book::{Book, BookRequest};
use crate::error::StoreError;

/// Persistence for books. Ids are assigned by the store.
///
/// Implementations must reject an insert or replace whose isbn already
/// belongs to another book with [`StoreError::DuplicateIsbn`].
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn insert(&self, request: BookRequest) -> Result<Book, StoreError>;
    async fn get(&self, id: u32) -> Result<Option<Book>, StoreError>;
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, StoreError>;
    async fn list(&self) -> Result<Vec<Book>, StoreError>;

    /// Returns `None` if no book has `id`.
    async fn replace(&self, id: u32, request: BookRequest) -> Result<Option<Book>, StoreError>;

    /// Returns `false` if no book has `id`.
    async fn delete(&self, id: u32) -> Result<bool, StoreError>;

    async fn close(&self) -> Result<(), StoreError>;
}
