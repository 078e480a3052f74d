use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use crate::book::{Book, BookRequest};
use crate::error::StoreError;
use crate::store::BookStore;

#[derive(Debug, Clone)]
pub struct MemoryBookStoreConfig {
    pub max_books: usize,
}

impl Default for MemoryBookStoreConfig {
    fn default() -> Self {
        Self { max_books: 10_000 }
    }
}

struct StoreState {
    books: BTreeMap<u32, Book>,
    /// Next id to hand out. Ids are never reused.
    next_id: u32,
}

impl StoreState {
    fn isbn_owner(&self, isbn: &str) -> Option<u32> {
        self.books
            .values()
            .find(|book| book.isbn == isbn)
            .map(|book| book.id)
    }
}

/// In-memory [`BookStore`].
pub struct MemoryBookStore {
    state: Mutex<StoreState>,
    config: MemoryBookStoreConfig,
    closed: AtomicBool,
}

impl MemoryBookStore {
    #[must_use]
    pub fn new(config: MemoryBookStoreConfig) -> Self {
        Self {
            state: Mutex::new(StoreState {
                books: BTreeMap::new(),
                next_id: 1,
            }),
            config,
            closed: AtomicBool::new(false),
        }
    }

    fn check_closed(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::Closed);
        }
        Ok(())
    }
}

impl Default for MemoryBookStore {
    fn default() -> Self {
        Self::new(MemoryBookStoreConfig::default())
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, request: BookRequest) -> Result<Book, StoreError> {
        self.check_closed()?;

        let mut state = self.state.lock().await;
        if state.books.len() >= self.config.max_books {
            return Err(StoreError::CapacityExceeded {
                max: self.config.max_books,
            });
        }
        if state.isbn_owner(&request.isbn).is_some() {
            return Err(StoreError::DuplicateIsbn(request.isbn));
        }

        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::Other("id space exhausted".to_string()))?;
        let book = Book::from_request(id, request);
        state.books.insert(id, book.clone());
        tracing::debug!(id, "book inserted");
        Ok(book)
    }

    async fn get(&self, id: u32) -> Result<Option<Book>, StoreError> {
        self.check_closed()?;
        Ok(self.state.lock().await.books.get(&id).cloned())
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, StoreError> {
        self.check_closed()?;
        let state = self.state.lock().await;
        Ok(state
            .isbn_owner(isbn)
            .and_then(|id| state.books.get(&id).cloned()))
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        self.check_closed()?;
        Ok(self.state.lock().await.books.values().cloned().collect())
    }

    async fn replace(&self, id: u32, request: BookRequest) -> Result<Option<Book>, StoreError> {
        self.check_closed()?;

        let mut state = self.state.lock().await;
        if !state.books.contains_key(&id) {
            return Ok(None);
        }
        if state
            .isbn_owner(&request.isbn)
            .is_some_and(|owner| owner != id)
        {
            return Err(StoreError::DuplicateIsbn(request.isbn));
        }

        let Some(book) = state.books.get_mut(&id) else {
            return Ok(None);
        };
        book.apply(request);
        Ok(Some(book.clone()))
    }

    async fn delete(&self, id: u32) -> Result<bool, StoreError> {
        self.check_closed()?;
        let removed = self.state.lock().await.books.remove(&id).is_some();
        if removed {
            tracing::debug!(id, "book deleted");
        }
        Ok(removed)
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.closed.store(true, Ordering::Release);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(isbn: &str) -> BookRequest {
        BookRequest {
            title: "Dune".to_string(),
            isbn: isbn.to_string(),
            genre: "sci-fi".to_string(),
            author: "Frank Herbert".to_string(),
            price: 20,
        }
    }

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let store = MemoryBookStore::default();
        let a = store.insert(request("isbn-a")).await.unwrap();
        let b = store.insert(request("isbn-b")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryBookStore::default();
        let a = store.insert(request("isbn-a")).await.unwrap();
        assert!(store.delete(a.id).await.unwrap());
        let b = store.insert(request("isbn-b")).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_isbn() {
        let store = MemoryBookStore::default();
        store.insert(request("isbn-a")).await.unwrap();
        let err = store.insert(request("isbn-a")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateIsbn(isbn) if isbn == "isbn-a"));
    }

    #[tokio::test]
    async fn replace_allows_keeping_own_isbn() {
        let store = MemoryBookStore::default();
        let book = store.insert(request("isbn-a")).await.unwrap();

        let mut changed = request("isbn-a");
        changed.price = 25;
        let updated = store.replace(book.id, changed).await.unwrap().unwrap();
        assert_eq!(updated.price, 25);
        assert_eq!(updated.id, book.id);
    }

    #[tokio::test]
    async fn replace_rejects_isbn_of_another_book() {
        let store = MemoryBookStore::default();
        store.insert(request("isbn-a")).await.unwrap();
        let b = store.insert(request("isbn-b")).await.unwrap();

        let err = store.replace(b.id, request("isbn-a")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateIsbn(_)));
    }

    #[tokio::test]
    async fn missing_ids() {
        let store = MemoryBookStore::default();
        assert!(store.get(9).await.unwrap().is_none());
        assert!(store.replace(9, request("x")).await.unwrap().is_none());
        assert!(!store.delete(9).await.unwrap());
    }

    #[tokio::test]
    async fn capacity_is_enforced() {
        let store = MemoryBookStore::new(MemoryBookStoreConfig { max_books: 1 });
        store.insert(request("isbn-a")).await.unwrap();
        let err = store.insert(request("isbn-b")).await.unwrap_err();
        assert!(matches!(err, StoreError::CapacityExceeded { max: 1 }));
    }

    #[tokio::test]
    async fn list_is_in_id_order() {
        let store = MemoryBookStore::default();
        for isbn in ["c", "a", "b"] {
            store.insert(request(isbn)).await.unwrap();
        }
        let ids: Vec<u32> = store.list().await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            store.find_by_isbn("a").await.unwrap().map(|b| b.id),
            Some(2)
        );
    }

    #[tokio::test]
    async fn closed_store_rejects_calls() {
        let store = MemoryBookStore::default();
        store.close().await.unwrap();
        assert!(matches!(store.list().await, Err(StoreError::Closed)));
        assert!(matches!(
            store.insert(request("a")).await,
            Err(StoreError::Closed)
        ));
    }
}
