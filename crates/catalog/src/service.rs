use std::sync::Arc;

use verdict_outcome::{BadOutcome, BadTag, GoodOutcome, GoodTag, Outcome};

use crate::book::{Book, BookRequest};
use crate::error::StoreError;
use crate::store::BookStore;

pub type BookOutcome = Outcome<Book, BadOutcome>;

/// Catalog operations. Every failure comes back as a bad outcome; store
/// faults are logged here and reported as `Unexpected`.
#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: BookRequest) -> BookOutcome {
        match self.store.find_by_isbn(&request.isbn).await {
            Ok(Some(_)) => return duplicate_isbn(&request.isbn),
            Ok(None) => {}
            Err(err) => return store_failure("create", err),
        }

        match self.store.insert(request).await {
            Ok(book) => {
                tracing::info!(id = book.id, "book created");
                Outcome::good(book)
            }
            Err(err) => store_failure("create", err),
        }
    }

    pub async fn update(&self, id: u32, request: BookRequest) -> BookOutcome {
        match self.store.replace(id, request).await {
            Ok(Some(book)) => Outcome::good(book),
            Ok(None) => not_found(id),
            Err(err) => store_failure("update", err),
        }
    }

    pub async fn get_all(&self) -> Outcome<Vec<Book>, BadOutcome> {
        match self.store.list().await {
            Ok(books) => Outcome::good(books),
            Err(err) => store_failure("get_all", err),
        }
    }

    pub async fn get_one(&self, id: u32) -> BookOutcome {
        match self.store.get(id).await {
            Ok(Some(book)) => Outcome::good(book),
            Ok(None) => not_found(id),
            Err(err) => store_failure("get_one", err),
        }
    }

    pub async fn remove(&self, id: u32) -> Outcome<GoodOutcome, BadOutcome> {
        match self.store.delete(id).await {
            Ok(true) => {
                tracing::info!(id, "book removed");
                Outcome::good(GoodOutcome::new(GoodTag::Deleted))
            }
            Ok(false) => not_found(id),
            Err(err) => store_failure("remove", err),
        }
    }
}

fn not_found<G>(id: u32) -> Outcome<G, BadOutcome> {
    Outcome::bad(BadOutcome::with_reason(
        BadTag::NotFound,
        format!("book {id} not found"),
    ))
}

fn duplicate_isbn<G>(isbn: &str) -> Outcome<G, BadOutcome> {
    Outcome::bad(BadOutcome::with_reason(
        BadTag::Conflict,
        format!("Duplicate isbn: {isbn}"),
    ))
}

fn store_failure<G>(op: &'static str, err: StoreError) -> Outcome<G, BadOutcome> {
    match err {
        StoreError::DuplicateIsbn(isbn) => duplicate_isbn(&isbn),
        StoreError::CapacityExceeded { max } => Outcome::bad(BadOutcome::with_reason(
            BadTag::Excessive,
            format!("catalog is full ({max} books)"),
        )),
        err => {
            tracing::error!(op, error = %err, "book store failure");
            Outcome::bad(BadOutcome::new(BadTag::Unexpected))
        }
    }
}
