//! Request handlers for the catalog, one per route.
//!
//! Each handler takes already-routed inputs (path id, raw JSON body) and
//! returns a [`Reply`]; binding them to a server is left to the caller.

use serde_json::{Map, Value};
use verdict_http::{AdapterConfig, Reply, Responder, StatusCode};
use verdict_outcome::GoodTag;

use crate::book::{Book, BookRequest};
use crate::service::BookService;
use crate::validation::{self, FieldError};

/// Data carried in a catalog reply.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum BookBody {
    Book(Book),
    Books(Vec<Book>),
    FieldErrors(Vec<Map<String, Value>>),
}

pub struct BookEndpoints {
    service: BookService,
    responder: Responder,
}

impl BookEndpoints {
    pub fn new(service: BookService, config: AdapterConfig) -> Self {
        Self {
            service,
            responder: Responder::new(config),
        }
    }

    /// `POST /api/books`
    pub async fn create_book(&self, body: &[u8]) -> Reply<BookBody> {
        let request = match self.parse_request(body) {
            Ok(request) => request,
            Err(reply) => return reply,
        };

        let outcome = self.service.create(request).await;
        self.responder
            .respond(outcome.map_good(BookBody::Book), GoodTag::Created)
    }

    /// `GET /api/books/{id}`
    pub async fn get_book(&self, id: u32) -> Reply<BookBody> {
        let outcome = self.service.get_one(id).await;
        self.responder
            .respond(outcome.map_good(BookBody::Book), GoodTag::Ok)
    }

    /// `GET /api/books`
    pub async fn list_books(&self) -> Reply<BookBody> {
        let outcome = self.service.get_all().await;
        self.responder
            .respond(outcome.map_good(BookBody::Books), GoodTag::Ok)
    }

    /// `PUT /api/books/{id}`
    pub async fn update_book(&self, id: u32, body: &[u8]) -> Reply<BookBody> {
        let request = match self.parse_request(body) {
            Ok(request) => request,
            Err(reply) => return reply,
        };

        let outcome = self.service.update(id, request).await;
        self.responder
            .respond(outcome.map_good(BookBody::Book), GoodTag::Ok)
    }

    /// `DELETE /api/books/{id}`
    pub async fn delete_book(&self, id: u32) -> Reply<BookBody> {
        let outcome = self.service.remove(id).await;
        self.responder.respond_tagged(outcome)
    }

    /// Decode and validate a request body. Undecodable bodies are 422,
    /// rule violations are 400 with the failed fields as data.
    fn parse_request(&self, body: &[u8]) -> Result<BookRequest, Reply<BookBody>> {
        let request: BookRequest = serde_json::from_slice(body).map_err(|err| {
            tracing::debug!(error = %err, "undecodable book request");
            self.responder
                .send_status(StatusCode::UNPROCESSABLE_ENTITY)
        })?;

        let naming = self.responder.config().field_naming;
        validation::check(&request).map_err(|bad| {
            self.responder.send_bad_with_payload(
                bad.map_payload(|errors: Vec<FieldError>| {
                    BookBody::FieldErrors(validation::map_errors(&errors, naming))
                }),
            )
        })?;

        Ok(request)
    }
}
