use bytes::Bytes;
use serde::Serialize;

use crate::error::HttpError;
use crate::status::StatusCode;

/// JSON body sent for every reply except 204.
///
/// `success` is derived from `code` and cannot disagree with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    code: u16,
    message: String,
    data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: status.is_success(),
            code: status.as_u16(),
            message: message.into(),
            data,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// What the adapter hands to the transport: no body for 204, JSON otherwise.
///
/// A JSON reply's status is read from `body.code`.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    NoContent,
    Json {
        content_type: String,
        body: ApiResponse<T>,
    },
}

impl<T> Reply<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT,
            Self::Json { body, .. } => StatusCode::from_u16(body.code()),
        }
    }

    pub fn body(&self) -> Option<&ApiResponse<T>> {
        match self {
            Self::NoContent => None,
            Self::Json { body, .. } => Some(body),
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::NoContent => None,
            Self::Json { content_type, .. } => Some(content_type),
        }
    }

    pub fn into_body(self) -> Option<ApiResponse<T>> {
        match self {
            Self::NoContent => None,
            Self::Json { body, .. } => Some(body),
        }
    }
}

impl<T: Serialize> Reply<T> {
    /// Serialized body bytes, `None` for 204.
    ///
    /// # Errors
    /// Returns [`HttpError::Serialization`] if the data cannot be serialized.
    pub fn to_json(&self) -> Result<Option<Bytes>, HttpError> {
        self.body()
            .map(|body| serde_json::to_vec(body).map(Bytes::from))
            .transpose()
            .map_err(HttpError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_follows_code() {
        let ok = ApiResponse::new(StatusCode::CREATED, "Created", Some(1));
        assert!(ok.success());
        assert_eq!(ok.code(), 201);

        let bad = ApiResponse::<()>::new(StatusCode::NOT_FOUND, "book 42", None);
        assert!(!bad.success());
        assert_eq!(bad.message(), "book 42");
        assert!(bad.data().is_none());
    }

    #[test]
    fn wire_format_has_envelope_fields() {
        let reply = Reply::Json {
            content_type: "application/json".to_string(),
            body: ApiResponse::new(StatusCode::OK, "OK", Some(vec![1, 2])),
        };
        let bytes = reply.to_json().unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "code": 200,
                "message": "OK",
                "data": [1, 2]
            })
        );
    }

    #[test]
    fn status_is_read_from_body_code() {
        let reply = Reply::Json {
            content_type: "application/json".to_string(),
            body: ApiResponse::<()>::new(StatusCode::CONFLICT, "taken", None),
        };
        assert_eq!(reply.status(), StatusCode::CONFLICT);
        assert_eq!(reply.body().map(ApiResponse::code), Some(409));
    }

    #[test]
    fn absent_data_is_null() {
        let body = ApiResponse::<String>::new(StatusCode::CONFLICT, "dup", None);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["data"].is_null());
        assert_eq!(json["success"], false);
    }

    #[test]
    fn no_content_has_no_body() {
        let reply: Reply<()> = Reply::NoContent;
        assert_eq!(reply.status(), StatusCode::NO_CONTENT);
        assert!(reply.body().is_none());
        assert!(reply.content_type().is_none());
        assert!(reply.to_json().unwrap().is_none());
    }
}
