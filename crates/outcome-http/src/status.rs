use verdict_outcome::{BadTag, GoodTag};

/// HTTP status code as produced by the tag mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: Self = Self(200);
    pub const CREATED: Self = Self(201);
    pub const ACCEPTED: Self = Self(202);
    pub const NO_CONTENT: Self = Self(204);
    pub const BAD_REQUEST: Self = Self(400);
    pub const UNAUTHORIZED: Self = Self(401);
    pub const FORBIDDEN: Self = Self(403);
    pub const NOT_FOUND: Self = Self(404);
    pub const CONFLICT: Self = Self(409);
    pub const UNPROCESSABLE_ENTITY: Self = Self(422);
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    pub const fn from_u16(code: u16) -> Self {
        Self(code)
    }

    pub const fn as_u16(self) -> u16 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Standard reason phrase, empty for codes without one.
    pub fn reason_phrase(self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            202 => "Accepted",
            204 => "No Content",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            408 => "Request Timeout",
            409 => "Conflict",
            410 => "Gone",
            422 => "Unprocessable Entity",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            501 => "Not Implemented",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            _ => "",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> u16 {
        code.0
    }
}

/// Status for a bad tag. Tags without a specific mapping are server faults.
pub fn status_for_bad(tag: BadTag) -> StatusCode {
    match tag {
        BadTag::BadRequest | BadTag::ValidationFailure => StatusCode::BAD_REQUEST,
        BadTag::Unauthorized => StatusCode::UNAUTHORIZED,
        BadTag::Forbidden => StatusCode::FORBIDDEN,
        BadTag::NotFound => StatusCode::NOT_FOUND,
        BadTag::Conflict => StatusCode::CONFLICT,
        BadTag::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Status for a good tag. Tags without a specific mapping are plain 200s.
pub fn status_for_good(tag: GoodTag) -> StatusCode {
    match tag {
        GoodTag::Ok => StatusCode::OK,
        GoodTag::Created => StatusCode::CREATED,
        GoodTag::Deleted => StatusCode::NO_CONTENT,
        _ => StatusCode::OK,
    }
}
