use serde_json::{Map, Value};
use verdict_http::FieldNaming;
use verdict_outcome::{BadOutcomeWithPayload, BadTag};

use crate::book::BookRequest;

const MAX_TEXT_LEN: usize = 256;
const MAX_ISBN_LEN: usize = 38;

/// One rule a request field failed.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Field name as declared on [`BookRequest`].
    pub property_name: &'static str,
    pub error_message: String,
    pub attempted_value: Value,
    /// Position of the offending element, for collection fields.
    pub collection_index: Option<usize>,
}

impl FieldError {
    fn new(property_name: &'static str, error_message: String, attempted_value: Value) -> Self {
        Self {
            property_name,
            error_message,
            attempted_value,
            collection_index: None,
        }
    }

    /// Render as a JSON object, casing keys and the property name per `naming`.
    pub fn to_json(&self, naming: FieldNaming) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            naming.apply("property_name"),
            Value::String(naming.apply(self.property_name)),
        );
        map.insert(
            naming.apply("error_message"),
            Value::String(self.error_message.clone()),
        );
        map.insert(naming.apply("attempted_value"), self.attempted_value.clone());
        if let Some(index) = self.collection_index {
            map.insert(naming.apply("collection_index"), Value::from(index));
        }
        map
    }
}

/// Render a list of field errors for a response body.
pub fn map_errors(errors: &[FieldError], naming: FieldNaming) -> Vec<Map<String, Value>> {
    errors.iter().map(|e| e.to_json(naming)).collect()
}

fn check_text(errors: &mut Vec<FieldError>, field: &'static str, value: &str, max: usize) {
    let display = display_name(field);
    if value.trim().is_empty() {
        errors.push(FieldError::new(
            field,
            format!("'{display}' must not be empty."),
            Value::String(value.to_string()),
        ));
    } else if value.chars().count() > max {
        let entered = value.chars().count();
        errors.push(FieldError::new(
            field,
            format!(
                "The length of '{display}' must be {max} characters or fewer. \
                 You entered {entered} characters."
            ),
            Value::String(value.to_string()),
        ));
    }
}

fn display_name(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every rule violation in `request`, in field order. Empty means valid.
pub fn validate(request: &BookRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_text(&mut errors, "title", &request.title, MAX_TEXT_LEN);
    check_text(&mut errors, "isbn", &request.isbn, MAX_ISBN_LEN);
    check_text(&mut errors, "genre", &request.genre, MAX_TEXT_LEN);
    check_text(&mut errors, "author", &request.author, MAX_TEXT_LEN);
    if request.price <= 0 {
        errors.push(FieldError::new(
            "price",
            "'Price' must be greater than '0'.".to_string(),
            Value::from(request.price),
        ));
    }
    errors
}

/// [`validate`] as a bad value carrying the failures as payload.
///
/// # Errors
/// Returns a `ValidationFailure` outcome listing every failed rule.
pub fn check(request: &BookRequest) -> Result<(), BadOutcomeWithPayload<Vec<FieldError>>> {
    let errors = validate(request);
    if errors.is_empty() {
        return Ok(());
    }
    Err(BadOutcomeWithPayload::new(BadTag::ValidationFailure, errors))
}
