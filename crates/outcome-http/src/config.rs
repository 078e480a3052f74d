use std::str::FromStr;

use crate::error::HttpError;

pub const CONTENT_TYPE_ENV: &str = "VERDICT_CONTENT_TYPE";
pub const FIELD_NAMING_ENV: &str = "VERDICT_FIELD_NAMING";

/// How field names are rendered in response bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldNaming {
    AsIs,
    #[default]
    CamelCase,
    SnakeCase,
}

impl FieldNaming {
    /// Render `name` under this policy. Input may be snake_case or camelCase.
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::AsIs => name.to_string(),
            Self::CamelCase => to_camel(name),
            Self::SnakeCase => to_snake(name),
        }
    }
}

fn to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for (i, c) in name.chars().enumerate() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else if i == 0 {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

impl FromStr for FieldNaming {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "as_is" | "asis" | "none" => Ok(Self::AsIs),
            "camel_case" | "camelcase" | "camel" => Ok(Self::CamelCase),
            "snake_case" | "snakecase" | "snake" => Ok(Self::SnakeCase),
            _ => Err(HttpError::Config {
                key: FIELD_NAMING_ENV,
                value: s.to_string(),
            }),
        }
    }
}

/// Adapter settings, passed in at construction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Content type reported for JSON replies.
    pub content_type: String,
    /// Naming policy for field names in validation payloads.
    pub field_naming: FieldNaming,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            content_type: "application/json".to_string(),
            field_naming: FieldNaming::default(),
        }
    }
}

impl AdapterConfig {
    /// Read overrides from `VERDICT_CONTENT_TYPE` and `VERDICT_FIELD_NAMING`.
    ///
    /// # Errors
    /// Returns [`HttpError::Config`] if the naming policy is not recognised.
    pub fn from_env() -> Result<Self, HttpError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    ///
    /// # Errors
    /// Returns [`HttpError::Config`] if the naming policy is not recognised.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HttpError> {
        let mut config = Self::default();
        if let Some(content_type) = lookup(CONTENT_TYPE_ENV).filter(|v| !v.trim().is_empty()) {
            config.content_type = content_type;
        }
        if let Some(naming) = lookup(FIELD_NAMING_ENV) {
            config.field_naming = naming.parse()?;
        }
        Ok(config)
    }
}
