use thiserror::Error;

/// Which side of an [`Outcome`](crate::Outcome) a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Good,
    Bad,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Misuse of the outcome types. Business failures never show up here;
/// they travel as [`BadTag`](crate::BadTag) values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    #[error("absent value supplied for the {side} side")]
    InvalidArgument { side: Side },

    #[error("outcome must hold exactly one of good or bad")]
    InvalidState,

    #[error("unknown {kind} tag: {value}")]
    UnknownTag { kind: &'static str, value: String },
}
