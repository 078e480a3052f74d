//! Tag-plus-reason values and their payload-carrying forms.
//!
//! These are the values that usually sit on one side of an
//! [`Outcome`](crate::Outcome). They are terminal: read them through their
//! accessors, there is no further dispatch.

use crate::tag::{BadTag, GoodTag};

/// A value classified by a tag, with an optional free-text reason.
///
/// The reason is for diagnostics and messages only.
pub trait Tagged {
    type Tag: Copy;

    fn tag(&self) -> Self::Tag;
    fn reason(&self) -> Option<&str>;
}

/// A tagged value that also carries typed data the consumer needs to act on.
pub trait WithPayload: Tagged {
    type Payload;

    fn payload(&self) -> &Self::Payload;
}

fn fmt_tagged(
    f: &mut std::fmt::Formatter<'_>,
    tag: &dyn std::fmt::Display,
    reason: Option<&str>,
) -> std::fmt::Result {
    match reason {
        Some(reason) => write!(f, "{tag}: {reason}"),
        None => write!(f, "{tag}"),
    }
}

macro_rules! tagged_value {
    ($(#[$meta:meta])* $name:ident, $default:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub struct $name<T = $default> {
            pub tag: T,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub reason: Option<String>,
        }

        impl<T> $name<T> {
            pub fn new(tag: T) -> Self {
                Self { tag, reason: None }
            }

            pub fn with_reason(tag: T, reason: impl Into<String>) -> Self {
                Self {
                    tag,
                    reason: Some(reason.into()),
                }
            }
        }

        impl<T: Copy> Tagged for $name<T> {
            type Tag = T;

            fn tag(&self) -> T {
                self.tag
            }

            fn reason(&self) -> Option<&str> {
                self.reason.as_deref()
            }
        }

        impl<T: std::fmt::Display> std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                fmt_tagged(f, &self.tag, self.reason.as_deref())
            }
        }
    };
}

macro_rules! tagged_payload {
    ($(#[$meta:meta])* $name:ident, $default:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub struct $name<P, T = $default> {
            pub tag: T,
            pub payload: P,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub reason: Option<String>,
        }

        impl<P, T> $name<P, T> {
            pub fn new(tag: T, payload: P) -> Self {
                Self {
                    tag,
                    payload,
                    reason: None,
                }
            }

            pub fn with_reason(tag: T, payload: P, reason: impl Into<String>) -> Self {
                Self {
                    tag,
                    payload,
                    reason: Some(reason.into()),
                }
            }

            pub fn into_payload(self) -> P {
                self.payload
            }

            /// Swap the payload, keeping tag and reason.
            pub fn map_payload<Q>(self, f: impl FnOnce(P) -> Q) -> $name<Q, T> {
                $name {
                    tag: self.tag,
                    payload: f(self.payload),
                    reason: self.reason,
                }
            }

            /// Split into `(tag, payload, reason)`.
            pub fn into_parts(self) -> (T, P, Option<String>) {
                (self.tag, self.payload, self.reason)
            }
        }

        impl<P, T: Copy> Tagged for $name<P, T> {
            type Tag = T;

            fn tag(&self) -> T {
                self.tag
            }

            fn reason(&self) -> Option<&str> {
                self.reason.as_deref()
            }
        }

        impl<P, T: Copy> WithPayload for $name<P, T> {
            type Payload = P;

            fn payload(&self) -> &P {
                &self.payload
            }
        }

        impl<P, T: std::fmt::Display> std::fmt::Display for $name<P, T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                fmt_tagged(f, &self.tag, self.reason.as_deref())
            }
        }
    };
}

tagged_value!(
    /// A good result described only by its tag.
    GoodOutcome,
    GoodTag
);
tagged_value!(
    /// A bad result described only by its tag.
    BadOutcome,
    BadTag
);
tagged_payload!(
    /// A good result with data attached.
    GoodOutcomeWithPayload,
    GoodTag
);
tagged_payload!(
    /// A bad result with data attached, e.g. a list of invalid fields.
    BadOutcomeWithPayload,
    BadTag
);

/// Generic good marker for callers that need no classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Successful {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Generic bad marker for callers that need no classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Failed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Successful {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

impl Failed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

impl Tagged for Successful {
    type Tag = GoodTag;

    fn tag(&self) -> GoodTag {
        GoodTag::Success
    }

    fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl Tagged for Failed {
    type Tag = BadTag;

    fn tag(&self) -> BadTag {
        BadTag::Failure
    }

    fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}
