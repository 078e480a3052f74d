use std::str::FromStr;

use crate::error::OutcomeError;

/// Declares a closed tag enumeration with stable `u8` codes and snake_case names.
///
/// Codes are assigned by the caller and must never be renumbered; new tags
/// get new codes.
macro_rules! outcome_tags {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident = $code:literal => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        #[non_exhaustive]
        #[repr(u8)]
        pub enum $name {
            $($variant = $code,)+
        }

        impl $name {
            /// Every tag, in code order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            pub fn as_u8(self) -> u8 {
                self as u8
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = OutcomeError;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    other => Err(OutcomeError::UnknownTag {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(tag: $name) -> u8 {
                tag.as_u8()
            }
        }

        impl FromStr for $name {
            type Err = OutcomeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(OutcomeError::UnknownTag {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

outcome_tags! {
    /// Why an operation went well. Pure classification, no payload.
    GoodTag, "good" {
        Accepted = 1 => "accepted",
        Authorized = 2 => "authorized",
        Authenticated = 3 => "authenticated",
        Available = 4 => "available",
        Completed = 5 => "completed",
        Confirmed = 6 => "confirmed",
        Created = 7 => "created",
        Deleted = 8 => "deleted",
        Found = 9 => "found",
        NoConflict = 10 => "no_conflict",
        NotNull = 11 => "not_null",
        Ok = 12 => "ok",
        Matched = 13 => "matched",
        Positive = 14 => "positive",
        Resolved = 15 => "resolved",
        Success = 16 => "success",
        True = 17 => "true",
        Unique = 18 => "unique",
        Valid = 19 => "valid",
        Verified = 20 => "verified",
    }
}

outcome_tags! {
    /// Why an operation went badly. Pure classification, no payload.
    BadTag, "bad" {
        BadRequest = 1 => "bad_request",
        Conflict = 2 => "conflict",
        Denied = 3 => "denied",
        Duplicate = 4 => "duplicate",
        Excessive = 5 => "excessive",
        Expired = 6 => "expired",
        Failure = 7 => "failure",
        False = 8 => "false",
        Forbidden = 9 => "forbidden",
        Incomplete = 10 => "incomplete",
        Interrupted = 11 => "interrupted",
        Invalid = 12 => "invalid",
        Negative = 13 => "negative",
        NotAuthenticated = 14 => "not_authenticated",
        NotFound = 15 => "not_found",
        NotMatched = 16 => "not_matched",
        NotReadyYet = 17 => "not_ready_yet",
        NotVerified = 18 => "not_verified",
        Null = 19 => "null",
        Outdated = 20 => "outdated",
        Overflow = 21 => "overflow",
        Redundant = 22 => "redundant",
        Rejected = 23 => "rejected",
        Repetitive = 24 => "repetitive",
        Stalled = 25 => "stalled",
        Timeout = 26 => "timeout",
        Unauthorized = 27 => "unauthorized",
        Unavailable = 28 => "unavailable",
        Underflow = 29 => "underflow",
        Unexpected = 30 => "unexpected",
        Unknown = 31 => "unknown",
        Unprocessable = 32 => "unprocessable",
        ValidationFailure = 33 => "validation_failure",
        Violation = 34 => "violation",
        Warning = 35 => "warning",
    }
}
