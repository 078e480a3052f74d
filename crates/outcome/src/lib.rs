//! Exception-free outcomes: a value that is exactly one of good or bad,
//! plus closed tag taxonomies saying why.
//!
//! Business failures are data here. The only errors this crate raises are
//! for misuse of its constructors and decoders, see [`OutcomeError`].

mod dispatch;
mod error;
mod outcome;
mod tag;
mod tagged;

pub use error::{OutcomeError, Side};
pub use outcome::Outcome;
pub use tag::{BadTag, GoodTag};
pub use tagged::{
    BadOutcome, BadOutcomeWithPayload, Failed, GoodOutcome, GoodOutcomeWithPayload, Successful,
    Tagged, WithPayload,
};
