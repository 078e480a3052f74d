use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{OutcomeError, Side};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Inner<G, B> {
    Good(G),
    Bad(B),
}

/// Exactly one of a good result `G` or a bad result `B`.
///
/// The side is chosen at construction through [`Outcome::good`] or
/// [`Outcome::bad`] and never changes. Read it back through the dispatch
/// methods ([`match_with`](Self::match_with), [`switch`](Self::switch) and
/// their async forms) or the try-pick accessors.
///
/// There is no `Default`: an outcome that is neither good nor
/// bad cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct Outcome<G, B> {
    pub(crate) inner: Inner<G, B>,
}

impl<G, B> Outcome<G, B> {
    pub fn good(value: G) -> Self {
        Self {
            inner: Inner::Good(value),
        }
    }

    pub fn bad(value: B) -> Self {
        Self {
            inner: Inner::Bad(value),
        }
    }

    /// Build a good outcome from a value that may be absent.
    ///
    /// # Errors
    /// Returns [`OutcomeError::InvalidArgument`] if `value` is `None`.
    pub fn try_good(value: Option<G>) -> Result<Self, OutcomeError> {
        value
            .map(Self::good)
            .ok_or(OutcomeError::InvalidArgument { side: Side::Good })
    }

    /// Build a bad outcome from a value that may be absent.
    ///
    /// # Errors
    /// Returns [`OutcomeError::InvalidArgument`] if `value` is `None`.
    pub fn try_bad(value: Option<B>) -> Result<Self, OutcomeError> {
        value
            .map(Self::bad)
            .ok_or(OutcomeError::InvalidArgument { side: Side::Bad })
    }

    pub fn is_good(&self) -> bool {
        matches!(self.inner, Inner::Good(_))
    }

    pub fn is_bad(&self) -> bool {
        matches!(self.inner, Inner::Bad(_))
    }

    pub fn side(&self) -> Side {
        match self.inner {
            Inner::Good(_) => Side::Good,
            Inner::Bad(_) => Side::Bad,
        }
    }

    // -- Try-pick --

    pub fn try_good_ref(&self) -> Option<&G> {
        match &self.inner {
            Inner::Good(g) => Some(g),
            Inner::Bad(_) => None,
        }
    }

    pub fn try_bad_ref(&self) -> Option<&B> {
        match &self.inner {
            Inner::Good(_) => None,
            Inner::Bad(b) => Some(b),
        }
    }

    pub fn into_good(self) -> Option<G> {
        match self.inner {
            Inner::Good(g) => Some(g),
            Inner::Bad(_) => None,
        }
    }

    pub fn into_bad(self) -> Option<B> {
        match self.inner {
            Inner::Good(_) => None,
            Inner::Bad(b) => Some(b),
        }
    }

    /// Take the good value, or hand back the bad one.
    pub fn pick_good(self) -> Result<G, B> {
        self.into_result()
    }

    /// Take the bad value, or hand back the good one.
    pub fn pick_bad(self) -> Result<B, G> {
        match self.inner {
            Inner::Good(g) => Err(g),
            Inner::Bad(b) => Ok(b),
        }
    }

    // -- Dispatch --

    /// Run exactly one handler and return its result.
    pub fn match_with<R>(self, on_good: impl FnOnce(G) -> R, on_bad: impl FnOnce(B) -> R) -> R {
        match self.inner {
            Inner::Good(g) => on_good(g),
            Inner::Bad(b) => on_bad(b),
        }
    }

    /// [`match_with`](Self::match_with) without giving up the outcome.
    pub fn match_ref<'a, R>(
        &'a self,
        on_good: impl FnOnce(&'a G) -> R,
        on_bad: impl FnOnce(&'a B) -> R,
    ) -> R {
        match &self.inner {
            Inner::Good(g) => on_good(g),
            Inner::Bad(b) => on_bad(b),
        }
    }

    /// Run exactly one side-effecting handler.
    pub fn switch(self, on_good: impl FnOnce(G), on_bad: impl FnOnce(B)) {
        self.match_with(on_good, on_bad);
    }

    pub fn switch_ref(&self, on_good: impl FnOnce(&G), on_bad: impl FnOnce(&B)) {
        self.match_ref(on_good, on_bad);
    }

    // -- Combinators --

    pub fn as_ref(&self) -> Outcome<&G, &B> {
        match &self.inner {
            Inner::Good(g) => Outcome::good(g),
            Inner::Bad(b) => Outcome::bad(b),
        }
    }

    pub fn map_good<G2>(self, f: impl FnOnce(G) -> G2) -> Outcome<G2, B> {
        match self.inner {
            Inner::Good(g) => Outcome::good(f(g)),
            Inner::Bad(b) => Outcome::bad(b),
        }
    }

    pub fn map_bad<B2>(self, f: impl FnOnce(B) -> B2) -> Outcome<G, B2> {
        match self.inner {
            Inner::Good(g) => Outcome::good(g),
            Inner::Bad(b) => Outcome::bad(f(b)),
        }
    }

    /// Chain another fallible step onto a good outcome.
    pub fn and_then_good<G2>(self, f: impl FnOnce(G) -> Outcome<G2, B>) -> Outcome<G2, B> {
        match self.inner {
            Inner::Good(g) => f(g),
            Inner::Bad(b) => Outcome::bad(b),
        }
    }

    pub fn into_result(self) -> Result<G, B> {
        match self.inner {
            Inner::Good(g) => Ok(g),
            Inner::Bad(b) => Err(b),
        }
    }
}

impl<G, B> From<Result<G, B>> for Outcome<G, B> {
    fn from(result: Result<G, B>) -> Self {
        match result {
            Ok(g) => Self::good(g),
            Err(b) => Self::bad(b),
        }
    }
}

impl<G, B> From<Outcome<G, B>> for Result<G, B> {
    fn from(outcome: Outcome<G, B>) -> Self {
        outcome.into_result()
    }
}

// -- Wire form: {"good": ..} or {"bad": ..} --

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum WireRef<'a, G, B> {
    Good(&'a G),
    Bad(&'a B),
}

/// Outer `Option` is key presence, so `{"good": null}` stays a good `()`.
#[derive(Deserialize)]
#[serde(
    deny_unknown_fields,
    bound(deserialize = "G: Deserialize<'de>, B: Deserialize<'de>")
)]
struct Wire<G, B> {
    #[serde(default, deserialize_with = "present")]
    good: Option<G>,
    #[serde(default, deserialize_with = "present")]
    bad: Option<B>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<G, B> Outcome<G, B> {
    fn from_wire(wire: Wire<G, B>) -> Result<Self, OutcomeError> {
        match (wire.good, wire.bad) {
            (Some(g), None) => Ok(Self::good(g)),
            (None, Some(b)) => Ok(Self::bad(b)),
            _ => Err(OutcomeError::InvalidState),
        }
    }
}

impl<G: Serialize, B: Serialize> Serialize for Outcome<G, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.inner {
            Inner::Good(g) => WireRef::<G, B>::Good(g),
            Inner::Bad(b) => WireRef::<G, B>::Bad(b),
        }
        .serialize(serializer)
    }
}

impl<'de, G: Deserialize<'de>, B: Deserialize<'de>> Deserialize<'de> for Outcome<G, B> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Wire::<G, B>::deserialize(deserializer)?;
        Self::from_wire(wire).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BadOutcome, BadTag};

    type BookOutcome = Outcome<u32, BadOutcome>;

    #[test]
    fn good_side_predicates() {
        let outcome = BookOutcome::good(7);
        assert!(outcome.is_good());
        assert!(!outcome.is_bad());
        assert_eq!(outcome.side(), Side::Good);
    }

    #[test]
    fn bad_side_predicates() {
        let outcome = BookOutcome::bad(BadOutcome::new(BadTag::NotFound));
        assert!(outcome.is_bad());
        assert!(!outcome.is_good());
        assert_eq!(outcome.side(), Side::Bad);
    }

    #[test]
    fn absent_values_fail_at_construction() {
        assert_eq!(
            BookOutcome::try_good(None).unwrap_err(),
            OutcomeError::InvalidArgument { side: Side::Good }
        );
        assert_eq!(
            BookOutcome::try_bad(None).unwrap_err(),
            OutcomeError::InvalidArgument { side: Side::Bad }
        );
        assert!(BookOutcome::try_good(Some(1)).unwrap().is_good());
    }

    #[test]
    fn try_pick_yields_only_the_held_side() {
        let good = BookOutcome::good(7);
        assert_eq!(good.try_good_ref(), Some(&7));
        assert_eq!(good.try_bad_ref(), None);

        let bad = BookOutcome::bad(BadOutcome::new(BadTag::Timeout));
        assert_eq!(bad.try_good_ref(), None);
        assert_eq!(bad.try_bad_ref().map(|b| b.tag), Some(BadTag::Timeout));
        assert_eq!(bad.clone().into_good(), None);
        assert_eq!(bad.into_bad().map(|b| b.tag), Some(BadTag::Timeout));
    }

    #[test]
    fn pick_hands_back_the_other_side() {
        assert_eq!(BookOutcome::good(3).pick_good(), Ok(3));
        assert_eq!(BookOutcome::good(3).pick_bad(), Err(3));

        let bad = BookOutcome::bad(BadOutcome::new(BadTag::Conflict));
        assert_eq!(bad.clone().pick_good().unwrap_err().tag, BadTag::Conflict);
        assert_eq!(bad.pick_bad().unwrap().tag, BadTag::Conflict);
    }

    #[test]
    fn combinators_keep_the_side() {
        let doubled = BookOutcome::good(21).map_good(|n| n * 2);
        assert_eq!(doubled.into_good(), Some(42));

        let relabelled = BookOutcome::bad(BadOutcome::new(BadTag::Timeout))
            .map_good(|n| n * 2)
            .map_bad(|b| b.tag);
        assert_eq!(relabelled.into_bad(), Some(BadTag::Timeout));

        let chained = BookOutcome::good(0).and_then_good(|n| {
            if n == 0 {
                Outcome::bad(BadOutcome::new(BadTag::Underflow))
            } else {
                Outcome::good(n - 1)
            }
        });
        assert_eq!(chained.into_bad().map(|b| b.tag), Some(BadTag::Underflow));
    }

    #[test]
    fn converts_to_and_from_result() {
        let outcome: BookOutcome = Ok(5).into();
        assert!(outcome.is_good());
        let result: Result<u32, BadOutcome> = outcome.into();
        assert_eq!(result, Ok(5));
    }

    #[test]
    fn wire_form_names_the_side() {
        let json = serde_json::to_value(BookOutcome::good(7)).unwrap();
        assert_eq!(json, serde_json::json!({ "good": 7 }));

        let bad = BookOutcome::bad(BadOutcome::with_reason(BadTag::NotFound, "book 42"));
        let json = serde_json::to_value(bad).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "bad": { "tag": "not_found", "reason": "book 42" } })
        );

        let back: BookOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(back.into_bad().and_then(|b| b.reason).as_deref(), Some("book 42"));
    }

    #[test]
    fn wire_form_keeps_null_good_values() {
        let unit = Outcome::<(), BadOutcome>::good(());
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, r#"{"good":null}"#);
        let back: Outcome<(), BadOutcome> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, unit);

        let none = Outcome::<Option<u32>, BadOutcome>::good(None);
        let json = serde_json::to_string(&none).unwrap();
        let back: Outcome<Option<u32>, BadOutcome> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, none);
        assert!(back.is_good());
    }

    #[test]
    fn wire_form_keeps_null_bad_values() {
        let bad = Outcome::<u32, ()>::bad(());
        let json = serde_json::to_string(&bad).unwrap();
        assert_eq!(json, r#"{"bad":null}"#);
        let back: Outcome<u32, ()> = serde_json::from_str(&json).unwrap();
        assert!(back.is_bad());
    }

    #[test]
    fn as_ref_borrows_the_held_side() {
        let good = BookOutcome::good(7);
        assert_eq!(good.as_ref().into_good(), Some(&7));

        let bad = BookOutcome::bad(BadOutcome::new(BadTag::Timeout));
        assert_eq!(bad.as_ref().map_bad(|b| b.tag).into_bad(), Some(BadTag::Timeout));
        assert!(bad.is_bad());
    }

    #[test]
    fn wire_form_rejects_neither_or_both() {
        let neither: Result<BookOutcome, _> = serde_json::from_str("{}");
        let err = neither.unwrap_err().to_string();
        assert!(err.contains("exactly one of good or bad"), "{err}");

        let both: Result<BookOutcome, _> =
            serde_json::from_str(r#"{"good": 1, "bad": {"tag": "timeout"}}"#);
        assert!(both.is_err());
    }
}
