use std::future::Future;

use verdict_outcome::{BadOutcomeWithPayload, BadTag, GoodTag, Outcome, Tagged};

use crate::config::AdapterConfig;
use crate::envelope::{ApiResponse, Reply};
use crate::status::{StatusCode, status_for_bad, status_for_good};

/// Turns outcomes into [`Reply`] values.
///
/// Every `respond*` method consumes the outcome through a single dispatch
/// call, so exactly one of the success or failure replies is produced.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    config: AdapterConfig,
}

impl Responder {
    pub fn new(config: AdapterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Build a reply. The message falls back to the status reason phrase.
    pub fn send<T>(&self, status: StatusCode, data: Option<T>, message: Option<&str>) -> Reply<T> {
        if status == StatusCode::NO_CONTENT {
            return Reply::NoContent;
        }

        let message = message.unwrap_or_else(|| status.reason_phrase());
        Reply::Json {
            content_type: self.config.content_type.clone(),
            body: ApiResponse::new(status, message, data),
        }
    }

    pub fn send_data<T>(&self, status: StatusCode, data: T) -> Reply<T> {
        self.send(status, Some(data), None)
    }

    pub fn send_message<T>(&self, status: StatusCode, message: &str) -> Reply<T> {
        self.send(status, None, Some(message))
    }

    pub fn send_status<T>(&self, status: StatusCode) -> Reply<T> {
        self.send(status, None, None)
    }

    pub fn send_bad<T>(&self, bad: &impl Tagged<Tag = BadTag>) -> Reply<T> {
        let status = status_for_bad(bad.tag());
        log_bad(bad.tag(), status);
        self.send(status, None, bad.reason())
    }

    pub fn send_good<T>(&self, good: &impl Tagged<Tag = GoodTag>) -> Reply<T> {
        self.send(status_for_good(good.tag()), None, good.reason())
    }

    /// Failure reply whose `data` is the payload, e.g. a list of invalid fields.
    pub fn send_bad_with_payload<P>(&self, bad: BadOutcomeWithPayload<P>) -> Reply<P> {
        let (tag, payload, reason) = bad.into_parts();
        let status = status_for_bad(tag);
        log_bad(tag, status);
        self.send(status, Some(payload), reason.as_deref())
    }

    /// Reply with the good value as `data` under the status `good_tag` maps to,
    /// or with the bad value's mapped status and reason.
    pub fn respond<G, B>(&self, outcome: Outcome<G, B>, good_tag: GoodTag) -> Reply<G>
    where
        B: Tagged<Tag = BadTag>,
    {
        let status = status_for_good(good_tag);
        outcome.match_with(|good| self.send_data(status, good), |bad| self.send_bad(&bad))
    }

    /// For outcomes where both sides are tag-only, such as a delete.
    pub fn respond_tagged<T, G, B>(&self, outcome: Outcome<G, B>) -> Reply<T>
    where
        G: Tagged<Tag = GoodTag>,
        B: Tagged<Tag = BadTag>,
    {
        outcome.match_with(|good| self.send_good(&good), |bad| self.send_bad(&bad))
    }

    /// Like [`respond`](Self::respond), converting the good value with an
    /// async mapping first. The mapping only runs for good outcomes.
    pub async fn respond_mapped<G, B, T, F, Fut>(
        &self,
        outcome: Outcome<G, B>,
        good_tag: GoodTag,
        map: F,
    ) -> Reply<T>
    where
        B: Tagged<Tag = BadTag>,
        F: FnOnce(G) -> Fut,
        Fut: Future<Output = T>,
    {
        let status = status_for_good(good_tag);
        outcome
            .match_good_async(
                |good| async move { self.send_data(status, map(good).await) },
                |bad| self.send_bad(&bad),
            )
            .await
    }
}

fn log_bad(tag: BadTag, status: StatusCode) {
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::warn!(%tag, code = status.as_u16(), "bad outcome mapped to server fault");
    } else {
        tracing::debug!(%tag, code = status.as_u16(), "bad outcome mapped to reply");
    }
}
