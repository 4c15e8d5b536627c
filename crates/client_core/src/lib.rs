use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use shared::{
    domain::Record,
    error::FetchError,
    protocol::SearchResponse,
    state::SearchEvent,
};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub mod catalog;
pub mod config;
pub mod error;
mod store;

pub use catalog::CatalogClient;
pub use store::SearchStore;

/// Status line and body of a catalog response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Only transport failures are errors here; HTTP status and body are
    /// judged by the caller.
    async fn fetch_results(&self, query: &str) -> Result<RawResponse, FetchError>;
}

pub trait Dispatch: Send + Sync {
    fn dispatch(&self, event: SearchEvent);
}

impl<F> Dispatch for F
where
    F: Fn(SearchEvent) + Send + Sync,
{
    fn dispatch(&self, event: SearchEvent) {
        self(event)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Which terminal event reaches the state when searches overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Every search dispatches its own outcome; whichever settles last wins.
    #[default]
    LastSettled,
    /// Outcomes of searches superseded by a newer submission are dropped.
    LatestIssued,
}

/// Interprets a catalog response. Records without a poster are removed,
/// keeping the catalog's ordering.
pub fn classify_response(response: RawResponse) -> Result<Vec<Record>, FetchError> {
    if !response.is_success() {
        return Err(FetchError::Status {
            status: response.status,
        });
    }
    let body: SearchResponse =
        serde_json::from_slice(&response.body).map_err(FetchError::malformed)?;
    Ok(displayable(body.results))
}

pub fn displayable(records: Vec<Record>) -> Vec<Record> {
    records.into_iter().filter(Record::has_poster).collect()
}

#[derive(Clone)]
pub struct SearchController {
    fetcher: Arc<dyn CatalogFetcher>,
    dispatcher: Arc<dyn Dispatch>,
    issued: Arc<AtomicU64>,
    policy: StalePolicy,
}

impl SearchController {
    pub fn new(fetcher: Arc<dyn CatalogFetcher>, dispatcher: Arc<dyn Dispatch>) -> Self {
        Self {
            fetcher,
            dispatcher,
            issued: Arc::new(AtomicU64::new(0)),
            policy: StalePolicy::default(),
        }
    }

    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn stale_policy(&self) -> StalePolicy {
        self.policy
    }

    /// Dispatches `SearchBegan` before returning; the returned future performs
    /// the lookup and dispatches the outcome. It never fails.
    pub fn search(&self, query: &str) -> impl Future<Output = ()> + Send + 'static {
        let request = RequestId(self.issued.fetch_add(1, Ordering::SeqCst) + 1);
        debug!(request = request.0, query, "search began");
        self.dispatcher.dispatch(SearchEvent::SearchBegan);

        let controller = self.clone();
        let query = query.to_owned();
        async move { controller.complete(request, &query).await }
    }

    /// Runs [`Self::search`] on the current tokio runtime.
    pub fn spawn_search(&self, query: &str) -> JoinHandle<()> {
        tokio::spawn(self.search(query))
    }

    async fn complete(&self, request: RequestId, query: &str) {
        let outcome = match self.fetcher.fetch_results(query).await {
            Ok(response) => classify_response(response),
            Err(err) => Err(err),
        };

        if self.is_superseded(request) {
            debug!(request = request.0, query, "discarding outcome of superseded search");
            return;
        }

        let event = match outcome {
            Ok(records) => {
                info!(request = request.0, query, count = records.len(), "search succeeded");
                SearchEvent::SearchSucceeded(records)
            }
            Err(err) => {
                warn!(request = request.0, query, kind = err.kind(), error = %err, "search failed");
                SearchEvent::SearchFailed
            }
        };
        self.dispatcher.dispatch(event);
    }

    fn is_superseded(&self, request: RequestId) -> bool {
        self.policy == StalePolicy::LatestIssued
            && self.issued.load(Ordering::SeqCst) != request.0
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
