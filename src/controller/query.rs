// file: src/controller/query.rs
// description: runs a search and fans out one document fetch per hit
// reference: buffered stream fan-out as in the file processing pipeline

use crate::config::{FetchConfig, FetchOrder};
use crate::controller::fetcher::{DocumentFetcher, FetchOutcome};
use crate::controller::progress::{FetchProgress, FetchStats};
use crate::display::{Notifier, ResultList};
use crate::gateway::{RequestOptions, SearchGateway};
use crate::models::{SearchHit, SearchQuery};
use crate::utils::{OperationTimer, Validator};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter query before submitting.";

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Input was blank; nothing was sent.
    Rejected,
    /// The search request itself failed.
    Failed,
    Completed(FetchStats),
}

pub struct QueryController<'a, G> {
    gateway: &'a G,
    fetcher: DocumentFetcher<'a, G>,
    results: &'a dyn ResultList,
    notifier: &'a dyn Notifier,
    fetch: FetchConfig,
    options: RequestOptions,
    show_progress: bool,
}

impl<'a, G: SearchGateway> QueryController<'a, G> {
    pub fn new(gateway: &'a G, results: &'a dyn ResultList, notifier: &'a dyn Notifier) -> Self {
        Self {
            gateway,
            fetcher: DocumentFetcher::new(gateway, results, notifier),
            results,
            notifier,
            fetch: FetchConfig::default(),
            options: RequestOptions::default(),
            show_progress: false,
        }
    }

    pub fn with_fetch_config(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }

    /// Options sent with the search request and with every document fetch.
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.fetcher = self.fetcher.with_options(options.clone());
        self.options = options;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub async fn run_query(&self, text: &str) -> QueryOutcome {
        if let Err(err) = Validator::validate_not_blank(text, EMPTY_QUERY_MESSAGE) {
            self.notifier.alert(&err.payload());
            return QueryOutcome::Rejected;
        }

        self.results.clear();

        let timer = OperationTimer::new("query");
        info!("Searching for: {}", text);

        let hits = match self.gateway.query(&SearchQuery::new(text), &self.options).await {
            Ok(hits) => hits,
            Err(err) => {
                warn!("Search request failed: {}", err);
                self.notifier.alert(&err.payload());
                return QueryOutcome::Failed;
            }
        };

        debug!(
            "Search returned {} hit(s): {:?}",
            hits.len(),
            hits.iter().map(|h| h.document_id.as_str()).collect::<Vec<_>>()
        );

        let stats = self.fetch_all(&hits).await;
        timer.finish_with_count(stats.appended);

        QueryOutcome::Completed(stats)
    }

    /// Fetches every hit concurrently and presents each result as the
    /// configured order allows.
    async fn fetch_all(&self, hits: &[SearchHit]) -> FetchStats {
        let progress = FetchProgress::new(hits.len(), self.show_progress);
        let limit = self.fetch.limit_for(hits.len());

        let fetches = stream::iter(hits.iter().map(|hit| {
            let document_id = hit.document_id.as_str();
            async move { (document_id, self.fetcher.fetch(document_id).await) }
        }));

        let mut completed = match self.fetch.order {
            FetchOrder::Completion => fetches.buffer_unordered(limit).boxed_local(),
            FetchOrder::Query => fetches.buffered(limit).boxed_local(),
        };

        while let Some((document_id, result)) = completed.next().await {
            match self.fetcher.present(document_id, result) {
                FetchOutcome::Appended => progress.inc_appended(),
                FetchOutcome::Failed => progress.inc_failed(),
            }
        }

        progress.finish();
        progress.get_stats()
    }
}
