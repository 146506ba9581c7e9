use std::sync::Arc;

use anyhow::anyhow;
use log::{debug, error, info, warn};
use tokio::{runtime::Handle, sync::oneshot, task::JoinHandle};

use crate::{
    CategoriesListener, CategoryCollectionResponse, CategoryService, CategoryStorage, FetchOutcome,
    FetcherConfig, FetcherError, RawResponse, StdResult,
};

/// A handle on an in-flight category fetch.
///
/// Dropping it leaves the fetch running: the listener is still served, the outcome is discarded.
pub struct FetchHandle {
    outcome: oneshot::Receiver<FetchOutcome>,
    task: Option<JoinHandle<()>>,
}

impl FetchHandle {
    /// Waits for the outcome of the fetch.
    ///
    /// Fails if the fetch was aborted or could not be started.
    pub async fn outcome(self) -> StdResult<FetchOutcome> {
        self.outcome
            .await
            .map_err(|_| anyhow!("The category fetch ended without an outcome"))
    }

    /// Aborts the fetch. The listener is not invoked if the fetch had not completed yet.
    pub fn abort(&self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}

/// Fetches the root categories and delivers them to listeners.
#[derive(Clone)]
pub struct CategoryFetcher {
    service: Arc<dyn CategoryService>,
    local_storage: Option<Arc<dyn CategoryStorage>>,
    deliver_empty_results: bool,
}

impl CategoryFetcher {
    /// Creates a new `CategoryFetcher` with the given transport service.
    pub fn new(service: Arc<dyn CategoryService>, config: &FetcherConfig) -> Self {
        Self {
            service,
            local_storage: None,
            deliver_empty_results: config.deliver_empty_results,
        }
    }

    /// Attaches a local storage accessor.
    pub fn with_local_storage(mut self, local_storage: Arc<dyn CategoryStorage>) -> Self {
        self.local_storage = Some(local_storage);
        self
    }

    /// Retrieves the local storage accessor, if any.
    pub fn local_storage(&self) -> Option<&Arc<dyn CategoryStorage>> {
        self.local_storage.as_ref()
    }

    /// Starts fetching the root categories without blocking the caller.
    ///
    /// The listener is invoked at most once, from a runtime worker, and only when categories were
    /// loaded. Outside of a tokio runtime nothing is fetched and the handle yields no outcome.
    pub fn fetch_root_categories(&self, listener: Arc<dyn CategoriesListener>) -> FetchHandle {
        let (sender, receiver) = oneshot::channel();
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!("Cannot fetch categories outside of a tokio runtime: {e}");
                return FetchHandle {
                    outcome: receiver,
                    task: None,
                };
            }
        };
        let fetcher = self.clone();
        let task = runtime.spawn(async move {
            let outcome = fetcher.load_root_categories().await;
            match &outcome {
                FetchOutcome::Success(categories) => {
                    listener.on_categories_loaded(categories.to_owned());
                }
                FetchOutcome::Empty if fetcher.deliver_empty_results => {
                    listener.on_categories_loaded(vec![]);
                }
                _ => {}
            }
            drop(listener);
            if sender.send(outcome).is_err() {
                debug!("Category fetch outcome discarded, the handle was dropped");
            }
        });

        FetchHandle {
            outcome: receiver,
            task: Some(task),
        }
    }

    /// Fetches the root categories and returns the tagged outcome.
    pub async fn load_root_categories(&self) -> FetchOutcome {
        match self.service.get_categories().await {
            Ok(response) => self.process_response(response),
            Err(e) => {
                error!("Failed to fetch categories: {e:?}");
                FetchOutcome::Failure(FetcherError::Transport(format!("{e:#}")))
            }
        }
    }

    fn process_response(&self, response: RawResponse) -> FetchOutcome {
        debug!("Received categories response: {}", response.metadata());
        if !response.is_success() {
            let body = response.body().unwrap_or_default().to_string();
            error!(
                "Categories request failed with status {}: {body}",
                response.status()
            );
            return FetchOutcome::Failure(FetcherError::Status {
                status: response.status(),
                body,
            });
        }

        let Some(body) = response.body() else {
            error!("Categories response has no body");
            return FetchOutcome::Failure(FetcherError::Decode("Missing body".to_string()));
        };
        debug!("Categories response body: {body}");
        let categories = match serde_json::from_str::<CategoryCollectionResponse>(body) {
            Ok(decoded) => decoded.into_categories(),
            Err(e) => {
                error!("Failed to decode categories response: {e}");
                return FetchOutcome::Failure(FetcherError::Decode(e.to_string()));
            }
        };
        if categories.is_empty() {
            warn!("Categories response contains no category");
            return FetchOutcome::Empty;
        }
        info!("Loaded {} root categories", categories.len());

        FetchOutcome::Success(categories)
    }
}
