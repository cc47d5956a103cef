use crate::domain::model::KeywordRecord;
use crate::domain::ports::KeywordProvider;
use crate::utils::error::{FETCH_FAILURE_MESSAGE, VALIDATION_MESSAGE};
use crate::utils::validation::validate_query;
use std::sync::{Mutex, MutexGuard};

/// Search lifecycle state. Only the controller mutates it; views read snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub results: Vec<KeywordRecord>,
    pub has_searched: bool,
    /// Bumped on every accepted submission; completions carrying an older value are dropped.
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input. No provider call was made.
    Rejected,
    Completed { count: usize },
    Failed,
    /// A newer submission started while this one was in flight; its result was discarded.
    Superseded,
}

pub struct QueryController<P: KeywordProvider> {
    provider: P,
    state: Mutex<SearchState>,
}

impl<P: KeywordProvider> QueryController<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: Mutex::new(SearchState::default()),
        }
    }

    pub fn snapshot(&self) -> SearchState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, SearchState> {
        // Writes are plain field assignments, so a poisoned guard still holds a valid state.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Runs one search for `text`. The state lock is released while the provider is awaited.
    pub async fn submit_query(&self, text: &str) -> SubmitOutcome {
        let (query, ticket) = {
            let mut state = self.lock();
            let query = match validate_query(text) {
                Ok(query) => query.to_string(),
                Err(e) => {
                    tracing::debug!("Rejected submission: {}", e);
                    state.error = Some(VALIDATION_MESSAGE.to_string());
                    return SubmitOutcome::Rejected;
                }
            };

            state.query = query.clone();
            state.error = None;
            state.results.clear();
            state.is_loading = true;
            state.has_searched = true;
            state.generation += 1;
            (query, state.generation)
        };

        tracing::debug!("Submitting query '{}' (generation {})", query, ticket);
        let outcome = self.provider.fetch_keywords(&query).await;

        let mut state = self.lock();
        if state.generation != ticket {
            tracing::debug!(
                "Discarding stale response for '{}' (generation {}, current {})",
                query,
                ticket,
                state.generation
            );
            return SubmitOutcome::Superseded;
        }

        state.is_loading = false;
        match outcome {
            Ok(records) => {
                let count = records.len();
                state.results = records;
                state.error = None;
                SubmitOutcome::Completed { count }
            }
            Err(_) => {
                state.results.clear();
                state.error = Some(FETCH_FAILURE_MESSAGE.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}
