use log::{debug, info, warn};
use std::sync::{Arc, Mutex};

use crate::error::WidgetError;
use crate::lock;
use crate::model::RecipeSummary;
use crate::render::StatusMessage;
use crate::service::RecipeService;
use crate::token::TokenIssuer;

pub const SEARCH_FAILED_TEXT: &str = "An error occurred. Please try again.";

/// Transient state of the search flow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub loading: bool,
    pub error: bool,
    pub message: Option<StatusMessage>,
    pub results: Vec<RecipeSummary>,
}

/// How a single submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query was blank; nothing was requested
    Invalid,
    /// Results rendered
    Found(usize),
    /// Request succeeded with no matches
    Empty,
    /// Transport failure or non-success status
    Failed,
    /// A newer search was submitted before this one resolved
    Stale,
}

pub struct SearchController {
    service: Arc<dyn RecipeService>,
    tokens: TokenIssuer,
    state: Mutex<SearchState>,
}

impl SearchController {
    pub fn new(service: Arc<dyn RecipeService>) -> Self {
        Self {
            service,
            tokens: TokenIssuer::new(),
            state: Mutex::new(SearchState::default()),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SearchState {
        lock(&self.state).clone()
    }

    pub fn results(&self) -> Vec<RecipeSummary> {
        lock(&self.state).results.clone()
    }

    /// Result card at `index` in the current result set
    pub fn card(&self, index: usize) -> Option<RecipeSummary> {
        lock(&self.state).results.get(index).cloned()
    }

    pub async fn submit(&self, raw_query: &str) -> SearchOutcome {
        let query = raw_query.trim();
        debug!("Search term: {:?}", query);

        if query.is_empty() {
            let mut state = lock(&self.state);
            state.loading = false;
            state.error = true;
            state.message = Some(StatusMessage::error(WidgetError::EmptyQuery.to_string()));
            return SearchOutcome::Invalid;
        }

        // Token and loading state change together
        let token = {
            let mut state = lock(&self.state);
            let token = self.tokens.issue();
            *state = SearchState {
                query: query.to_string(),
                loading: true,
                error: false,
                message: Some(StatusMessage::loading(format!("Searching for... {}", query))),
                results: Vec::new(),
            };
            token
        };

        let result = self.service.search(query).await;

        let mut state = lock(&self.state);
        if !self.tokens.is_current(token) {
            debug!(
                "Discarding stale search response for {:?} (token {})",
                query,
                token.value()
            );
            return SearchOutcome::Stale;
        }

        state.loading = false;
        match result {
            Ok(results) if results.is_empty() => {
                info!("No recipes found for {:?}", query);
                state.message = Some(StatusMessage::info(format!(
                    "No recipes found for \"{}\". Please try another recipe.",
                    query
                )));
                SearchOutcome::Empty
            }
            Ok(results) => {
                info!("Found {} recipes for {:?}", results.len(), query);
                let count = results.len();
                state.message = None;
                state.results = results;
                SearchOutcome::Found(count)
            }
            Err(e) => {
                warn!("Search for {:?} failed: {}", query, e);
                state.error = true;
                state.message = Some(StatusMessage::error(SEARCH_FAILED_TEXT));
                SearchOutcome::Failed
            }
        }
    }
}
