//! The assembled search widget.
//!
//! [`RecipeWidget`] wires the search and detail controllers to one shared
//! modal and a theme flag, and renders the whole page fragment: search form,
//! status region, results grid and the detail overlay.

use html_escape::encode_double_quoted_attribute;
use std::sync::{Arc, Mutex};

use crate::config::WidgetConfig;
use crate::detail::{DetailController, DetailOutcome};
use crate::error::WidgetError;
use crate::modal::{ClickTarget, Modal};
use crate::render::{render_message, render_results};
use crate::search::{SearchController, SearchOutcome, SearchState};
use crate::service::{MealDbClient, RecipeService};
use crate::theme::{Theme, ThemeToggle};

pub struct RecipeWidget {
    search: SearchController,
    detail: DetailController,
    theme: ThemeToggle,
}

impl RecipeWidget {
    pub fn new(service: Arc<dyn RecipeService>) -> Self {
        let modal = Arc::new(Mutex::new(Modal::new()));
        Self {
            search: SearchController::new(service.clone()),
            detail: DetailController::new(service, modal),
            theme: ThemeToggle::new(),
        }
    }

    /// Builds a widget talking to the configured TheMealDB endpoint
    pub fn from_config(config: &WidgetConfig) -> Result<Self, WidgetError> {
        let client = MealDbClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub async fn submit_search(&self, query: &str) -> SearchOutcome {
        self.search.submit(query).await
    }

    /// Opens the detail for the card at `index` in the current results.
    ///
    /// Returns `None` when there is no such card.
    pub async fn click_card(&self, index: usize) -> Option<DetailOutcome> {
        let card = self.search.card(index)?;
        Some(self.detail.open(&card.id).await)
    }

    pub async fn open_recipe(&self, id: &str) -> DetailOutcome {
        self.detail.open(id).await
    }

    pub fn close_modal(&self) {
        self.detail.close();
    }

    pub fn click_modal(&self, target: ClickTarget) -> bool {
        self.detail.handle_click(target)
    }

    pub fn toggle_theme(&self) -> Theme {
        self.theme.toggle()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn search_state(&self) -> SearchState {
        self.search.state()
    }

    pub fn modal(&self) -> Modal {
        self.detail.modal()
    }

    pub fn render(&self) -> String {
        let state = self.search.state();
        let modal = self.detail.modal();

        let message = state
            .message
            .as_ref()
            .map(render_message)
            .unwrap_or_else(|| r#"<p class="message"></p>"#.to_string());

        format!(
            concat!(
                r#"<body class="{}"{}>"#,
                r#"<button id="theme-toggle">Toggle theme</button>"#,
                r#"<form id="search-form"><input id="search" type="text" value="{}"><button type="submit">Search</button></form>"#,
                r#"<div id="message-area">{}</div>"#,
                r#"<div id="results-grid">{}</div>"#,
                "{}",
                "</body>"
            ),
            self.theme.current().body_class(),
            if modal.scroll_locked() { r#" style="overflow: hidden""# } else { "" },
            encode_double_quoted_attribute(&state.query),
            message,
            render_results(&state.results),
            modal.render()
        )
    }
}
