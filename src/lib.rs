pub mod config;
pub mod detail;
pub mod error;
pub mod modal;
pub mod model;
pub mod render;
pub mod search;
pub mod service;
pub mod theme;
pub mod token;
pub mod widget;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use config::WidgetConfig;
pub use detail::{DetailController, DetailOutcome};
pub use error::WidgetError;
pub use modal::{ClickTarget, Modal, ModalContent};
pub use model::{Ingredient, RecipeDetail, RecipeSummary};
pub use render::{DetailView, StatusMessage};
pub use search::{SearchController, SearchOutcome, SearchState};
pub use service::{MealDbClient, RecipeService};
pub use theme::{Theme, ThemeToggle};
pub use widget::RecipeWidget;

// Recovers the guard from a poisoned lock.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Search TheMealDB with the configuration from `config.toml` / environment.
pub async fn search_recipes(query: &str) -> Result<Vec<RecipeSummary>, WidgetError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(WidgetError::EmptyQuery);
    }
    let config = WidgetConfig::load()?;
    MealDbClient::new(&config)?.search(query).await
}

/// Fetch one recipe from TheMealDB with the configuration from `config.toml` / environment.
pub async fn lookup_recipe(id: &str) -> Result<Option<RecipeDetail>, WidgetError> {
    let config = WidgetConfig::load()?;
    MealDbClient::new(&config)?.lookup(id).await
}
