use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::model::{MealsEnvelope, RawDetail, RawSummary, RecipeDetail, RecipeSummary};

/// Remote source of recipes
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Recipes whose name matches `query`. No match is an empty list.
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, WidgetError>;

    /// Full record for `id`, or `None` if the service does not know it.
    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>, WidgetError>;
}

/// [`RecipeService`] backed by TheMealDB's JSON API
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &WidgetConfig) -> Result<Self, WidgetError> {
        Self::with_base_url(
            config.base_url.clone(),
            Some(config.timeout()),
            &config.user_agent,
        )
    }

    #[doc(hidden)]
    pub fn with_base_url(
        base_url: String,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self, WidgetError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(10));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| WidgetError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        param: (&str, &str),
    ) -> Result<Vec<T>, WidgetError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.client.get(&url).query(&[param]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::Status(status.as_u16()));
        }

        let envelope: MealsEnvelope<T> = response.json().await?;
        Ok(envelope.into_meals())
    }
}

#[async_trait]
impl RecipeService for MealDbClient {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, WidgetError> {
        let meals: Vec<RawSummary> = self.get_meals("search.php", ("s", query)).await?;
        debug!("search '{}' returned {} meals", query, meals.len());
        Ok(meals.into_iter().map(RecipeSummary::from).collect())
    }

    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>, WidgetError> {
        let meals: Vec<RawDetail> = self.get_meals("lookup.php", ("i", id)).await?;
        debug!("lookup '{}' returned {} meals", id, meals.len());
        Ok(meals.into_iter().next().map(RecipeDetail::from))
    }
}
