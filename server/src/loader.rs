//! Server-side half of the recipe page: fetch the record the page is rendered from.

use crate::Result;
use models::{ApiConfig, Envelope, Recipe, RecipeId};
use tracing::{debug, instrument};

/// Fetches recipes from the backend, one GET per page request.
#[derive(Clone, Debug)]
pub struct Loader {
    client: reqwest::Client,
    api: ApiConfig,
}

impl Loader {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api,
        }
    }

    /// Get the recipe `id`. The status code is not looked at, a body that is not a recipe
    /// envelope fails decoding.
    #[instrument(skip(self))]
    pub async fn load(&self, id: &RecipeId) -> Result<Recipe> {
        let url = self.api.recipe_url(id);
        debug!("GET {url}");

        let envelope: Envelope<Recipe> = self.client.get(&url).send().await?.json().await?;

        Ok(envelope.data)
    }
}
