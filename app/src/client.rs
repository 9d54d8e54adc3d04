use async_trait::async_trait;
use gloo_net::http::Request;
use models::{ApiConfig, RecipeId};
use std::ops::Deref;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] gloo_net::Error),
}

/// The part of the recipe backend the browser talks to.
#[async_trait(?Send)]
pub trait RecipeApi {
    /// Delete the recipe. Any response counts as success, only transport failures are errors.
    async fn delete(&self, id: &RecipeId) -> Result<(), ClientError>;
}

/// Backend reached over `fetch`.
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl RecipeApi for HttpApi {
    async fn delete(&self, id: &RecipeId) -> Result<(), ClientError> {
        let response = Request::delete(&self.config.recipe_url(id)).send().await?;
        log::debug!("DELETE {} answered {}", response.url(), response.status());
        Ok(())
    }
}

/// Shared handle to a [`RecipeApi`] that can be passed around as a component property.
#[derive(Clone)]
pub struct ApiHandle(Rc<dyn RecipeApi>);

impl ApiHandle {
    pub fn new(api: impl RecipeApi + 'static) -> Self {
        Self(Rc::new(api))
    }

    pub fn from_rc(api: Rc<dyn RecipeApi>) -> Self {
        Self(api)
    }
}

impl Deref for ApiHandle {
    type Target = dyn RecipeApi;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
