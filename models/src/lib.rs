use serde::{Deserialize, Serialize};
use std::fmt;

mod fragments;
mod number;

pub use fragments::{Fragments, ShapeError};
pub use number::format_number;

/// Opaque identifier assigned to a recipe by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Recipe record as returned by the backend API.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: RecipeId,
    pub name: String,
    pub image_url: String,
    /// Minutes.
    pub prep_time: f64,
    /// Minutes.
    pub cook_time: f64,
    #[serde(default)]
    pub servings: Option<f64>,
    #[serde(default)]
    pub ingredients: Fragments,
    #[serde(default)]
    pub instructions: Fragments,
    /// Sent by the backend but never displayed.
    #[serde(default)]
    pub cal_per_serving: Option<f64>,
}

/// Top-level wrapper of every backend response body.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// A recipe with its ingredient and instruction text already reconstructed.
///
/// This is what the page renders and what travels to the browser for hydration.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RecipeCard {
    pub id: RecipeId,
    pub name: String,
    pub image_url: String,
    pub prep_time: f64,
    pub cook_time: f64,
    pub servings: Option<f64>,
    pub ingredients: String,
    pub instructions: String,
}

impl RecipeCard {
    /// Servings worth showing, zero counts as unknown.
    pub fn visible_servings(&self) -> Option<f64> {
        self.servings
            .filter(|servings| *servings != 0.0 && !servings.is_nan())
    }
}

impl TryFrom<Recipe> for RecipeCard {
    type Error = ShapeError;

    fn try_from(recipe: Recipe) -> Result<Self, Self::Error> {
        Ok(Self {
            ingredients: recipe.ingredients.text()?,
            instructions: recipe.instructions.text()?,
            id: recipe.id,
            name: recipe.name,
            image_url: recipe.image_url,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
        })
    }
}

/// Location of the recipe backend, shared by the server-side loader and the browser.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base: String,
}

impl ApiConfig {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// URL of a single recipe resource, `<base>/<id>` with `id` as one encoded path segment.
    pub fn recipe_url(&self, id: &RecipeId) -> String {
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            urlencoding::encode(id.as_str())
        )
    }
}
