//! Wire shapes of the remote recipe catalog.
//!
//! The catalog speaks snake_case JSON wrapped in a `data` envelope:
//!
//! ```text
//! GET  {base}{id}?key=K          -> { data: { recipe: {...} } }
//! GET  {base}?search=Q&key=K     -> { data: { recipes: [...] } }
//! POST {base}?key=K  (body)      -> { data: { recipe: {...} } }
//! ```

use serde::{Deserialize, Serialize};

use crate::recipe::types::Ingredient;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipeData {
    #[serde(default)]
    pub recipe: Option<RecipePayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchData {
    #[serde(default)]
    pub recipes: Option<Vec<SearchEntryPayload>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipePayload {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub servings: u32,
    pub cooking_time: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchEntryPayload {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default)]
    pub key: Option<String>,
}

/// Body of the upload request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecipePayload {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}
