//! Recipe entities and the mapping from catalog payloads.

mod formatter;
mod payload;
mod types;

pub use formatter::{format_recipe, format_search_results};
pub use payload::NewRecipePayload;
pub use types::{Bookmark, Ingredient, Preview, Recipe, SearchSummary};
