//! Mapping from catalog payloads to internal entities.
//!
//! Field mapping (external → entity): `source_url → source_url`,
//! `image_url → image`, `cooking_time → cooking_time`; all other fields
//! keep their name. `key` is copied only when present and non-empty.

use serde_json::Value;

use crate::recipe::payload::{Envelope, RecipeData, RecipePayload, SearchData, SearchEntryPayload};
use crate::recipe::types::{Recipe, SearchSummary};
use crate::store::StoreError;

/// Convert a single-recipe response into a [`Recipe`].
///
/// `bookmarked` is always `false` here; the state store recomputes it
/// against the bookmark set.
pub fn format_recipe(raw: &Value) -> Result<Recipe, StoreError> {
    let envelope: Envelope<RecipeData> =
        serde_json::from_value(raw.clone()).map_err(|e| StoreError::NotFound {
            what: format!("recipe (malformed payload: {})", e),
        })?;

    let payload = envelope
        .data
        .and_then(|data| data.recipe)
        .ok_or_else(|| StoreError::NotFound {
            what: "recipe".to_string(),
        })?;

    recipe_from_payload(payload)
}

/// Convert a search response into result summaries.
///
/// An empty `recipes` array is a valid, empty result set.
pub fn format_search_results(raw: &Value) -> Result<Vec<SearchSummary>, StoreError> {
    let envelope: Envelope<SearchData> =
        serde_json::from_value(raw.clone()).map_err(|e| StoreError::NotFound {
            what: format!("search results (malformed payload: {})", e),
        })?;

    let entries = envelope
        .data
        .and_then(|data| data.recipes)
        .ok_or_else(|| StoreError::NotFound {
            what: "search results".to_string(),
        })?;

    Ok(entries.into_iter().map(summary_from_payload).collect())
}

fn recipe_from_payload(payload: RecipePayload) -> Result<Recipe, StoreError> {
    let RecipePayload {
        id,
        title,
        publisher,
        source_url,
        image_url,
        servings,
        cooking_time,
        ingredients,
        key,
    } = payload;

    if id.is_empty() || servings == 0 {
        return Err(StoreError::NotFound {
            what: format!("recipe '{}' (incomplete payload)", id),
        });
    }

    Ok(Recipe {
        id,
        title,
        publisher,
        source_url,
        image: image_url,
        servings,
        cooking_time,
        ingredients,
        bookmarked: false,
        key: non_empty(key),
    })
}

fn summary_from_payload(entry: SearchEntryPayload) -> SearchSummary {
    SearchSummary {
        id: entry.id,
        title: entry.title,
        publisher: entry.publisher,
        image: entry.image_url,
        key: non_empty(entry.key),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
