//! Shared test utilities: catalog payload builders, an in-memory data
//! source and a mock HTTP catalog.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use forkify::api::{ApiError, DataSource};
use forkify::persistence::{MemoryStore, PersistenceAdapter, PersistenceError};
use forkify::recipe::NewRecipePayload;
use parking_lot::Mutex;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Persistence backend whose writes can be switched to fail, as when the
/// disk is full. Reads always go to the inner memory store.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_writes: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        Self {
            inner: MemoryStore::with_value(key, value),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_writes.store(failing, Ordering::SeqCst);
    }
}

impl PersistenceAdapter for FlakyStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.inner.load(key)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Write {
                path: PathBuf::from(format!("{}.json", key)),
                source: std::io::Error::other("disk full"),
            });
        }
        self.inner.store(key, value)
    }
}

/// Single-recipe response as the catalog sends it.
pub fn recipe_json(id: &str, servings: u32, ingredients: Value) -> Value {
    json!({
        "status": "success",
        "data": {
            "recipe": {
                "id": id,
                "title": format!("Recipe {}", id),
                "publisher": "Test Kitchen",
                "source_url": format!("https://example.com/{}", id),
                "image_url": format!("https://example.com/{}.jpg", id),
                "servings": servings,
                "cooking_time": 45,
                "ingredients": ingredients
            }
        }
    })
}

/// Search response with `count` entries named `{prefix}-{i}`.
pub fn search_json(prefix: &str, count: usize) -> Value {
    let recipes: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": format!("{}-{}", prefix, i),
                "title": format!("{} {}", prefix, i),
                "publisher": "Test Kitchen",
                "image_url": format!("https://example.com/{}-{}.jpg", prefix, i)
            })
        })
        .collect();
    json!({ "status": "success", "results": count, "data": { "recipes": recipes } })
}

/// Ingredient list `[2 cups flour, salt]`.
pub fn default_ingredients() -> Value {
    json!([
        { "quantity": 2, "unit": "cups", "description": "flour" },
        { "quantity": null, "unit": "", "description": "salt" }
    ])
}

/// In-memory [`DataSource`] with canned payloads.
///
/// Unknown recipe ids answer 400 like the real catalog; unknown queries
/// answer with an empty result set. Uploads echo the payload back with a
/// fresh id and key.
#[derive(Default)]
pub struct FakeSource {
    recipes: HashMap<String, Value>,
    searches: HashMap<String, Value>,
    failure: Option<(u16, String)>,
    calls: Mutex<Vec<String>>,
    uploads: Mutex<Vec<Value>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipe(mut self, id: &str, servings: u32) -> Self {
        self.recipes
            .insert(id.to_string(), recipe_json(id, servings, default_ingredients()));
        self
    }

    pub fn with_search(mut self, query: &str, prefix: &str, count: usize) -> Self {
        self.searches
            .insert(query.to_string(), search_json(prefix, count));
        self
    }

    /// Every call fails with this status.
    pub fn failing(mut self, status: u16, message: &str) -> Self {
        self.failure = Some((status, message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn uploads(&self) -> Vec<Value> {
        self.uploads.lock().clone()
    }

    fn check(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().push(call);
        match &self.failure {
            Some((status, message)) => Err(ApiError::Status {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl DataSource for FakeSource {
    async fn get_recipe(&self, id: &str) -> Result<Value, ApiError> {
        self.check(format!("get {}", id))?;
        self.recipes.get(id).cloned().ok_or_else(|| ApiError::Status {
            status: 400,
            message: format!("Invalid _id: {}", id),
        })
    }

    async fn search(&self, query: &str) -> Result<Value, ApiError> {
        self.check(format!("search {}", query))?;
        Ok(self
            .searches
            .get(query)
            .cloned()
            .unwrap_or_else(|| search_json(query, 0)))
    }

    async fn create_recipe(&self, payload: &NewRecipePayload) -> Result<Value, ApiError> {
        self.check(format!("create {}", payload.title))?;
        let mut recipe = serde_json::to_value(payload).map_err(|e| ApiError::Malformed(e.to_string()))?;
        recipe["id"] = json!(format!("uploaded-{}", self.uploads.lock().len() + 1));
        recipe["key"] = json!("test-key");
        self.uploads.lock().push(recipe.clone());
        Ok(json!({ "status": "success", "data": { "recipe": recipe } }))
    }
}

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A complete upload form with the given ingredient fields.
pub fn upload_form(servings: &str, ingredients: &[&str]) -> Vec<(String, String)> {
    let mut form: Vec<(String, String)> = [
        ("title", "Test Soup"),
        ("sourceUrl", "https://example.com/soup"),
        ("image", "https://example.com/soup.jpg"),
        ("publisher", "Tester"),
        ("cookingTime", "25"),
        ("servings", servings),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    form.extend(
        ingredients
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("ingredient-{}", i + 1), v.to_string())),
    );
    form
}
