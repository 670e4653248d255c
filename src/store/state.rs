use tracing::{debug, info, warn};

use crate::api::DataSource;
use crate::persistence::{PersistenceAdapter, PersistenceError};
use crate::recipe::{format_recipe, format_search_results, Bookmark, Recipe, SearchSummary};
use crate::store::bookmarks::BookmarkSet;
use crate::store::session::SearchSession;
use crate::store::upload::build_payload;
use crate::store::StoreError;

/// Persistence key of the bookmark collection.
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Owns the application state and keeps its derived views consistent.
///
/// `D` fetches catalog payloads, `P` stores bookmarks. Every operation
/// that can fail hands the error back unmodified (or with field context);
/// nothing is retried or swallowed here.
pub struct StateStore<D, P> {
    source: D,
    persistence: P,
    recipe: Option<Recipe>,
    search: SearchSession,
    bookmarks: BookmarkSet,
}

impl<D: DataSource, P: PersistenceAdapter> StateStore<D, P> {
    /// Create the store and load persisted bookmarks once.
    ///
    /// A missing collection starts empty. A collection that no longer
    /// parses is logged and ignored; it is overwritten by the next
    /// bookmark mutation.
    pub fn new(source: D, persistence: P, results_per_page: u32) -> Result<Self, StoreError> {
        let bookmarks = match persistence.load(BOOKMARKS_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Bookmark>>(&raw) {
                Ok(entries) => BookmarkSet::from_entries(entries),
                Err(e) => {
                    warn!(error = %e, "ignoring unreadable bookmark collection");
                    BookmarkSet::default()
                }
            },
            None => BookmarkSet::default(),
        };
        debug!(count = bookmarks.len(), "loaded bookmarks");

        Ok(Self {
            source,
            persistence,
            recipe: None,
            search: SearchSession::new(results_per_page),
            bookmarks,
        })
    }

    /// The currently loaded recipe.
    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn search(&self) -> &SearchSession {
        &self.search
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.bookmarks.entries()
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.contains(id)
    }

    /// Fetch a recipe and make it current.
    ///
    /// `bookmarked` is recomputed from the bookmark set; whatever the
    /// payload says is ignored.
    pub async fn load_recipe(&mut self, id: &str) -> Result<&Recipe, StoreError> {
        let raw = self.source.get_recipe(id).await?;
        let mut recipe = format_recipe(&raw)?;
        recipe.bookmarked = self.bookmarks.contains(&recipe.id);
        info!(id = %recipe.id, bookmarked = recipe.bookmarked, "loaded recipe");
        Ok(&*self.recipe.insert(recipe))
    }

    /// Run a search, replacing the previous result set and rewinding to page 1.
    ///
    /// An empty result set is not an error.
    pub async fn load_search_results(&mut self, query: &str) -> Result<&SearchSession, StoreError> {
        let raw = self.source.search(query).await?;
        let results = format_search_results(&raw)?;
        info!(query, count = results.len(), "loaded search results");
        self.search.replace(query, results);
        Ok(&self.search)
    }

    /// Results on the given page, or on the current page when `page` is `None`.
    ///
    /// A page outside the result range is stored as-is and yields an empty slice.
    pub fn results_page(&mut self, page: Option<u32>) -> &[SearchSummary] {
        if let Some(page) = page {
            self.search.page = page.max(1);
        }
        self.search.page_slice(self.search.page)
    }

    /// Rescale every ingredient with a quantity to `new_servings`.
    ///
    /// Quantities are multiplied by `new / old` in floating point and not
    /// rounded. Ingredients without a quantity are left alone.
    pub fn update_servings(&mut self, new_servings: u32) -> Result<&Recipe, StoreError> {
        if new_servings == 0 {
            return Err(StoreError::validation(
                "servings",
                "Servings must be greater than zero",
            ));
        }

        let recipe = self.recipe.as_mut().ok_or_else(|| StoreError::NotFound {
            what: "a loaded recipe".to_string(),
        })?;

        let old_servings = recipe.servings as f64;
        let factor = new_servings as f64;
        for ingredient in &mut recipe.ingredients {
            if let Some(quantity) = ingredient.quantity.as_mut() {
                *quantity = *quantity * factor / old_servings;
            }
        }
        recipe.servings = new_servings;

        debug!(id = %recipe.id, servings = new_servings, "updated servings");
        Ok(recipe)
    }

    /// Add a bookmark. Adding an id that is already saved changes nothing.
    ///
    /// The new collection is written before it replaces the in-memory one,
    /// so a failed write leaves the store as it was.
    pub fn add_bookmark(&mut self, bookmark: Bookmark) -> Result<(), StoreError> {
        let id = bookmark.id.clone();
        let mut next = self.bookmarks.clone();
        let changed = next.insert(bookmark);

        if changed {
            self.persist_bookmarks(&next)?;
            self.bookmarks = next;
        }

        if let Some(recipe) = self.recipe.as_mut().filter(|r| r.id == id) {
            recipe.bookmarked = true;
        }
        debug!(%id, changed, "added bookmark");
        Ok(())
    }

    /// Remove a bookmark. Removing an unknown id is a no-op.
    pub fn delete_bookmark(&mut self, id: &str) -> Result<(), StoreError> {
        let mut next = self.bookmarks.clone();
        let changed = next.remove(id);

        if changed {
            self.persist_bookmarks(&next)?;
            self.bookmarks = next;
        }

        if let Some(recipe) = self.recipe.as_mut().filter(|r| r.id == id) {
            recipe.bookmarked = false;
        }
        debug!(id, changed, "deleted bookmark");
        Ok(())
    }

    /// Bookmark the current recipe, or remove it if it is already saved.
    pub fn toggle_bookmark(&mut self) -> Result<bool, StoreError> {
        let recipe = self.current_recipe()?;

        if recipe.bookmarked {
            let id = recipe.id.clone();
            self.delete_bookmark(&id)?;
            Ok(false)
        } else {
            let summary = recipe.summary();
            self.add_bookmark(summary)?;
            Ok(true)
        }
    }

    /// Validate the form, upload it, make the result current and bookmark it.
    pub async fn upload_recipe(&mut self, form: &[(String, String)]) -> Result<&Recipe, StoreError> {
        let payload = build_payload(form)?;
        let raw = self.source.create_recipe(&payload).await?;
        let mut recipe = format_recipe(&raw)?;
        info!(id = %recipe.id, "uploaded recipe");

        // Bookmark first: if the write fails the previous recipe stays current.
        self.add_bookmark(recipe.summary())?;
        recipe.bookmarked = true;

        Ok(&*self.recipe.insert(recipe))
    }

    fn current_recipe(&self) -> Result<&Recipe, StoreError> {
        self.recipe.as_ref().ok_or_else(|| StoreError::NotFound {
            what: "a loaded recipe".to_string(),
        })
    }

    fn persist_bookmarks(&self, bookmarks: &BookmarkSet) -> Result<(), StoreError> {
        let json = serde_json::to_string(bookmarks.entries()).map_err(|source| {
            PersistenceError::Serialize {
                key: BOOKMARKS_KEY.to_string(),
                source,
            }
        })?;
        self.persistence.store(BOOKMARKS_KEY, &json)?;
        Ok(())
    }
}
