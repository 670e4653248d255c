//! Flows that tie user actions to store operations and surfaces.
//!
//! Every flow follows the same cycle: show a spinner where a request is
//! pending, run the store operation, then render or patch the affected
//! surfaces. A failing flow leaves its surface in the error state and
//! hands the error back to the caller.

mod navigation;

use tracing::{debug, warn};

use crate::api::DataSource;
use crate::persistence::PersistenceAdapter;
use crate::store::{StateStore, StoreError};
use crate::ui::surface::Surface;
use crate::ui::templates::{
    BookmarksTemplate, PaginationTemplate, RecipeTemplate, Renderable, ResultsTemplate,
};

pub use navigation::{FragmentNavigation, Navigation};

pub const RECIPE_ERROR: &str = "We could not find that recipe. Please try another one!";
pub const RESULTS_ERROR: &str = "No recipes found for your query! Please try again.";
pub const BOOKMARKS_ERROR: &str = "No bookmarks yet. Find a nice recipe and bookmark it ;)";
pub const UPLOAD_MESSAGE: &str = "Recipe was successfully uploaded :)";

pub struct Controller<D, P, N> {
    store: StateStore<D, P>,
    navigation: N,
    recipe_view: Surface,
    results_view: Surface,
    pagination_view: Surface,
    bookmarks_view: Surface,
    upload_view: Surface,
}

impl<D: DataSource, P: PersistenceAdapter, N: Navigation> Controller<D, P, N> {
    pub fn new(store: StateStore<D, P>, navigation: N) -> Self {
        Self {
            store,
            navigation,
            recipe_view: Surface::new("recipe", RECIPE_ERROR, ""),
            results_view: Surface::new("results", RESULTS_ERROR, ""),
            pagination_view: Surface::new("pagination", "", ""),
            bookmarks_view: Surface::new("bookmarks", BOOKMARKS_ERROR, ""),
            upload_view: Surface::new("upload", "", UPLOAD_MESSAGE),
        }
    }

    pub fn store(&self) -> &StateStore<D, P> {
        &self.store
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut N {
        &mut self.navigation
    }

    pub fn recipe_view(&self) -> &Surface {
        &self.recipe_view
    }

    pub fn results_view(&self) -> &Surface {
        &self.results_view
    }

    pub fn pagination_view(&self) -> &Surface {
        &self.pagination_view
    }

    pub fn bookmarks_view(&self) -> &Surface {
        &self.bookmarks_view
    }

    pub fn upload_view(&self) -> &Surface {
        &self.upload_view
    }

    /// Load the recipe named by the navigation id.
    ///
    /// Without an id nothing happens. Result and bookmark lists already on
    /// screen are patched so the entry for this id is highlighted.
    pub async fn control_recipe(&mut self) -> Result<(), StoreError> {
        let Some(id) = self.navigation.current_id() else {
            return Ok(());
        };

        self.recipe_view.render_spinner();
        self.highlight_active(&id);

        match self.store.load_recipe(&id).await {
            Ok(recipe) => {
                self.recipe_view.render(&RecipeTemplate, Some(recipe));
                Ok(())
            }
            Err(e) => {
                warn!(%id, error = %e, "recipe load failed");
                self.recipe_view.render_error(None);
                Err(e)
            }
        }
    }

    /// Run a search and show its first page. A blank query is ignored.
    pub async fn control_search(&mut self, query: &str) -> Result<(), StoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        self.results_view.render_spinner();

        if let Err(e) = self.store.load_search_results(query).await {
            warn!(query, error = %e, "search failed");
            self.results_view.render_error(Some(&e.to_string()));
            return Err(e);
        }

        self.render_results(None);
        Ok(())
    }

    /// Show another page of the current result set.
    pub fn control_pagination(&mut self, page: u32) {
        self.render_results(Some(page));
    }

    /// Rescale the current recipe and patch the recipe surface.
    pub fn control_servings(&mut self, servings: u32) -> Result<(), StoreError> {
        let recipe = self.store.update_servings(servings)?;
        let mutations = self.recipe_view.update(&RecipeTemplate, recipe);
        debug!(servings, mutations = mutations.len(), "servings patched");
        Ok(())
    }

    /// Bookmark the current recipe, or remove its bookmark.
    pub fn control_toggle_bookmark(&mut self) -> Result<(), StoreError> {
        self.store.toggle_bookmark()?;
        if let Some(recipe) = self.store.recipe() {
            self.recipe_view.update(&RecipeTemplate, recipe);
        }
        self.render_bookmarks();
        Ok(())
    }

    /// First paint of the bookmark list.
    pub fn control_bookmarks(&mut self) {
        self.render_bookmarks();
    }

    /// Upload a user recipe, show it, and point the navigation at it.
    pub async fn control_upload(&mut self, form: &[(String, String)]) -> Result<(), StoreError> {
        self.upload_view.render_spinner();

        let id = match self.store.upload_recipe(form).await {
            Ok(recipe) => {
                self.recipe_view.render(&RecipeTemplate, Some(recipe));
                recipe.id.clone()
            }
            Err(e) => {
                warn!(error = %e, "upload failed");
                self.upload_view.render_error(Some(&e.to_string()));
                return Err(e);
            }
        };

        self.upload_view.render_message(None);
        self.navigation.replace_id(&id);
        self.render_bookmarks();
        Ok(())
    }

    fn active_id(&self) -> Option<String> {
        self.navigation.current_id()
    }

    fn render_results(&mut self, page: Option<u32>) {
        let template = ResultsTemplate {
            active_id: self.active_id(),
        };
        let results = self.store.results_page(page);
        self.results_view.render(&template, Some(results));
        self.pagination_view
            .render(&PaginationTemplate, Some(self.store.search()));
    }

    fn render_bookmarks(&mut self) {
        let template = BookmarksTemplate {
            active_id: self.active_id(),
        };
        self.bookmarks_view
            .render(&template, Some(self.store.bookmarks()));
    }

    fn highlight_active(&mut self, id: &str) {
        let results = ResultsTemplate {
            active_id: Some(id.to_string()),
        };
        if self.results_view.state().is_loaded() {
            let page = self.store.results_page(None);
            if !results.is_empty(page) {
                self.results_view.update(&results, page);
            }
        }

        let bookmarks = BookmarksTemplate {
            active_id: Some(id.to_string()),
        };
        if self.bookmarks_view.state().is_loaded() {
            self.bookmarks_view.update(&bookmarks, self.store.bookmarks());
        }
    }
}
