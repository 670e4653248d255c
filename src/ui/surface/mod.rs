//! A named screen region that owns its live element forest.
//!
//! `render` replaces the content wholesale; `update` reconciles a freshly
//! generated forest into the live one. Spinner, error and notice screens
//! always replace.

mod intent;
mod state;

use tracing::{debug, warn};

use crate::ui::reconcile::{patch_forest, same_shape, Mutation};
use crate::ui::templates::{error_markup, message_markup, spinner_markup, Renderable};
use crate::ui::tree::Element;

pub use intent::SurfaceIntent;
pub use state::SurfaceState;

pub struct Surface {
    name: &'static str,
    error_message: String,
    message: String,
    state: SurfaceState,
    content: Vec<Element>,
}

impl Surface {
    /// `error_message` and `message` are the defaults shown by
    /// [`Surface::render_error`] and [`Surface::render_message`].
    pub fn new(
        name: &'static str,
        error_message: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name,
            error_message: error_message.into(),
            message: message.into(),
            state: SurfaceState::default(),
            content: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    pub fn content(&self) -> &[Element] {
        &self.content
    }

    /// Serialized live content.
    pub fn markup(&self) -> String {
        self.content.iter().map(Element::to_markup).collect()
    }

    /// Replace the content with `template` applied to `data`.
    ///
    /// Missing data, or data the template considers empty, shows the
    /// default error screen instead.
    pub fn render<R: Renderable>(&mut self, template: &R, data: Option<&R::Data>) {
        match data {
            Some(data) if !template.is_empty(data) => {
                self.content = template.generate_markup(data);
                self.dispatch(SurfaceIntent::Loaded);
                debug!(surface = self.name, nodes = self.node_count(), "rendered");
            }
            _ => self.render_error(None),
        }
    }

    /// Reconcile `template` applied to `data` into the live content.
    ///
    /// When the new forest has a different shape the content is replaced
    /// instead, and no mutations are reported.
    pub fn update<R: Renderable>(&mut self, template: &R, data: &R::Data) -> Vec<Mutation> {
        let next = template.generate_markup(data);

        if !self.state.is_loaded() || !same_shape(&self.content, &next) {
            warn!(
                surface = self.name,
                state = ?self.state,
                "cannot patch in place, replacing content"
            );
            self.render(template, Some(data));
            return Vec::new();
        }

        patch_forest(&mut self.content, &next)
    }

    /// Show the loading indicator.
    pub fn render_spinner(&mut self) {
        self.content = spinner_markup();
        self.dispatch(SurfaceIntent::Request);
    }

    /// Show an error screen with `message`, or the surface default.
    pub fn render_error(&mut self, message: Option<&str>) {
        let message = message.unwrap_or(&self.error_message).to_string();
        self.content = error_markup(&message);
        debug!(surface = self.name, %message, "rendered error");
        self.dispatch(SurfaceIntent::Failed { message });
    }

    /// Show a notice with `message`, or the surface default.
    pub fn render_message(&mut self, message: Option<&str>) {
        let message = message.unwrap_or(&self.message).to_string();
        self.content = message_markup(&message);
        self.dispatch(SurfaceIntent::Notice { message });
    }

    fn dispatch(&mut self, intent: SurfaceIntent) {
        self.state = intent.into();
    }

    fn node_count(&self) -> usize {
        self.content.iter().map(Element::node_count).sum()
    }
}
