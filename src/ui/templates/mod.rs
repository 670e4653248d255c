//! Per-screen templates: data in, element forest out.
//!
//! Templates are pure. Surfaces decide whether their output replaces the
//! live content or is reconciled into it.

mod pagination;
mod preview;
mod quantity;
mod recipe;
mod status;

use crate::ui::tree::Element;

pub use pagination::PaginationTemplate;
pub use preview::{BookmarksTemplate, ResultsTemplate};
pub use quantity::format_quantity;
pub use recipe::RecipeTemplate;
pub use status::{error_markup, message_markup, spinner_markup};

/// Sprite sheet referenced by `<use href>` icons.
pub const ICONS: &str = "img/icons.svg";

/// A screen template.
pub trait Renderable {
    type Data: ?Sized;

    /// Build the element forest for `data`.
    fn generate_markup(&self, data: &Self::Data) -> Vec<Element>;

    /// Whether `data` counts as "nothing to show". Surfaces render their
    /// error screen instead of calling [`Renderable::generate_markup`].
    fn is_empty(&self, _data: &Self::Data) -> bool {
        false
    }
}

pub(crate) fn icon(name: &str) -> Element {
    Element::new("use").attr("href", format!("{}#icon-{}", ICONS, name))
}

/// Join non-empty class names with single spaces.
pub(crate) fn classes(names: &[&str]) -> String {
    names
        .iter()
        .filter(|name| !name.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
