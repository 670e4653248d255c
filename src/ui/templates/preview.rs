use crate::recipe::{Bookmark, Preview, SearchSummary};
use crate::ui::templates::{classes, icon, Renderable};
use crate::ui::tree::Element;

/// One list entry linking to `#id`. The entry whose id equals `active_id`
/// is highlighted.
pub fn preview_markup(item: &impl Preview, active_id: Option<&str>) -> Element {
    let active = active_id == Some(item.id());

    Element::new("li").class("preview").child(
        Element::new("a")
            .class(classes(&[
                "preview__link",
                if active { "preview__link--active" } else { "" },
            ]))
            .attr("href", format!("#{}", item.id()))
            .child(
                Element::new("figure").class("preview__fig").child(
                    Element::new("img")
                        .attr("src", item.image())
                        .attr("alt", item.title()),
                ),
            )
            .child(
                Element::new("div")
                    .class("preview__data")
                    .child(Element::new("h4").class("preview__title").text(item.title()))
                    .child(
                        Element::new("p")
                            .class("preview__publisher")
                            .text(item.publisher()),
                    )
                    .child(
                        Element::new("div")
                            .class(classes(&[
                                "preview__user-generated",
                                if item.is_user_generated() { "" } else { "hidden" },
                            ]))
                            .child(Element::new("svg").child(icon("user"))),
                    ),
            ),
    )
}

/// One page of search results.
#[derive(Debug, Default, Clone)]
pub struct ResultsTemplate {
    pub active_id: Option<String>,
}

impl Renderable for ResultsTemplate {
    type Data = [SearchSummary];

    fn generate_markup(&self, results: &[SearchSummary]) -> Vec<Element> {
        results
            .iter()
            .map(|result| preview_markup(result, self.active_id.as_deref()))
            .collect()
    }

    fn is_empty(&self, results: &[SearchSummary]) -> bool {
        results.is_empty()
    }
}

/// The bookmark list.
#[derive(Debug, Default, Clone)]
pub struct BookmarksTemplate {
    pub active_id: Option<String>,
}

impl Renderable for BookmarksTemplate {
    type Data = [Bookmark];

    fn generate_markup(&self, bookmarks: &[Bookmark]) -> Vec<Element> {
        bookmarks
            .iter()
            .map(|bookmark| preview_markup(bookmark, self.active_id.as_deref()))
            .collect()
    }

    fn is_empty(&self, bookmarks: &[Bookmark]) -> bool {
        bookmarks.is_empty()
    }
}
