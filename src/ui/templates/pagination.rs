use crate::store::SearchSession;
use crate::ui::templates::{icon, Renderable};
use crate::ui::tree::Element;

/// Previous/next page buttons.
///
/// | position               | buttons       |
/// |------------------------|---------------|
/// | first of several pages | next          |
/// | last of several pages  | prev          |
/// | in between             | prev and next |
/// | only page, or past end | none          |
#[derive(Debug, Default, Clone, Copy)]
pub struct PaginationTemplate;

impl Renderable for PaginationTemplate {
    type Data = SearchSession;

    fn generate_markup(&self, session: &SearchSession) -> Vec<Element> {
        let page = session.page;
        let num_pages = session.num_pages();

        if page == 1 && num_pages > 1 {
            vec![next_button(page + 1)]
        } else if page == num_pages && num_pages > 1 {
            vec![prev_button(page - 1)]
        } else if page > 1 && page < num_pages {
            vec![prev_button(page - 1), next_button(page + 1)]
        } else {
            Vec::new()
        }
    }
}

fn prev_button(goto: u32) -> Element {
    Element::new("button")
        .attr("data-goto", goto.to_string())
        .class("btn--inline pagination__btn--prev")
        .child(
            Element::new("svg")
                .class("search__icon")
                .child(icon("arrow-left")),
        )
        .child(Element::new("span").text(format!("Page {}", goto)))
}

fn next_button(goto: u32) -> Element {
    Element::new("button")
        .attr("data-goto", goto.to_string())
        .class("btn--inline pagination__btn--next")
        .child(Element::new("span").text(format!("Page {}", goto)))
        .child(
            Element::new("svg")
                .class("search__icon")
                .child(icon("arrow-right")),
        )
}
