use crate::recipe::{Ingredient, Recipe};
use crate::ui::templates::{classes, format_quantity, icon, Renderable};
use crate::ui::tree::Element;

/// Full recipe view: figure, details bar, ingredient list and directions.
///
/// Serving changes and bookmark toggles keep the tree shape, so the
/// recipe surface can be patched in place after either.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecipeTemplate;

impl Renderable for RecipeTemplate {
    type Data = Recipe;

    fn generate_markup(&self, recipe: &Recipe) -> Vec<Element> {
        vec![
            figure(recipe),
            details(recipe),
            Element::new("div")
                .class("recipe__ingredients")
                .child(Element::new("h2").class("heading--2").text("Recipe ingredients"))
                .child(
                    Element::new("ul")
                        .class("recipe__ingredient-list")
                        .children(recipe.ingredients.iter().map(ingredient)),
                ),
            directions(recipe),
        ]
    }
}

fn figure(recipe: &Recipe) -> Element {
    Element::new("figure")
        .class("recipe__fig")
        .child(
            Element::new("img")
                .attr("src", recipe.image.as_str())
                .attr("alt", recipe.title.as_str())
                .class("recipe__img"),
        )
        .child(
            Element::new("h1")
                .class("recipe__title")
                .child(Element::new("span").text(recipe.title.as_str())),
        )
}

fn info(icon_name: &str, data_class: &str, value: u32, label: &str) -> Element {
    Element::new("div")
        .class("recipe__info")
        .child(
            Element::new("svg")
                .class("recipe__info-icon")
                .child(icon(icon_name)),
        )
        .child(
            Element::new("span")
                .class(classes(&["recipe__info-data", data_class]))
                .text(value.to_string()),
        )
        .child(Element::new("span").class("recipe__info-text").text(label))
}

fn servings_button(update_to: u32, icon_name: &str) -> Element {
    Element::new("button")
        .attr("data-update-to", update_to.to_string())
        .class("btn--tiny btn--update-servings")
        .child(Element::new("svg").child(icon(icon_name)))
}

fn details(recipe: &Recipe) -> Element {
    let servings = info(
        "users",
        "recipe__info-data--people",
        recipe.servings,
        "servings",
    )
    .child(
        Element::new("div")
            .class("recipe__info-buttons")
            .child(servings_button(
                recipe.servings.saturating_sub(1),
                "minus-circle",
            ))
            .child(servings_button(
                recipe.servings.saturating_add(1),
                "plus-circle",
            )),
    );

    let bookmark_icon = if recipe.bookmarked {
        "bookmark-fill"
    } else {
        "bookmark"
    };

    Element::new("div")
        .class("recipe__details")
        .child(info(
            "clock",
            "recipe__info-data--minutes",
            recipe.cooking_time,
            "minutes",
        ))
        .child(servings)
        .child(
            Element::new("div")
                .class(classes(&[
                    "recipe__user-generated",
                    if recipe.is_user_generated() { "" } else { "hidden" },
                ]))
                .child(Element::new("svg").child(icon("user"))),
        )
        .child(
            Element::new("button")
                .class("btn--round btn--bookmark")
                .child(Element::new("svg").child(icon(bookmark_icon))),
        )
}

fn ingredient(ingredient: &Ingredient) -> Element {
    // Zero and missing quantities both display as blank.
    let quantity = ingredient
        .quantity
        .filter(|q| *q != 0.0)
        .map(format_quantity)
        .unwrap_or_default();

    Element::new("li")
        .class("recipe__ingredient")
        .child(
            Element::new("svg")
                .class("recipe__icon")
                .child(icon("check")),
        )
        .child(Element::new("div").class("recipe__quantity").text(quantity))
        .child(
            Element::new("div")
                .class("recipe__description")
                .child(
                    Element::new("span")
                        .class("recipe__unit")
                        .text(ingredient.unit.as_str()),
                )
                .child(Element::new("span").text(ingredient.description.as_str())),
        )
}

fn directions(recipe: &Recipe) -> Element {
    Element::new("div")
        .class("recipe__directions")
        .child(Element::new("h2").class("heading--2").text("How to cook it"))
        .child(
            Element::new("p")
                .class("recipe__directions-text")
                .child(Element::new("span").text("This recipe was carefully designed and tested by"))
                .child(
                    Element::new("span")
                        .class("recipe__publisher")
                        .text(recipe.publisher.as_str()),
                )
                .child(Element::new("span").text(". Please check out directions at their website.")),
        )
        .child(
            Element::new("a")
                .class("btn--small recipe__btn")
                .attr("href", recipe.source_url.as_str())
                .attr("target", "_blank")
                .child(Element::new("span").text("Directions"))
                .child(
                    Element::new("svg")
                        .class("search__icon")
                        .child(icon("arrow-right")),
                ),
        )
}
