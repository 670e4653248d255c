use crate::ui::templates::icon;
use crate::ui::tree::Element;

/// Loading indicator.
pub fn spinner_markup() -> Vec<Element> {
    vec![Element::new("div")
        .class("spinner")
        .child(Element::new("svg").child(icon("loader")))]
}

/// Error screen with `message`.
pub fn error_markup(message: &str) -> Vec<Element> {
    notice("error", "alert-triangle", message)
}

/// Informational screen with `message`.
pub fn message_markup(message: &str) -> Vec<Element> {
    notice("message", "smile", message)
}

fn notice(class: &str, icon_name: &str, message: &str) -> Vec<Element> {
    vec![Element::new("div")
        .class(class)
        .child(Element::new("div").child(Element::new("svg").child(icon(icon_name))))
        .child(Element::new("p").text(message))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_markup_shows_message() {
        let markup = error_markup("Something broke");
        assert_eq!(markup.len(), 1);
        assert_eq!(markup[0].attribute("class"), Some("error"));
        assert!(markup[0].to_markup().contains("<p>Something broke</p>"));
    }

    #[test]
    fn spinner_uses_loader_icon() {
        let markup = spinner_markup()[0].to_markup();
        assert!(markup.contains("#icon-loader"));
    }
}
