//! Rendered element tree.
//!
//! A node has a tag, an ordered attribute list and either direct text or
//! child nodes. Templates build these; surfaces own the live copy.

use std::fmt::Write;

/// Node content: direct text or an ordered list of children.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Children(Vec<Element>),
}

/// One node of a rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    content: Content,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            content: Content::Children(Vec::new()),
        }
    }

    /// Builder: set an attribute (replacing an existing one of the same name).
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value.into());
        self
    }

    /// Builder: set a `class` attribute.
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Builder: replace the content with direct text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Builder: append a child. Discards direct text, if any.
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::Text(_) => self.content = Content::Children(vec![child]),
        }
        self
    }

    /// Builder: append several children.
    pub fn children(self, children: impl IntoIterator<Item = Element>) -> Self {
        children.into_iter().fold(self, Element::child)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Direct text of this node, if it holds text rather than children.
    pub fn direct_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Children(_) => None,
        }
    }

    pub fn child_nodes(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            Content::Text(_) => &[],
        }
    }

    /// Set or overwrite an attribute, keeping its original position.
    ///
    /// Returns whether the stored value changed.
    pub fn set_attribute(&mut self, name: &str, value: String) -> bool {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) if *existing == value => false,
            Some((_, existing)) => {
                *existing = value;
                true
            }
            None => {
                self.attributes.push((name.to_string(), value));
                true
            }
        }
    }

    /// Replace the content with text. Returns whether anything changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.direct_text() == Some(text) {
            return false;
        }
        self.content = Content::Text(text.to_string());
        true
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.child_nodes().iter().map(Element::node_count).sum::<usize>()
    }

    /// Nodes in pre-order: parent before children, siblings left to right.
    pub fn preorder(&self) -> Vec<&Element> {
        let mut nodes = Vec::with_capacity(self.node_count());
        collect_preorder(self, &mut nodes);
        nodes
    }

    /// Serialize to HTML.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_markup(self, &mut out);
        out
    }
}

/// Deep structural equality.
///
/// Compares tag, attribute set (order-insensitive) and either text or,
/// recursively, every child.
pub fn is_equal_node(a: &Element, b: &Element) -> bool {
    if a.tag != b.tag || a.attributes.len() != b.attributes.len() {
        return false;
    }

    let same_attributes = a
        .attributes
        .iter()
        .all(|(name, value)| b.attribute(name) == Some(value.as_str()));
    if !same_attributes {
        return false;
    }

    match (&a.content, &b.content) {
        (Content::Text(x), Content::Text(y)) => x == y,
        (Content::Children(x), Content::Children(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| is_equal_node(l, r))
        }
        // Empty text and no children render identically.
        (Content::Text(t), Content::Children(c)) | (Content::Children(c), Content::Text(t)) => {
            t.is_empty() && c.is_empty()
        }
    }
}

/// Pre-order flattening of a forest.
pub fn preorder_forest(forest: &[Element]) -> Vec<&Element> {
    let mut nodes = Vec::new();
    for root in forest {
        collect_preorder(root, &mut nodes);
    }
    nodes
}

/// Visit every node of a forest mutably in pre-order, passing its index.
pub(crate) fn visit_preorder_mut(
    forest: &mut [Element],
    visit: &mut impl FnMut(usize, &mut Element),
) -> usize {
    let mut index = 0;
    for root in forest {
        visit_node_mut(root, &mut index, visit);
    }
    index
}

fn visit_node_mut(
    node: &mut Element,
    index: &mut usize,
    visit: &mut impl FnMut(usize, &mut Element),
) {
    visit(*index, node);
    *index += 1;
    if let Content::Children(children) = &mut node.content {
        for child in children {
            visit_node_mut(child, index, visit);
        }
    }
}

fn collect_preorder<'a>(node: &'a Element, out: &mut Vec<&'a Element>) {
    out.push(node);
    for child in node.child_nodes() {
        collect_preorder(child, out);
    }
}

fn write_markup(node: &Element, out: &mut String) {
    let _ = write!(out, "<{}", node.tag);
    for (name, value) in &node.attributes {
        let _ = write!(out, " {}=\"{}\"", name, escape(value));
    }
    out.push('>');
    match &node.content {
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                write_markup(child, out);
            }
        }
    }
    let _ = write!(out, "</{}>", node.tag);
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str) -> Element {
        Element::new("div")
            .class("card")
            .child(Element::new("h2").text(title))
            .child(Element::new("p").class("body").text("text"))
    }

    #[test]
    fn preorder_visits_parent_first() {
        let tree = card("A");
        let tags: Vec<_> = tree.preorder().iter().map(|e| e.tag()).collect();
        assert_eq!(tags, vec!["div", "h2", "p"]);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn equality_ignores_attribute_order() {
        let a = Element::new("a").attr("href", "#1").attr("class", "x");
        let b = Element::new("a").attr("class", "x").attr("href", "#1");
        assert!(is_equal_node(&a, &b));
    }

    #[test]
    fn equality_is_deep() {
        assert!(is_equal_node(&card("A"), &card("A")));
        assert!(!is_equal_node(&card("A"), &card("B")));
    }

    #[test]
    fn set_attribute_reports_changes() {
        let mut node = Element::new("button").attr("data-update-to", "3");
        assert!(!node.set_attribute("data-update-to", "3".to_string()));
        assert!(node.set_attribute("data-update-to", "5".to_string()));
        assert_eq!(node.attribute("data-update-to"), Some("5"));
        assert_eq!(node.attributes().len(), 1);
    }

    #[test]
    fn markup_escapes_text_and_attributes() {
        let node = Element::new("p").attr("title", "a \"b\"").text("1 < 2 & 3");
        assert_eq!(
            node.to_markup(),
            "<p title=\"a &quot;b&quot;\">1 &lt; 2 &amp; 3</p>"
        );
    }

    #[test]
    fn visit_counts_every_node() {
        let mut forest = vec![card("A"), card("B")];
        let mut seen = Vec::new();
        let total = visit_preorder_mut(&mut forest, &mut |i, node| seen.push((i, node.tag().to_string())));
        assert_eq!(total, 6);
        assert_eq!(seen[3], (3, "div".to_string()));
        assert_eq!(preorder_forest(&forest).len(), 6);
    }
}
