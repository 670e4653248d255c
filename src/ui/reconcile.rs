//! In-place reconciliation of a live tree against a freshly generated one.
//!
//! # Contract
//!
//! Both sides must have the same shape: the same number of nodes in the
//! same pre-order sequence. Nodes are paired by pre-order index; there is
//! no insertion, removal or reordering. Callers that need a structural
//! change (first paint, switching between content and a spinner, error or
//! message) must replace the surface instead of patching it.
//!
//! # Algorithm
//!
//! For every index `i`, if live node `i` is not deeply equal to next node `i`:
//!
//! 1. when the next node has non-blank direct text, copy that text over;
//! 2. copy every attribute of the next node over. Attributes that exist
//!    only on the live node are left in place.
//!
//! Equal nodes are not touched. Writes that would store an identical value
//! are skipped, so the returned mutation list names exactly what changed.

use tracing::trace;

use crate::ui::tree::{is_equal_node, preorder_forest, visit_preorder_mut, Element};

/// One change applied to the live tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Text of the node at pre-order `index` was replaced.
    Text { index: usize, text: String },
    /// Attribute `name` of the node at pre-order `index` was set to `value`.
    Attribute {
        index: usize,
        name: String,
        value: String,
    },
}

impl Mutation {
    pub fn index(&self) -> usize {
        match self {
            Mutation::Text { index, .. } | Mutation::Attribute { index, .. } => *index,
        }
    }
}

struct NodePatch<'a> {
    text: Option<&'a str>,
    attributes: &'a [(String, String)],
}

/// Patch a single live tree to match `next`.
///
/// # Panics
///
/// If the two trees do not have the same number of nodes.
pub fn patch(live: &mut Element, next: &Element) -> Vec<Mutation> {
    patch_forest(std::slice::from_mut(live), std::slice::from_ref(next))
}

/// Patch a live forest to match `next`, pairing nodes across the whole
/// forest by pre-order index.
///
/// # Panics
///
/// If the two forests do not have the same total number of nodes.
pub fn patch_forest(live: &mut [Element], next: &[Element]) -> Vec<Mutation> {
    let next_nodes = preorder_forest(next);

    let plan: Vec<Option<NodePatch<'_>>> = {
        let live_nodes = preorder_forest(live);
        assert_eq!(
            live_nodes.len(),
            next_nodes.len(),
            "patch requires trees of identical shape; replace the surface instead"
        );

        live_nodes
            .iter()
            .zip(&next_nodes)
            .map(|(current, new)| {
                if is_equal_node(current, new) {
                    None
                } else {
                    Some(NodePatch {
                        text: new.direct_text().filter(|t| !t.trim().is_empty()),
                        attributes: new.attributes(),
                    })
                }
            })
            .collect()
    };

    let mut mutations = Vec::new();
    visit_preorder_mut(live, &mut |index, node| {
        let Some(node_patch) = &plan[index] else {
            return;
        };

        if let Some(text) = node_patch.text {
            if node.set_text(text) {
                mutations.push(Mutation::Text {
                    index,
                    text: text.to_string(),
                });
            }
        }

        for (name, value) in node_patch.attributes {
            if node.set_attribute(name, value.clone()) {
                mutations.push(Mutation::Attribute {
                    index,
                    name: name.clone(),
                    value: value.clone(),
                });
            }
        }
    });

    trace!(
        nodes = next_nodes.len(),
        mutations = mutations.len(),
        "reconciled tree"
    );
    mutations
}

/// Whether `patch_forest(live, next)` satisfies the shape contract.
pub fn same_shape(live: &[Element], next: &[Element]) -> bool {
    let count = |forest: &[Element]| forest.iter().map(Element::node_count).sum::<usize>();
    count(live) == count(next)
}
