//! Presentation: element trees, templates, in-place reconciliation and the
//! surfaces that own what is on screen.

pub mod reconcile;
pub mod surface;
pub mod templates;
pub mod tree;
