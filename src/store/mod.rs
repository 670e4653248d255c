//! Application state: the current recipe, the search session and the
//! bookmark set, with the operations that keep them consistent.
//!
//! ```text
//! DataSource ──→ formatter ──→ StateStore ──→ templates
//!                                  │
//!                                  └──→ PersistenceAdapter ("bookmarks")
//! ```

mod bookmarks;
mod error;
mod session;
mod state;
mod upload;

pub use bookmarks::BookmarkSet;
pub use error::{ErrorKind, StoreError};
pub use session::SearchSession;
pub use state::{StateStore, BOOKMARKS_KEY};
pub use upload::{build_payload, parse_ingredient, parse_ingredients};
