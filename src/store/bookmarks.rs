use crate::recipe::Bookmark;

/// Saved recipes, unique by id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkSet {
    entries: Vec<Bookmark>,
}

impl BookmarkSet {
    /// Restore a persisted collection. Later duplicates of an id are dropped.
    pub fn from_entries(entries: Vec<Bookmark>) -> Self {
        let mut set = Self::default();
        for entry in entries {
            set.insert(entry);
        }
        set
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|b| b.id == id)
    }

    /// Append `bookmark` unless its id is already present.
    ///
    /// Returns whether the set changed.
    pub fn insert(&mut self, bookmark: Bookmark) -> bool {
        if self.contains(&bookmark.id) {
            return false;
        }
        self.entries.push(bookmark);
        true
    }

    /// Remove the entry with `id`, if any. Returns whether the set changed.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.entries.iter().position(|b| b.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[Bookmark] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
