use crate::recipe::SearchSummary;

/// The current query, its result set and the pagination cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    pub query: String,
    pub results: Vec<SearchSummary>,
    /// 1-based. May point past the last page; such pages are empty.
    pub page: u32,
    pub results_per_page: u32,
}

impl SearchSession {
    pub fn new(results_per_page: u32) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            page: 1,
            results_per_page: results_per_page.max(1),
        }
    }

    /// Replace the result set for a fresh query and rewind to page 1.
    pub(crate) fn replace(&mut self, query: &str, results: Vec<SearchSummary>) {
        self.query = query.to_string();
        self.results = results;
        self.page = 1;
    }

    /// Results on `page`: `results[(page-1)*n .. page*n]`, clipped to bounds.
    pub fn page_slice(&self, page: u32) -> &[SearchSummary] {
        let per_page = self.results_per_page as usize;
        let start = (page.max(1) as usize - 1).saturating_mul(per_page);
        let end = start.saturating_add(per_page);
        let len = self.results.len();
        &self.results[start.min(len)..end.min(len)]
    }

    /// Number of pages needed to show every result.
    pub fn num_pages(&self) -> u32 {
        let per_page = self.results_per_page as usize;
        self.results.len().div_ceil(per_page) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(count: usize) -> SearchSession {
        let mut session = SearchSession::new(10);
        let results = (0..count)
            .map(|i| SearchSummary {
                id: format!("id-{}", i),
                title: format!("Recipe {}", i),
                publisher: "Publisher".to_string(),
                image: format!("{}.jpg", i),
                key: None,
            })
            .collect();
        session.replace("pizza", results);
        session
    }

    #[test]
    fn page_slices_are_clipped() {
        let session = session_with(23);
        assert_eq!(session.page_slice(1).len(), 10);
        assert_eq!(session.page_slice(2)[0].id, "id-10");
        assert_eq!(session.page_slice(3).len(), 3);
        assert_eq!(session.page_slice(3)[2].id, "id-22");
        assert!(session.page_slice(4).is_empty());
        assert!(session.page_slice(u32::MAX).is_empty());
    }

    #[test]
    fn num_pages_rounds_up() {
        assert_eq!(session_with(0).num_pages(), 0);
        assert_eq!(session_with(10).num_pages(), 1);
        assert_eq!(session_with(23).num_pages(), 3);
    }

    #[test]
    fn replace_rewinds_page() {
        let mut session = session_with(23);
        session.page = 3;
        session.replace("pasta", Vec::new());
        assert_eq!(session.page, 1);
        assert_eq!(session.query, "pasta");
        assert!(session.results.is_empty());
    }
}
