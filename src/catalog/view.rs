use super::repo::AsRepo;
use super::tune::Tune;
use anyhow::Result;
use rusqlite::Connection;
use std::collections::{HashMap, HashSet};

/// An in-memory snapshot of the catalog. Filters return fresh views and keep
/// row order; later inserts are not visible until the view is loaded again.
#[derive(Debug, Clone, Default)]
pub struct TuneView {
    tunes: Vec<Tune>,
}

impl TuneView {
    pub fn new(tunes: Vec<Tune>) -> Self {
        Self { tunes }
    }

    pub fn load(conn: &Connection) -> Result<Self> {
        Ok(Self::new(Tune::repo(conn).select_all()?))
    }

    pub fn tunes(&self) -> &[Tune] {
        &self.tunes
    }

    pub fn len(&self) -> usize {
        self.tunes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tunes.is_empty()
    }

    pub fn by_book(&self, book_id: i64) -> TuneView {
        let tunes = self
            .tunes
            .iter()
            .filter(|tune| tune.book_id == book_id)
            .cloned()
            .collect();
        Self::new(tunes)
    }

    pub fn rhythm_contains(&self, term: &str) -> TuneView {
        let needle = term.to_lowercase();
        let tunes = self
            .tunes
            .iter()
            .filter(|tune| contains_ci(tune.rhythm.as_deref(), &needle))
            .cloned()
            .collect();
        Self::new(tunes)
    }

    pub fn title_contains(&self, term: &str) -> TuneView {
        let needle = term.to_lowercase();
        let tunes = self
            .tunes
            .iter()
            .filter(|tune| contains_ci(tune.title.as_deref(), &needle))
            .cloned()
            .collect();
        Self::new(tunes)
    }

    pub fn book_count(&self) -> usize {
        self.tunes
            .iter()
            .map(|tune| tune.book_id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Tune counts per key signature, most common first. Rows with no key are
    /// left out.
    pub fn key_distribution(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for tune in self.tunes.iter() {
            if let Some(key) = tune.key_sig.as_deref() {
                *counts.entry(key.to_string()).or_insert(0) += 1;
            }
        }
        let mut counts = counts.into_iter().collect::<Vec<_>>();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }
}

/// Case-insensitive substring test; `needle` is already lowercased. Missing
/// values never match.
fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|value| value.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tune(id: i64, book_id: i64, title: Option<&str>, rhythm: Option<&str>, key: Option<&str>) -> Tune {
        Tune {
            id,
            book_id,
            reference_number: id.to_string(),
            title: title.map(str::to_string),
            rhythm: rhythm.map(str::to_string),
            key_sig: key.map(str::to_string),
            content: String::new(),
        }
    }

    fn view() -> TuneView {
        TuneView::new(vec![
            tune(1, 0, Some("The Test Reel"), Some("Reel"), Some("D")),
            tune(2, 0, Some("The Quick Jig"), Some("Jig"), Some("G")),
            tune(3, 2, Some("Another Jig"), Some("Slip Jig"), Some("G")),
            tune(4, 2, None, None, None),
        ])
    }

    #[test]
    fn by_book_matches_exactly() {
        let books = view().by_book(2);
        assert_eq!(books.len(), 2);
        assert!(books.tunes().iter().all(|t| t.book_id == 2));
        assert!(view().by_book(7).is_empty());
    }

    #[test]
    fn rhythm_filter_is_case_insensitive() {
        let jigs = view().rhythm_contains("jig");
        assert_eq!(jigs.len(), 2);
        assert_eq!(jigs.tunes()[0].id, 2);
        assert_eq!(jigs.tunes()[1].id, 3);
        assert!(view().rhythm_contains("reel").tunes()[0].id == 1);
    }

    #[test]
    fn missing_fields_never_match() {
        // row 4 has NULL rhythm and title; an empty needle matches every
        // present value but must still skip the NULLs
        assert_eq!(view().rhythm_contains("").len(), 3);
        assert_eq!(view().title_contains("").len(), 3);
    }

    #[test]
    fn title_search_preserves_order() {
        let hits = view().title_contains("THE");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits.tunes()[0].id, 1);
        assert_eq!(hits.tunes()[1].id, 2);
    }

    #[test]
    fn filters_do_not_mutate_the_source_view() {
        let all = view();
        let _ = all.by_book(0);
        let _ = all.rhythm_contains("jig");
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn book_count_is_distinct() {
        assert_eq!(view().book_count(), 2);
        assert_eq!(TuneView::default().book_count(), 0);
    }

    #[test]
    fn key_distribution_sorts_by_count_then_name() {
        let counts = view().key_distribution();
        assert_eq!(counts, vec![("G".to_string(), 2), ("D".to_string(), 1)]);
    }

    #[test]
    fn empty_view_is_well_defined() {
        let empty = TuneView::default();
        assert!(empty.title_contains("x").is_empty());
        assert!(empty.rhythm_contains("x").is_empty());
        assert!(empty.by_book(1).is_empty());
        assert!(empty.key_distribution().is_empty());
    }
}
