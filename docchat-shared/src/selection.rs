//! Checkbox selection of pages, keyed by page id.
//!
//! Entries keep the order in which they were checked so the chat payload lists
//! pages the way the user picked them.

use crate::models::{Page, SelectionEntry};

/// Ordered set of selected pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks or unchecks `page`. Checking an already selected page keeps its
    /// original position.
    pub fn set(&mut self, page: &Page, checked: bool) {
        if checked {
            if !self.contains(&page.id) {
                self.entries.push(SelectionEntry::from(page));
            }
        } else {
            self.remove(&page.id);
        }
        tracing::trace!(page_id = %page.id, checked, selected = self.len(), "selection changed");
    }

    /// Flips the state of `page` and returns whether it is now selected.
    pub fn toggle(&mut self, page: &Page) -> bool {
        let checked = !self.contains(&page.id);
        self.set(page, checked);
        checked
    }

    /// Removes a page by id, returning the entry if it was selected.
    pub fn remove(&mut self, page_id: &str) -> Option<SelectionEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.page_id == page_id)?;
        Some(self.entries.remove(index))
    }

    /// Whether `page_id` is selected.
    #[must_use]
    pub fn contains(&self, page_id: &str) -> bool {
        self.entries.iter().any(|entry| entry.page_id == page_id)
    }

    /// Number of selected pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unchecks everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Selected entries in the order they were checked.
    #[must_use]
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: &str) -> Page {
        Page {
            id: id.to_string(),
            title: format!("Title {id}"),
            slug_id: format!("slug-{id}"),
            space_id: "space-1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_set_adds_and_removes() {
        let mut selection = Selection::new();
        selection.set(&page("a"), true);
        assert!(selection.contains("a"));
        assert_eq!(selection.len(), 1);

        selection.set(&page("a"), false);
        assert!(!selection.contains("a"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_entries_keep_check_order() {
        let mut selection = Selection::new();
        selection.set(&page("c"), true);
        selection.set(&page("a"), true);
        selection.set(&page("b"), true);
        selection.set(&page("c"), true);

        let ids: Vec<&str> = selection
            .entries()
            .iter()
            .map(|entry| entry.page_id.as_str())
            .collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_entry_fields_copied_from_page() {
        let mut selection = Selection::new();
        let untitled = Page {
            id: "x".into(),
            space_id: "s".into(),
            ..Default::default()
        };
        selection.set(&untitled, true);
        let entry = &selection.entries()[0];
        assert_eq!(entry.space_id, "s");
        assert_eq!(entry.title, "");
        assert_eq!(entry.slug_id, "");
    }

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle(&page("a")));
        assert!(!selection.toggle(&page("a")));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_none() {
        let mut selection = Selection::new();
        assert!(selection.remove("nope").is_none());
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.set(&page("a"), true);
        selection.set(&page("b"), true);
        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.contains("a"));
    }
}
