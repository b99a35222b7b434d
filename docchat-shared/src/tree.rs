//! # Page tree
//!
//! Builds the per-space page hierarchy from the flat list the backend returns.
//! Pages are linked to their parents, orphans become roots, and every sibling
//! list is ordered by lowercase title and then by id.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::models::Page;

/// A page plus the ids of its children in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNode {
    /// The page itself.
    pub page: Page,
    /// Child page ids, sorted.
    pub children: Vec<String>,
}

/// In-memory hierarchy of one space's pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageTree {
    nodes: HashMap<String, PageNode>,
    roots: Vec<String>,
}

/// Sibling ordering: lowercase title, then id.
///
/// Ids are compared bytewise, not by locale. That only matches a locale-aware
/// ordering for same-case ids such as lowercase UUIDs.
#[must_use]
pub fn compare_pages(a: &Page, b: &Page) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.id.cmp(&b.id))
}

impl PageTree {
    /// Builds the tree from a flat page list.
    ///
    /// A later page with an id already seen replaces the earlier one. Pages
    /// whose parent is absent, empty, or not part of the list become roots.
    /// Parent chains that loop back on themselves are cut at the first page of
    /// the loop in sibling order, which then becomes a root.
    #[must_use]
    pub fn build(pages: impl IntoIterator<Item = Page>) -> Self {
        let mut nodes: HashMap<String, PageNode> = HashMap::new();
        for page in pages {
            nodes.insert(
                page.id.clone(),
                PageNode {
                    page,
                    children: Vec::new(),
                },
            );
        }

        let mut roots = Vec::new();
        let mut links: Vec<(String, String)> = Vec::new();
        for (id, node) in &nodes {
            match node.page.parent_id() {
                Some(parent) if parent != id.as_str() && nodes.contains_key(parent) => {
                    links.push((parent.to_string(), id.clone()));
                }
                _ => roots.push(id.clone()),
            }
        }
        for (parent, child) in links {
            if let Some(node) = nodes.get_mut(&parent) {
                node.children.push(child);
            }
        }

        let mut tree = Self { nodes, roots };
        tree.break_cycles();
        tree.sort();

        tracing::debug!(
            pages = tree.nodes.len(),
            roots = tree.roots.len(),
            "page tree built"
        );
        tree
    }

    fn sort(&mut self) {
        let order: HashMap<&str, &Page> = self
            .nodes
            .iter()
            .map(|(id, node)| (id.as_str(), &node.page))
            .collect();
        let by_page = |a: &String, b: &String| match (order.get(a.as_str()), order.get(b.as_str()))
        {
            (Some(pa), Some(pb)) => compare_pages(pa, pb),
            _ => a.cmp(b),
        };

        let sorted_children: Vec<(String, Vec<String>)> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.children.len() > 1)
            .map(|(id, node)| {
                let mut children = node.children.clone();
                children.sort_by(&by_page);
                (id.clone(), children)
            })
            .collect();
        self.roots.sort_by(&by_page);

        for (id, children) in sorted_children {
            if let Some(node) = self.nodes.get_mut(&id) {
                node.children = children;
            }
        }
    }

    /// Promotes one member of every parent loop to a root.
    fn break_cycles(&mut self) {
        loop {
            let reachable: HashSet<String> = self.walk().into_iter().collect();
            let stranded = self
                .nodes
                .values()
                .filter(|node| !reachable.contains(&node.page.id))
                .min_by(|a, b| compare_pages(&a.page, &b.page))
                .map(|node| node.page.id.clone());

            let Some(id) = stranded else {
                return;
            };

            tracing::warn!(page_id = %id, "page parent chain loops; treating page as a root");
            for node in self.nodes.values_mut() {
                node.children.retain(|child| child != &id);
            }
            self.roots.push(id);
        }
    }

    /// Looks up a node by page id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PageNode> {
        self.nodes.get(id)
    }

    /// Top-level page ids in display order.
    #[must_use]
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Child ids of a page in display order; empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: &str) -> &[String] {
        self.nodes
            .get(id)
            .map_or(&[][..], |node| node.children.as_slice())
    }

    /// Whether `id` has at least one child.
    #[must_use]
    pub fn has_children(&self, id: &str) -> bool {
        !self.children(id).is_empty()
    }

    /// Number of pages in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All reachable page ids, depth first, parents before children.
    #[must_use]
    pub fn walk(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<&String> = self.roots.iter().rev().collect();
        while let Some(id) = stack.pop() {
            out.push(id.clone());
            stack.extend(self.children(id).iter().rev());
        }
        out
    }

    /// Ids below `id`, depth first, excluding `id` itself.
    #[must_use]
    pub fn descendants(&self, id: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack: Vec<&String> = self.children(id).iter().rev().collect();
        while let Some(child) = stack.pop() {
            out.push(child.clone());
            stack.extend(self.children(child).iter().rev());
        }
        out
    }
}
