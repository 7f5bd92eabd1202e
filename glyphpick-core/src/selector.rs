//! Selector panel state: search term, current page, local highlight
//!
//! The filtered view and the page window are derived on every call and
//! never stored, so they can't drift from the search term.

use crate::catalog::Catalog;
use crate::pagination::{self, PageControl, PAGE_SIZE};

/// Receives the upward selection callback
pub trait SelectionSink {
    fn on_select_icon(&mut self, name: &str);
}

impl<F: FnMut(&str)> SelectionSink for F {
    fn on_select_icon(&mut self, name: &str) {
        self(name)
    }
}

/// One pressable button of the glyph grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphButton<'a> {
    pub name: &'a str,
    pub selected: bool,
}

/// Search + pagination + highlight state over a fixed catalog
#[derive(Debug, Clone)]
pub struct SelectorPanel {
    catalog: Catalog,
    search_term: String,
    current_page: usize,
    page_size: usize,
    selected: Option<String>,
}

impl SelectorPanel {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_page_size(catalog, PAGE_SIZE)
    }

    /// Panel with a non-default page size (zero is treated as one)
    pub fn with_page_size(catalog: Catalog, page_size: usize) -> Self {
        Self {
            catalog,
            search_term: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
            selected: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Locally highlighted name
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.as_deref() == Some(name)
    }

    /// Replace the search text verbatim and go back to page 1
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
        self.current_page = 1;
    }

    /// Catalog names matching the search term, in catalog order
    pub fn filtered_view(&self) -> Vec<&str> {
        self.catalog.filter(&self.search_term)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered_view().len(), self.page_size)
    }

    /// Names shown on the current page
    pub fn page_window(&self) -> Vec<&str> {
        let mut filtered = self.filtered_view();
        let range = pagination::page_range(filtered.len(), self.current_page, self.page_size);
        filtered.truncate(range.end);
        filtered.drain(..range.start);
        filtered
    }

    /// Buttons for the current page, flagged when highlighted
    pub fn buttons(&self) -> Vec<GlyphButton<'_>> {
        self.page_window()
            .into_iter()
            .map(|name| GlyphButton {
                name,
                selected: self.is_selected(name),
            })
            .collect()
    }

    /// Move to page `page`, clamped to `[1, total_pages]`. Returns the page
    /// actually shown.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages());
        self.current_page
    }

    /// Pagination row for the current state
    pub fn page_controls(&self) -> Vec<PageControl> {
        pagination::page_controls(self.current_page, self.total_pages())
    }

    /// Press a pagination control. Inert controls and ellipses do nothing.
    /// Returns true when the page changed.
    pub fn activate(&mut self, control: PageControl) -> bool {
        match control.target() {
            Some(target) => {
                let before = self.current_page;
                self.set_page(target) != before
            }
            None => false,
        }
    }

    /// Step back one page; a no-op on the first page
    pub fn previous_page(&mut self) -> bool {
        let previous = self.page_controls().first().copied();
        previous.is_some_and(|control| self.activate(control))
    }

    /// Step forward one page; a no-op on the last page
    pub fn next_page(&mut self) -> bool {
        let next = self.page_controls().last().copied();
        next.is_some_and(|control| self.activate(control))
    }

    /// Highlight `name` and report it upward exactly once
    pub fn select_name<S>(&mut self, name: &str, sink: &mut S)
    where
        S: SelectionSink + ?Sized,
    {
        self.selected = Some(name.to_string());
        sink.on_select_icon(name);
    }
}
