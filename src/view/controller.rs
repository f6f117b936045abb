use std::collections::BTreeSet;

use crate::models::Issue;
use crate::view::filters::{Dimension, FilterState};
use crate::view::pagination::Pager;

/// One visible page of the filtered queue, with everything the page chrome
/// needs. Recomputed on demand; nothing here is cached.
#[derive(Debug)]
pub struct PageView<'a> {
    pub items: Vec<&'a Issue>,
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub window: Vec<usize>,
}

/// Glues the filter engine to the pager. Every filter mutation funnels
/// through one place so the pager observes the new filtered count in the
/// same logical step that produced it.
#[derive(Debug, Clone, Default)]
pub struct QueueController {
    filters: FilterState,
    pager: Pager,
}

impl QueueController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn filtered<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        self.filters.apply(issues)
    }

    pub fn page<'a>(&self, issues: &'a [Issue]) -> PageView<'a> {
        let filtered = self.filtered(issues);
        let filtered_count = filtered.len();
        let current_page = self.pager.current_page();
        let total_pages = Pager::total_pages(filtered_count);

        PageView {
            items: self.pager.page_slice(&filtered).to_vec(),
            filtered_count,
            current_page,
            total_pages,
            window: Pager::window(current_page, total_pages),
        }
    }

    // Filter mutations. Each one resets the page to 1 synchronously; a
    // raw-data refresh never comes through here and never touches the page.

    pub fn toggle_value(&mut self, dimension: Dimension, value: &str) {
        self.filters.toggle_value(dimension, value);
        self.pager.reset();
    }

    pub fn remove_value(&mut self, dimension: Dimension, value: &str) {
        self.filters.remove_value(dimension, value);
        self.pager.reset();
    }

    pub fn select_all(&mut self, dimension: Dimension, issues: &[Issue]) {
        self.filters.select_all(dimension, issues);
        self.pager.reset();
    }

    pub fn select_none(&mut self, dimension: Dimension) {
        self.filters.select_none(dimension);
        self.pager.reset();
    }

    pub fn clear_all(&mut self) {
        self.filters.clear_all();
        self.pager.reset();
    }

    pub fn set_admitted(&mut self, dimension: Dimension, values: BTreeSet<String>) {
        self.filters.set_admitted(dimension, values);
        self.pager.reset();
    }

    pub fn replace_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.pager.reset();
    }

    // Page navigation. Out-of-range requests are no-ops.

    pub fn go_to_page(&mut self, page: usize, issues: &[Issue]) -> bool {
        let count = self.filtered(issues).len();
        self.pager.go_to(page, count)
    }

    pub fn next_page(&mut self, issues: &[Issue]) -> bool {
        let count = self.filtered(issues).len();
        self.pager.next(count)
    }

    pub fn prev_page(&mut self, issues: &[Issue]) -> bool {
        let count = self.filtered(issues).len();
        self.pager.prev(count)
    }
}
