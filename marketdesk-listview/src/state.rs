//! Per-screen list state.
//!
//! The engine has no memory between calls. This is where the screen keeps
//! its current criteria, and where the rule lives that any change to the
//! filter, the sort or the page size sends the user back to page 1 so they
//! never land on a page past the new result count.

use marketdesk_model::ListRecord;
use marketdesk_types::RecordId;
use std::collections::BTreeSet;
use tracing::debug;

use crate::config::ListConfig;
use crate::criteria::{FilterCriteria, PageWindow, SortKey};
use crate::error::{ListError, ListResult};
use crate::view::ListQuery;

/// Current filter, sort and page of one list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    filter: FilterCriteria,
    sort: SortKey,
    window: PageWindow,
    config: ListConfig,
}

impl ListState {
    /// Opens a screen with the configured defaults.
    pub fn new(config: ListConfig) -> ListResult<Self> {
        config.validate()?;
        Ok(Self {
            filter: FilterCriteria::default(),
            sort: config.default_sort.clone(),
            window: PageWindow::first(config.default_page_size)?,
            config,
        })
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort(&self) -> &SortKey {
        &self.sort
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn page(&self) -> usize {
        self.window.page()
    }

    /// Snapshot of the criteria for one engine run.
    pub fn query(&self) -> ListQuery {
        ListQuery {
            filter: self.filter.clone(),
            sort: self.sort.clone(),
            window: self.window,
        }
    }

    /// Replaces the filter and returns to page 1.
    pub fn set_filter(&mut self, filter: FilterCriteria) {
        self.filter = filter;
        self.reset_page();
    }

    /// Replaces the sort and returns to page 1.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.reset_page();
    }

    /// Column-header click: the active column flips direction, any other
    /// column becomes the ascending sort.
    pub fn toggle_sort(&mut self, field: &str) {
        let next = if self.sort.field == field {
            SortKey {
                field: self.sort.field.clone(),
                direction: self.sort.direction.reversed(),
            }
        } else {
            SortKey::ascending(field)
        };
        self.set_sort(next);
    }

    /// Changes the page size to one of the configured tiers and returns to
    /// page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> ListResult<()> {
        self.config.check_page_size(page_size)?;
        self.window = PageWindow::first(page_size)?;
        Ok(())
    }

    /// Jumps to a page. Pages past the end are allowed and render empty.
    pub fn set_page(&mut self, page: usize) -> ListResult<()> {
        if page == 0 {
            return Err(ListError::ZeroPage);
        }
        self.window = self.window.with_page(page);
        Ok(())
    }

    /// Advances one page unless already on the last. Returns whether the
    /// page changed.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.window.page() >= total_pages {
            return false;
        }
        self.window = self.window.with_page(self.window.page() + 1);
        true
    }

    /// Goes back one page unless already on the first.
    pub fn previous_page(&mut self) -> bool {
        if self.window.page() <= 1 {
            return false;
        }
        self.window = self.window.with_page(self.window.page() - 1);
        true
    }

    fn reset_page(&mut self) {
        if self.window.page() != 1 {
            debug!("Criteria changed on page {}, resetting to page 1", self.window.page());
        }
        self.window = self.window.first_page();
    }
}

/// Rows ticked for a batch action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks or unticks one row.
    pub fn set(&mut self, id: RecordId, selected: bool) {
        if selected {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Ticks every given row, or clears the selection.
    pub fn set_all<R: ListRecord>(&mut self, records: &[R], selected: bool) {
        if selected {
            self.ids = records.iter().map(ListRecord::record_id).collect();
        } else {
            self.ids.clear();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }

    /// Drops ids no longer present after the collection was refreshed
    /// (e.g. following a batch delete).
    pub fn retain_existing<R: ListRecord>(&mut self, records: &[R]) {
        let present: BTreeSet<RecordId> = records.iter().map(ListRecord::record_id).collect();
        self.ids.retain(|id| present.contains(id));
    }
}
