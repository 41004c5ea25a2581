//! Read-only view of the record table.
//!
//! A [`TableSnapshot`] borrows the table and exposes exactly what a renderer
//! needs: the current page window, pagination numbers, the selection, the open
//! edit, and the applied filter term. Snapshots are handed to change listeners
//! and are cheap to build.

use super::table::{EditState, PageSize};
use crate::domain::{Record, RecordId};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Borrowed, consistent view of the table between two operations.
#[derive(Debug, Clone, Copy)]
pub struct TableSnapshot<'a> {
    /// Records of the current page window, in view order.
    pub page: &'a [Record],

    /// 1-based current page.
    pub current_page: usize,

    /// Number of pages in the filtered view, never less than 1.
    pub total_pages: usize,

    /// Rows per page.
    pub page_size: PageSize,

    /// Ids marked for bulk action.
    pub selection: &'a BTreeSet<RecordId>,

    /// Open inline edit, if any.
    pub edit: Option<&'a EditState>,

    /// Applied filter term.
    pub filter_term: &'a str,

    /// Number of records in the filtered view.
    pub visible_count: usize,

    /// Number of records in the whole collection.
    pub total_count: usize,

    /// Zero-based position of `page[0]` within the filtered view.
    pub first_index: usize,

    /// Change counter of the table when this snapshot was taken.
    pub revision: u64,
}

impl TableSnapshot<'_> {
    /// 1-based inclusive bounds of the page window, or `None` when the page is empty.
    #[must_use]
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.page.is_empty() {
            None
        } else {
            Some((self.first_index + 1, self.first_index + self.page.len()))
        }
    }

    /// Human-readable window summary.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster::app::RecordTable;
    /// use roster::domain::{Record, Role};
    ///
    /// let mut table = RecordTable::default();
    /// assert_eq!(table.snapshot().summary(), "No Users");
    ///
    /// table.initialize((1..=12).map(|i| {
    ///     Record::new(i.to_string(), format!("user{i}"), format!("u{i}@x.com"), Role::Member)
    /// }).collect());
    /// table.next_page();
    /// assert_eq!(table.snapshot().summary(), "Showing 11 to 12 of 12 entries");
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        self.showing().map_or_else(
            || "No Users".to_string(),
            |(first, last)| format!("Showing {first} to {last} of {} entries", self.visible_count),
        )
    }

    /// Every page number, for a page-number strip.
    #[must_use]
    pub const fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    #[must_use]
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.contains(id)
    }

    /// Header checkbox state: the page is non-empty and all of its rows are selected.
    #[must_use]
    pub fn page_fully_selected(&self) -> bool {
        !self.page.is_empty() && self.page.iter().all(|r| self.selection.contains(&r.id))
    }

    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }
}
