//! The record table controller.
//!
//! [`RecordTable`] owns the canonical record collection and every piece of state
//! derived from it: the applied filter term, the filtered view, pagination, the
//! selection set, and the single open inline edit. Each public operation runs to
//! completion and recomputes all derived state before returning, so a caller can
//! never observe a filtered view whose page has not been clamped yet.
//!
//! # Invariants
//!
//! - The filtered view is the subsequence of the collection matching the term.
//! - `1 <= current_page <= total_pages`, with `total_pages >= 1`.
//! - The selection only holds ids present in the filtered view.
//! - An open edit always targets a record present in the collection.
//!
//! Operations that reference a missing record or a missing edit return an error
//! and change nothing. Everything else (empty searches, out-of-range pages,
//! toggling rows that are not on screen) is a no-op or a clamp.
//!
//! # Change Notification
//!
//! Every operation that changes observable state bumps [`RecordTable::revision`]
//! and calls each listener registered with [`RecordTable::subscribe`].

use super::snapshot::TableSnapshot;
use crate::domain::{Draft, DraftField, Record, RecordId, Result, RosterError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Supported page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    Fifteen,
    Twenty,
}

impl PageSize {
    pub const ALL: [Self; 3] = [Self::Ten, Self::Fifteen, Self::Twenty];

    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Twenty => 20,
        }
    }

    /// Next larger size, wrapping to the smallest.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Ten => Self::Fifteen,
            Self::Fifteen => Self::Twenty,
            Self::Twenty => Self::Ten,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = RosterError;

    fn try_from(value: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| {
                RosterError::Config(format!(
                    "unsupported page size {value} (expected 10, 15 or 20)"
                ))
            })
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The single open inline edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    /// Id of the record being edited.
    pub target: RecordId,
    /// Uncommitted field values.
    pub draft: Draft,
}

/// Callback invoked with a fresh snapshot after every observable change.
pub type Listener = Box<dyn FnMut(&TableSnapshot<'_>)>;

/// Controller for an in-memory, searchable, paginated record table.
///
/// # Example
///
/// ```rust
/// use roster::app::RecordTable;
/// use roster::domain::{DraftField, Record, RecordId, Role};
///
/// let mut table = RecordTable::default();
/// table.initialize(vec![
///     Record::new("1", "Ann", "a@x.com", Role::Member),
///     Record::new("2", "Bo", "b@x.com", Role::Admin),
/// ]);
///
/// table.search("ann");
/// assert_eq!(table.visible_records().len(), 1);
///
/// table.begin_edit(&RecordId::from("1"))?;
/// table.update_draft_field(DraftField::Role, "admin")?;
/// table.commit_edit()?;
/// assert_eq!(table.record(&RecordId::from("1")).map(|r| r.role), Some(Role::Admin));
/// # Ok::<(), roster::RosterError>(())
/// ```
pub struct RecordTable {
    records: Vec<Record>,
    filter_term: String,
    visible: Vec<Record>,
    page_size: PageSize,
    current_page: usize,
    selection: BTreeSet<RecordId>,
    edit: Option<EditState>,
    revision: u64,
    listeners: Vec<Listener>,
}

impl Default for RecordTable {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl fmt::Debug for RecordTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordTable")
            .field("records", &self.records.len())
            .field("filter_term", &self.filter_term)
            .field("visible", &self.visible.len())
            .field("page_size", &self.page_size)
            .field("current_page", &self.current_page)
            .field("selection", &self.selection)
            .field("edit", &self.edit)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl RecordTable {
    /// Creates an empty table. This is also the state kept when the source fails.
    #[must_use]
    pub const fn new(page_size: PageSize) -> Self {
        Self {
            records: Vec::new(),
            filter_term: String::new(),
            visible: Vec::new(),
            page_size,
            current_page: 1,
            selection: BTreeSet::new(),
            edit: None,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener called after every observable change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&TableSnapshot<'_>) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Replaces the collection with a freshly delivered dataset.
    ///
    /// Clears the filter term, selection, and edit, and returns to page 1. The
    /// page size is kept. Duplicate ids keep their first occurrence.
    pub fn initialize(&mut self, records: Vec<Record>) {
        let _span = tracing::debug_span!("table_initialize", incoming = records.len()).entered();

        let mut seen = HashSet::with_capacity(records.len());
        let mut unique = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id.clone()) {
                unique.push(record);
            } else {
                tracing::warn!(id = %record.id, "duplicate record id, keeping first occurrence");
            }
        }

        self.records = unique;
        self.filter_term.clear();
        self.selection.clear();
        self.edit = None;
        self.current_page = 1;
        self.recompute();

        tracing::debug!(records = self.records.len(), "table initialized");
        self.notify();
    }

    /// Applies a filter term and returns to page 1.
    ///
    /// Matching is a case-insensitive substring test over id, name, email and
    /// role. The selection is cleared; an open edit is left alone even if its
    /// row drops out of view.
    pub fn search(&mut self, term: &str) -> bool {
        let _span = tracing::debug_span!("table_search", term = %term).entered();

        if self.filter_term == term && self.current_page == 1 && self.selection.is_empty() {
            return false;
        }

        self.filter_term = term.to_string();
        self.selection.clear();
        self.current_page = 1;
        self.recompute();

        tracing::debug!(visible = self.visible.len(), "search applied");
        self.notify();
        true
    }

    /// Changes the page size and clamps the current page. Keeps the selection.
    pub fn set_page_size(&mut self, page_size: PageSize) -> bool {
        if self.page_size == page_size {
            return false;
        }
        self.page_size = page_size;
        self.clamp_page();
        tracing::debug!(page_size = %page_size, current_page = self.current_page, "page size changed");
        self.notify();
        true
    }

    /// Moves to page `page`, clamped into `1..=total_pages`.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.total_pages());
        if target == self.current_page {
            return false;
        }
        self.current_page = target;
        tracing::trace!(current_page = target, "page changed");
        self.notify();
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    /// Flips the selection of one row on the current page.
    ///
    /// Ids that are not on the current page window are ignored.
    pub fn toggle_select(&mut self, id: &RecordId) -> bool {
        if !self.page_records().iter().any(|r| &r.id == id) {
            tracing::trace!(id = %id, "toggle ignored, row not on current page");
            return false;
        }
        if !self.selection.remove(id) {
            self.selection.insert(id.clone());
        }
        self.notify();
        true
    }

    /// Selects every row of the current page, or deselects them if all are selected.
    ///
    /// Selections made on other pages are left alone either way.
    pub fn toggle_select_all_on_page(&mut self) -> bool {
        let page_ids: Vec<RecordId> = self.page_records().iter().map(|r| r.id.clone()).collect();
        if page_ids.is_empty() {
            return false;
        }

        if page_ids.iter().all(|id| self.selection.contains(id)) {
            for id in &page_ids {
                self.selection.remove(id);
            }
        } else {
            self.selection.extend(page_ids);
        }
        self.notify();
        true
    }

    /// Opens an inline edit on `id`, discarding any unsaved draft.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] if no record has this id.
    pub fn begin_edit(&mut self, id: &RecordId) -> Result<()> {
        let draft = self
            .record(id)
            .map(Record::draft)
            .ok_or_else(|| RosterError::NotFound(id.clone()))?;

        if let Some(previous) = self.edit.as_ref().filter(|e| &e.target != id) {
            tracing::debug!(previous = %previous.target, "discarding unsaved draft");
        }

        self.edit = Some(EditState {
            target: id.clone(),
            draft,
        });
        tracing::debug!(id = %id, "edit opened");
        self.notify();
        Ok(())
    }

    /// Sets one draft field. The collection is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NoActiveEdit`] without an open edit, or
    /// [`RosterError::InvalidRole`] for an unknown role name.
    pub fn update_draft_field(&mut self, field: DraftField, value: &str) -> Result<()> {
        let edit = self.edit.as_mut().ok_or(RosterError::NoActiveEdit)?;
        edit.draft.set(field, value)?;
        self.notify();
        Ok(())
    }

    /// Writes the draft over its target record and closes the edit.
    ///
    /// No validation is applied to the draft values. The filter is re-applied,
    /// so the edited row may leave the view.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NoActiveEdit`] without an open edit.
    pub fn commit_edit(&mut self) -> Result<()> {
        let edit = self.edit.as_ref().ok_or(RosterError::NoActiveEdit)?;
        let _span = tracing::debug_span!("table_commit_edit", id = %edit.target).entered();

        let Some(slot) = self.records.iter_mut().find(|r| r.id == edit.target) else {
            return Err(RosterError::NotFound(edit.target.clone()));
        };
        *slot = slot.with_draft(&edit.draft);

        self.edit = None;
        self.recompute();
        tracing::debug!("edit committed");
        self.notify();
        Ok(())
    }

    /// Discards the open edit. A second call is a no-op.
    pub fn cancel_edit(&mut self) -> bool {
        if self.edit.take().is_none() {
            return false;
        }
        tracing::debug!("edit cancelled");
        self.notify();
        true
    }

    /// Removes one record, its selection mark, and any edit targeting it.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] if no record has this id.
    pub fn delete_record(&mut self, id: &RecordId) -> Result<()> {
        let position = self
            .records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| RosterError::NotFound(id.clone()))?;

        self.records.remove(position);
        self.selection.remove(id);
        if self.edit.as_ref().is_some_and(|e| &e.target == id) {
            self.edit = None;
        }
        self.recompute();

        tracing::debug!(id = %id, remaining = self.records.len(), "record deleted");
        self.notify();
        Ok(())
    }

    /// Removes every selected record and clears the selection.
    ///
    /// Returns the number of records removed; an empty selection is a no-op.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }

        let doomed = std::mem::take(&mut self.selection);
        let before = self.records.len();
        self.records.retain(|r| !doomed.contains(&r.id));
        if self.edit.as_ref().is_some_and(|e| doomed.contains(&e.target)) {
            self.edit = None;
        }
        self.recompute();

        let removed = before - self.records.len();
        tracing::debug!(removed, remaining = self.records.len(), "selected records deleted");
        self.notify();
        removed
    }

    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot<'_> {
        let (start, end) = self.window();
        TableSnapshot {
            page: &self.visible[start..end],
            current_page: self.current_page,
            total_pages: self.total_pages(),
            page_size: self.page_size,
            selection: &self.selection,
            edit: self.edit.as_ref(),
            filter_term: &self.filter_term,
            visible_count: self.visible.len(),
            total_count: self.records.len(),
            first_index: start,
            revision: self.revision,
        }
    }

    /// `max(1, ceil(visible / page_size))`.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.visible.len().div_ceil(self.page_size.get()).max(1)
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub fn filter_term(&self) -> &str {
        &self.filter_term
    }

    #[must_use]
    pub fn all_records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn visible_records(&self) -> &[Record] {
        &self.visible
    }

    /// Records of the current page window.
    #[must_use]
    pub fn page_records(&self) -> &[Record] {
        let (start, end) = self.window();
        &self.visible[start..end]
    }

    #[must_use]
    pub fn record(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| &r.id == id)
    }

    #[must_use]
    pub const fn selection(&self) -> &BTreeSet<RecordId> {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.contains(id)
    }

    #[must_use]
    pub fn page_fully_selected(&self) -> bool {
        self.snapshot().page_fully_selected()
    }

    #[must_use]
    pub const fn edit(&self) -> Option<&EditState> {
        self.edit.as_ref()
    }

    /// Change counter, bumped once per observable change.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn window(&self) -> (usize, usize) {
        let size = self.page_size.get();
        let start = (self.current_page - 1)
            .saturating_mul(size)
            .min(self.visible.len());
        let end = start.saturating_add(size).min(self.visible.len());
        (start, end)
    }

    fn recompute(&mut self) {
        self.visible = self
            .records
            .iter()
            .filter(|r| r.matches(&self.filter_term))
            .cloned()
            .collect();

        let visible_ids: HashSet<&RecordId> = self.visible.iter().map(|r| &r.id).collect();
        self.selection.retain(|id| visible_ids.contains(id));

        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    fn notify(&mut self) {
        self.revision += 1;
        if self.listeners.is_empty() {
            return;
        }

        let mut listeners = std::mem::take(&mut self.listeners);
        let snapshot = self.snapshot();
        for listener in &mut listeners {
            listener(&snapshot);
        }
        self.listeners = listeners;
    }
}
