#![forbid(unsafe_code)]

//! Per-cell fact snapshots.
//!
//! A [`CellFacts`] is everything the resolver needs to know about one
//! (row, column) pair at paint time: identity, interaction state, file
//! kind flags, quick-search state, group membership, the raw value, and
//! the column's pixel budget. Facts are rebuilt by the host table on every
//! paint and never persisted.

use crate::column::ColumnKind;
use fcmd_style::{FocusState, SelectionState};
use std::borrow::Cow;

/// Opaque file-kind predicates from the file-kind classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileFlags {
    /// The file is a symbolic link.
    pub is_symlink: bool,
    /// The file is hidden.
    pub is_hidden: bool,
    /// The file is a directory.
    pub is_directory: bool,
    /// The file is an archive the application can browse into.
    pub is_browsable_archive: bool,
}

/// Reference to an icon in the host's asset provider, by asset name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRef(Cow<'static, str>);

impl IconRef {
    /// The parent-folder ("..") icon.
    pub const PARENT_FOLDER: IconRef = IconRef(Cow::Borrowed("parent-folder"));

    /// The generic fallback icon.
    pub const MISSING: IconRef = IconRef(Cow::Borrowed("missing"));

    /// Reference an icon by asset name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The asset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// The raw value of a cell: text for data columns, an icon reference for
/// the icon column. What a file maps to is decided upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Raw display text.
    Text(String),
    /// Icon reference.
    Icon(IconRef),
}

/// Immutable snapshot of one cell's state at paint time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellFacts {
    /// Row index within the current listing.
    pub row_index: usize,
    /// Which column this cell belongs to.
    pub column: ColumnKind,
    /// Whether the row is selected in its own table.
    pub is_selected: bool,
    /// Whether the table holds keyboard focus.
    pub table_has_focus: bool,
    /// Whether the table is the active pane.
    pub is_active_table: bool,
    /// Whether the row is marked.
    pub is_marked: bool,
    /// Whether the row is the synthetic parent ("..") entry.
    pub is_parent_entry: bool,
    /// File-kind predicates.
    pub file: FileFlags,
    /// Whether a quick-search session is active on the table.
    pub quick_search_active: bool,
    /// Whether the row's display name matches the quick-search query.
    pub quick_search_match: bool,
    /// Group id from the group resolver, if any.
    pub color_group: Option<usize>,
    /// The raw cell value.
    pub value: CellValue,
    /// The column's pixel budget for this paint.
    pub available_width: u32,
}

impl CellFacts {
    /// Facts for a text cell with quiet defaults: unselected, unfocused,
    /// active pane, no quick search, no group.
    #[must_use]
    pub fn text(
        row_index: usize,
        column: ColumnKind,
        text: impl Into<String>,
        available_width: u32,
    ) -> Self {
        Self {
            row_index,
            column,
            is_selected: false,
            table_has_focus: false,
            is_active_table: true,
            is_marked: false,
            is_parent_entry: false,
            file: FileFlags::default(),
            quick_search_active: false,
            quick_search_match: false,
            color_group: None,
            value: CellValue::Text(text.into()),
            available_width,
        }
    }

    /// Facts for the icon column.
    #[must_use]
    pub fn icon(row_index: usize, icon: IconRef) -> Self {
        Self {
            value: CellValue::Icon(icon),
            ..Self::text(row_index, ColumnKind::Extension, String::new(), 0)
        }
    }

    /// Set the selected flag.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    /// Set whether the table holds keyboard focus.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.table_has_focus = focused;
        self
    }

    /// Set whether the table is the active pane.
    #[must_use]
    pub fn active_table(mut self, active: bool) -> Self {
        self.is_active_table = active;
        self
    }

    /// Set the marked flag.
    #[must_use]
    pub fn marked(mut self, marked: bool) -> Self {
        self.is_marked = marked;
        self
    }

    /// Set the parent-entry flag.
    #[must_use]
    pub fn parent_entry(mut self, parent: bool) -> Self {
        self.is_parent_entry = parent;
        self
    }

    /// Set the file-kind flags.
    #[must_use]
    pub fn flags(mut self, file: FileFlags) -> Self {
        self.file = file;
        self
    }

    /// Set the quick-search state.
    #[must_use]
    pub fn quick_search(mut self, active: bool, matches: bool) -> Self {
        self.quick_search_active = active;
        self.quick_search_match = matches;
        self
    }

    /// Set the color group.
    #[must_use]
    pub fn group(mut self, group: Option<usize>) -> Self {
        self.color_group = group;
        self
    }

    /// Whether the cell counts as matched for quick-search dimming.
    ///
    /// A cell is matched when the table lacks focus, no quick-search
    /// session is active, or the row's name matches the query.
    #[inline]
    #[must_use]
    pub fn matched(&self) -> bool {
        !self.table_has_focus || !self.quick_search_active || self.quick_search_match
    }

    /// The selection axis for palette lookup.
    ///
    /// Selection only renders in the active pane; an inactive pane's
    /// selection resolves to `Normal`.
    #[inline]
    #[must_use]
    pub fn selection(&self) -> SelectionState {
        if self.is_selected && self.is_active_table {
            SelectionState::Selected
        } else {
            SelectionState::Normal
        }
    }

    /// The focus axis for palette lookup.
    #[inline]
    #[must_use]
    pub fn focus(&self) -> FocusState {
        if self.table_has_focus {
            FocusState::Active
        } else {
            FocusState::Inactive
        }
    }
}
