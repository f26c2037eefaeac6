// SPDX-License-Identifier: MPL-2.0

//! State management for the administrative-region picker.

use super::code::{CodeResolver, MAX_DEPTH};
use crate::widgets::cascade::{CascadeState, Column, ColumnItem, IndexPath, PickerEvent, TreeNode};
use crate::widgets::mask::MaskState;

/// Fixed display width of the region picker (province, city, district).
pub const MAX_COLUMNS: usize = MAX_DEPTH;

/// The outcome of confirming a region selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSelection {
    /// The chosen label/value pairs, shallow branches omitted.
    pub items: Vec<ColumnItem>,
    /// The deepest selected node's code; empty for an empty dataset.
    pub adcode: String,
}

/// Default captions for the collapsed control, one per column.
const PLACEHOLDERS: [&str; MAX_COLUMNS] = ["province", "city", "district"];

/// State for a three-column cascading region picker.
///
/// Wraps the cascade core with the fixed province/city/district layout:
/// shallow branches are right-padded with empty columns and zero indices
/// so the scroller always sees [`MAX_COLUMNS`] columns.
#[derive(Debug, Clone)]
pub struct RegionPickerState {
    cascade: CascadeState,
    resolver: CodeResolver,
    mask: MaskState,
    captions: Vec<String>,
}

impl Default for RegionPickerState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RegionPickerState {
    pub fn new(dataset: Vec<TreeNode>) -> Self {
        Self {
            cascade: CascadeState::new(dataset),
            resolver: CodeResolver::default(),
            mask: MaskState::default(),
            captions: PLACEHOLDERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Creates a picker pre-positioned on the path a code decodes to.
    ///
    /// A code the dataset does not contain, or an empty one, lands on the
    /// all-zero path.
    pub fn with_adcode(dataset: Vec<TreeNode>, adcode: &str) -> Self {
        let mut state = Self::new(dataset);
        state.set_adcode(adcode);
        state
    }

    /// Repositions the picker from a code against the current dataset.
    pub fn set_adcode(&mut self, adcode: &str) {
        let index = self.resolver.resolve(self.cascade.dataset(), adcode);
        self.cascade.set_index(index);
    }

    /// Replaces the dataset (e.g. once the fetch resolves) and resets the
    /// selection.
    pub fn set_dataset(&mut self, dataset: Vec<TreeNode>) {
        self.cascade.set_dataset(dataset);
    }

    /// Always [`MAX_COLUMNS`] columns; trailing ones may be empty for
    /// shallow branches or an empty dataset.
    pub fn columns(&self) -> Vec<Column> {
        let mut columns = self.cascade.columns();
        columns.resize(MAX_COLUMNS, Column::new());
        columns.truncate(MAX_COLUMNS);
        columns
    }

    /// The index path padded with zeros to [`MAX_COLUMNS`].
    pub fn index(&self) -> IndexPath {
        let mut index = self.cascade.index().clone();
        index.resize(MAX_COLUMNS, 0);
        index.truncate(MAX_COLUMNS);
        index
    }

    /// Applies a reported index vector, cascading resets downstream.
    pub fn apply_change(&mut self, reported: &[usize]) {
        self.cascade.apply_change(reported);
    }

    /// The chosen label/value pairs, one per non-empty column.
    pub fn values(&self) -> Vec<ColumnItem> {
        self.cascade.values()
    }

    /// The deepest selected node's code, if the dataset is non-empty.
    pub fn adcode(&self) -> Option<String> {
        self.cascade.selected_leaf().map(|node| node.value.clone())
    }

    /// Reduces a collaborator event into the state.
    ///
    /// Returns the selection when the event confirmed one.
    pub fn update(&mut self, event: PickerEvent) -> Option<RegionSelection> {
        match event {
            PickerEvent::Open => {
                self.open();
                None
            }
            PickerEvent::Changed(reported) => {
                self.apply_change(&reported);
                None
            }
            PickerEvent::Confirm => Some(self.confirm()),
            PickerEvent::Cancel => {
                self.cancel();
                None
            }
        }
    }

    pub fn open(&mut self) {
        self.mask.show();
    }

    /// Captions for the collapsed control: the confirmed labels, or the
    /// column placeholders before anything was confirmed.
    pub fn labels(&self) -> &[String] {
        &self.captions
    }

    /// Commits the current selection and begins closing the overlay.
    pub fn confirm(&mut self) -> RegionSelection {
        self.mask.request_hide();

        let items = self.values();
        for (slot, caption) in self.captions.iter_mut().enumerate() {
            *caption = items
                .get(slot)
                .map(|item| item.label.clone())
                .unwrap_or_default();
        }

        RegionSelection {
            items,
            adcode: self.adcode().unwrap_or_default(),
        }
    }

    /// Dismisses the overlay without committing.
    pub fn cancel(&mut self) -> bool {
        self.mask.request_hide()
    }

    pub fn mask(&self) -> &MaskState {
        &self.mask
    }

    pub fn mask_mut(&mut self) -> &mut MaskState {
        &mut self.mask
    }
}
