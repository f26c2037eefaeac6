// SPDX-License-Identifier: MPL-2.0

//! State management for the cascading picker.

use super::node::{Column, ColumnItem, IndexPath, TreeNode};

/// Applies the cascade-reset policy to a reported index vector.
///
/// The first column whose index differs from `old` is the cascade point:
/// entries at or before it are kept as reported, entries strictly after it
/// are reset to 0. The UI scroller may report stale trailing indices after
/// an upstream change; they are discarded here, not trusted.
pub fn cascade(old: &[usize], reported: &[usize]) -> IndexPath {
    let mut out = IndexPath::with_capacity(reported.len());
    let mut changed = false;

    for (depth, &idx) in reported.iter().enumerate() {
        if changed {
            out.push(0);
            continue;
        }
        out.push(idx);
        if old.get(depth).copied() != Some(idx) {
            changed = true;
        }
    }

    out
}

/// State for a cascading multi-column picker over a hierarchical dataset.
///
/// Maintains the invariant that the index path is always valid against the
/// columns derived from it: after every change the path is re-walked
/// against the dataset, out-of-range entries are clamped to 0 and the path
/// is truncated or extended to the depth actually reachable.
#[derive(Debug, Clone, Default)]
pub struct CascadeState {
    dataset: Vec<TreeNode>,
    index: IndexPath,
}

impl CascadeState {
    /// Creates a new cascade over the given dataset, selecting the first
    /// entry of every column. An empty dataset is a valid empty state with
    /// zero columns.
    pub fn new(dataset: Vec<TreeNode>) -> Self {
        let mut state = Self {
            dataset,
            index: IndexPath::new(),
        };
        state.revalidate();
        state
    }

    /// Replaces the dataset and resets the selection to the first path.
    pub fn set_dataset(&mut self, dataset: Vec<TreeNode>) {
        self.dataset = dataset;
        self.index.clear();
        self.revalidate();
    }

    /// Repositions the selection wholesale, without the cascade-reset
    /// policy (e.g. to a path decoded from a code). Invalid entries are
    /// clamped.
    pub fn set_index(&mut self, index: IndexPath) {
        self.index = index;
        self.revalidate();
    }

    pub fn dataset(&self) -> &[TreeNode] {
        &self.dataset
    }

    /// The current index path. Its length equals the column count.
    pub fn index(&self) -> &IndexPath {
        &self.index
    }

    /// Number of visible columns for the current selection.
    pub fn depth(&self) -> usize {
        self.index.len()
    }

    /// Applies a reported index vector from the scroller.
    ///
    /// The cascade-reset policy runs first (see [`cascade`]), then the
    /// resulting path is revalidated against the rebuilt columns so every
    /// entry is in bounds.
    pub fn apply_change(&mut self, reported: &[usize]) {
        self.index = cascade(&self.index, reported);
        self.revalidate();
    }

    /// Builds one column per depth along the current index path.
    ///
    /// At depth `d` the column holds the sibling items at the node reached
    /// by `index[0..d]`; the walk stops at a terminal node, so shallow
    /// branches produce fewer columns.
    pub fn columns(&self) -> Vec<Column> {
        let mut columns = Vec::new();
        let mut level: &[TreeNode] = &self.dataset;
        let mut depth = 0;

        while !level.is_empty() {
            columns.push(level.iter().map(TreeNode::item).collect());
            let idx = self
                .index
                .get(depth)
                .copied()
                .unwrap_or(0)
                .min(level.len() - 1);
            level = &level[idx].children;
            depth += 1;
        }

        columns
    }

    /// The selected label/value pair per column, derived purely from the
    /// index path. A stale out-of-range index is clamped to the last valid
    /// offset; it should not occur while the invariant holds.
    pub fn values(&self) -> Vec<ColumnItem> {
        self.columns()
            .into_iter()
            .enumerate()
            .filter_map(|(depth, column)| {
                if column.is_empty() {
                    return None;
                }
                let idx = self
                    .index
                    .get(depth)
                    .copied()
                    .unwrap_or(0)
                    .min(column.len() - 1);
                column.into_iter().nth(idx)
            })
            .collect()
    }

    /// The deepest node reached by the current index path, if any.
    pub fn selected_leaf(&self) -> Option<&TreeNode> {
        let mut level: &[TreeNode] = &self.dataset;
        let mut selected = None;

        for &idx in &self.index {
            if level.is_empty() {
                break;
            }
            let node = &level[idx.min(level.len() - 1)];
            selected = Some(node);
            level = &node.children;
        }

        selected
    }

    /// Re-walks the dataset along the stored path, clamping out-of-range
    /// entries to 0 and sizing the path to the reachable depth.
    fn revalidate(&mut self) {
        let mut level: &[TreeNode] = &self.dataset;
        let mut fixed = IndexPath::new();
        let mut depth = 0;

        while !level.is_empty() {
            let stored = self.index.get(depth).copied().unwrap_or(0);
            let idx = if stored < level.len() { stored } else { 0 };
            fixed.push(idx);
            level = &level[idx].children;
            depth += 1;
        }

        self.index = fixed;
    }
}
