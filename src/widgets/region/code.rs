// SPDX-License-Identifier: MPL-2.0

//! Decoding of hierarchical administrative codes into index paths.

use crate::widgets::cascade::{IndexPath, TreeNode};

/// Maximum depth of the administrative dataset (province, city, district).
pub const MAX_DEPTH: usize = 3;

/// Top-level code prefixes whose branch is one level shallower than the
/// rest (the Hong Kong and Macau special administrative regions).
pub const REDUCED_DEPTH_PREFIXES: [&str; 2] = ["81", "82"];

/// Resolves a fixed-width hierarchical code against a region dataset.
///
/// Codes are strings of 2-character segments; the real depth of a code may
/// be shorter than [`MAX_DEPTH`]. For the reduced-depth branches the
/// segment at position 1 is skipped in both the target code and every
/// candidate node's code, keeping the comparison aligned across the whole
/// depth-walk.
#[derive(Debug, Clone)]
pub struct CodeResolver {
    reduced_depth: Vec<String>,
}

impl Default for CodeResolver {
    fn default() -> Self {
        Self {
            reduced_depth: REDUCED_DEPTH_PREFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CodeResolver {
    /// A resolver with a custom reduced-depth prefix set.
    pub fn with_reduced_depth(prefixes: impl IntoIterator<Item = String>) -> Self {
        Self {
            reduced_depth: prefixes.into_iter().collect(),
        }
    }

    /// Splits a code into ordered 2-character segments. An odd trailing
    /// character forms a short final segment, which simply never matches.
    pub fn segments(code: &str) -> Vec<String> {
        code.chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|chunk| chunk.iter().collect())
            .collect()
    }

    fn is_reduced(&self, segments: &[String]) -> bool {
        segments
            .first()
            .is_some_and(|head| self.reduced_depth.iter().any(|p| p == head))
    }

    fn adjusted(code: &str, reduced: bool) -> Vec<String> {
        let mut segments = Self::segments(code);
        if reduced && segments.len() > 1 {
            segments.remove(1);
        }
        segments
    }

    /// Decodes `code` into an index path of length [`MAX_DEPTH`].
    ///
    /// Walks depth by depth, matching each target segment against the
    /// same-position segment of every candidate sibling's code. On a miss
    /// the depth gets index 0 and the descent stops; the result is always
    /// right-padded with zeros. An empty or malformed code resolves to an
    /// all-zero path.
    pub fn resolve(&self, dataset: &[TreeNode], code: &str) -> IndexPath {
        let target = Self::segments(code);
        let reduced = self.is_reduced(&target);
        let target = if reduced && target.len() > 1 {
            let mut t = target;
            t.remove(1);
            t
        } else {
            target
        };

        let mut path = IndexPath::new();
        let mut level = dataset;

        for (depth, segment) in target.iter().enumerate().take(MAX_DEPTH) {
            let found = level
                .iter()
                .position(|node| Self::adjusted(&node.value, reduced).get(depth) == Some(segment));

            match found {
                Some(idx) => {
                    path.push(idx);
                    level = &level[idx].children;
                }
                None => {
                    path.push(0);
                    break;
                }
            }
        }

        path.resize(MAX_DEPTH, 0);
        path
    }
}
