// SPDX-License-Identifier: MPL-2.0

//! Cascading multi-column selection core.
//!
//! A cascading picker maps between a vector of column indices (what the UI
//! scroller reports) and a vector of semantic values (what the host emits
//! on confirm) over an arbitrary-depth hierarchical dataset. Changing an
//! upstream column invalidates everything below it: the first column whose
//! index differs defines the cascade point, and all later columns reset to
//! their first entry.
//!
//! # Example
//!
//! ```ignore
//! use cascader::widgets::cascade::{CascadeState, PickerEvent, TreeNode};
//!
//! // In your host widget
//! struct Host {
//!     cascade: CascadeState,
//! }
//!
//! // In your update function
//! fn update(&mut self, event: PickerEvent) {
//!     match event {
//!         PickerEvent::Changed(reported) => {
//!             self.cascade.apply_change(&reported);
//!             // re-render with self.cascade.columns() / self.cascade.index()
//!         }
//!         PickerEvent::Confirm => {
//!             let chosen = self.cascade.values();
//!             // emit upward
//!         }
//!         _ => {}
//!     }
//! }
//! ```

mod message;
mod node;
mod state;

pub use message::PickerEvent;
pub use node::{Column, ColumnItem, IndexPath, TreeNode};
pub use state::{cascade, CascadeState};
