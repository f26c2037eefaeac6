// SPDX-License-Identifier: MPL-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Config {
    /// Region service base URL (e.g., http://localhost:8000)
    pub server_url: String,
    /// Bearer token for the region service; empty for none
    pub auth_token: String,
    /// Earliest selectable date for date pickers, `Y/M/D`
    pub date_start: String,
    /// Overlay leave animation duration in milliseconds
    pub mask_duration_ms: u64,
    /// Whether tapping the backdrop closes an overlay
    pub mask_closable: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: String::from("http://localhost:8000"),
            auth_token: String::new(),
            date_start: String::from("2016/6/1"),
            mask_duration_ms: 250,
            mask_closable: true,
        }
    }
}
