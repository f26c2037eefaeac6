// SPDX-License-Identifier: MPL-2.0

//! Clients for external data providers.

mod regions;

pub use regions::{bundled_regions, parse_regions, RegionClient, RegionError, RegionNode};
