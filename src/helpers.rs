// SPDX-License-Identifier: MPL-2.0

//! Async helper functions for obtaining the region dataset.
//! These functions handle region service API interactions.

use tracing::warn;

use crate::api::{bundled_regions, RegionClient};
use crate::widgets::cascade::TreeNode;

/// Fetch the region dataset and convert it into picker tree nodes.
pub async fn fetch_region_dataset(url: &str, token: &str) -> Result<Vec<TreeNode>, String> {
    let client = RegionClient::new(url, token).map_err(|e| e.to_string())?;
    let regions = client.fetch_regions().await.map_err(|e| e.to_string())?;
    Ok(regions.into_iter().map(Into::into).collect())
}

/// Fetch the region dataset, falling back to the bundled snapshot when the
/// service is unreachable.
pub async fn fetch_region_dataset_or_bundled(url: &str, token: &str) -> Vec<TreeNode> {
    match fetch_region_dataset(url, token).await {
        Ok(dataset) => dataset,
        Err(e) => {
            warn!(error = %e, "region fetch failed, using bundled snapshot");
            bundled_regions()
        }
    }
}

/// Session cache for the region dataset.
///
/// The dataset is immutable once obtained, so the store fetches at most
/// once and hands out the cached copy afterwards. A failed fetch caches
/// nothing; the next call retries.
#[derive(Debug, Clone, Default)]
pub struct RegionStore {
    cached: Option<Vec<TreeNode>>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached dataset, fetching it on first use.
    pub async fn get_or_fetch(&mut self, url: &str, token: &str) -> Result<&[TreeNode], String> {
        if self.cached.is_none() {
            let dataset = fetch_region_dataset(url, token).await?;
            self.cached = Some(dataset);
        }
        Ok(self.cached.as_deref().unwrap_or_default())
    }

    /// Seeds the cache directly (e.g. from the bundled snapshot or a test
    /// fixture).
    pub fn seed(&mut self, dataset: Vec<TreeNode>) {
        self.cached = Some(dataset);
    }

    pub fn cached(&self) -> Option<&[TreeNode]> {
        self.cached.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_never_touches_the_network() {
        let mut store = RegionStore::new();
        store.seed(vec![TreeNode::leaf("Wan Chai", "810102")]);

        // The URL is unroutable; a fetch attempt would fail.
        let dataset = store.get_or_fetch("http://invalid.localhost:1", "").await.unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[tokio::test]
    async fn failed_fetch_surfaces_an_error_and_caches_nothing() {
        let mut store = RegionStore::new();
        let result = store.get_or_fetch("http://invalid.localhost:1", "").await;
        assert!(result.is_err());
        assert!(store.cached().is_none());
    }

    #[tokio::test]
    async fn unreachable_service_falls_back_to_the_bundled_snapshot() {
        let dataset = fetch_region_dataset_or_bundled("http://invalid.localhost:1", "").await;
        assert!(!dataset.is_empty());
    }
}
