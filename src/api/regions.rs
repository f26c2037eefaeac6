// SPDX-License-Identifier: MPL-2.0

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use rust_embed::RustEmbed;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::widgets::cascade::TreeNode;

/// Static assets bundled with the crate.
#[derive(RustEmbed)]
#[folder = "resources/"]
struct Assets;

const BUNDLED_REGIONS: &str = "regions.json";

#[derive(Debug, Clone, Error)]
pub enum RegionError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// One node of the region dataset as the service returns it.
///
/// The service has shipped child lists under both `children` and
/// `districts`; accept either.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionNode {
    pub name: String,
    #[serde(default)]
    pub adcode: String,
    #[serde(default, alias = "districts")]
    pub children: Vec<RegionNode>,
}

impl From<RegionNode> for TreeNode {
    fn from(node: RegionNode) -> Self {
        TreeNode::branch(
            node.name,
            node.adcode,
            node.children.into_iter().map(Into::into).collect(),
        )
    }
}

/// Envelope of the `/address` endpoint.
#[derive(Debug, Deserialize)]
struct AddressResponse {
    results: Vec<RegionNode>,
}

#[derive(Debug, Clone)]
pub struct RegionClient {
    client: reqwest::Client,
    base_url: String,
}

impl RegionClient {
    /// Create a new region service client.
    /// An empty `auth_token` sends no Authorization header.
    pub fn new(base_url: &str, auth_token: &str) -> Result<Self, RegionError> {
        let mut headers = HeaderMap::new();

        if !auth_token.is_empty() {
            let auth_value = HeaderValue::from_str(&format!("Bearer {}", auth_token))
                .map_err(|e| RegionError::ConnectionFailed(e.to_string()))?;
            headers.insert(AUTHORIZATION, auth_value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| RegionError::ConnectionFailed(e.to_string()))?;

        // Normalize base URL (remove trailing slash)
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Fetch the full region dataset.
    ///
    /// Meant to be called once per session; the dataset is immutable and
    /// the caller should cache the result.
    pub async fn fetch_regions(&self) -> Result<Vec<RegionNode>, RegionError> {
        let url = format!("{}/address", self.base_url);
        debug!(url = %url, "fetching region dataset");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RegionError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RegionError::RequestFailed(format!(
                "Server returned status: {}",
                response.status()
            )));
        }

        let body: AddressResponse = response
            .json()
            .await
            .map_err(|e| RegionError::InvalidResponse(e.to_string()))?;

        debug!(provinces = body.results.len(), "region dataset fetched");
        Ok(body.results)
    }
}

/// Parses a JSON array of region nodes into picker tree nodes.
pub fn parse_regions(json: &str) -> Result<Vec<TreeNode>, RegionError> {
    let nodes: Vec<RegionNode> =
        serde_json::from_str(json).map_err(|e| RegionError::InvalidResponse(e.to_string()))?;
    Ok(nodes.into_iter().map(Into::into).collect())
}

/// The region snapshot embedded in the crate, for offline use and as a
/// fallback when the fetch fails.
pub fn bundled_regions() -> Vec<TreeNode> {
    let Some(file) = Assets::get(BUNDLED_REGIONS) else {
        warn!("bundled region snapshot missing");
        return Vec::new();
    };

    match std::str::from_utf8(&file.data).ok().map(parse_regions) {
        Some(Ok(nodes)) => nodes,
        _ => {
            warn!("bundled region snapshot unreadable");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_children_and_districts_spellings() {
        let json = r#"[
            {
                "name": "Beijing",
                "adcode": "110000",
                "children": [
                    {"name": "Beijing City", "adcode": "110100", "districts": [
                        {"name": "Dongcheng", "adcode": "110101"}
                    ]}
                ]
            }
        ]"#;

        let nodes = parse_regions(json).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label, "Beijing");
        assert_eq!(nodes[0].children[0].children[0].value, "110101");
    }

    #[test]
    fn missing_children_means_leaf() {
        let json = r#"[{"name": "Wan Chai", "adcode": "810102"}]"#;
        let nodes = parse_regions(json).unwrap();
        assert!(nodes[0].is_leaf());
    }

    #[test]
    fn malformed_json_is_an_invalid_response() {
        assert!(matches!(
            parse_regions("{not json"),
            Err(RegionError::InvalidResponse(_))
        ));
    }

    #[test]
    fn bundled_snapshot_parses_and_contains_reduced_depth_branches() {
        let regions = bundled_regions();
        assert!(!regions.is_empty());

        let hong_kong = regions
            .iter()
            .find(|n| n.value.starts_with("81"))
            .expect("snapshot includes Hong Kong");
        // Reduced-depth branch: province straight to district.
        assert!(hong_kong.children.iter().all(TreeNode::is_leaf));
    }
}
