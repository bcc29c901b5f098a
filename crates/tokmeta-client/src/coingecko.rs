/*
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 */

//! CoinGecko client for coin details and platform address listings.

use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info};

use tokmeta_core::{Error, Result};

/// CoinGecko read-only client.
///
/// The public tier works without an API key; a demo key raises the quota.
pub struct CoinGeckoClient {
  client: Client,
  base_url: String,
  api_key: Option<String>,
}

impl CoinGeckoClient {
  pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
    Self { client: Client::new(), base_url: base_url.into(), api_key }
  }

  /// Create a client with a custom HTTP client.
  pub fn with_client(client: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
    Self { client, base_url: base_url.into(), api_key }
  }

  /// Fetch the detail record for a coin identifier.
  ///
  /// Callers are expected to pace these lookups through a
  /// [`crate::RequestGate`]; the client itself does not throttle.
  pub async fn coin_detail(&self, id: &str) -> Result<CoinDetail> {
    let url = format!("{}/coins/{}?localization=false", self.base_url, id);
    debug!("Fetching CoinGecko detail for [{}]", id);

    let mut request = self.client.get(&url).header("accept", "application/json");
    if let Some(key) = &self.api_key {
      request = request.query(&[("x_cg_demo_api_key", key)]);
    }

    let response = request
      .send()
      .await
      .map_err(|e| Error::Http(format!("CoinGecko request failed: {}", e)))?;

    if response.status() == 429 {
      return Err(Error::RateLimit("CoinGecko".to_string()));
    }

    if !response.status().is_success() {
      return Err(Error::Api(format!(
        "CoinGecko returned status {} for coin [{}]",
        response.status(),
        id
      )));
    }

    response
      .json()
      .await
      .map_err(|e| Error::Parse(format!("Failed to parse CoinGecko coin detail: {}", e)))
  }

  /// Fetch the complete coin list with per-platform contract addresses.
  ///
  /// One call per run; feeds the foreign-network address remap table.
  pub async fn coins_with_platforms(&self) -> Result<Vec<CoinPlatforms>> {
    let url = format!("{}/coins/list?include_platform=true", self.base_url);
    info!("Fetching CoinGecko coin list with platform addresses");

    let mut request = self.client.get(&url).header("accept", "application/json");
    if let Some(key) = &self.api_key {
      request = request.query(&[("x_cg_demo_api_key", key)]);
    }

    let response = request
      .send()
      .await
      .map_err(|e| Error::Http(format!("CoinGecko request failed: {}", e)))?;

    if response.status() == 429 {
      return Err(Error::RateLimit("CoinGecko".to_string()));
    }

    if !response.status().is_success() {
      return Err(Error::Api(format!("CoinGecko returned status {}", response.status())));
    }

    let coins: Vec<CoinPlatforms> = response
      .json()
      .await
      .map_err(|e| Error::Parse(format!("Failed to parse CoinGecko coin list: {}", e)))?;

    info!("Fetched {} coins from CoinGecko /coins/list", coins.len());
    Ok(coins)
  }
}

/// Detail record from `/coins/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDetail {
  pub id: String,
  pub symbol: String,
  pub name: String,
  /// Null for native coins such as bitcoin
  pub asset_platform_id: Option<String>,
  /// Contract address per platform; values can be null or empty
  #[serde(default)]
  pub platforms: HashMap<String, Option<String>>,
}

impl CoinDetail {
  /// Contract address on the given platform, if listed and non-empty.
  pub fn platform_address(&self, platform: &str) -> Option<&str> {
    self.platforms.get(platform).and_then(|a| a.as_deref()).filter(|a| !a.is_empty())
  }
}

/// Entry from `/coins/list?include_platform=true`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinPlatforms {
  pub id: String,
  pub symbol: String,
  #[serde(default)]
  pub platforms: HashMap<String, Option<String>>,
}

impl CoinPlatforms {
  /// Contract address on the given platform, if listed and non-empty.
  pub fn platform_address(&self, platform: &str) -> Option<&str> {
    self.platforms.get(platform).and_then(|a| a.as_deref()).filter(|a| !a.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_coin_detail_parses_null_platform_values() {
    let raw = r#"{
      "id": "uniswap",
      "symbol": "uni",
      "name": "Uniswap",
      "asset_platform_id": "ethereum",
      "platforms": {
        "ethereum": "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984",
        "energi": null
      }
    }"#;

    let detail: CoinDetail = serde_json::from_str(raw).unwrap();
    assert_eq!(detail.asset_platform_id.as_deref(), Some("ethereum"));
    assert_eq!(
      detail.platform_address("ethereum"),
      Some("0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984")
    );
    assert_eq!(detail.platform_address("energi"), None);
    assert_eq!(detail.platform_address("polygon-pos"), None);
  }

  #[test]
  fn test_coin_detail_parses_native_coin() {
    let raw = r#"{
      "id": "bitcoin",
      "symbol": "btc",
      "name": "Bitcoin",
      "asset_platform_id": null,
      "platforms": {"": ""}
    }"#;

    let detail: CoinDetail = serde_json::from_str(raw).unwrap();
    assert!(detail.asset_platform_id.is_none());
    assert_eq!(detail.platform_address(""), None);
  }
}
