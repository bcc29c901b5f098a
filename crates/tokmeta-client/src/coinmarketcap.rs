/*
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 */

//! CoinMarketCap symbol lookups.
//!
//! Both lookups are best effort: an unlisted symbol is an absence, not an
//! error, and the enrichment pipeline only logs a warning for it.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use tokmeta_core::{Error, Result};

#[derive(Debug, Deserialize)]
struct InfoResponse {
  #[serde(default)]
  data: HashMap<String, Vec<InfoEntry>>,
}

#[derive(Debug, Deserialize)]
struct InfoEntry {
  #[serde(default)]
  logo: Option<String>,
  #[serde(default)]
  platform: Option<InfoPlatform>,
}

#[derive(Debug, Deserialize)]
struct InfoPlatform {
  #[serde(default)]
  slug: Option<String>,
  #[serde(default)]
  token_address: Option<String>,
}

/// CoinMarketCap read-only client.
pub struct CoinMarketCapClient {
  client: Client,
  base_url: String,
  api_key: String,
}

impl CoinMarketCapClient {
  pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
    Self { client: Client::new(), base_url: base_url.into(), api_key: api_key.into() }
  }

  /// Create a client with a custom HTTP client.
  pub fn with_client(
    client: Client,
    base_url: impl Into<String>,
    api_key: impl Into<String>,
  ) -> Self {
    Self { client, base_url: base_url.into(), api_key: api_key.into() }
  }

  async fn info_by_symbol(&self, symbol: &str) -> Result<Vec<InfoEntry>> {
    let url = format!("{}/v2/cryptocurrency/info", self.base_url);
    debug!("Fetching CoinMarketCap info for [{}]", symbol);

    let response = self
      .client
      .get(&url)
      .query(&[("symbol", symbol)])
      .header("X-CMC_PRO_API_KEY", &self.api_key)
      .header("accept", "application/json")
      .send()
      .await
      .map_err(|e| Error::Http(format!("CoinMarketCap request failed: {}", e)))?;

    // CoinMarketCap answers unknown symbols with HTTP 400
    if response.status() == StatusCode::BAD_REQUEST {
      return Ok(Vec::new());
    }

    if response.status() == 429 {
      return Err(Error::RateLimit("CoinMarketCap".to_string()));
    }

    if !response.status().is_success() {
      return Err(Error::Api(format!(
        "CoinMarketCap returned status {} for symbol [{}]",
        response.status(),
        symbol
      )));
    }

    let mut info: InfoResponse = response
      .json()
      .await
      .map_err(|e| Error::Parse(format!("Failed to parse CoinMarketCap response: {}", e)))?;

    Ok(info.data.remove(&symbol.to_uppercase()).unwrap_or_default())
  }

  /// Ethereum mainnet contract address for a symbol, if CoinMarketCap lists
  /// the token on mainnet.
  pub async fn address_by_symbol(&self, symbol: &str) -> Result<Option<String>> {
    let entries = self.info_by_symbol(symbol).await?;
    Ok(entries.iter().find_map(|entry| {
      let platform = entry.platform.as_ref()?;
      if platform.slug.as_deref() == Some("ethereum") {
        platform.token_address.clone().filter(|a| !a.is_empty())
      } else {
        None
      }
    }))
  }

  /// Logo URL for a symbol, if CoinMarketCap carries one.
  pub async fn logo_by_symbol(&self, symbol: &str) -> Result<Option<String>> {
    let entries = self.info_by_symbol(symbol).await?;
    Ok(entries.iter().find_map(|entry| entry.logo.clone().filter(|l| !l.is_empty())))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn info_body() -> serde_json::Value {
    json!({
      "status": {"error_code": 0},
      "data": {
        "AAVE": [{
          "id": 7278,
          "name": "Aave",
          "symbol": "AAVE",
          "logo": "https://s2.coinmarketcap.com/static/img/coins/64x64/7278.png",
          "platform": {
            "id": 1027,
            "name": "Ethereum",
            "slug": "ethereum",
            "token_address": "0x7Fc66500c84A76Ad7e9c93437bFc5Ac33E2DDaE9"
          }
        }]
      }
    })
  }

  #[tokio::test]
  async fn test_address_by_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/v2/cryptocurrency/info"))
      .and(query_param("symbol", "AAVE"))
      .respond_with(ResponseTemplate::new(200).set_body_json(info_body()))
      .mount(&server)
      .await;

    let client = CoinMarketCapClient::new(server.uri(), "test-key");
    let address = client.address_by_symbol("AAVE").await.unwrap();
    assert_eq!(address.as_deref(), Some("0x7Fc66500c84A76Ad7e9c93437bFc5Ac33E2DDaE9"));

    let logo = client.logo_by_symbol("AAVE").await.unwrap();
    assert!(logo.unwrap().ends_with("7278.png"));
  }

  #[tokio::test]
  async fn test_unknown_symbol_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/v2/cryptocurrency/info"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({
        "status": {"error_code": 400, "error_message": "Invalid value for \"symbol\""}
      })))
      .mount(&server)
      .await;

    let client = CoinMarketCapClient::new(server.uri(), "test-key");
    assert!(client.address_by_symbol("NOPE").await.unwrap().is_none());
    assert!(client.logo_by_symbol("NOPE").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn test_non_mainnet_platform_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "data": {
          "QUICK": [{
            "logo": "https://s2.coinmarketcap.com/static/img/coins/64x64/8206.png",
            "platform": {
              "slug": "polygon",
              "token_address": "0x831753dd7087cac61ab5644b308642cc1c33dc13"
            }
          }]
        }
      })))
      .mount(&server)
      .await;

    let client = CoinMarketCapClient::new(server.uri(), "test-key");
    assert!(client.address_by_symbol("QUICK").await.unwrap().is_none());
    assert!(client.logo_by_symbol("QUICK").await.unwrap().is_some());
  }
}
