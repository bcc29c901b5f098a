/*
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 */

//! Alchemy token metadata client (`alchemy_getTokenMetadata`).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use tokmeta_core::{Error, Result};

/// ERC-20 metadata as returned by `alchemy_getTokenMetadata`.
///
/// This struct is stored in the catalog exactly as fetched; no
/// transformation happens between the provider response and disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
  pub name: String,
  pub symbol: String,
  pub decimals: u32,
  pub logo: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
  result: Option<RawTokenMetadata>,
  error: Option<RpcError>,
}

/// Wire shape of the RPC result; the node answers unknown contracts with an
/// all-null record rather than an error.
#[derive(Debug, Deserialize)]
struct RawTokenMetadata {
  name: Option<String>,
  symbol: Option<String>,
  decimals: Option<u32>,
  logo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
  code: i64,
  message: String,
}

impl RawTokenMetadata {
  fn into_metadata(self) -> Option<TokenMetadata> {
    if self.name.is_none() && self.symbol.is_none() {
      return None;
    }
    Some(TokenMetadata {
      name: self.name.unwrap_or_default(),
      symbol: self.symbol.unwrap_or_default(),
      decimals: self.decimals.unwrap_or_default(),
      logo: self.logo.unwrap_or_default(),
    })
  }
}

/// Alchemy JSON-RPC client for Ethereum mainnet.
pub struct AlchemyClient {
  client: Client,
  base_url: String,
  api_key: String,
}

impl AlchemyClient {
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

  /// Fetch ERC-20 metadata for a contract address.
  ///
  /// Returns `Ok(None)` when the node has no record for the address; the
  /// enrichment pipeline treats that as fatal for the run.
  pub async fn token_metadata(&self, address: &str) -> Result<Option<TokenMetadata>> {
    let url = format!("{}/{}", self.base_url, self.api_key);
    let body = json!({
      "jsonrpc": "2.0",
      "id": 1,
      "method": "alchemy_getTokenMetadata",
      "params": [address],
    });

    debug!("Fetching token metadata for [{}]", address);

    let response = self
      .client
      .post(&url)
      .json(&body)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Alchemy request failed: {}", e)))?;

    if response.status() == 429 {
      return Err(Error::RateLimit("Alchemy".to_string()));
    }

    if !response.status().is_success() {
      return Err(Error::Api(format!("Alchemy returned status {}", response.status())));
    }

    let rpc: RpcResponse = response
      .json()
      .await
      .map_err(|e| Error::Parse(format!("Failed to parse Alchemy response: {}", e)))?;

    if let Some(err) = rpc.error {
      return Err(Error::Api(format!("Alchemy RPC error {}: {}", err.code, err.message)));
    }

    Ok(rpc.result.and_then(RawTokenMetadata::into_metadata))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use wiremock::matchers::{body_partial_json, method};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  #[test]
  fn test_metadata_serialization_shape() {
    let meta = TokenMetadata {
      name: "Uniswap".to_string(),
      symbol: "UNI".to_string(),
      decimals: 18,
      logo: "https://static.alchemyapi.io/images/assets/7083.png".to_string(),
    };

    let raw = serde_json::to_value(&meta).unwrap();
    assert_eq!(raw["name"], "Uniswap");
    assert_eq!(raw["decimals"], 18);
    // the logo field is always present, even when empty
    let empty = serde_json::to_value(TokenMetadata::default()).unwrap();
    assert_eq!(empty["logo"], "");
  }

  #[tokio::test]
  async fn test_token_metadata_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(body_partial_json(json!({"method": "alchemy_getTokenMetadata"})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
          "name": "Chainlink",
          "symbol": "LINK",
          "decimals": 18,
          "logo": null
        }
      })))
      .mount(&server)
      .await;

    let client = AlchemyClient::new(server.uri(), "test-key");
    let meta = client
      .token_metadata("0x514910771af9ca656af840dff83e8264ecf986ca")
      .await
      .unwrap()
      .unwrap();
    assert_eq!(meta.symbol, "LINK");
    assert_eq!(meta.decimals, 18);
    assert!(meta.logo.is_empty());
  }

  #[tokio::test]
  async fn test_unknown_contract_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {"name": null, "symbol": null, "decimals": null, "logo": null}
      })))
      .mount(&server)
      .await;

    let client = AlchemyClient::new(server.uri(), "test-key");
    let meta = client.token_metadata("0x0000000000000000000000000000000000000001").await.unwrap();
    assert!(meta.is_none());
  }

  #[tokio::test]
  async fn test_rpc_error_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": {"code": -32600, "message": "invalid request"}
      })))
      .mount(&server)
      .await;

    let client = AlchemyClient::new(server.uri(), "test-key");
    let err = client.token_metadata("not-an-address").await.unwrap_err();
    assert!(matches!(err, Error::Api(_)));
  }
}
