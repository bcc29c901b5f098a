//! Configuration management for the token metadata generator

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the generator
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Alchemy API key (token metadata lookups)
  pub alchemy_api_key: String,

  /// CoinMarketCap API key (symbol to address/logo lookups)
  pub coinmarketcap_api_key: String,

  /// Optional CoinGecko API key (the public tier works without one)
  pub coingecko_api_key: Option<String>,

  /// Base URL for the CoinGecko API
  pub coingecko_base_url: String,

  /// Base URL for the Alchemy JSON-RPC endpoint
  pub alchemy_base_url: String,

  /// Base URL for the CoinMarketCap API
  pub coinmarketcap_base_url: String,

  /// Minimum spacing between CoinGecko coin lookups in milliseconds
  pub coin_info_interval_ms: u64,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {

    dotenv().ok();

    let alchemy_api_key = env::var("ALCHEMY_API_KEY")
      .map_err(|_| Error::ApiKey("ALCHEMY_API_KEY not set".to_string()))?;

    let coinmarketcap_api_key = env::var("COINMARKETCAP_API_KEY")
      .map_err(|_| Error::ApiKey("COINMARKETCAP_API_KEY not set".to_string()))?;

    let coingecko_api_key = env::var("COINGECKO_API_KEY").ok();

    let coingecko_base_url =
      env::var("COINGECKO_BASE_URL").unwrap_or_else(|_| crate::COINGECKO_BASE_URL.to_string());

    let alchemy_base_url =
      env::var("ALCHEMY_BASE_URL").unwrap_or_else(|_| crate::ALCHEMY_BASE_URL.to_string());

    let coinmarketcap_base_url = env::var("COINMARKETCAP_BASE_URL")
      .unwrap_or_else(|_| crate::COINMARKETCAP_BASE_URL.to_string());

    let coin_info_interval_ms = env::var("COINGECKO_MIN_INTERVAL_MS")
      .unwrap_or_else(|_| crate::DEFAULT_COIN_INFO_INTERVAL_MS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid COINGECKO_MIN_INTERVAL_MS".to_string()))?;

    let timeout_secs = env::var("HTTP_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid HTTP_TIMEOUT_SECS".to_string()))?;

    Ok(Config {
      alchemy_api_key,
      coinmarketcap_api_key,
      coingecko_api_key,
      coingecko_base_url,
      alchemy_base_url,
      coinmarketcap_base_url,
      coin_info_interval_ms,
      timeout_secs,
    })
  }

  /// Create a config with default endpoints (for testing)
  pub fn default_with_keys(alchemy_api_key: String, coinmarketcap_api_key: String) -> Self {
    Config {
      alchemy_api_key,
      coinmarketcap_api_key,
      coingecko_api_key: None,
      coingecko_base_url: crate::COINGECKO_BASE_URL.to_string(),
      alchemy_base_url: crate::ALCHEMY_BASE_URL.to_string(),
      coinmarketcap_base_url: crate::COINMARKETCAP_BASE_URL.to_string(),
      coin_info_interval_ms: crate::DEFAULT_COIN_INFO_INTERVAL_MS,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_from_env() {
    env::set_var("ALCHEMY_API_KEY", "test_alchemy_key");
    env::set_var("COINMARKETCAP_API_KEY", "test_cmc_key");
    let config = Config::from_env().unwrap();
    assert_eq!(config.alchemy_api_key, "test_alchemy_key");
    assert_eq!(config.coinmarketcap_api_key, "test_cmc_key");
    assert_eq!(config.coin_info_interval_ms, 1500);
  }

  #[test]
  fn test_default_with_keys() {
    let config = Config::default_with_keys("a".to_string(), "c".to_string());
    assert_eq!(config.coingecko_base_url, crate::COINGECKO_BASE_URL);
    assert_eq!(config.timeout_secs, crate::DEFAULT_TIMEOUT_SECS);
  }
}
