/*
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 */

//! Foreign-network address resolution.
//!
//! Tokens bridged to Polygon PoS carry a different contract address than
//! their Ethereum mainnet original. Catalog entries sometimes arrive with
//! the bridged address; the resolver substitutes the mainnet one before any
//! metadata lookup.

use std::collections::HashMap;
use tracing::{debug, info};

use tokmeta_client::{CoinGeckoClient, CoinPlatforms};
use tokmeta_core::{Result, ETHEREUM_PLATFORM, POLYGON_PLATFORM};

/// Foreign-address -> mainnet-address table, static for the run.
#[derive(Debug, Clone, Default)]
pub struct AddressMap {
  inner: HashMap<String, String>,
}

impl AddressMap {
  /// Build the table from coin platform listings. Every coin listed on
  /// both networks contributes one mapping; addresses are stored lowercase.
  pub fn from_coins(coins: &[CoinPlatforms]) -> Self {
    let mut inner = HashMap::new();
    for coin in coins {
      let (Some(foreign), Some(mainnet)) = (
        coin.platform_address(POLYGON_PLATFORM),
        coin.platform_address(ETHEREUM_PLATFORM),
      ) else {
        continue;
      };
      inner.insert(foreign.to_lowercase(), mainnet.to_lowercase());
    }
    debug!("Address map built from {} coin listings", coins.len());
    Self { inner }
  }

  /// Mainnet counterpart for a foreign address, if one is known.
  pub fn lookup(&self, address: &str) -> Option<&str> {
    self.inner.get(&address.to_lowercase()).map(|s| s.as_str())
  }

  /// The mainnet counterpart when known, the input unchanged otherwise.
  pub fn resolve<'a>(&'a self, address: &'a str) -> &'a str {
    self.lookup(address).unwrap_or(address)
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }
}

/// Fetch the platform listings and build the remap table; the one external
/// call the resolver makes.
pub async fn build(coingecko: &CoinGeckoClient) -> Result<AddressMap> {
  let coins = coingecko.coins_with_platforms().await?;
  let map = AddressMap::from_coins(&coins);
  info!("Built address map with {} Polygon -> mainnet entries", map.len());
  Ok(map)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn coin(id: &str, polygon: Option<&str>, ethereum: Option<&str>) -> CoinPlatforms {
    let mut platforms = HashMap::new();
    if let Some(address) = polygon {
      platforms.insert(POLYGON_PLATFORM.to_string(), Some(address.to_string()));
    }
    if let Some(address) = ethereum {
      platforms.insert(ETHEREUM_PLATFORM.to_string(), Some(address.to_string()));
    }
    serde_json::from_value(serde_json::json!({
      "id": id,
      "symbol": id,
      "platforms": platforms,
    }))
    .unwrap()
  }

  #[test]
  fn test_mapped_addresses_resolve_to_mainnet() {
    let coins = vec![
      coin(
        "aave",
        Some("0xD6DF932A45C0f255f85145f286eA0b292B21C90B"),
        Some("0x7Fc66500c84A76Ad7e9c93437bFc5Ac33E2DDaE9"),
      ),
      coin("only-mainnet", None, Some("0x1111111111111111111111111111111111111111")),
      coin("only-polygon", Some("0x2222222222222222222222222222222222222222"), None),
    ];

    let map = AddressMap::from_coins(&coins);
    assert_eq!(map.len(), 1);

    // lookups are case insensitive, results lowercase
    assert_eq!(
      map.resolve("0xd6df932a45c0f255f85145f286ea0b292b21c90b"),
      "0x7fc66500c84a76ad7e9c93437bfc5ac33e2ddae9"
    );
    assert_eq!(
      map.resolve("0xD6DF932A45C0f255f85145f286eA0b292B21C90B"),
      "0x7fc66500c84a76ad7e9c93437bfc5ac33e2ddae9"
    );
  }

  #[test]
  fn test_unmapped_addresses_pass_through() {
    let map = AddressMap::from_coins(&[]);
    assert!(map.is_empty());
    assert_eq!(
      map.resolve("0x1f9840a85d5af5bf1d1762f925bdaddc4201f984"),
      "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984"
    );
    assert!(map.lookup("0x1f9840a85d5af5bf1d1762f925bdaddc4201f984").is_none());
  }
}
