/*
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 */

//! The per-entry enrichment pipeline.

use tracing::{debug, info, warn};

use tokmeta_client::{AlchemyClient, CoinGeckoClient, CoinMarketCapClient, RequestGate};
use tokmeta_core::{Error, Result, ETHEREUM_PLATFORM};

use crate::catalog::{Catalog, TokenEntry};
use crate::resolver::AddressMap;

/// Orchestrates validation, address resolution, remapping, metadata fetch
/// and logo backfill for every catalog entry.
pub struct Enricher {
  coingecko: CoinGeckoClient,
  alchemy: AlchemyClient,
  coinmarketcap: CoinMarketCapClient,
  gate: RequestGate,
  address_map: AddressMap,
}

impl Enricher {
  pub fn new(
    coingecko: CoinGeckoClient,
    alchemy: AlchemyClient,
    coinmarketcap: CoinMarketCapClient,
    gate: RequestGate,
    address_map: AddressMap,
  ) -> Self {
    Self { coingecko, alchemy, coinmarketcap, gate, address_map }
  }

  /// Enrich every entry, one at a time in catalog order. Sequential
  /// processing is load-bearing: the coin-info gate assumes single-flight.
  pub async fn enrich(&mut self, catalog: &mut Catalog) -> Result<()> {
    for (symbol, slot) in catalog.iter_mut() {
      let Some(entry) = slot else {
        debug!("Skipping empty placeholder entry [{}]", symbol);
        continue;
      };
      self.enrich_entry(symbol, entry).await?;
    }
    Ok(())
  }

  async fn enrich_entry(&mut self, symbol: &str, entry: &mut TokenEntry) -> Result<()> {
    self.validate(symbol, entry).await?;

    if entry.address.is_empty() {
      match self.coinmarketcap.address_by_symbol(symbol).await? {
        Some(address) => entry.address = address.to_lowercase(),
        None => {
          warn!(
            "Cannot resolve a mainnet address for [{}]; leaving it unenriched - better to cover this with a customizer",
            symbol
          );
          return Ok(());
        }
      }
    } else {
      entry.address = entry.address.to_lowercase();
    }

    if let Some(mainnet) = self.address_map.lookup(&entry.address) {
      info!("Remapping [{}] address {} to mainnet {}", symbol, entry.address, mainnet);
      entry.address = mainnet.to_string();
    }

    let Some(mut meta) = self.alchemy.token_metadata(&entry.address).await? else {
      return Err(Error::MissingMetadata(entry.address.clone()));
    };

    if meta.logo.is_empty() {
      match self.coinmarketcap.logo_by_symbol(symbol).await? {
        Some(logo) => meta.logo = logo,
        None => warn!("No logo found for [{}]; leaving it empty", symbol),
      }
    }

    entry.meta = Some(meta);
    info!("Filled token metadata for [{}]", symbol);
    Ok(())
  }

  /// Cross-check the stored address against the coin-info provider.
  /// Mismatches are warnings only; the catalog stays the source of truth.
  async fn validate(&mut self, symbol: &str, entry: &TokenEntry) -> Result<()> {
    if entry.coin_gecko_id.is_empty() {
      warn!("Token [{}] has no coinGeckoId; price lookups for it may misbehave", symbol);
      return Ok(());
    }

    self.gate.acquire().await;
    let detail = self.coingecko.coin_detail(&entry.coin_gecko_id).await?;

    let platform = detail.asset_platform_id.as_deref().unwrap_or_default();
    if !platform.eq_ignore_ascii_case(ETHEREUM_PLATFORM) {
      warn!("Token [{}] platform [{}] is not {}", symbol, platform, ETHEREUM_PLATFORM);
    }

    let listed = detail.platform_address(ETHEREUM_PLATFORM).unwrap_or_default();
    if !listed.eq_ignore_ascii_case(&entry.address) {
      warn!(
        "Token [{}] address [{}] differs from the CoinGecko listing [{}], platforms: {:?}",
        symbol, entry.address, listed, detail.platforms
      );
    }

    Ok(())
  }
}
