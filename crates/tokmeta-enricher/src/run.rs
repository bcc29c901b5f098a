/*
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 */

//! One-shot batch run: load, back up, enrich, customize, persist.

use chrono::Utc;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use tokmeta_client::{
  http_client, AlchemyClient, CoinGeckoClient, CoinMarketCapClient, RequestGate,
};
use tokmeta_core::{Config, Result};

use crate::customizer::CustomizerRegistry;
use crate::enricher::Enricher;
use crate::resolver;
use crate::store::CatalogStore;

/// What a completed run touched.
#[derive(Debug)]
pub struct RunSummary {
  pub tokens: usize,
  pub customized: usize,
  pub incomplete: usize,
  pub backup_path: PathBuf,
}

/// Execute the whole batch against the catalog at `path`.
///
/// Fatal conditions surface as `Err`; the caller decides process exit. The
/// catalog file is only rewritten after every entry has been processed and
/// customized, so an aborted run leaves the original file (plus its fresh
/// backup) behind.
pub async fn run(
  config: &Config,
  path: impl AsRef<Path>,
  registry: &CustomizerRegistry,
) -> Result<RunSummary> {
  let store = CatalogStore::new(path.as_ref());

  let (mut catalog, raw) = store.load()?;
  info!("Got catalog, [{}] tokens' metadata need to be filled", catalog.len());

  let backup_path = store.backup(&raw, Utc::now())?;

  catalog.tidy();

  let client = http_client(Duration::from_secs(config.timeout_secs))?;
  let coingecko = CoinGeckoClient::with_client(
    client.clone(),
    config.coingecko_base_url.clone(),
    config.coingecko_api_key.clone(),
  );
  let alchemy = AlchemyClient::with_client(
    client.clone(),
    config.alchemy_base_url.clone(),
    config.alchemy_api_key.clone(),
  );
  let coinmarketcap = CoinMarketCapClient::with_client(
    client,
    config.coinmarketcap_base_url.clone(),
    config.coinmarketcap_api_key.clone(),
  );

  let address_map = resolver::build(&coingecko).await?;

  let gate = RequestGate::new(Duration::from_millis(config.coin_info_interval_ms));
  let mut enricher = Enricher::new(coingecko, alchemy, coinmarketcap, gate, address_map);
  enricher.enrich(&mut catalog).await?;
  info!("Finished fetching tokens' metadata");

  let customized = registry.apply(&mut catalog);
  info!("Finished customized metadata for [{}] tokens", customized);

  let incomplete = catalog.check();

  store.write(&catalog)?;
  info!("Successfully generated token meta file {}", store.path().display());

  Ok(RunSummary { tokens: catalog.len(), customized, incomplete, backup_path })
}
