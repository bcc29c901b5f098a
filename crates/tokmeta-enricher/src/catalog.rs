/*
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 */

//! The persisted catalog: a symbol-keyed map of token records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use tokmeta_client::TokenMetadata;

/// One catalog record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
  /// Lowercase hex contract address on Ethereum mainnet; empty until resolved
  #[serde(default)]
  pub address: String,

  /// CoinGecko coin identifier used for validation; may be empty
  #[serde(rename = "coinGeckoId", default)]
  pub coin_gecko_id: String,

  /// Canonical metadata; null until enriched
  #[serde(default)]
  pub meta: Option<TokenMetadata>,
}

/// The catalog, keyed by token symbol.
///
/// A null value is an explicitly empty placeholder entry; the enrichment
/// pass skips it. The BTreeMap keeps iteration and serialized output in key
/// order so warnings and file diffs are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(BTreeMap<String, Option<TokenEntry>>);

impl Catalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self, symbol: &str) -> Option<&Option<TokenEntry>> {
    self.0.get(symbol)
  }

  pub fn get_mut(&mut self, symbol: &str) -> Option<&mut Option<TokenEntry>> {
    self.0.get_mut(symbol)
  }

  pub fn insert(&mut self, symbol: impl Into<String>, entry: Option<TokenEntry>) {
    self.0.insert(symbol.into(), entry);
  }

  /// Entries in key order.
  pub fn iter(&self) -> impl Iterator<Item = (&String, &Option<TokenEntry>)> {
    self.0.iter()
  }

  /// Mutable entries in key order.
  pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Option<TokenEntry>)> {
    self.0.iter_mut()
  }

  /// Pre-enrichment normalization: strips stray whitespace from hand-edited
  /// fields and lowercases addresses.
  pub fn tidy(&mut self) {
    for entry in self.0.values_mut().flatten() {
      entry.address = entry.address.trim().to_lowercase();
      entry.coin_gecko_id = entry.coin_gecko_id.trim().to_string();
    }
  }

  /// Post-run consistency sweep. Logs a warning per gap and returns the
  /// number of entries that are still incomplete.
  pub fn check(&self) -> usize {
    let mut incomplete = 0;
    for (symbol, entry) in &self.0 {
      let Some(entry) = entry else {
        warn!("Token [{}] is an empty placeholder entry", symbol);
        incomplete += 1;
        continue;
      };
      if entry.address.is_empty() {
        warn!("Token [{}] has no contract address", symbol);
        incomplete += 1;
      } else if entry.meta.is_none() {
        warn!("Token [{}] has no metadata", symbol);
        incomplete += 1;
      } else if let Some(meta) = &entry.meta {
        if meta.logo.is_empty() {
          warn!("Token [{}] metadata has no logo", symbol);
        }
      }
    }
    incomplete
  }
}
