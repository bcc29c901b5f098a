/*
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 */

//! Manual per-token overrides applied after automatic enrichment.

use std::collections::BTreeMap;
use tracing::{info, warn};

use tokmeta_client::TokenMetadata;

use crate::catalog::{Catalog, TokenEntry};

/// An override that mutates one catalog entry in place.
pub type Customizer = Box<dyn Fn(&mut TokenEntry) + Send + Sync>;

/// Keyed overrides for entries the automatic pipeline cannot resolve.
///
/// The registry is injected into the run and applied strictly after the
/// full enrichment pass, in key order; whatever a customizer writes wins
/// over the fetched metadata.
#[derive(Default)]
pub struct CustomizerRegistry {
  overrides: BTreeMap<String, Customizer>,
}

impl CustomizerRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register an override for a catalog key, replacing any previous one.
  pub fn register<F>(&mut self, symbol: impl Into<String>, customizer: F)
  where
    F: Fn(&mut TokenEntry) + Send + Sync + 'static,
  {
    self.overrides.insert(symbol.into(), Box::new(customizer));
  }

  pub fn len(&self) -> usize {
    self.overrides.len()
  }

  pub fn is_empty(&self) -> bool {
    self.overrides.is_empty()
  }

  /// Apply every registered override to its catalog entry. A null
  /// placeholder entry is materialized first, so a customizer can fill in
  /// tokens the providers do not know at all. Returns the number of
  /// entries touched.
  pub fn apply(&self, catalog: &mut Catalog) -> usize {
    let mut applied = 0;
    for (symbol, customizer) in &self.overrides {
      match catalog.get_mut(symbol) {
        Some(slot) => {
          let entry = slot.get_or_insert_with(TokenEntry::default);
          customizer(entry);
          info!("Applied customizer for [{}]", symbol);
          applied += 1;
        }
        None => {
          warn!("Customizer registered for [{}] but the catalog has no such key", symbol);
        }
      }
    }
    applied
  }
}

/// The hand-maintained production overrides.
pub fn default_registry() -> CustomizerRegistry {
  let mut registry = CustomizerRegistry::new();

  // AXS migrated contracts in 2021; the symbol lookup still returns the
  // legacy address.
  registry.register("AXS", |entry| {
    entry.address = "0xbb0e17ef65f82ab018d8edd776e8dd940327b28b".to_string();
    entry.meta = Some(TokenMetadata {
      name: "Axie Infinity Shard".to_string(),
      symbol: "AXS".to_string(),
      decimals: 18,
      logo: "https://s2.coinmarketcap.com/static/img/coins/64x64/6783.png".to_string(),
    });
  });

  // Wrapped MIR is delisted from both providers
  registry.register("MIR", |entry| {
    entry.address = "0x09a3ecafa817268f77be1283176b946c4ff2e608".to_string();
    entry.meta = Some(TokenMetadata {
      name: "Wrapped MIR Token".to_string(),
      symbol: "MIR".to_string(),
      decimals: 18,
      logo: "https://s2.coinmarketcap.com/static/img/coins/64x64/7857.png".to_string(),
    });
  });

  registry
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_overrides_win_over_enriched_data() {
    let mut catalog = Catalog::new();
    catalog.insert(
      "FOO",
      Some(TokenEntry {
        address: "0x1111111111111111111111111111111111111111".to_string(),
        coin_gecko_id: "foo".to_string(),
        meta: Some(TokenMetadata {
          name: "Wrong Name".to_string(),
          symbol: "FOO".to_string(),
          decimals: 6,
          logo: String::new(),
        }),
      }),
    );

    let mut registry = CustomizerRegistry::new();
    registry.register("FOO", |entry| {
      if let Some(meta) = entry.meta.as_mut() {
        meta.name = "Foo Token".to_string();
        meta.decimals = 18;
      }
    });

    assert_eq!(registry.apply(&mut catalog), 1);
    let meta = catalog.get("FOO").unwrap().as_ref().unwrap().meta.as_ref().unwrap();
    assert_eq!(meta.name, "Foo Token");
    assert_eq!(meta.decimals, 18);
  }

  #[test]
  fn test_null_placeholder_is_materialized() {
    let mut catalog = Catalog::new();
    catalog.insert("BAR", None);

    let mut registry = CustomizerRegistry::new();
    registry.register("BAR", |entry| {
      entry.address = "0x2222222222222222222222222222222222222222".to_string();
    });

    assert_eq!(registry.apply(&mut catalog), 1);
    let entry = catalog.get("BAR").unwrap().as_ref().unwrap();
    assert_eq!(entry.address, "0x2222222222222222222222222222222222222222");
  }

  #[test]
  fn test_unknown_key_is_skipped() {
    let mut catalog = Catalog::new();
    catalog.insert("FOO", None);

    let mut registry = CustomizerRegistry::new();
    registry.register("MISSING", |entry| {
      entry.address = "0x3333333333333333333333333333333333333333".to_string();
    });

    assert_eq!(registry.apply(&mut catalog), 0);
    assert!(catalog.get("FOO").unwrap().is_none());
    assert!(catalog.get("MISSING").is_none());
  }

  #[test]
  fn test_default_registry_is_populated() {
    let registry = default_registry();
    assert!(!registry.is_empty());
  }
}
