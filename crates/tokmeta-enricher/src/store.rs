/*
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 */

//! Catalog persistence: load, timestamped backup, atomic rewrite.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use tokmeta_core::Result;

use crate::catalog::Catalog;

/// Owns the catalog file path and every touch of the filesystem.
pub struct CatalogStore {
  path: PathBuf,
}

impl CatalogStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Read and parse the catalog. The raw bytes are returned alongside so
  /// the caller can back them up before any mutation happens.
  pub fn load(&self) -> Result<(Catalog, Vec<u8>)> {
    let raw = fs::read(&self.path)?;
    let catalog: Catalog = serde_json::from_slice(&raw)?;
    info!("Loaded {} catalog entries from {}", catalog.len(), self.path.display());
    Ok((catalog, raw))
  }

  /// Write the raw pre-enrichment bytes to a timestamped sibling file.
  ///
  /// The store is rewritten in place at the end of the run; a failed backup
  /// must abort the run before any mutation.
  pub fn backup(&self, raw: &[u8], timestamp: DateTime<Utc>) -> Result<PathBuf> {
    let backup_path = self.backup_path(timestamp);
    fs::write(&backup_path, raw)?;
    info!("Backed up catalog to {}", backup_path.display());
    Ok(backup_path)
  }

  /// Serialize the catalog and atomically replace the file contents.
  ///
  /// The JSON goes to a temporary sibling first, flushed and synced, then
  /// renamed over the original; a failure partway through leaves the
  /// original file untouched.
  pub fn write(&self, catalog: &Catalog) -> Result<()> {
    let mut json = serde_json::to_vec_pretty(catalog)?;
    json.push(b'\n');

    let tmp_path = self.sibling("tmp");
    {
      let mut file = File::create(&tmp_path)?;
      file.write_all(&json)?;
      file.sync_all()?;
    }
    fs::rename(&tmp_path, &self.path)?;

    debug!("Wrote {} bytes to {}", json.len(), self.path.display());
    Ok(())
  }

  /// Backup path for a run started at `timestamp`, e.g.
  /// `tokens.json.2025-06-01T12:00:00Z.bak`.
  fn backup_path(&self, timestamp: DateTime<Utc>) -> PathBuf {
    let ts = timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
    self.sibling(&format!("{}.bak", ts))
  }

  fn sibling(&self, suffix: &str) -> PathBuf {
    let file_name = self.path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    self.path.with_file_name(format!("{}.{}", file_name, suffix))
  }
}
