/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing::info;

use tokmeta_core::Config;
use tokmeta_enricher::{default_registry, run};

/// One-shot token metadata catalog generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "tokmeta")]
struct Cli {
  /// Path to the token metadata catalog file
  #[arg(short, long, env = "TOKEN_META_FILE", default_value = "data/tokens.json")]
  file: PathBuf,

  /// Verbose output
  #[arg(short, long)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).init();

  // Load configuration
  let config = Config::from_env().context("failed to load provider configuration")?;

  let registry = default_registry();
  let summary = run(&config, &cli.file, &registry)
    .await
    .with_context(|| format!("failed to generate token meta file {}", cli.file.display()))?;

  info!(
    "Done: {} tokens, {} customized, {} incomplete (backup at {})",
    summary.tokens,
    summary.customized,
    summary.incomplete,
    summary.backup_path.display()
  );

  Ok(())
}
