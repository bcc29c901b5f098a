/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
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

//! # tokmeta-enricher
//!
//! Catalog model, persistence and the enrichment pipeline for the token
//! metadata generator.
//!
//! The [`run::run`] entry point executes the whole one-shot batch: load the
//! catalog, write a timestamped backup, build the foreign-network address
//! map, enrich every entry against the providers, apply the injected
//! customizer overrides, and atomically rewrite the catalog file.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tokmeta_core::Config;
//! use tokmeta_enricher::{customizer::default_registry, run::run};
//!
//! let config = Config::from_env()?;
//! let summary = run(&config, "data/tokens.json", &default_registry()).await?;
//! println!("{} tokens processed", summary.tokens);
//! ```

pub mod catalog;
pub mod customizer;
pub mod enricher;
pub mod resolver;
pub mod run;
pub mod store;

// Re-export main types for convenience
pub use catalog::{Catalog, TokenEntry};
pub use customizer::{default_registry, Customizer, CustomizerRegistry};
pub use enricher::Enricher;
pub use resolver::AddressMap;
pub use run::{run, RunSummary};
pub use store::CatalogStore;
pub use tokmeta_client::TokenMetadata;
pub use tokmeta_core::{Config, Error, Result};
