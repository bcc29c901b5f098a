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

//! # tokmeta-client
//!
//! Read-only provider clients for the token metadata generator.
//!
//! Three independent clients cover the external surface of the batch job:
//! - [`CoinGeckoClient`] resolves a coin identifier to its asset platform
//!   and per-network contract addresses, and lists coins with platform
//!   addresses for the Polygon -> mainnet remap table.
//! - [`AlchemyClient`] resolves a contract address to canonical ERC-20
//!   metadata (name, symbol, decimals, logo).
//! - [`CoinMarketCapClient`] provides best-effort symbol -> address and
//!   symbol -> logo lookups.
//!
//! Every client takes an injectable base URL so tests can run against a
//! local mock server. CoinGecko coin lookups are paced through a
//! [`RequestGate`] to stay under the provider's request quota.
//!
//! All methods return `Result<T, tokmeta_core::Error>` for consistent error
//! handling across the tokmeta-* ecosystem.

pub mod alchemy;
pub mod coingecko;
pub mod coinmarketcap;
pub mod rate_limit;

// Re-export the main clients and common types
pub use alchemy::{AlchemyClient, TokenMetadata};
pub use coingecko::{CoinDetail, CoinGeckoClient, CoinPlatforms};
pub use coinmarketcap::CoinMarketCapClient;
pub use rate_limit::RequestGate;
pub use tokmeta_core::{Error, Result};

use std::time::Duration;

/// Build the shared HTTP client used by all providers.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client> {
  reqwest::Client::builder()
    .timeout(timeout)
    .user_agent("tokmeta/0.1.0")
    .build()
    .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))
}
