pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Base URL for the CoinGecko API
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Base URL for the Alchemy Ethereum mainnet JSON-RPC endpoint
pub const ALCHEMY_BASE_URL: &str = "https://eth-mainnet.g.alchemy.com/v2";

/// Base URL for the CoinMarketCap API
pub const COINMARKETCAP_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

/// CoinGecko asset platform id for Ethereum mainnet, the network every
/// catalog address must ultimately live on
pub const ETHEREUM_PLATFORM: &str = "ethereum";

/// CoinGecko asset platform id for Polygon PoS, the single alternate
/// network whose addresses are remapped to their mainnet counterparts
pub const POLYGON_PLATFORM: &str = "polygon-pos";

/// Minimum spacing between CoinGecko coin lookups (free tier quota)
pub const DEFAULT_COIN_INFO_INTERVAL_MS: u64 = 1500;

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
