use thiserror::Error;

/// The main error type for tokmeta-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// File open/read/write error
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Invalid or non-success response from a provider
  #[error("API error: {0}")]
  Api(String),

  /// Provider rate limit exceeded
  #[error("Rate limit exceeded: {0}")]
  RateLimit(String),

  /// Parse error for provider response bodies
  #[error("Parse error: {0}")]
  Parse(String),

  /// The metadata provider has no record for a resolved address
  #[error("No token metadata for address: {0}")]
  MissingMetadata(String),
}

/// Result type alias for tokmeta-* crates
pub type Result<T> = std::result::Result<T, Error>;
