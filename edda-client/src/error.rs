use thiserror::Error;

/// Errors surfaced by the cache-backed clients and the client factory
///
/// Nothing in this crate retries or recovers locally: every failure is handed back to the caller
#[derive(Debug, Error)]
pub enum Error {
  /// A request field the cache service cannot honour was supplied
  #[error("{0} not supported")]
  UnsupportedField(&'static str),

  /// A request field the cache service needs to build the query was left empty
  #[error("{0} is required")]
  MissingField(&'static str),

  /// Mock clients were requested through `useMock`
  #[error("{0} mock not yet supported")]
  MockUnsupported(&'static str),

  /// Connection failure, timeout, or non-2xx response from the cache service
  #[error("failed to fetch {url}")]
  Transport {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  /// The cache service response does not match the expected schema
  #[error("failed to parse {url}")]
  Parse {
    url: String,
    #[source]
    source: serde_json::Error,
  },

  /// Invalid or unresolvable configuration, raised at client construction time
  #[error("invalid configuration: {0}")]
  Config(String),

  /// Error returned by a genuine AWS SDK client
  #[error(transparent)]
  Aws(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn aws<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Aws(Box::new(err))
  }

  /// URL of the cache request that failed, when the failure came from the cache service
  pub fn url(&self) -> Option<&str> {
    match self {
      Self::Transport { url, .. } | Self::Parse { url, .. } => Some(url),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
