use std::{fs, path::Path, time::Duration};

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Connection parameters and mode flags shared by every client the factory builds
///
/// Loaded once at startup and never mutated afterwards. Durations are expressed in milliseconds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AwsConfiguration {
  /// Base URL of the cache service, i.e. `http://edda.example.net:7001`
  ///
  /// When unset, `http://{vip}` is used
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,

  /// Time allowed to establish a connection
  pub connection_timeout: u64,

  /// Time allowed for a request to complete once connected
  pub socket_timeout: u64,

  /// Maximum number of concurrent requests to the cache service, which is also the idle pool size
  ///
  /// The genuine AWS clients keep the SDK's own connection pool
  pub max_connections: usize,

  /// Number of retries the genuine AWS clients perform on retryable errors
  pub max_error_retry: u32,

  /// Build mock clients instead of real ones (not supported)
  pub use_mock: bool,

  /// Serve read operations from the cache when wrapping a genuine AWS client
  pub use_edda: bool,

  /// Build a genuine AWS client for write operations
  ///
  /// When false the factory returns read-only cache clients and never contacts AWS
  pub wrap_aws_client: bool,

  /// Role to assume through STS for the genuine AWS clients
  #[serde(skip_serializing_if = "Option::is_none")]
  pub role_arn: Option<String>,

  /// Session name used with `role_arn`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub role_session_name: Option<String>,
}

impl Default for AwsConfiguration {
  fn default() -> Self {
    Self {
      url: None,
      connection_timeout: 10_000,
      socket_timeout: 50_000,
      max_connections: 50,
      max_error_retry: 3,
      use_mock: false,
      use_edda: true,
      wrap_aws_client: false,
      role_arn: None,
      role_session_name: None,
    }
  }
}

impl AwsConfiguration {
  /// Read the configuration from a YAML or TOML file, chosen by extension
  pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let contents =
      fs::read_to_string(path).map_err(|err| Error::Config(format!("unable to read {}: {err}", path.display())))?;

    let config: AwsConfiguration = match path.extension().and_then(|ext| ext.to_str()) {
      Some("toml") => toml::from_str(&contents).map_err(|err| Error::Config(format!("{}: {err}", path.display())))?,
      _ => serde_yaml::from_str(&contents).map_err(|err| Error::Config(format!("{}: {err}", path.display())))?,
    };

    config.validate()?;
    Ok(config)
  }

  /// Reject values that would only fail later, at request time
  pub fn validate(&self) -> Result<()> {
    if let Some(url) = &self.url {
      let parsed = Url::parse(url).map_err(|err| Error::Config(format!("url [{url}]: {err}")))?;
      if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::Config(format!("url [{url}] must use http or https")));
      }
    }

    if self.max_connections == 0 {
      return Err(Error::Config("maxConnections must be at least 1".to_string()));
    }

    if self.role_arn.is_some() != self.role_session_name.is_some() {
      return Err(Error::Config(
        "roleArn and roleSessionName must be provided together".to_string(),
      ));
    }

    Ok(())
  }

  /// Base URL of the cache service, falling back to the VIP
  pub fn base_url(&self, vip: &str) -> String {
    match &self.url {
      Some(url) => url.trim_end_matches('/').to_owned(),
      None => format!("http://{vip}"),
    }
  }

  pub fn connection_timeout(&self) -> Duration {
    Duration::from_millis(self.connection_timeout)
  }

  pub fn socket_timeout(&self) -> Duration {
    Duration::from_millis(self.socket_timeout)
  }

  /// Role ARN and session name, when both are set and non-empty
  pub fn assume_role(&self) -> Option<(&str, &str)> {
    match (self.role_arn.as_deref(), self.role_session_name.as_deref()) {
      (Some(arn), Some(name)) if !arn.is_empty() && !name.is_empty() => Some((arn, name)),
      _ => None,
    }
  }
}
