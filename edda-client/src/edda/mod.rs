//! Shared helper used by every cache-backed service client
//!
//! Each service client composes an [`EddaClient`]: it validates the request, builds a [`Query`], fetches and parses
//! the response through [`EddaClient::get`], re-applies local filters, and wraps the outcome in a result envelope.
pub mod filter;
pub mod query;
pub mod result;

use std::sync::Arc;

use chrono::{DateTime, Utc};
pub use query::{validate_empty, validate_not_empty, Query};
use reqwest::Client;
pub use result::{PaginatedServiceResult, ServiceResult};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::{
  config::AwsConfiguration,
  error::{Error, Result},
};

/// A parsed cache response together with when and where it was requested
#[derive(Debug)]
pub struct Fetched<T> {
  pub issued_at: DateTime<Utc>,
  pub url: String,
  pub value: T,
}

/// HTTP access to the cache service
///
/// Clones share one connection pool and at most `maxConnections` requests are in flight across all of them
#[derive(Clone, Debug)]
pub struct EddaClient {
  http: Client,
  base_url: String,
  permits: Arc<Semaphore>,
}

impl EddaClient {
  /// Build a client for the configured URL, or for `http://{vip}` when no URL is configured
  pub fn new(config: &AwsConfiguration, vip: &str) -> Result<Self> {
    config.validate()?;

    let http = Client::builder()
      .connect_timeout(config.connection_timeout())
      .timeout(config.socket_timeout())
      .pool_max_idle_per_host(config.max_connections)
      .user_agent(concat!("edda-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|err| Error::Config(format!("unable to build HTTP client: {err}")))?;

    Ok(Self {
      http,
      base_url: config.base_url(vip),
      permits: Arc::new(Semaphore::new(config.max_connections)),
    })
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Issue a single GET for the query and deserialize the body
  ///
  /// Transport failures and non-2xx responses are reported as [`Error::Transport`], bodies that do not match `T` as
  /// [`Error::Parse`]; both carry the request URL
  pub async fn get<T: DeserializeOwned>(&self, query: &Query) -> Result<Fetched<T>> {
    let url = query.url(&self.base_url)?;
    let _permit = self
      .permits
      .acquire()
      .await
      .map_err(|_| Error::Config("cache client connection limit closed".to_string()))?;
    let issued_at = Utc::now();
    debug!("GET {url}");

    let response = match self.http.get(&url).send().await.and_then(|r| r.error_for_status()) {
      Ok(response) => response,
      Err(source) => return Err(Error::Transport { url, source }),
    };

    let body = match response.bytes().await {
      Ok(body) => body,
      Err(source) => return Err(Error::Transport { url, source }),
    };
    debug!("Received {} bytes from {url}", body.len());

    match serde_json::from_slice(&body) {
      Ok(value) => Ok(Fetched { issued_at, url, value }),
      Err(source) => Err(Error::Parse { url, source }),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::time::{Duration, Instant};

  use serde_json::Value;
  use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
  };

  use super::*;

  async fn client(server: &MockServer) -> EddaClient {
    let config = AwsConfiguration {
      url: Some(server.uri()),
      ..Default::default()
    };
    EddaClient::new(&config, "unused:7001").unwrap()
  }

  #[test]
  fn it_falls_back_to_vip() {
    let client = EddaClient::new(&AwsConfiguration::default(), "edda-main:7001").unwrap();
    assert_eq!(client.base_url(), "http://edda-main:7001");
  }

  #[tokio::test]
  async fn it_gets_and_parses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/api/v2/aws/vpcs;_expand"))
      .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"vpcId":"vpc-1"}]"#))
      .expect(1)
      .mount(&server)
      .await;

    let before = Utc::now();
    let fetched: Fetched<Vec<Value>> = client(&server).await.get(&Query::aws("vpcs").expand()).await.unwrap();

    assert_eq!(fetched.value, vec![serde_json::json!({"vpcId": "vpc-1"})]);
    assert!(fetched.url.ends_with("/api/v2/aws/vpcs;_expand"));
    assert!(fetched.issued_at >= before);
  }

  #[tokio::test]
  async fn it_reports_status_errors_with_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(503))
      .mount(&server)
      .await;

    let result: Result<Fetched<Vec<Value>>> = client(&server).await.get(&Query::aws("vpcs").expand()).await;
    let err = result.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
    assert_eq!(err.url(), Some(format!("{}/api/v2/aws/vpcs;_expand", server.uri()).as_str()));
  }

  #[tokio::test]
  async fn it_reports_parse_errors_with_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"vpcId": "#))
      .mount(&server)
      .await;

    let result: Result<Fetched<Vec<Value>>> = client(&server).await.get(&Query::aws("vpcs").expand()).await;
    let err = result.unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("/api/v2/aws/vpcs;_expand"));
  }

  #[tokio::test]
  async fn it_limits_requests_in_flight() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_string("[]")
          .set_delay(Duration::from_millis(300)),
      )
      .expect(2)
      .mount(&server)
      .await;
    let config = AwsConfiguration {
      url: Some(server.uri()),
      max_connections: 1,
      ..Default::default()
    };
    let client = EddaClient::new(&config, "unused:7001").unwrap();
    let query = Query::aws("vpcs").expand();

    let start = Instant::now();
    let (first, second): (Result<Fetched<Vec<Value>>>, Result<Fetched<Vec<Value>>>) =
      tokio::join!(client.get(&query), client.get(&query));

    assert!(first.is_ok() && second.is_ok());
    assert!(start.elapsed() >= Duration::from_millis(600));
  }

  #[tokio::test]
  async fn it_reports_connection_errors() {
    let config = AwsConfiguration {
      url: Some("http://127.0.0.1:1".to_string()),
      connection_timeout: 500,
      ..Default::default()
    };
    let client = EddaClient::new(&config, "unused:7001").unwrap();

    let result: Result<Fetched<Vec<Value>>> = client.get(&Query::aws("vpcs")).await;
    assert!(matches!(result, Err(Error::Transport { .. })));
  }
}
