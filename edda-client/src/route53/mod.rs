//! Route53 list operations
mod aws;
mod edda;
pub mod model;

use async_trait::async_trait;
pub use edda::EddaRoute53Client;
pub use model::*;

use crate::{edda::PaginatedServiceResult, error::Result};

#[async_trait]
pub trait Route53Api: Send + Sync {
  async fn list_hosted_zones(
    &self,
    request: ListHostedZonesRequest,
  ) -> Result<PaginatedServiceResult<ListHostedZonesResult>>;

  /// Record sets of a single hosted zone; `hosted_zone_id` is required
  async fn list_resource_record_sets(
    &self,
    request: ListResourceRecordSetsRequest,
  ) -> Result<PaginatedServiceResult<ListResourceRecordSetsResult>>;
}

/// Route53 client handed out by [`AwsClientFactory`](crate::AwsClientFactory)
#[derive(Clone, Debug)]
pub enum Route53Client {
  ReadOnly(EddaRoute53Client),
  Wrapped {
    edda: EddaRoute53Client,
    aws: aws_sdk_route53::Client,
  },
  /// Reads through AWS; results hold only the typed fields, with an empty `attributes` map
  Aws(aws_sdk_route53::Client),
}

impl Route53Client {
  /// The genuine AWS client; `None` when the client is read-only
  pub fn aws(&self) -> Option<&aws_sdk_route53::Client> {
    match self {
      Self::ReadOnly(_) => None,
      Self::Wrapped { aws, .. } | Self::Aws(aws) => Some(aws),
    }
  }

  /// The cache-backed client, for reads AWS has no counterpart for
  pub fn edda(&self) -> Option<&EddaRoute53Client> {
    match self {
      Self::ReadOnly(edda) | Self::Wrapped { edda, .. } => Some(edda),
      Self::Aws(_) => None,
    }
  }

  pub fn is_read_only(&self) -> bool {
    matches!(self, Self::ReadOnly(_))
  }

  fn reader(&self) -> &dyn Route53Api {
    match self {
      Self::ReadOnly(edda) | Self::Wrapped { edda, .. } => edda,
      Self::Aws(aws) => aws,
    }
  }
}

#[async_trait]
impl Route53Api for Route53Client {
  async fn list_hosted_zones(
    &self,
    request: ListHostedZonesRequest,
  ) -> Result<PaginatedServiceResult<ListHostedZonesResult>> {
    self.reader().list_hosted_zones(request).await
  }

  async fn list_resource_record_sets(
    &self,
    request: ListResourceRecordSetsRequest,
  ) -> Result<PaginatedServiceResult<ListResourceRecordSetsResult>> {
    self.reader().list_resource_record_sets(request).await
  }
}
