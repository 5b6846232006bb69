//! CloudWatch alarm reads
mod aws;
mod edda;
pub mod model;

use async_trait::async_trait;
pub use edda::EddaCloudWatchClient;
pub use model::*;

use crate::{edda::PaginatedServiceResult, error::Result};

#[async_trait]
pub trait CloudWatchApi: Send + Sync {
  async fn describe_alarms(
    &self,
    request: DescribeAlarmsRequest,
  ) -> Result<PaginatedServiceResult<DescribeAlarmsResult>>;
}

/// CloudWatch client handed out by [`AwsClientFactory`](crate::AwsClientFactory)
#[derive(Clone, Debug)]
pub enum CloudWatchClient {
  ReadOnly(EddaCloudWatchClient),
  Wrapped {
    edda: EddaCloudWatchClient,
    aws: aws_sdk_cloudwatch::Client,
  },
  /// Reads through AWS; results hold only the typed fields, with an empty `attributes` map
  Aws(aws_sdk_cloudwatch::Client),
}

impl CloudWatchClient {
  /// The genuine AWS client; `None` when the client is read-only
  pub fn aws(&self) -> Option<&aws_sdk_cloudwatch::Client> {
    match self {
      Self::ReadOnly(_) => None,
      Self::Wrapped { aws, .. } | Self::Aws(aws) => Some(aws),
    }
  }

  pub fn is_read_only(&self) -> bool {
    matches!(self, Self::ReadOnly(_))
  }

  fn reader(&self) -> &dyn CloudWatchApi {
    match self {
      Self::ReadOnly(edda) | Self::Wrapped { edda, .. } => edda,
      Self::Aws(aws) => aws,
    }
  }
}

#[async_trait]
impl CloudWatchApi for CloudWatchClient {
  async fn describe_alarms(
    &self,
    request: DescribeAlarmsRequest,
  ) -> Result<PaginatedServiceResult<DescribeAlarmsResult>> {
    self.reader().describe_alarms(request).await
  }
}
