//! Auto Scaling describe operations
mod aws;
mod edda;
pub mod model;

use async_trait::async_trait;
pub use edda::EddaAutoScalingClient;
pub use model::*;

use crate::{edda::PaginatedServiceResult, error::Result};

#[async_trait]
pub trait AutoScalingApi: Send + Sync {
  async fn describe_auto_scaling_groups(
    &self,
    request: DescribeAutoScalingGroupsRequest,
  ) -> Result<PaginatedServiceResult<DescribeAutoScalingGroupsResult>>;

  async fn describe_launch_configurations(
    &self,
    request: DescribeLaunchConfigurationsRequest,
  ) -> Result<PaginatedServiceResult<DescribeLaunchConfigurationsResult>>;

  /// Policies matching both the group name and the policy names, when given
  async fn describe_policies(
    &self,
    request: DescribePoliciesRequest,
  ) -> Result<PaginatedServiceResult<DescribePoliciesResult>>;
}

/// Auto Scaling client handed out by [`AwsClientFactory`](crate::AwsClientFactory)
#[derive(Clone, Debug)]
pub enum AutoScalingClient {
  ReadOnly(EddaAutoScalingClient),
  Wrapped {
    edda: EddaAutoScalingClient,
    aws: aws_sdk_autoscaling::Client,
  },
  /// Reads through AWS; results hold only the typed fields, with an empty `attributes` map
  Aws(aws_sdk_autoscaling::Client),
}

impl AutoScalingClient {
  /// The genuine AWS client; `None` when the client is read-only
  pub fn aws(&self) -> Option<&aws_sdk_autoscaling::Client> {
    match self {
      Self::ReadOnly(_) => None,
      Self::Wrapped { aws, .. } | Self::Aws(aws) => Some(aws),
    }
  }

  pub fn is_read_only(&self) -> bool {
    matches!(self, Self::ReadOnly(_))
  }

  fn reader(&self) -> &dyn AutoScalingApi {
    match self {
      Self::ReadOnly(edda) | Self::Wrapped { edda, .. } => edda,
      Self::Aws(aws) => aws,
    }
  }
}

#[async_trait]
impl AutoScalingApi for AutoScalingClient {
  async fn describe_auto_scaling_groups(
    &self,
    request: DescribeAutoScalingGroupsRequest,
  ) -> Result<PaginatedServiceResult<DescribeAutoScalingGroupsResult>> {
    self.reader().describe_auto_scaling_groups(request).await
  }

  async fn describe_launch_configurations(
    &self,
    request: DescribeLaunchConfigurationsRequest,
  ) -> Result<PaginatedServiceResult<DescribeLaunchConfigurationsResult>> {
    self.reader().describe_launch_configurations(request).await
  }

  async fn describe_policies(
    &self,
    request: DescribePoliciesRequest,
  ) -> Result<PaginatedServiceResult<DescribePoliciesResult>> {
    self.reader().describe_policies(request).await
  }
}
