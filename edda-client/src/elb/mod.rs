//! Classic Elastic Load Balancing reads
mod aws;
mod edda;
pub mod model;

use async_trait::async_trait;
pub use edda::EddaElasticLoadBalancingClient;
pub use model::*;

use crate::{
  edda::{PaginatedServiceResult, ServiceResult},
  error::Result,
};

#[async_trait]
pub trait ElasticLoadBalancingApi: Send + Sync {
  async fn describe_load_balancers(
    &self,
    request: DescribeLoadBalancersRequest,
  ) -> Result<PaginatedServiceResult<DescribeLoadBalancersResult>>;

  /// Health of the instances registered with one load balancer; `load_balancer_name` is required
  async fn describe_instance_health(
    &self,
    request: DescribeInstanceHealthRequest,
  ) -> Result<ServiceResult<DescribeInstanceHealthResult>>;
}

/// Classic ELB client handed out by [`AwsClientFactory`](crate::AwsClientFactory)
#[derive(Clone, Debug)]
pub enum ElasticLoadBalancingClient {
  ReadOnly(EddaElasticLoadBalancingClient),
  Wrapped {
    edda: EddaElasticLoadBalancingClient,
    aws: aws_sdk_elasticloadbalancing::Client,
  },
  /// Reads through AWS; results hold only the typed fields, with an empty `attributes` map
  Aws(aws_sdk_elasticloadbalancing::Client),
}

impl ElasticLoadBalancingClient {
  /// The genuine AWS client; `None` when the client is read-only
  pub fn aws(&self) -> Option<&aws_sdk_elasticloadbalancing::Client> {
    match self {
      Self::ReadOnly(_) => None,
      Self::Wrapped { aws, .. } | Self::Aws(aws) => Some(aws),
    }
  }

  pub fn is_read_only(&self) -> bool {
    matches!(self, Self::ReadOnly(_))
  }

  fn reader(&self) -> &dyn ElasticLoadBalancingApi {
    match self {
      Self::ReadOnly(edda) | Self::Wrapped { edda, .. } => edda,
      Self::Aws(aws) => aws,
    }
  }
}

#[async_trait]
impl ElasticLoadBalancingApi for ElasticLoadBalancingClient {
  async fn describe_load_balancers(
    &self,
    request: DescribeLoadBalancersRequest,
  ) -> Result<PaginatedServiceResult<DescribeLoadBalancersResult>> {
    self.reader().describe_load_balancers(request).await
  }

  async fn describe_instance_health(
    &self,
    request: DescribeInstanceHealthRequest,
  ) -> Result<ServiceResult<DescribeInstanceHealthResult>> {
    self.reader().describe_instance_health(request).await
  }
}
