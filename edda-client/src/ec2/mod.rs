//! EC2 describe operations
mod aws;
mod edda;
pub mod model;

use async_trait::async_trait;
pub use edda::EddaEc2Client;
pub use model::*;

use crate::{
  edda::{PaginatedServiceResult, ServiceResult},
  error::Result,
};

/// Read operations shared by the cache-backed client, the genuine AWS client, and [`Ec2Client`]
#[async_trait]
pub trait Ec2Api: Send + Sync {
  async fn describe_classic_link_instances(
    &self,
    request: DescribeClassicLinkInstancesRequest,
  ) -> Result<PaginatedServiceResult<DescribeClassicLinkInstancesResult>>;

  async fn describe_images(&self, request: DescribeImagesRequest) -> Result<ServiceResult<DescribeImagesResult>>;

  async fn describe_instances(
    &self,
    request: DescribeInstancesRequest,
  ) -> Result<PaginatedServiceResult<DescribeInstancesResult>>;

  async fn describe_reserved_instances_offerings(
    &self,
    request: DescribeReservedInstancesOfferingsRequest,
  ) -> Result<PaginatedServiceResult<DescribeReservedInstancesOfferingsResult>>;

  async fn describe_security_groups(
    &self,
    request: DescribeSecurityGroupsRequest,
  ) -> Result<ServiceResult<DescribeSecurityGroupsResult>>;

  async fn describe_subnets(&self, request: DescribeSubnetsRequest) -> Result<ServiceResult<DescribeSubnetsResult>>;

  async fn describe_volumes(
    &self,
    request: DescribeVolumesRequest,
  ) -> Result<PaginatedServiceResult<DescribeVolumesResult>>;

  async fn describe_vpcs(&self, request: DescribeVpcsRequest) -> Result<ServiceResult<DescribeVpcsResult>>;
}

/// EC2 client handed out by [`AwsClientFactory`](crate::AwsClientFactory)
///
/// Reads go to the cache service unless the client was built to talk to AWS directly. Operations this crate does not
/// model are reached through [`Ec2Client::aws`]
#[derive(Clone, Debug)]
pub enum Ec2Client {
  /// Cache-backed reads only
  ReadOnly(EddaEc2Client),
  /// Cache-backed reads, with the genuine client available for everything else
  Wrapped {
    edda: EddaEc2Client,
    aws: aws_sdk_ec2::Client,
  },
  /// The genuine client, untouched
  ///
  /// Results carry the typed fields, plus launch time, placement, key name, architecture, root device type and DNS
  /// names for instances; other attributes the cache would return are not carried
  Aws(aws_sdk_ec2::Client),
}

impl Ec2Client {
  /// The genuine AWS client; `None` when the client is read-only
  pub fn aws(&self) -> Option<&aws_sdk_ec2::Client> {
    match self {
      Self::ReadOnly(_) => None,
      Self::Wrapped { aws, .. } | Self::Aws(aws) => Some(aws),
    }
  }

  pub fn is_read_only(&self) -> bool {
    matches!(self, Self::ReadOnly(_))
  }

  fn reader(&self) -> &dyn Ec2Api {
    match self {
      Self::ReadOnly(edda) | Self::Wrapped { edda, .. } => edda,
      Self::Aws(aws) => aws,
    }
  }
}

#[async_trait]
impl Ec2Api for Ec2Client {
  async fn describe_classic_link_instances(
    &self,
    request: DescribeClassicLinkInstancesRequest,
  ) -> Result<PaginatedServiceResult<DescribeClassicLinkInstancesResult>> {
    self.reader().describe_classic_link_instances(request).await
  }

  async fn describe_images(&self, request: DescribeImagesRequest) -> Result<ServiceResult<DescribeImagesResult>> {
    self.reader().describe_images(request).await
  }

  async fn describe_instances(
    &self,
    request: DescribeInstancesRequest,
  ) -> Result<PaginatedServiceResult<DescribeInstancesResult>> {
    self.reader().describe_instances(request).await
  }

  async fn describe_reserved_instances_offerings(
    &self,
    request: DescribeReservedInstancesOfferingsRequest,
  ) -> Result<PaginatedServiceResult<DescribeReservedInstancesOfferingsResult>> {
    self.reader().describe_reserved_instances_offerings(request).await
  }

  async fn describe_security_groups(
    &self,
    request: DescribeSecurityGroupsRequest,
  ) -> Result<ServiceResult<DescribeSecurityGroupsResult>> {
    self.reader().describe_security_groups(request).await
  }

  async fn describe_subnets(&self, request: DescribeSubnetsRequest) -> Result<ServiceResult<DescribeSubnetsResult>> {
    self.reader().describe_subnets(request).await
  }

  async fn describe_volumes(
    &self,
    request: DescribeVolumesRequest,
  ) -> Result<PaginatedServiceResult<DescribeVolumesResult>> {
    self.reader().describe_volumes(request).await
  }

  async fn describe_vpcs(&self, request: DescribeVpcsRequest) -> Result<ServiceResult<DescribeVpcsResult>> {
    self.reader().describe_vpcs(request).await
  }
}
