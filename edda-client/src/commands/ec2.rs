use anyhow::Result;
use clap::{Args, Subcommand};

use super::{print, Selection};
use crate::{
  ec2::{
    DescribeClassicLinkInstancesRequest, DescribeImagesRequest, DescribeInstancesRequest,
    DescribeReservedInstancesOfferingsRequest, DescribeSecurityGroupsRequest, DescribeSubnetsRequest,
    DescribeVolumesRequest, DescribeVpcsRequest, Ec2Api,
  },
  factory::AwsClientFactory,
};

#[derive(Debug, Subcommand)]
pub enum Ec2 {
  /// Instances linked to a VPC through ClassicLink
  ClassicLinkInstances(Selection),

  /// Machine images, by ID and owner
  Images(Images),

  /// Reservations and their instances, by instance ID
  Instances(Selection),

  /// Reserved instance offerings, by offering ID
  ReservedInstancesOfferings(Selection),

  /// Security groups, by ID and name
  SecurityGroups(SecurityGroups),

  Subnets(Selection),

  Volumes(Selection),

  Vpcs(Selection),
}

#[derive(Args, Debug)]
pub struct Images {
  #[arg(value_name = "IMAGE_ID")]
  pub image_ids: Vec<String>,

  /// Account ID of the image owner; may be repeated
  #[arg(long = "owner")]
  pub owners: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SecurityGroups {
  #[arg(value_name = "GROUP_ID")]
  pub group_ids: Vec<String>,

  /// Security group name; may be repeated
  #[arg(long = "name")]
  pub group_names: Vec<String>,
}

impl Ec2 {
  pub async fn run(&self, factory: &AwsClientFactory) -> Result<()> {
    let client = factory.new_ec2_client().await?;

    match self {
      Self::ClassicLinkInstances(ids) => {
        let request = DescribeClassicLinkInstancesRequest {
          instance_ids: ids.values.clone(),
          ..Default::default()
        };
        print(&client.describe_classic_link_instances(request).await?)
      }
      Self::Images(images) => {
        let request = DescribeImagesRequest {
          image_ids: images.image_ids.clone(),
          owners: images.owners.clone(),
          ..Default::default()
        };
        print(&client.describe_images(request).await?)
      }
      Self::Instances(ids) => {
        let request = DescribeInstancesRequest {
          instance_ids: ids.values.clone(),
          ..Default::default()
        };
        print(&client.describe_instances(request).await?)
      }
      Self::ReservedInstancesOfferings(ids) => {
        let request = DescribeReservedInstancesOfferingsRequest {
          reserved_instances_offering_ids: ids.values.clone(),
          ..Default::default()
        };
        print(&client.describe_reserved_instances_offerings(request).await?)
      }
      Self::SecurityGroups(groups) => {
        let request = DescribeSecurityGroupsRequest {
          group_ids: groups.group_ids.clone(),
          group_names: groups.group_names.clone(),
          ..Default::default()
        };
        print(&client.describe_security_groups(request).await?)
      }
      Self::Subnets(ids) => {
        let request = DescribeSubnetsRequest {
          subnet_ids: ids.values.clone(),
          ..Default::default()
        };
        print(&client.describe_subnets(request).await?)
      }
      Self::Volumes(ids) => {
        let request = DescribeVolumesRequest {
          volume_ids: ids.values.clone(),
          ..Default::default()
        };
        print(&client.describe_volumes(request).await?)
      }
      Self::Vpcs(ids) => {
        let request = DescribeVpcsRequest {
          vpc_ids: ids.values.clone(),
          ..Default::default()
        };
        print(&client.describe_vpcs(request).await?)
      }
    }
  }
}
