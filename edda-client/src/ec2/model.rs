//! EC2 requests, results, and the resource documents mirrored by the cache service
//!
//! Resource types name the fields this crate filters on or commonly reads; every other attribute of the cached
//! document is kept verbatim in `attributes`
use serde::{Deserialize, Serialize};

use crate::{Attributes, Field};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub key: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub value: Field<String>,
}

/// AWS-style filter expression
///
/// The cache service cannot evaluate these, so cache-backed requests carrying filters are rejected
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filter {
  pub name: String,
  pub values: Vec<String>,
}

impl Filter {
  pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
    Self {
      name: name.into(),
      values,
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceState {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub code: Field<i32>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub name: Field<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub instance_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub image_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub instance_type: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub state: Field<InstanceState>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub private_ip_address: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub public_ip_address: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub subnet_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub vpc_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub tags: Field<Vec<Tag>>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reservation {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub reservation_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub owner_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub requester_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub instances: Field<Vec<Instance>>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volume {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub volume_id: Field<String>,

  /// Size in GiB
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub size: Field<i32>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub volume_type: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub state: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub availability_zone: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub tags: Field<Vec<Tag>>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subnet {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub subnet_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub vpc_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub cidr_block: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub availability_zone: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub state: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub tags: Field<Vec<Tag>>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vpc {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub vpc_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub cidr_block: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub state: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub is_default: Field<bool>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub tags: Field<Vec<Tag>>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityGroup {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub group_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub group_name: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub owner_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub description: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub vpc_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub tags: Field<Vec<Tag>>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub image_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub owner_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub name: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub description: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub state: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub architecture: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub creation_date: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub tags: Field<Vec<Tag>>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservedInstancesOffering {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub reserved_instances_offering_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub instance_type: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub availability_zone: Field<String>,

  /// Term in seconds
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub duration: Field<i64>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub fixed_price: Field<f64>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub usage_price: Field<f64>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub product_description: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub offering_type: Field<String>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicLinkInstance {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub instance_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub vpc_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub tags: Field<Vec<Tag>>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeClassicLinkInstancesRequest {
  pub instance_ids: Vec<String>,
  pub filters: Vec<Filter>,
  pub next_token: Option<String>,
  pub max_results: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeImagesRequest {
  pub image_ids: Vec<String>,
  pub owners: Vec<String>,
  pub executable_users: Vec<String>,
  pub filters: Vec<Filter>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeInstancesRequest {
  pub instance_ids: Vec<String>,
  pub filters: Vec<Filter>,
  pub next_token: Option<String>,
  pub max_results: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeReservedInstancesOfferingsRequest {
  pub reserved_instances_offering_ids: Vec<String>,
  pub filters: Vec<Filter>,
  pub availability_zone: Option<String>,
  pub include_marketplace: Option<bool>,
  pub instance_tenancy: Option<String>,
  pub instance_type: Option<String>,
  pub offering_type: Option<String>,
  pub product_description: Option<String>,
  pub next_token: Option<String>,
  pub max_results: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeSecurityGroupsRequest {
  pub group_ids: Vec<String>,
  pub group_names: Vec<String>,
  pub filters: Vec<Filter>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeSubnetsRequest {
  pub subnet_ids: Vec<String>,
  pub filters: Vec<Filter>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeVolumesRequest {
  pub volume_ids: Vec<String>,
  pub filters: Vec<Filter>,
  pub next_token: Option<String>,
  pub max_results: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeVpcsRequest {
  pub vpc_ids: Vec<String>,
  pub filters: Vec<Filter>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeClassicLinkInstancesResult {
  pub instances: Vec<ClassicLinkInstance>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeImagesResult {
  pub images: Vec<Image>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeInstancesResult {
  pub reservations: Vec<Reservation>,
}

impl DescribeInstancesResult {
  /// All instances across reservations, in order
  pub fn instances(&self) -> impl Iterator<Item = &Instance> {
    self.reservations.iter().flat_map(|r| r.instances.iter())
  }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeReservedInstancesOfferingsResult {
  pub reserved_instances_offerings: Vec<ReservedInstancesOffering>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeSecurityGroupsResult {
  pub security_groups: Vec<SecurityGroup>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeSubnetsResult {
  pub subnets: Vec<Subnet>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeVolumesResult {
  pub volumes: Vec<Volume>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeVpcsResult {
  pub vpcs: Vec<Vpc>,
}
