use serde::{Deserialize, Serialize};

use crate::{Attributes, Field};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub instance_id: Field<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthCheck {
  /// i.e. `HTTP:7001/healthcheck`
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub target: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub interval: Field<i32>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub timeout: Field<i32>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub unhealthy_threshold: Field<i32>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub healthy_threshold: Field<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadBalancerDescription {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub load_balancer_name: Field<String>,

  #[serde(rename = "DNSName", skip_serializing_if = "Field::is_absent")]
  pub dns_name: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub canonical_hosted_zone_name: Field<String>,

  /// `internet-facing` or `internal`
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub scheme: Field<String>,

  #[serde(rename = "VPCId", skip_serializing_if = "Field::is_absent")]
  pub vpc_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub availability_zones: Field<Vec<String>>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub subnets: Field<Vec<String>>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub security_groups: Field<Vec<String>>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub instances: Field<Vec<Instance>>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub health_check: Field<HealthCheck>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

/// Health of one instance registered with a load balancer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceState {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub instance_id: Field<String>,

  /// `InService`, `OutOfService` or `Unknown`
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub state: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub reason_code: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub description: Field<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeLoadBalancersRequest {
  pub load_balancer_names: Vec<String>,
  pub marker: Option<String>,
  pub page_size: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeInstanceHealthRequest {
  pub load_balancer_name: Option<String>,
  pub instance_ids: Vec<String>,
}

impl DescribeInstanceHealthRequest {
  pub fn for_load_balancer(load_balancer_name: impl Into<String>) -> Self {
    Self {
      load_balancer_name: Some(load_balancer_name.into()),
      ..Default::default()
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLoadBalancersResult {
  pub load_balancer_descriptions: Vec<LoadBalancerDescription>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeInstanceHealthResult {
  pub instance_states: Vec<InstanceState>,
}
