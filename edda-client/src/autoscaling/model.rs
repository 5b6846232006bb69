use serde::{Deserialize, Serialize};

use crate::{Attributes, Field};

/// An instance as listed within its Auto Scaling group
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub instance_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub availability_zone: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub lifecycle_state: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub health_status: Field<String>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoScalingGroup {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub auto_scaling_group_name: Field<String>,

  #[serde(rename = "autoScalingGroupARN", skip_serializing_if = "Field::is_absent")]
  pub auto_scaling_group_arn: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub launch_configuration_name: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub min_size: Field<i32>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub max_size: Field<i32>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub desired_capacity: Field<i32>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub availability_zones: Field<Vec<String>>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub load_balancer_names: Field<Vec<String>>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub instances: Field<Vec<Instance>>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchConfiguration {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub launch_configuration_name: Field<String>,

  #[serde(rename = "launchConfigurationARN", skip_serializing_if = "Field::is_absent")]
  pub launch_configuration_arn: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub image_id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub instance_type: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub key_name: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub security_groups: Field<Vec<String>>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScalingPolicy {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub auto_scaling_group_name: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub policy_name: Field<String>,

  #[serde(rename = "policyARN", skip_serializing_if = "Field::is_absent")]
  pub policy_arn: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub policy_type: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub adjustment_type: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub scaling_adjustment: Field<i32>,

  /// Seconds
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub cooldown: Field<i32>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeAutoScalingGroupsRequest {
  pub auto_scaling_group_names: Vec<String>,
  pub next_token: Option<String>,
  pub max_records: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeLaunchConfigurationsRequest {
  pub launch_configuration_names: Vec<String>,
  pub next_token: Option<String>,
  pub max_records: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribePoliciesRequest {
  pub auto_scaling_group_name: Option<String>,
  pub policy_names: Vec<String>,
  pub policy_types: Vec<String>,
  pub next_token: Option<String>,
  pub max_records: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeAutoScalingGroupsResult {
  pub auto_scaling_groups: Vec<AutoScalingGroup>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLaunchConfigurationsResult {
  pub launch_configurations: Vec<LaunchConfiguration>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribePoliciesResult {
  pub scaling_policies: Vec<ScalingPolicy>,
}
