use async_trait::async_trait;
use aws_sdk_autoscaling::{types, Client};
use chrono::Utc;

use super::{model::*, AutoScalingApi};
use crate::{
  convert_all, convert_field,
  edda::PaginatedServiceResult,
  error::{Error, Result},
  non_empty, Attributes,
};

impl From<types::Instance> for Instance {
  fn from(instance: types::Instance) -> Self {
    Self {
      instance_id: instance.instance_id.into(),
      availability_zone: instance.availability_zone.into(),
      lifecycle_state: instance.lifecycle_state.map(|s| s.as_str().to_owned()).into(),
      health_status: instance.health_status.into(),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::AutoScalingGroup> for AutoScalingGroup {
  fn from(group: types::AutoScalingGroup) -> Self {
    Self {
      auto_scaling_group_name: group.auto_scaling_group_name.into(),
      auto_scaling_group_arn: group.auto_scaling_group_arn.into(),
      launch_configuration_name: group.launch_configuration_name.into(),
      min_size: group.min_size.into(),
      max_size: group.max_size.into(),
      desired_capacity: group.desired_capacity.into(),
      availability_zones: group.availability_zones.into(),
      load_balancer_names: group.load_balancer_names.into(),
      instances: convert_field(group.instances),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::LaunchConfiguration> for LaunchConfiguration {
  fn from(config: types::LaunchConfiguration) -> Self {
    Self {
      launch_configuration_name: config.launch_configuration_name.into(),
      launch_configuration_arn: config.launch_configuration_arn.into(),
      image_id: config.image_id.into(),
      instance_type: config.instance_type.into(),
      key_name: config.key_name.into(),
      security_groups: config.security_groups.into(),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::ScalingPolicy> for ScalingPolicy {
  fn from(policy: types::ScalingPolicy) -> Self {
    Self {
      auto_scaling_group_name: policy.auto_scaling_group_name.into(),
      policy_name: policy.policy_name.into(),
      policy_arn: policy.policy_arn.into(),
      policy_type: policy.policy_type.into(),
      adjustment_type: policy.adjustment_type.into(),
      scaling_adjustment: policy.scaling_adjustment.into(),
      cooldown: policy.cooldown.into(),
      attributes: Attributes::new(),
    }
  }
}

#[async_trait]
impl AutoScalingApi for Client {
  async fn describe_auto_scaling_groups(
    &self,
    request: DescribeAutoScalingGroupsRequest,
  ) -> Result<PaginatedServiceResult<DescribeAutoScalingGroupsResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_auto_scaling_groups()
      .set_auto_scaling_group_names(non_empty(request.auto_scaling_group_names))
      .set_next_token(request.next_token)
      .set_max_records(request.max_records)
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(PaginatedServiceResult::new(
      issued_at,
      output.next_token,
      DescribeAutoScalingGroupsResult {
        auto_scaling_groups: convert_all(output.auto_scaling_groups),
      },
    ))
  }

  async fn describe_launch_configurations(
    &self,
    request: DescribeLaunchConfigurationsRequest,
  ) -> Result<PaginatedServiceResult<DescribeLaunchConfigurationsResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_launch_configurations()
      .set_launch_configuration_names(non_empty(request.launch_configuration_names))
      .set_next_token(request.next_token)
      .set_max_records(request.max_records)
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(PaginatedServiceResult::new(
      issued_at,
      output.next_token,
      DescribeLaunchConfigurationsResult {
        launch_configurations: convert_all(output.launch_configurations),
      },
    ))
  }

  async fn describe_policies(
    &self,
    request: DescribePoliciesRequest,
  ) -> Result<PaginatedServiceResult<DescribePoliciesResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_policies()
      .set_auto_scaling_group_name(request.auto_scaling_group_name)
      .set_policy_names(non_empty(request.policy_names))
      .set_policy_types(non_empty(request.policy_types))
      .set_next_token(request.next_token)
      .set_max_records(request.max_records)
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(PaginatedServiceResult::new(
      issued_at,
      output.next_token,
      DescribePoliciesResult {
        scaling_policies: convert_all(output.scaling_policies),
      },
    ))
  }
}
