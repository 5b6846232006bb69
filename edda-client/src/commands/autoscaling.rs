use anyhow::Result;
use clap::{Args, Subcommand};

use super::{print, Selection};
use crate::{
  autoscaling::{
    AutoScalingApi, DescribeAutoScalingGroupsRequest, DescribeLaunchConfigurationsRequest, DescribePoliciesRequest,
  },
  factory::AwsClientFactory,
};

#[derive(Debug, Subcommand)]
pub enum AutoScaling {
  /// Auto Scaling groups, by name
  Groups(Selection),

  /// Launch configurations, by name
  LaunchConfigurations(Selection),

  /// Scaling policies, by group and policy name
  Policies(Policies),
}

#[derive(Args, Debug)]
pub struct Policies {
  #[arg(value_name = "POLICY_NAME")]
  pub policy_names: Vec<String>,

  /// Only policies of this Auto Scaling group
  #[arg(long)]
  pub group_name: Option<String>,
}

impl AutoScaling {
  pub async fn run(&self, factory: &AwsClientFactory) -> Result<()> {
    let client = factory.new_autoscaling_client().await?;

    match self {
      Self::Groups(names) => {
        let request = DescribeAutoScalingGroupsRequest {
          auto_scaling_group_names: names.values.clone(),
          ..Default::default()
        };
        print(&client.describe_auto_scaling_groups(request).await?)
      }
      Self::LaunchConfigurations(names) => {
        let request = DescribeLaunchConfigurationsRequest {
          launch_configuration_names: names.values.clone(),
          ..Default::default()
        };
        print(&client.describe_launch_configurations(request).await?)
      }
      Self::Policies(policies) => {
        let request = DescribePoliciesRequest {
          auto_scaling_group_name: policies.group_name.clone(),
          policy_names: policies.policy_names.clone(),
          ..Default::default()
        };
        print(&client.describe_policies(request).await?)
      }
    }
  }
}
