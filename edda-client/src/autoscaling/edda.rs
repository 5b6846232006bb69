use async_trait::async_trait;

use super::{model::*, AutoScalingApi};
use crate::{
  edda::{filter::matches, validate_empty, EddaClient, Fetched, PaginatedServiceResult, Query},
  error::Result,
};

/// Auto Scaling describe operations served from the cache service
#[derive(Clone, Debug)]
pub struct EddaAutoScalingClient {
  edda: EddaClient,
}

impl EddaAutoScalingClient {
  pub fn new(edda: EddaClient) -> Self {
    Self { edda }
  }
}

#[async_trait]
impl AutoScalingApi for EddaAutoScalingClient {
  async fn describe_auto_scaling_groups(
    &self,
    request: DescribeAutoScalingGroupsRequest,
  ) -> Result<PaginatedServiceResult<DescribeAutoScalingGroupsResult>> {
    validate_empty("NextToken", &request.next_token)?;
    validate_empty("MaxRecords", &request.max_records)?;

    let query = Query::aws("autoScalingGroups").expand();
    let Fetched {
      issued_at,
      value: mut groups,
      ..
    } = self.edda.get::<Vec<AutoScalingGroup>>(&query).await?;

    groups.retain(|g| matches(&request.auto_scaling_group_names, g.auto_scaling_group_name.as_deref()));

    Ok(PaginatedServiceResult::last_page(
      issued_at,
      DescribeAutoScalingGroupsResult {
        auto_scaling_groups: groups,
      },
    ))
  }

  async fn describe_launch_configurations(
    &self,
    request: DescribeLaunchConfigurationsRequest,
  ) -> Result<PaginatedServiceResult<DescribeLaunchConfigurationsResult>> {
    validate_empty("NextToken", &request.next_token)?;
    validate_empty("MaxRecords", &request.max_records)?;

    let query = Query::aws("launchConfigurations").expand();
    let Fetched {
      issued_at,
      value: mut launch_configurations,
      ..
    } = self.edda.get::<Vec<LaunchConfiguration>>(&query).await?;

    launch_configurations.retain(|lc| {
      matches(
        &request.launch_configuration_names,
        lc.launch_configuration_name.as_deref(),
      )
    });

    Ok(PaginatedServiceResult::last_page(
      issued_at,
      DescribeLaunchConfigurationsResult { launch_configurations },
    ))
  }

  async fn describe_policies(
    &self,
    request: DescribePoliciesRequest,
  ) -> Result<PaginatedServiceResult<DescribePoliciesResult>> {
    validate_empty("PolicyTypes", &request.policy_types)?;
    validate_empty("NextToken", &request.next_token)?;
    validate_empty("MaxRecords", &request.max_records)?;

    let query = Query::aws("scalingPolicies").expand();
    let Fetched {
      issued_at,
      value: mut scaling_policies,
      ..
    } = self.edda.get::<Vec<ScalingPolicy>>(&query).await?;

    let group_names: Vec<&str> = request.auto_scaling_group_name.as_deref().into_iter().collect();
    scaling_policies.retain(|p| {
      matches(&group_names, p.auto_scaling_group_name.as_deref())
        && matches(&request.policy_names, p.policy_name.as_deref())
    });

    Ok(PaginatedServiceResult::last_page(
      issued_at,
      DescribePoliciesResult { scaling_policies },
    ))
  }
}
