use async_trait::async_trait;
use aws_sdk_elasticloadbalancing::{types, Client};
use chrono::Utc;

use super::{model::*, ElasticLoadBalancingApi};
use crate::{
  convert_all, convert_field,
  edda::{PaginatedServiceResult, ServiceResult},
  error::{Error, Result},
  non_empty, Attributes, Field,
};

impl From<types::Instance> for Instance {
  fn from(instance: types::Instance) -> Self {
    Self {
      instance_id: instance.instance_id.into(),
    }
  }
}

impl From<types::HealthCheck> for HealthCheck {
  fn from(check: types::HealthCheck) -> Self {
    Self {
      target: Field::Value(check.target),
      interval: Field::Value(check.interval),
      timeout: Field::Value(check.timeout),
      unhealthy_threshold: Field::Value(check.unhealthy_threshold),
      healthy_threshold: Field::Value(check.healthy_threshold),
    }
  }
}

impl From<types::LoadBalancerDescription> for LoadBalancerDescription {
  fn from(lb: types::LoadBalancerDescription) -> Self {
    Self {
      load_balancer_name: lb.load_balancer_name.into(),
      dns_name: lb.dns_name.into(),
      canonical_hosted_zone_name: lb.canonical_hosted_zone_name.into(),
      scheme: lb.scheme.into(),
      vpc_id: lb.vpc_id.into(),
      availability_zones: lb.availability_zones.into(),
      subnets: lb.subnets.into(),
      security_groups: lb.security_groups.into(),
      instances: convert_field(lb.instances),
      health_check: lb.health_check.map(HealthCheck::from).into(),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::InstanceState> for InstanceState {
  fn from(state: types::InstanceState) -> Self {
    Self {
      instance_id: state.instance_id.into(),
      state: state.state.into(),
      reason_code: state.reason_code.into(),
      description: state.description.into(),
    }
  }
}

#[async_trait]
impl ElasticLoadBalancingApi for Client {
  async fn describe_load_balancers(
    &self,
    request: DescribeLoadBalancersRequest,
  ) -> Result<PaginatedServiceResult<DescribeLoadBalancersResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_load_balancers()
      .set_load_balancer_names(non_empty(request.load_balancer_names))
      .set_marker(request.marker)
      .set_page_size(request.page_size)
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(PaginatedServiceResult::new(
      issued_at,
      output.next_marker,
      DescribeLoadBalancersResult {
        load_balancer_descriptions: convert_all(output.load_balancer_descriptions),
      },
    ))
  }

  async fn describe_instance_health(
    &self,
    request: DescribeInstanceHealthRequest,
  ) -> Result<ServiceResult<DescribeInstanceHealthResult>> {
    let instances = request
      .instance_ids
      .into_iter()
      .map(|id| types::Instance::builder().instance_id(id).build())
      .collect();

    let issued_at = Utc::now();
    let output = self
      .describe_instance_health()
      .set_load_balancer_name(request.load_balancer_name)
      .set_instances(non_empty(instances))
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(ServiceResult::new(
      issued_at,
      DescribeInstanceHealthResult {
        instance_states: convert_all(output.instance_states),
      },
    ))
  }
}
