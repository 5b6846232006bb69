use anyhow::Result;
use clap::{Args, Subcommand};

use super::{print, Selection};
use crate::{
  elb::{DescribeInstanceHealthRequest, DescribeLoadBalancersRequest, ElasticLoadBalancingApi},
  factory::AwsClientFactory,
};

#[derive(Debug, Subcommand)]
pub enum Elb {
  /// Classic load balancers, by name
  LoadBalancers(Selection),

  /// Health of the instances registered with a load balancer
  InstanceHealth(InstanceHealth),
}

#[derive(Args, Debug)]
pub struct InstanceHealth {
  #[arg(long)]
  pub load_balancer_name: String,

  #[arg(value_name = "INSTANCE_ID")]
  pub instance_ids: Vec<String>,
}

impl Elb {
  pub async fn run(&self, factory: &AwsClientFactory) -> Result<()> {
    let client = factory.new_elb_client().await?;

    match self {
      Self::LoadBalancers(names) => {
        let request = DescribeLoadBalancersRequest {
          load_balancer_names: names.values.clone(),
          ..Default::default()
        };
        print(&client.describe_load_balancers(request).await?)
      }
      Self::InstanceHealth(health) => {
        let request = DescribeInstanceHealthRequest {
          instance_ids: health.instance_ids.clone(),
          ..DescribeInstanceHealthRequest::for_load_balancer(&health.load_balancer_name)
        };
        print(&client.describe_instance_health(request).await?)
      }
    }
  }
}
