//! Drop-in read clients for EC2, Auto Scaling, CloudWatch, ELB, and Route53 that serve describe/list operations from
//! the Edda cache service instead of AWS
//!
//! ```no_run
//! use edda_client::{ec2::DescribeInstancesRequest, AwsClientFactory, AwsConfiguration, Ec2Api};
//!
//! # async fn run() -> edda_client::Result<()> {
//! let factory = AwsClientFactory::new(AwsConfiguration::default());
//! let ec2 = factory.new_ec2_client().await?;
//! let request = DescribeInstancesRequest {
//!   instance_ids: vec!["i-0123456789abcdef0".to_string()],
//!   ..Default::default()
//! };
//! let instances = ec2.describe_instances(request).await?;
//! # Ok(())
//! # }
//! ```
pub mod autoscaling;
pub mod cli;
pub mod cloudwatch;
pub mod commands;
pub mod config;
pub mod ec2;
pub mod edda;
pub mod elb;
pub mod error;
pub mod factory;
pub mod field;
pub mod route53;

pub use autoscaling::{AutoScalingApi, AutoScalingClient};
pub use cli::{Cli, Commands};
pub use cloudwatch::{CloudWatchApi, CloudWatchClient};
pub use config::AwsConfiguration;
pub use ec2::{Ec2Api, Ec2Client};
pub use edda::{EddaClient, PaginatedServiceResult, ServiceResult};
pub use elb::{ElasticLoadBalancingApi, ElasticLoadBalancingClient};
pub use error::{Error, Result};
pub use factory::{AwsClientFactory, ClientMode};
pub use field::Field;
pub use route53::{Route53Api, Route53Client};

/// Attributes of a cached document that are not modelled as typed fields
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Convert an optional list of AWS SDK shapes into the crate's data model
pub(crate) fn convert_all<S, T: From<S>>(items: Option<Vec<S>>) -> Vec<T> {
  items.into_iter().flatten().map(T::from).collect()
}

/// Convert an optional list attribute of an AWS SDK shape
pub(crate) fn convert_field<S, T: From<S>>(items: Option<Vec<S>>) -> Field<Vec<T>> {
  items.map(|items| items.into_iter().map(T::from).collect()).into()
}

/// The AWS SDK treats an empty list and an absent one alike; send absent
pub(crate) fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
  Some(items).filter(|items| !items.is_empty())
}
