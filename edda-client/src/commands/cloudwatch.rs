use anyhow::Result;
use clap::Subcommand;

use super::{print, Selection};
use crate::{
  cloudwatch::{CloudWatchApi, DescribeAlarmsRequest},
  factory::AwsClientFactory,
};

#[derive(Debug, Subcommand)]
pub enum CloudWatch {
  /// Metric alarms, by name
  Alarms(Selection),
}

impl CloudWatch {
  pub async fn run(&self, factory: &AwsClientFactory) -> Result<()> {
    let client = factory.new_cloudwatch_client().await?;

    match self {
      Self::Alarms(names) => {
        let request = DescribeAlarmsRequest {
          alarm_names: names.values.clone(),
          ..Default::default()
        };
        print(&client.describe_alarms(request).await?)
      }
    }
  }
}
