use anyhow::Result;
use clap::{Args, Subcommand};

use super::print;
use crate::{
  error::Error,
  factory::AwsClientFactory,
  route53::{ListHostedZonesRequest, ListResourceRecordSetsRequest, Route53Api},
};

#[derive(Debug, Subcommand)]
pub enum Route53 {
  HostedZones,

  /// Record sets of one hosted zone, or of every zone when reading from the cache
  RecordSets(RecordSets),
}

#[derive(Args, Debug)]
pub struct RecordSets {
  /// Hosted zone ID, i.e. `Z1D633PJN98FT9`
  #[arg(long)]
  pub hosted_zone_id: Option<String>,
}

impl Route53 {
  pub async fn run(&self, factory: &AwsClientFactory) -> Result<()> {
    let client = factory.new_route53_client().await?;

    match self {
      Self::HostedZones => print(&client.list_hosted_zones(ListHostedZonesRequest::default()).await?),
      Self::RecordSets(args) => match (&args.hosted_zone_id, client.edda()) {
        (Some(zone), _) => {
          let request = ListResourceRecordSetsRequest::for_zone(zone);
          print(&client.list_resource_record_sets(request).await?)
        }
        (None, Some(edda)) => print(&edda.list_all_resource_record_sets().await?),
        (None, None) => Err(Error::MissingField("HostedZoneId").into()),
      },
    }
  }
}
