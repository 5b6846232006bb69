use async_trait::async_trait;
use aws_sdk_route53::{
  types::{self, RrType},
  Client,
};
use chrono::Utc;

use super::{model::*, Route53Api};
use crate::{
  convert_all, convert_field,
  edda::PaginatedServiceResult,
  error::{Error, Result},
  Attributes, Field,
};

impl From<types::HostedZone> for HostedZone {
  fn from(zone: types::HostedZone) -> Self {
    Self {
      id: Field::Value(zone.id),
      name: Field::Value(zone.name),
      caller_reference: Field::Value(zone.caller_reference),
      resource_record_set_count: zone.resource_record_set_count.into(),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::ResourceRecordSet> for ResourceRecordSet {
  fn from(record_set: types::ResourceRecordSet) -> Self {
    Self {
      name: Field::Value(record_set.name),
      record_type: Field::Value(record_set.r#type.as_str().to_owned()),
      set_identifier: record_set.set_identifier.into(),
      weight: record_set.weight.into(),
      ttl: record_set.ttl.into(),
      resource_records: convert_field(record_set.resource_records),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::ResourceRecord> for ResourceRecord {
  fn from(record: types::ResourceRecord) -> Self {
    Self {
      value: Field::Value(record.value),
    }
  }
}

#[async_trait]
impl Route53Api for Client {
  async fn list_hosted_zones(
    &self,
    request: ListHostedZonesRequest,
  ) -> Result<PaginatedServiceResult<ListHostedZonesResult>> {
    let issued_at = Utc::now();
    let output = self
      .list_hosted_zones()
      .set_marker(request.marker)
      .set_max_items(request.max_items)
      .set_delegation_set_id(request.delegation_set_id)
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(PaginatedServiceResult::new(
      issued_at,
      output.next_marker,
      ListHostedZonesResult {
        hosted_zones: convert_all(Some(output.hosted_zones)),
      },
    ))
  }

  /// The continuation token is the next record name; type and identifier are not carried
  async fn list_resource_record_sets(
    &self,
    request: ListResourceRecordSetsRequest,
  ) -> Result<PaginatedServiceResult<ListResourceRecordSetsResult>> {
    let issued_at = Utc::now();
    let output = self
      .list_resource_record_sets()
      .set_hosted_zone_id(request.hosted_zone_id)
      .set_start_record_name(request.start_record_name)
      .set_start_record_type(request.start_record_type.as_deref().map(RrType::from))
      .set_start_record_identifier(request.start_record_identifier)
      .set_max_items(request.max_items)
      .send()
      .await
      .map_err(Error::aws)?;

    let next_token = output.next_record_name.filter(|_| output.is_truncated);

    Ok(PaginatedServiceResult::new(
      issued_at,
      next_token,
      ListResourceRecordSetsResult {
        resource_record_sets: convert_all(Some(output.resource_record_sets)),
      },
    ))
  }
}
