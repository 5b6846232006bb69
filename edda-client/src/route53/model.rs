use serde::{Deserialize, Serialize};

use crate::{Attributes, Field};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostedZone {
  /// Zone ID, i.e. `/hostedzone/Z1D633PJN98FT9`
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub id: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub name: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub caller_reference: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub resource_record_set_count: Field<i64>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceRecord {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub value: Field<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceRecordSet {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub name: Field<String>,

  /// Record type, i.e. `A` or `CNAME`
  #[serde(rename = "type", skip_serializing_if = "Field::is_absent")]
  pub record_type: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub set_identifier: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub weight: Field<i64>,

  #[serde(rename = "TTL", skip_serializing_if = "Field::is_absent")]
  pub ttl: Field<i64>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub resource_records: Field<Vec<ResourceRecord>>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListHostedZonesRequest {
  pub marker: Option<String>,
  pub max_items: Option<i32>,
  pub delegation_set_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListResourceRecordSetsRequest {
  pub hosted_zone_id: Option<String>,
  pub start_record_name: Option<String>,
  pub start_record_type: Option<String>,
  pub start_record_identifier: Option<String>,
  pub max_items: Option<i32>,
}

impl ListResourceRecordSetsRequest {
  pub fn for_zone(hosted_zone_id: impl Into<String>) -> Self {
    Self {
      hosted_zone_id: Some(hosted_zone_id.into()),
      ..Default::default()
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListHostedZonesResult {
  pub hosted_zones: Vec<HostedZone>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResourceRecordSetsResult {
  pub resource_record_sets: Vec<ResourceRecordSet>,
}
