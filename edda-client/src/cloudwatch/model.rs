use serde::{Deserialize, Serialize};

use crate::{Attributes, Field};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricAlarm {
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub alarm_name: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub alarm_arn: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub alarm_description: Field<String>,

  /// `OK`, `ALARM` or `INSUFFICIENT_DATA`
  #[serde(skip_serializing_if = "Field::is_absent")]
  pub state_value: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub metric_name: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub namespace: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub statistic: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub comparison_operator: Field<String>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub threshold: Field<f64>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub period: Field<i32>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub evaluation_periods: Field<i32>,

  #[serde(skip_serializing_if = "Field::is_absent")]
  pub alarm_actions: Field<Vec<String>>,

  #[serde(flatten)]
  pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeAlarmsRequest {
  pub alarm_names: Vec<String>,
  pub alarm_name_prefix: Option<String>,
  pub state_value: Option<String>,
  pub action_prefix: Option<String>,
  pub next_token: Option<String>,
  pub max_records: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeAlarmsResult {
  pub metric_alarms: Vec<MetricAlarm>,
}
