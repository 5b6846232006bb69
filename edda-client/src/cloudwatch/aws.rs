use async_trait::async_trait;
use aws_sdk_cloudwatch::{
  types::{self, StateValue},
  Client,
};
use chrono::Utc;

use super::{model::*, CloudWatchApi};
use crate::{
  convert_all, convert_field,
  edda::PaginatedServiceResult,
  error::{Error, Result},
  non_empty, Attributes,
};

impl From<types::MetricAlarm> for MetricAlarm {
  fn from(alarm: types::MetricAlarm) -> Self {
    Self {
      alarm_name: alarm.alarm_name.into(),
      alarm_arn: alarm.alarm_arn.into(),
      alarm_description: alarm.alarm_description.into(),
      state_value: alarm.state_value.map(|s| s.as_str().to_owned()).into(),
      metric_name: alarm.metric_name.into(),
      namespace: alarm.namespace.into(),
      statistic: alarm.statistic.map(|s| s.as_str().to_owned()).into(),
      comparison_operator: alarm.comparison_operator.map(|c| c.as_str().to_owned()).into(),
      threshold: alarm.threshold.into(),
      period: alarm.period.into(),
      evaluation_periods: alarm.evaluation_periods.into(),
      alarm_actions: alarm.alarm_actions.into(),
      attributes: Attributes::new(),
    }
  }
}

#[async_trait]
impl CloudWatchApi for Client {
  async fn describe_alarms(
    &self,
    request: DescribeAlarmsRequest,
  ) -> Result<PaginatedServiceResult<DescribeAlarmsResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_alarms()
      .set_alarm_names(non_empty(request.alarm_names))
      .set_alarm_name_prefix(request.alarm_name_prefix)
      .set_state_value(request.state_value.as_deref().map(StateValue::from))
      .set_action_prefix(request.action_prefix)
      .set_next_token(request.next_token)
      .set_max_records(request.max_records)
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(PaginatedServiceResult::new(
      issued_at,
      output.next_token,
      DescribeAlarmsResult {
        metric_alarms: convert_all(output.metric_alarms),
      },
    ))
  }
}

#[cfg(test)]
mod tests {
  use aws_sdk_cloudwatch::types::ComparisonOperator;

  use super::*;
  use crate::Field;

  #[test]
  fn it_converts_alarms() {
    let alarm = types::MetricAlarm::builder()
      .alarm_name("web-cpu-high")
      .state_value(StateValue::Alarm)
      .comparison_operator(ComparisonOperator::GreaterThanThreshold)
      .threshold(80.0)
      .alarm_actions("arn:aws:sns:us-east-1:111111111111:page")
      .build();

    let alarm = MetricAlarm::from(alarm);

    assert_eq!(alarm.alarm_name.as_deref(), Some("web-cpu-high"));
    assert_eq!(alarm.state_value.as_deref(), Some("ALARM"));
    assert_eq!(alarm.comparison_operator.as_deref(), Some("GreaterThanThreshold"));
    assert_eq!(alarm.threshold, Field::Value(80.0));
    assert_eq!(alarm.alarm_actions.iter().count(), 1);
  }
}
