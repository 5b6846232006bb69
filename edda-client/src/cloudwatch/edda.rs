use async_trait::async_trait;

use super::{model::*, CloudWatchApi};
use crate::{
  edda::{filter::matches, validate_empty, EddaClient, Fetched, PaginatedServiceResult, Query},
  error::Result,
};

/// CloudWatch alarm reads served from the cache service
#[derive(Clone, Debug)]
pub struct EddaCloudWatchClient {
  edda: EddaClient,
}

impl EddaCloudWatchClient {
  pub fn new(edda: EddaClient) -> Self {
    Self { edda }
  }
}

#[async_trait]
impl CloudWatchApi for EddaCloudWatchClient {
  async fn describe_alarms(
    &self,
    request: DescribeAlarmsRequest,
  ) -> Result<PaginatedServiceResult<DescribeAlarmsResult>> {
    validate_empty("AlarmNamePrefix", &request.alarm_name_prefix)?;
    validate_empty("StateValue", &request.state_value)?;
    validate_empty("ActionPrefix", &request.action_prefix)?;
    validate_empty("NextToken", &request.next_token)?;
    validate_empty("MaxRecords", &request.max_records)?;

    let query = Query::aws("alarms").expand();
    let Fetched {
      issued_at,
      value: mut metric_alarms,
      ..
    } = self.edda.get::<Vec<MetricAlarm>>(&query).await?;

    metric_alarms.retain(|a| matches(&request.alarm_names, a.alarm_name.as_deref()));

    Ok(PaginatedServiceResult::last_page(
      issued_at,
      DescribeAlarmsResult { metric_alarms },
    ))
  }
}

#[cfg(test)]
mod tests {
  use rstest::*;
  use serde_json::json;
  use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
  };

  use super::*;
  use crate::{config::AwsConfiguration, error::Error};

  fn client(server: &MockServer) -> EddaCloudWatchClient {
    let config = AwsConfiguration {
      url: Some(server.uri()),
      ..Default::default()
    };
    EddaCloudWatchClient::new(EddaClient::new(&config, "unused:7001").unwrap())
  }

  #[tokio::test]
  async fn it_filters_alarms_by_name() {
    let server = MockServer::start().await;
    let body = json!([
      {"alarmName": "web-cpu-high", "stateValue": "ALARM", "threshold": 80.0, "dimensions": [{"name": "AutoScalingGroupName", "value": "web-v001"}]},
      {"alarmName": "web-cpu-low", "stateValue": "OK", "threshold": 20.0},
      {"alarmName": "api-latency", "stateValue": "INSUFFICIENT_DATA", "alarmDescription": null, "threshold": null, "alarmActions": []}
    ]);
    Mock::given(method("GET"))
      .and(path("/api/v2/aws/alarms;_expand"))
      .respond_with(ResponseTemplate::new(200).set_body_json(&body))
      .expect(1)
      .mount(&server)
      .await;

    let request = DescribeAlarmsRequest {
      alarm_names: vec!["web-cpu-high".to_string(), "api-latency".to_string()],
      ..Default::default()
    };
    let result = client(&server).describe_alarms(request).await.unwrap();

    assert!(!result.has_next_page());
    let names: Vec<_> = result
      .result
      .metric_alarms
      .iter()
      .map(|a| a.alarm_name.as_deref())
      .collect();
    assert_eq!(names, [Some("web-cpu-high"), Some("api-latency")]);
    assert_eq!(result.result.metric_alarms[0].threshold.as_ref(), Some(&80.0));
    assert!(result.result.metric_alarms[0].attributes.contains_key("dimensions"));
    assert_eq!(
      serde_json::to_value(&result.result.metric_alarms).unwrap(),
      json!([body[0], body[2]])
    );
  }

  #[rstest]
  #[case(DescribeAlarmsRequest { alarm_name_prefix: Some("web-".to_string()), ..Default::default() }, "AlarmNamePrefix")]
  #[case(DescribeAlarmsRequest { state_value: Some("ALARM".to_string()), ..Default::default() }, "StateValue")]
  #[case(DescribeAlarmsRequest { action_prefix: Some("arn:".to_string()), ..Default::default() }, "ActionPrefix")]
  #[case(DescribeAlarmsRequest { next_token: Some("token".to_string()), ..Default::default() }, "NextToken")]
  #[case(DescribeAlarmsRequest { max_records: Some(100), ..Default::default() }, "MaxRecords")]
  #[tokio::test]
  async fn describe_alarms_unsupported_test(#[case] request: DescribeAlarmsRequest, #[case] field: &str) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
      .expect(0)
      .mount(&server)
      .await;

    let err = client(&server).describe_alarms(request).await.unwrap_err();

    match err {
      Error::UnsupportedField(rejected) => assert_eq!(rejected, field),
      other => panic!("unexpected error: {other}"),
    }
  }
}
