use async_trait::async_trait;
use serde::Deserialize;

use super::{model::*, ElasticLoadBalancingApi};
use crate::{
  edda::{
    filter::matches, validate_empty, validate_not_empty, EddaClient, Fetched, PaginatedServiceResult, Query,
    ServiceResult,
  },
  error::Result,
  Field,
};

/// Document returned by the `loadBalancerInstances` view for a single load balancer
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoadBalancerInstances {
  instances: Field<Vec<InstanceState>>,
}

/// Classic ELB reads served from the cache service
#[derive(Clone, Debug)]
pub struct EddaElasticLoadBalancingClient {
  edda: EddaClient,
}

impl EddaElasticLoadBalancingClient {
  pub fn new(edda: EddaClient) -> Self {
    Self { edda }
  }
}

#[async_trait]
impl ElasticLoadBalancingApi for EddaElasticLoadBalancingClient {
  async fn describe_load_balancers(
    &self,
    request: DescribeLoadBalancersRequest,
  ) -> Result<PaginatedServiceResult<DescribeLoadBalancersResult>> {
    validate_empty("Marker", &request.marker)?;
    validate_empty("PageSize", &request.page_size)?;

    let query = Query::aws("loadBalancers").expand();
    let Fetched {
      issued_at,
      value: mut load_balancers,
      ..
    } = self.edda.get::<Vec<LoadBalancerDescription>>(&query).await?;

    load_balancers.retain(|lb| matches(&request.load_balancer_names, lb.load_balancer_name.as_deref()));

    Ok(PaginatedServiceResult::last_page(
      issued_at,
      DescribeLoadBalancersResult {
        load_balancer_descriptions: load_balancers,
      },
    ))
  }

  async fn describe_instance_health(
    &self,
    request: DescribeInstanceHealthRequest,
  ) -> Result<ServiceResult<DescribeInstanceHealthResult>> {
    let load_balancer_name = validate_not_empty("LoadBalancerName", request.load_balancer_name.as_deref())?;

    let query = Query::view("loadBalancerInstances")
      .segment(load_balancer_name)
      .expand();
    let Fetched { issued_at, value, .. } = self.edda.get::<LoadBalancerInstances>(&query).await?;

    let mut instance_states = value.instances.into_option().unwrap_or_default();
    instance_states.retain(|s| matches(&request.instance_ids, s.instance_id.as_deref()));

    Ok(ServiceResult::new(
      issued_at,
      DescribeInstanceHealthResult { instance_states },
    ))
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
  };

  use super::*;
  use crate::{config::AwsConfiguration, error::Error};

  fn client(server: &MockServer) -> EddaElasticLoadBalancingClient {
    let config = AwsConfiguration {
      url: Some(server.uri()),
      ..Default::default()
    };
    EddaElasticLoadBalancingClient::new(EddaClient::new(&config, "unused:7001").unwrap())
  }

  #[tokio::test]
  async fn it_filters_load_balancers_by_name() {
    let server = MockServer::start().await;
    let body = json!([
      {
        "loadBalancerName": "web-frontend",
        "DNSName": "web-frontend-1.us-east-1.elb.amazonaws.com",
        "VPCId": "vpc-1",
        "instances": [{"instanceId": "i-1"}],
        "healthCheck": {"target": "HTTP:7001/healthcheck", "interval": 10, "timeout": 5},
        "listenerDescriptions": [{"listener": {"protocol": "HTTP", "loadBalancerPort": 80}}]
      },
      {
        "loadBalancerName": "api-frontend",
        "VPCId": null,
        "subnets": [],
        "securityGroups": null,
        "healthCheck": {"target": "TCP:7001", "unhealthyThreshold": null}
      }
    ]);
    Mock::given(method("GET"))
      .and(path("/api/v2/aws/loadBalancers;_expand"))
      .respond_with(ResponseTemplate::new(200).set_body_json(&body))
      .mount(&server)
      .await;
    let client = client(&server);

    let all = client
      .describe_load_balancers(DescribeLoadBalancersRequest::default())
      .await
      .unwrap();
    assert!(!all.has_next_page());
    assert_eq!(serde_json::to_value(&all.result.load_balancer_descriptions).unwrap(), body);

    let request = DescribeLoadBalancersRequest {
      load_balancer_names: vec!["web-frontend".to_string()],
      ..Default::default()
    };
    let load_balancers = client
      .describe_load_balancers(request)
      .await
      .unwrap()
      .into_result()
      .load_balancer_descriptions;

    assert_eq!(load_balancers.len(), 1);
    assert_eq!(
      load_balancers[0].dns_name.as_deref(),
      Some("web-frontend-1.us-east-1.elb.amazonaws.com")
    );
    assert_eq!(
      load_balancers[0].health_check.as_ref().and_then(|h| h.target.as_deref()),
      Some("HTTP:7001/healthcheck")
    );
  }

  #[tokio::test]
  async fn it_describes_instance_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/api/v2/view/loadBalancerInstances/web-frontend;_expand"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "name": "web-frontend",
        "instances": [
          {"instanceId": "i-1", "state": "InService", "reasonCode": "N/A", "description": "N/A"},
          {"instanceId": "i-2", "state": "OutOfService", "reasonCode": "Instance", "description": "Instance has failed at least the UnhealthyThreshold number of health checks consecutively."}
        ]
      })))
      .expect(2)
      .mount(&server)
      .await;
    let client = client(&server);

    let all = client
      .describe_instance_health(DescribeInstanceHealthRequest::for_load_balancer("web-frontend"))
      .await
      .unwrap()
      .into_result()
      .instance_states;
    assert_eq!(all.len(), 2);

    let request = DescribeInstanceHealthRequest {
      instance_ids: vec!["i-2".to_string()],
      ..DescribeInstanceHealthRequest::for_load_balancer("web-frontend")
    };
    let states = client
      .describe_instance_health(request)
      .await
      .unwrap()
      .into_result()
      .instance_states;

    assert_eq!(states.len(), 1);
    assert_eq!(states[0].state.as_deref(), Some("OutOfService"));
    assert_eq!(states[0].reason_code.as_deref(), Some("Instance"));
  }

  #[tokio::test]
  async fn it_rejects_invalid_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
      .expect(0)
      .mount(&server)
      .await;
    let client = client(&server);

    let err = client
      .describe_instance_health(DescribeInstanceHealthRequest::default())
      .await
      .unwrap_err();
    assert!(matches!(err, Error::MissingField("LoadBalancerName")));

    let request = DescribeLoadBalancersRequest {
      marker: Some("marker".to_string()),
      ..Default::default()
    };
    let err = client.describe_load_balancers(request).await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedField("Marker")));

    let request = DescribeLoadBalancersRequest {
      page_size: Some(20),
      ..Default::default()
    };
    let err = client.describe_load_balancers(request).await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedField("PageSize")));
  }
}
