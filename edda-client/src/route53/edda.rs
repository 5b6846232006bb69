use async_trait::async_trait;

use super::{model::*, Route53Api};
use crate::{
  edda::{validate_empty, validate_not_empty, EddaClient, Fetched, PaginatedServiceResult, Query},
  error::Result,
};

/// Route53 list operations served from the cache service
#[derive(Clone, Debug)]
pub struct EddaRoute53Client {
  edda: EddaClient,
}

impl EddaRoute53Client {
  pub fn new(edda: EddaClient) -> Self {
    Self { edda }
  }

  /// Every cached record set across all hosted zones
  ///
  /// AWS has no equivalent; listing record sets there always requires a zone
  pub async fn list_all_resource_record_sets(&self) -> Result<PaginatedServiceResult<ListResourceRecordSetsResult>> {
    self.record_sets(Query::aws("hostedRecords").expand()).await
  }

  async fn record_sets(&self, query: Query) -> Result<PaginatedServiceResult<ListResourceRecordSetsResult>> {
    let Fetched {
      issued_at,
      value: resource_record_sets,
      ..
    } = self.edda.get::<Vec<ResourceRecordSet>>(&query).await?;

    Ok(PaginatedServiceResult::last_page(
      issued_at,
      ListResourceRecordSetsResult { resource_record_sets },
    ))
  }
}

#[async_trait]
impl Route53Api for EddaRoute53Client {
  async fn list_hosted_zones(
    &self,
    request: ListHostedZonesRequest,
  ) -> Result<PaginatedServiceResult<ListHostedZonesResult>> {
    validate_empty("Marker", &request.marker)?;
    validate_empty("MaxItems", &request.max_items)?;
    validate_empty("DelegationSetId", &request.delegation_set_id)?;

    let query = Query::aws("hostedZones").expand();
    let Fetched {
      issued_at,
      value: hosted_zones,
      ..
    } = self.edda.get::<Vec<HostedZone>>(&query).await?;

    Ok(PaginatedServiceResult::last_page(
      issued_at,
      ListHostedZonesResult { hosted_zones },
    ))
  }

  async fn list_resource_record_sets(
    &self,
    request: ListResourceRecordSetsRequest,
  ) -> Result<PaginatedServiceResult<ListResourceRecordSetsResult>> {
    let hosted_zone_id = validate_not_empty("HostedZoneId", request.hosted_zone_id.as_deref())?;
    validate_empty("StartRecordName", &request.start_record_name)?;
    validate_empty("StartRecordType", &request.start_record_type)?;
    validate_empty("StartRecordIdentifier", &request.start_record_identifier)?;
    validate_empty("MaxItems", &request.max_items)?;

    self
      .record_sets(Query::aws("hostedRecords").expand().matrix("zone.id", hosted_zone_id))
      .await
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
  use crate::{config::AwsConfiguration, error::Error, Field};

  fn client(server: &MockServer) -> EddaRoute53Client {
    let config = AwsConfiguration {
      url: Some(server.uri()),
      ..Default::default()
    };
    EddaRoute53Client::new(EddaClient::new(&config, "unused:7001").unwrap())
  }

  #[tokio::test]
  async fn it_lists_hosted_zones() {
    let server = MockServer::start().await;
    let body = json!([
      {"id": "/hostedzone/Z1", "name": "example.com.", "config": {"privateZone": false}, "resourceRecordSetCount": 4},
      {"id": "/hostedzone/Z2", "name": "example.net."}
    ]);
    Mock::given(method("GET"))
      .and(path("/api/v2/aws/hostedZones;_expand"))
      .respond_with(ResponseTemplate::new(200).set_body_json(&body))
      .expect(1)
      .mount(&server)
      .await;

    let result = client(&server)
      .list_hosted_zones(ListHostedZonesRequest::default())
      .await
      .unwrap();

    assert!(!result.has_next_page());
    assert_eq!(result.result.hosted_zones.len(), 2);
    assert_eq!(result.result.hosted_zones[0].resource_record_set_count.as_ref(), Some(&4));
    assert_eq!(serde_json::to_value(&result.result.hosted_zones).unwrap(), body);
  }

  #[tokio::test]
  async fn it_scopes_record_sets_to_the_zone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/api/v2/aws/hostedRecords;_expand;zone.id=Z1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
        {"name": "www.example.com.", "type": "A", "TTL": 300, "resourceRecords": [{"value": "192.0.2.1"}]}
      ])))
      .expect(1)
      .mount(&server)
      .await;

    let record_sets = client(&server)
      .list_resource_record_sets(ListResourceRecordSetsRequest::for_zone("Z1"))
      .await
      .unwrap()
      .into_result()
      .resource_record_sets;

    assert_eq!(record_sets.len(), 1);
    assert_eq!(record_sets[0].record_type.as_deref(), Some("A"));
    assert_eq!(record_sets[0].ttl.as_ref(), Some(&300));
    assert_eq!(
      record_sets[0].resource_records.iter().next().and_then(|r| r.value.as_deref()),
      Some("192.0.2.1")
    );
  }

  #[tokio::test]
  async fn it_reproduces_record_sets_unchanged() {
    let server = MockServer::start().await;
    let body = json!([
      {"name": "www.example.com.", "type": "A", "TTL": 300, "setIdentifier": null, "resourceRecords": [{"value": "192.0.2.1"}]},
      {"name": "alias.example.com.", "type": "A", "TTL": null, "resourceRecords": [], "aliasTarget": {"DNSName": "lb."}},
      {"name": "legacy.example.com.", "ttl": 60, "resourceRecords": null}
    ]);
    Mock::given(method("GET"))
      .and(path("/api/v2/aws/hostedRecords;_expand;zone.id=Z1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(&body))
      .mount(&server)
      .await;

    let record_sets = client(&server)
      .list_resource_record_sets(ListResourceRecordSetsRequest::for_zone("Z1"))
      .await
      .unwrap()
      .into_result()
      .resource_record_sets;

    assert_eq!(record_sets[1].ttl, Field::Null);
    assert_eq!(serde_json::to_value(&record_sets).unwrap(), body);
  }

  #[tokio::test]
  async fn it_lists_all_record_sets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/api/v2/aws/hostedRecords;_expand"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "a."}, {"name": "b."}])))
      .expect(1)
      .mount(&server)
      .await;

    let result = client(&server).list_all_resource_record_sets().await.unwrap();

    assert!(!result.has_next_page());
    assert_eq!(result.result.resource_record_sets.len(), 2);
  }

  #[tokio::test]
  async fn it_requires_a_hosted_zone_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
      .expect(0)
      .mount(&server)
      .await;
    let client = client(&server);

    let err = client
      .list_resource_record_sets(ListResourceRecordSetsRequest::default())
      .await
      .unwrap_err();
    assert!(matches!(err, Error::MissingField("HostedZoneId")));

    let err = client
      .list_resource_record_sets(ListResourceRecordSetsRequest::for_zone("  "))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::MissingField("HostedZoneId")));

    let request = ListResourceRecordSetsRequest {
      start_record_name: Some("www".to_string()),
      ..ListResourceRecordSetsRequest::for_zone("Z1")
    };
    let err = client.list_resource_record_sets(request).await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedField("StartRecordName")));

    let request = ListHostedZonesRequest {
      max_items: Some(10),
      ..Default::default()
    };
    let err = client.list_hosted_zones(request).await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedField("MaxItems")));
  }
}
