use async_trait::async_trait;
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

use super::{model::*, Ec2Api};
use crate::{
  edda::{
    filter::{matches, should_filter},
    validate_empty, EddaClient, Fetched, PaginatedServiceResult, Query, ServiceResult,
  },
  error::Result,
  Field,
};

/// EC2 describe operations served from the cache service
#[derive(Clone, Debug)]
pub struct EddaEc2Client {
  edda: EddaClient,
}

impl EddaEc2Client {
  pub fn new(edda: EddaClient) -> Self {
    Self { edda }
  }
}

/// An element of the cached `instances` collection
///
/// The collection holds whole reservations; documents without an `instances` list are bare instances and are given a
/// reservation of their own
struct CachedReservation(Reservation);

impl<'de> Deserialize<'de> for CachedReservation {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = Value::deserialize(deserializer)?;

    if value.get("instances").is_some() {
      return serde_json::from_value(value).map(Self).map_err(de::Error::custom);
    }

    let instance: Instance = serde_json::from_value(value).map_err(de::Error::custom)?;
    Ok(Self(Reservation {
      instances: Field::Value(vec![instance]),
      ..Default::default()
    }))
  }
}

/// Keep only the requested instances, dropping reservations left without any
fn filter_reservations(reservations: &mut Vec<Reservation>, instance_ids: &[String]) {
  if instance_ids.is_empty() {
    return;
  }

  reservations.retain_mut(|reservation| match reservation.instances.as_mut() {
    Some(instances) => {
      instances.retain(|i| matches(instance_ids, i.instance_id.as_deref()));
      !instances.is_empty()
    }
    None => false,
  });
}

#[async_trait]
impl Ec2Api for EddaEc2Client {
  async fn describe_classic_link_instances(
    &self,
    request: DescribeClassicLinkInstancesRequest,
  ) -> Result<PaginatedServiceResult<DescribeClassicLinkInstancesResult>> {
    validate_empty("Filter", &request.filters)?;
    validate_empty("NextToken", &request.next_token)?;
    validate_empty("MaxResults", &request.max_results)?;

    let query = Query::aws("classicLinkInstances").expand();
    let Fetched {
      issued_at,
      value: mut instances,
      ..
    } = self.edda.get::<Vec<ClassicLinkInstance>>(&query).await?;

    instances.retain(|i| matches(&request.instance_ids, i.instance_id.as_deref()));

    Ok(PaginatedServiceResult::last_page(
      issued_at,
      DescribeClassicLinkInstancesResult { instances },
    ))
  }

  async fn describe_images(&self, request: DescribeImagesRequest) -> Result<ServiceResult<DescribeImagesResult>> {
    validate_empty("ExecutableUsers", &request.executable_users)?;
    validate_empty("Filter", &request.filters)?;

    let query = Query::aws("images").expand();
    let Fetched {
      issued_at,
      value: mut images,
      ..
    } = self.edda.get::<Vec<Image>>(&query).await?;

    if should_filter(&[request.owners.as_slice(), request.image_ids.as_slice()]) {
      images.retain(|i| {
        matches(&request.owners, i.owner_id.as_deref()) && matches(&request.image_ids, i.image_id.as_deref())
      });
    }

    Ok(ServiceResult::new(issued_at, DescribeImagesResult { images }))
  }

  async fn describe_instances(
    &self,
    request: DescribeInstancesRequest,
  ) -> Result<PaginatedServiceResult<DescribeInstancesResult>> {
    validate_empty("Filter", &request.filters)?;
    validate_empty("NextToken", &request.next_token)?;
    validate_empty("MaxResults", &request.max_results)?;

    let query = Query::aws("instances").expand();
    let Fetched { issued_at, value, .. } = self.edda.get::<Vec<CachedReservation>>(&query).await?;

    let mut reservations: Vec<Reservation> = value.into_iter().map(|r| r.0).collect();
    filter_reservations(&mut reservations, &request.instance_ids);

    Ok(PaginatedServiceResult::last_page(
      issued_at,
      DescribeInstancesResult { reservations },
    ))
  }

  async fn describe_reserved_instances_offerings(
    &self,
    request: DescribeReservedInstancesOfferingsRequest,
  ) -> Result<PaginatedServiceResult<DescribeReservedInstancesOfferingsResult>> {
    validate_empty("Filter", &request.filters)?;
    validate_empty("AvailabilityZone", &request.availability_zone)?;
    validate_empty("IncludeMarketplace", &request.include_marketplace)?;
    validate_empty("InstanceTenancy", &request.instance_tenancy)?;
    validate_empty("InstanceType", &request.instance_type)?;
    validate_empty("OfferingType", &request.offering_type)?;
    validate_empty("ProductDescription", &request.product_description)?;
    validate_empty("NextToken", &request.next_token)?;
    validate_empty("MaxResults", &request.max_results)?;

    let query = Query::aws("reservedInstancesOfferings").expand();
    let Fetched {
      issued_at,
      value: mut offerings,
      ..
    } = self.edda.get::<Vec<ReservedInstancesOffering>>(&query).await?;

    offerings.retain(|o| {
      matches(
        &request.reserved_instances_offering_ids,
        o.reserved_instances_offering_id.as_deref(),
      )
    });

    Ok(PaginatedServiceResult::last_page(
      issued_at,
      DescribeReservedInstancesOfferingsResult {
        reserved_instances_offerings: offerings,
      },
    ))
  }

  async fn describe_security_groups(
    &self,
    request: DescribeSecurityGroupsRequest,
  ) -> Result<ServiceResult<DescribeSecurityGroupsResult>> {
    validate_empty("Filter", &request.filters)?;

    let query = Query::aws("securityGroups").expand();
    let Fetched {
      issued_at,
      value: mut security_groups,
      ..
    } = self.edda.get::<Vec<SecurityGroup>>(&query).await?;

    if should_filter(&[request.group_names.as_slice(), request.group_ids.as_slice()]) {
      security_groups.retain(|sg| {
        matches(&request.group_names, sg.group_name.as_deref()) && matches(&request.group_ids, sg.group_id.as_deref())
      });
    }

    Ok(ServiceResult::new(
      issued_at,
      DescribeSecurityGroupsResult { security_groups },
    ))
  }

  async fn describe_subnets(&self, request: DescribeSubnetsRequest) -> Result<ServiceResult<DescribeSubnetsResult>> {
    validate_empty("Filter", &request.filters)?;

    let query = Query::aws("subnets").expand();
    let Fetched {
      issued_at,
      value: mut subnets,
      ..
    } = self.edda.get::<Vec<Subnet>>(&query).await?;

    subnets.retain(|s| matches(&request.subnet_ids, s.subnet_id.as_deref()));

    Ok(ServiceResult::new(issued_at, DescribeSubnetsResult { subnets }))
  }

  async fn describe_volumes(
    &self,
    request: DescribeVolumesRequest,
  ) -> Result<PaginatedServiceResult<DescribeVolumesResult>> {
    validate_empty("Filter", &request.filters)?;
    validate_empty("NextToken", &request.next_token)?;
    validate_empty("MaxResults", &request.max_results)?;

    let query = Query::aws("volumes").expand();
    let Fetched {
      issued_at,
      value: mut volumes,
      ..
    } = self.edda.get::<Vec<Volume>>(&query).await?;

    volumes.retain(|v| matches(&request.volume_ids, v.volume_id.as_deref()));

    Ok(PaginatedServiceResult::last_page(issued_at, DescribeVolumesResult { volumes }))
  }

  async fn describe_vpcs(&self, request: DescribeVpcsRequest) -> Result<ServiceResult<DescribeVpcsResult>> {
    validate_empty("Filter", &request.filters)?;

    let query = Query::aws("vpcs").expand();
    let Fetched {
      issued_at,
      value: mut vpcs,
      ..
    } = self.edda.get::<Vec<Vpc>>(&query).await?;

    vpcs.retain(|v| matches(&request.vpc_ids, v.vpc_id.as_deref()));

    Ok(ServiceResult::new(issued_at, DescribeVpcsResult { vpcs }))
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

  fn client(server: &MockServer) -> EddaEc2Client {
    let config = AwsConfiguration {
      url: Some(server.uri()),
      ..Default::default()
    };
    EddaEc2Client::new(EddaClient::new(&config, "unused:7001").unwrap())
  }

  async fn serve(server: &MockServer, resource: &str, body: Value) {
    Mock::given(method("GET"))
      .and(path(format!("/api/v2/aws/{resource};_expand")))
      .respond_with(ResponseTemplate::new(200).set_body_json(body))
      .mount(server)
      .await;
  }

  fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
  }

  #[tokio::test]
  async fn it_filters_bare_instances_by_id() {
    let server = MockServer::start().await;
    serve(&server, "instances", json!([{"instanceId": "i-1"}, {"instanceId": "i-2"}])).await;

    let request = DescribeInstancesRequest {
      instance_ids: ids(&["i-2"]),
      ..Default::default()
    };
    let result = client(&server).describe_instances(request).await.unwrap();

    let instances: Vec<_> = result.result.instances().collect();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].instance_id.as_deref(), Some("i-2"));
    assert!(!result.has_next_page());
  }

  #[tokio::test]
  async fn it_drops_reservations_without_matching_instances() {
    let server = MockServer::start().await;
    serve(
      &server,
      "instances",
      json!([
        {"reservationId": "r-1", "instances": [{"instanceId": "i-1"}, {"instanceId": "i-2"}]},
        {"reservationId": "r-2", "instances": [{"instanceId": "i-3"}]},
        {"reservationId": "r-3", "instances": []}
      ]),
    )
    .await;
    let client = client(&server);

    let request = DescribeInstancesRequest {
      instance_ids: ids(&["i-2"]),
      ..Default::default()
    };
    let filtered = client.describe_instances(request).await.unwrap().into_result();
    assert_eq!(filtered.reservations.len(), 1);
    assert_eq!(filtered.reservations[0].reservation_id.as_deref(), Some("r-1"));
    assert_eq!(filtered.reservations[0].instances.iter().count(), 1);

    // Without an instance filter, reservations are passed through untouched
    let unfiltered = client
      .describe_instances(DescribeInstancesRequest::default())
      .await
      .unwrap()
      .into_result();
    assert_eq!(unfiltered.reservations.len(), 3);
  }

  #[tokio::test]
  async fn it_preserves_every_element_in_order() {
    let server = MockServer::start().await;
    let body = json!([
      {"volumeId": "vol-3", "size": 8, "state": "in-use", "attachments": [{"instanceId": "i-1", "device": "/dev/sda1"}]},
      {"volumeId": "vol-1", "size": 100, "volumeType": "gp3", "tags": [{"key": "Name", "value": "data"}]},
      {"volumeId": "vol-2", "encrypted": true, "iops": 3000}
    ]);
    serve(&server, "volumes", body.clone()).await;

    let result = client(&server)
      .describe_volumes(DescribeVolumesRequest::default())
      .await
      .unwrap();

    let ids: Vec<_> = result.result.volumes.iter().map(|v| v.volume_id.as_deref()).collect();
    assert_eq!(ids, [Some("vol-3"), Some("vol-1"), Some("vol-2")]);
    assert_eq!(serde_json::to_value(&result.result.volumes).unwrap(), body);
    assert!(!result.has_next_page());
  }

  #[tokio::test]
  async fn it_reproduces_nulls_and_empty_lists() {
    let server = MockServer::start().await;
    let volumes = json!([
      {"volumeId": "vol-1", "tags": [], "volumeType": null, "kmsKeyId": null},
      {"volumeId": "vol-2", "tags": null, "size": null}
    ]);
    let reservations = json!([
      {
        "reservationId": "r-1",
        "requesterId": null,
        "groups": [],
        "instances": [{"instanceId": "i-1", "state": {"code": 16, "name": null}, "tags": [], "publicIpAddress": null}]
      },
      {"reservationId": "r-2", "instances": null}
    ]);
    serve(&server, "volumes", volumes.clone()).await;
    serve(&server, "instances", reservations.clone()).await;
    let client = client(&server);

    let result = client
      .describe_volumes(DescribeVolumesRequest::default())
      .await
      .unwrap()
      .into_result();
    assert_eq!(result.volumes[0].volume_type, Field::Null);
    assert_eq!(serde_json::to_value(&result.volumes).unwrap(), volumes);

    let result = client
      .describe_instances(DescribeInstancesRequest::default())
      .await
      .unwrap()
      .into_result();
    assert_eq!(serde_json::to_value(&result.reservations).unwrap(), reservations);
  }

  #[tokio::test]
  async fn it_filters_images_by_owner_and_id() {
    let server = MockServer::start().await;
    serve(
      &server,
      "images",
      json!([
        {"imageId": "ami-1", "ownerId": "111111111111"},
        {"imageId": "ami-2", "ownerId": "111111111111"},
        {"imageId": "ami-1", "ownerId": "222222222222"}
      ]),
    )
    .await;

    let request = DescribeImagesRequest {
      image_ids: ids(&["ami-1"]),
      owners: ids(&["111111111111"]),
      ..Default::default()
    };
    let images = client(&server).describe_images(request).await.unwrap().into_result().images;

    assert_eq!(images.len(), 1);
    assert_eq!(images[0].image_id.as_deref(), Some("ami-1"));
    assert_eq!(images[0].owner_id.as_deref(), Some("111111111111"));
  }

  #[tokio::test]
  async fn it_filters_security_groups_by_name() {
    let server = MockServer::start().await;
    serve(
      &server,
      "securityGroups",
      json!([
        {"groupId": "sg-1", "groupName": "web"},
        {"groupId": "sg-2", "groupName": "db"}
      ]),
    )
    .await;

    let request = DescribeSecurityGroupsRequest {
      group_names: ids(&["db"]),
      ..Default::default()
    };
    let groups = client(&server)
      .describe_security_groups(request)
      .await
      .unwrap()
      .into_result()
      .security_groups;

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].group_id.as_deref(), Some("sg-2"));
  }

  #[tokio::test]
  async fn it_filters_subnets_vpcs_and_offerings() {
    let server = MockServer::start().await;
    serve(&server, "subnets", json!([{"subnetId": "subnet-1"}, {"subnetId": "subnet-2"}])).await;
    serve(&server, "vpcs", json!([{"vpcId": "vpc-1", "isDefault": true}, {"vpcId": "vpc-2"}])).await;
    serve(
      &server,
      "reservedInstancesOfferings",
      json!([{"reservedInstancesOfferingId": "rio-1", "fixedPrice": 10.5}, {"reservedInstancesOfferingId": "rio-2"}]),
    )
    .await;
    serve(
      &server,
      "classicLinkInstances",
      json!([{"instanceId": "i-1", "vpcId": "vpc-1"}, {"instanceId": "i-2", "vpcId": "vpc-1"}]),
    )
    .await;
    let client = client(&server);

    let subnets = client
      .describe_subnets(DescribeSubnetsRequest {
        subnet_ids: ids(&["subnet-2"]),
        ..Default::default()
      })
      .await
      .unwrap()
      .into_result()
      .subnets;
    assert_eq!(subnets.len(), 1);
    assert_eq!(subnets[0].subnet_id.as_deref(), Some("subnet-2"));

    let vpcs = client
      .describe_vpcs(DescribeVpcsRequest {
        vpc_ids: ids(&["vpc-1"]),
        ..Default::default()
      })
      .await
      .unwrap()
      .into_result()
      .vpcs;
    assert_eq!(vpcs.len(), 1);
    assert_eq!(vpcs[0].is_default.as_ref(), Some(&true));

    let offerings = client
      .describe_reserved_instances_offerings(DescribeReservedInstancesOfferingsRequest {
        reserved_instances_offering_ids: ids(&["rio-1"]),
        ..Default::default()
      })
      .await
      .unwrap();
    assert!(!offerings.has_next_page());
    assert_eq!(offerings.result.reserved_instances_offerings.len(), 1);
    assert_eq!(offerings.result.reserved_instances_offerings[0].fixed_price.as_ref(), Some(&10.5));

    let linked = client
      .describe_classic_link_instances(DescribeClassicLinkInstancesRequest::default())
      .await
      .unwrap()
      .into_result()
      .instances;
    assert_eq!(linked.len(), 2);
  }

  #[tokio::test]
  async fn it_rejects_unsupported_fields_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
      .expect(0)
      .mount(&server)
      .await;
    let client = client(&server);

    let request = DescribeInstancesRequest {
      filters: vec![Filter::new("instance-state-name", ids(&["running"]))],
      ..Default::default()
    };
    let err = client.describe_instances(request).await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedField("Filter")));

    let request = DescribeVolumesRequest {
      next_token: Some("token".to_string()),
      ..Default::default()
    };
    let err = client.describe_volumes(request).await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedField("NextToken")));

    let request = DescribeImagesRequest {
      executable_users: ids(&["self"]),
      ..Default::default()
    };
    let err = client.describe_images(request).await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedField("ExecutableUsers")));

    let request = DescribeReservedInstancesOfferingsRequest {
      instance_type: Some("m5.large".to_string()),
      ..Default::default()
    };
    let err = client.describe_reserved_instances_offerings(request).await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedField("InstanceType")));
  }

  #[tokio::test]
  async fn it_fails_on_malformed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/api/v2/aws/instances;_expand"))
      .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"instanceId": "i-1"},"#))
      .mount(&server)
      .await;

    let err = client(&server)
      .describe_instances(DescribeInstancesRequest::default())
      .await
      .unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(
      err.url(),
      Some(format!("{}/api/v2/aws/instances;_expand", server.uri()).as_str())
    );
  }

  #[tokio::test]
  async fn it_fails_on_schema_mismatch() {
    let server = MockServer::start().await;
    serve(&server, "instances", json!([{"reservationId": "r-1", "instances": [{"instanceId": 42}]}])).await;

    let err = client(&server)
      .describe_instances(DescribeInstancesRequest::default())
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
  }
}
