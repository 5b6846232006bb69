use async_trait::async_trait;
use aws_sdk_ec2::{
  types::{self, InstanceType, OfferingTypeValues, RiProductDescription, Tenancy},
  Client,
};
use chrono::Utc;
use serde_json::{json, Value};

use super::{model::*, Ec2Api};
use crate::{
  convert_all, convert_field,
  edda::{PaginatedServiceResult, ServiceResult},
  error::{Error, Result},
  non_empty, Attributes,
};

impl From<types::Tag> for Tag {
  fn from(tag: types::Tag) -> Self {
    Self {
      key: tag.key.into(),
      value: tag.value.into(),
    }
  }
}

impl From<Filter> for types::Filter {
  fn from(filter: Filter) -> Self {
    types::Filter::builder()
      .name(filter.name)
      .set_values(Some(filter.values))
      .build()
  }
}

/// Commonly read instance attributes that are not typed fields, keyed as the cache service keys them
fn instance_attributes(instance: &types::Instance) -> Attributes {
  let mut attributes = Attributes::new();
  let mut insert = |key: &str, value: Option<Value>| {
    if let Some(value) = value {
      attributes.insert(key.to_owned(), value);
    }
  };

  insert(
    "launchTime",
    instance.launch_time.and_then(|t| t.to_millis().ok()).map(Value::from),
  );
  insert("keyName", instance.key_name.clone().map(Value::from));
  insert("architecture", instance.architecture.as_ref().map(|a| a.as_str().into()));
  insert("privateDnsName", instance.private_dns_name.clone().map(Value::from));
  insert("publicDnsName", instance.public_dns_name.clone().map(Value::from));
  insert("rootDeviceType", instance.root_device_type.as_ref().map(|t| t.as_str().into()));
  insert(
    "placement",
    instance.placement.as_ref().map(|p| {
      json!({
        "availabilityZone": p.availability_zone,
        "groupName": p.group_name,
        "tenancy": p.tenancy.as_ref().map(|t| t.as_str()),
      })
    }),
  );

  attributes
}

impl From<types::Instance> for Instance {
  fn from(instance: types::Instance) -> Self {
    let attributes = instance_attributes(&instance);

    Self {
      instance_id: instance.instance_id.into(),
      image_id: instance.image_id.into(),
      instance_type: instance.instance_type.map(|t| t.as_str().to_owned()).into(),
      state: instance
        .state
        .map(|s| InstanceState {
          code: s.code.into(),
          name: s.name.map(|n| n.as_str().to_owned()).into(),
        })
        .into(),
      private_ip_address: instance.private_ip_address.into(),
      public_ip_address: instance.public_ip_address.into(),
      subnet_id: instance.subnet_id.into(),
      vpc_id: instance.vpc_id.into(),
      tags: convert_field(instance.tags),
      attributes,
    }
  }
}

impl From<types::Reservation> for Reservation {
  fn from(reservation: types::Reservation) -> Self {
    Self {
      reservation_id: reservation.reservation_id.into(),
      owner_id: reservation.owner_id.into(),
      requester_id: reservation.requester_id.into(),
      instances: convert_field(reservation.instances),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::Volume> for Volume {
  fn from(volume: types::Volume) -> Self {
    Self {
      volume_id: volume.volume_id.into(),
      size: volume.size.into(),
      volume_type: volume.volume_type.map(|t| t.as_str().to_owned()).into(),
      state: volume.state.map(|s| s.as_str().to_owned()).into(),
      availability_zone: volume.availability_zone.into(),
      tags: convert_field(volume.tags),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::Subnet> for Subnet {
  fn from(subnet: types::Subnet) -> Self {
    Self {
      subnet_id: subnet.subnet_id.into(),
      vpc_id: subnet.vpc_id.into(),
      cidr_block: subnet.cidr_block.into(),
      availability_zone: subnet.availability_zone.into(),
      state: subnet.state.map(|s| s.as_str().to_owned()).into(),
      tags: convert_field(subnet.tags),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::Vpc> for Vpc {
  fn from(vpc: types::Vpc) -> Self {
    Self {
      vpc_id: vpc.vpc_id.into(),
      cidr_block: vpc.cidr_block.into(),
      state: vpc.state.map(|s| s.as_str().to_owned()).into(),
      is_default: vpc.is_default.into(),
      tags: convert_field(vpc.tags),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::SecurityGroup> for SecurityGroup {
  fn from(group: types::SecurityGroup) -> Self {
    Self {
      group_id: group.group_id.into(),
      group_name: group.group_name.into(),
      owner_id: group.owner_id.into(),
      description: group.description.into(),
      vpc_id: group.vpc_id.into(),
      tags: convert_field(group.tags),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::Image> for Image {
  fn from(image: types::Image) -> Self {
    Self {
      image_id: image.image_id.into(),
      owner_id: image.owner_id.into(),
      name: image.name.into(),
      description: image.description.into(),
      state: image.state.map(|s| s.as_str().to_owned()).into(),
      architecture: image.architecture.map(|a| a.as_str().to_owned()).into(),
      creation_date: image.creation_date.into(),
      tags: convert_field(image.tags),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::ReservedInstancesOffering> for ReservedInstancesOffering {
  fn from(offering: types::ReservedInstancesOffering) -> Self {
    Self {
      reserved_instances_offering_id: offering.reserved_instances_offering_id.into(),
      instance_type: offering.instance_type.map(|t| t.as_str().to_owned()).into(),
      availability_zone: offering.availability_zone.into(),
      duration: offering.duration.into(),
      fixed_price: offering.fixed_price.map(f64::from).into(),
      usage_price: offering.usage_price.map(f64::from).into(),
      product_description: offering.product_description.map(|p| p.as_str().to_owned()).into(),
      offering_type: offering.offering_type.map(|o| o.as_str().to_owned()).into(),
      attributes: Attributes::new(),
    }
  }
}

impl From<types::ClassicLinkInstance> for ClassicLinkInstance {
  fn from(instance: types::ClassicLinkInstance) -> Self {
    Self {
      instance_id: instance.instance_id.into(),
      vpc_id: instance.vpc_id.into(),
      tags: convert_field(instance.tags),
      attributes: Attributes::new(),
    }
  }
}

fn filters(filters: Vec<Filter>) -> Option<Vec<types::Filter>> {
  non_empty(filters).map(|filters| filters.into_iter().map(types::Filter::from).collect())
}

/// Requests pass through to AWS unchanged, pagination included
#[async_trait]
impl Ec2Api for Client {
  async fn describe_classic_link_instances(
    &self,
    request: DescribeClassicLinkInstancesRequest,
  ) -> Result<PaginatedServiceResult<DescribeClassicLinkInstancesResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_classic_link_instances()
      .set_instance_ids(non_empty(request.instance_ids))
      .set_filters(filters(request.filters))
      .set_next_token(request.next_token)
      .set_max_results(request.max_results)
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(PaginatedServiceResult::new(
      issued_at,
      output.next_token,
      DescribeClassicLinkInstancesResult {
        instances: convert_all(output.instances),
      },
    ))
  }

  async fn describe_images(&self, request: DescribeImagesRequest) -> Result<ServiceResult<DescribeImagesResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_images()
      .set_image_ids(non_empty(request.image_ids))
      .set_owners(non_empty(request.owners))
      .set_executable_users(non_empty(request.executable_users))
      .set_filters(filters(request.filters))
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(ServiceResult::new(
      issued_at,
      DescribeImagesResult {
        images: convert_all(output.images),
      },
    ))
  }

  async fn describe_instances(
    &self,
    request: DescribeInstancesRequest,
  ) -> Result<PaginatedServiceResult<DescribeInstancesResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_instances()
      .set_instance_ids(non_empty(request.instance_ids))
      .set_filters(filters(request.filters))
      .set_next_token(request.next_token)
      .set_max_results(request.max_results)
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(PaginatedServiceResult::new(
      issued_at,
      output.next_token,
      DescribeInstancesResult {
        reservations: convert_all(output.reservations),
      },
    ))
  }

  async fn describe_reserved_instances_offerings(
    &self,
    request: DescribeReservedInstancesOfferingsRequest,
  ) -> Result<PaginatedServiceResult<DescribeReservedInstancesOfferingsResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_reserved_instances_offerings()
      .set_reserved_instances_offering_ids(non_empty(request.reserved_instances_offering_ids))
      .set_filters(filters(request.filters))
      .set_availability_zone(request.availability_zone)
      .set_include_marketplace(request.include_marketplace)
      .set_instance_tenancy(request.instance_tenancy.as_deref().map(Tenancy::from))
      .set_instance_type(request.instance_type.as_deref().map(InstanceType::from))
      .set_offering_type(request.offering_type.as_deref().map(OfferingTypeValues::from))
      .set_product_description(request.product_description.as_deref().map(RiProductDescription::from))
      .set_next_token(request.next_token)
      .set_max_results(request.max_results)
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(PaginatedServiceResult::new(
      issued_at,
      output.next_token,
      DescribeReservedInstancesOfferingsResult {
        reserved_instances_offerings: convert_all(output.reserved_instances_offerings),
      },
    ))
  }

  async fn describe_security_groups(
    &self,
    request: DescribeSecurityGroupsRequest,
  ) -> Result<ServiceResult<DescribeSecurityGroupsResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_security_groups()
      .set_group_ids(non_empty(request.group_ids))
      .set_group_names(non_empty(request.group_names))
      .set_filters(filters(request.filters))
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(ServiceResult::new(
      issued_at,
      DescribeSecurityGroupsResult {
        security_groups: convert_all(output.security_groups),
      },
    ))
  }

  async fn describe_subnets(&self, request: DescribeSubnetsRequest) -> Result<ServiceResult<DescribeSubnetsResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_subnets()
      .set_subnet_ids(non_empty(request.subnet_ids))
      .set_filters(filters(request.filters))
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(ServiceResult::new(
      issued_at,
      DescribeSubnetsResult {
        subnets: convert_all(output.subnets),
      },
    ))
  }

  async fn describe_volumes(
    &self,
    request: DescribeVolumesRequest,
  ) -> Result<PaginatedServiceResult<DescribeVolumesResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_volumes()
      .set_volume_ids(non_empty(request.volume_ids))
      .set_filters(filters(request.filters))
      .set_next_token(request.next_token)
      .set_max_results(request.max_results)
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(PaginatedServiceResult::new(
      issued_at,
      output.next_token,
      DescribeVolumesResult {
        volumes: convert_all(output.volumes),
      },
    ))
  }

  async fn describe_vpcs(&self, request: DescribeVpcsRequest) -> Result<ServiceResult<DescribeVpcsResult>> {
    let issued_at = Utc::now();
    let output = self
      .describe_vpcs()
      .set_vpc_ids(non_empty(request.vpc_ids))
      .set_filters(filters(request.filters))
      .send()
      .await
      .map_err(Error::aws)?;

    Ok(ServiceResult::new(
      issued_at,
      DescribeVpcsResult {
        vpcs: convert_all(output.vpcs),
      },
    ))
  }
}
