use std::env;

use aws_config::{
  meta::region::RegionProviderChain, retry::RetryConfig, sts::AssumeRoleProvider, timeout::TimeoutConfig,
  BehaviorVersion, SdkConfig,
};
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_types::region::Region;
use tracing::{debug, info, warn};

use crate::{
  autoscaling::{AutoScalingClient, EddaAutoScalingClient},
  cloudwatch::{CloudWatchClient, EddaCloudWatchClient},
  config::AwsConfiguration,
  ec2::{Ec2Client, EddaEc2Client},
  edda::EddaClient,
  elb::{EddaElasticLoadBalancingClient, ElasticLoadBalancingClient},
  error::{Error, Result},
  route53::{EddaRoute53Client, Route53Client},
};

/// Cache service address used when no `url` is configured
pub const DEFAULT_VIP: &str = "edda-main:7001";

/// How a client built by the factory serves its operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientMode {
  /// Reads from the cache; no AWS client exists
  ReadOnly,
  /// Reads from the cache; everything else through AWS
  Wrapped,
  /// Everything through AWS
  Aws,
}

/// Builds service clients from one [`AwsConfiguration`]
///
/// The configuration, credentials, VIP, and region are fixed at construction; every `new_*_client` call applies the
/// same decision:
///
/// | `useMock` | `wrapAwsClient` | `useEdda` | client |
/// |---|---|---|---|
/// | true | - | - | [`Error::MockUnsupported`] |
/// | false | false | - | read-only, cache-backed |
/// | false | true | true | cache-backed reads wrapping the AWS client |
/// | false | true | false | the AWS client alone |
#[derive(Clone, Debug)]
pub struct AwsClientFactory {
  config: AwsConfiguration,
  credentials_provider: Option<SharedCredentialsProvider>,
  vip: String,
  region: Option<String>,
}

impl AwsClientFactory {
  pub fn new(config: AwsConfiguration) -> Self {
    Self {
      config,
      credentials_provider: None,
      vip: DEFAULT_VIP.to_string(),
      region: None,
    }
  }

  /// Credentials for the genuine AWS clients, in place of the default provider chain
  pub fn with_credentials_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
    self.credentials_provider = Some(SharedCredentialsProvider::new(provider));
    self
  }

  pub fn with_vip(mut self, vip: impl Into<String>) -> Self {
    self.vip = vip.into();
    self
  }

  /// Region for the genuine AWS clients, in place of `AWS_DEFAULT_REGION` and the default region chain
  pub fn with_region(mut self, region: impl Into<String>) -> Self {
    self.region = Some(region.into());
    self
  }

  pub fn config(&self) -> &AwsConfiguration {
    &self.config
  }

  pub fn vip(&self) -> &str {
    &self.vip
  }

  /// The kind of client the configuration calls for
  pub fn mode(&self, service: &'static str) -> Result<ClientMode> {
    if self.config.use_mock {
      return Err(Error::MockUnsupported(service));
    }

    let mode = match (self.config.wrap_aws_client, self.config.use_edda) {
      (false, _) => ClientMode::ReadOnly,
      (true, true) => ClientMode::Wrapped,
      (true, false) => ClientMode::Aws,
    };
    info!("Creating {service} client: {mode:?}");

    Ok(mode)
  }

  fn edda(&self) -> Result<EddaClient> {
    let edda = EddaClient::new(&self.config, &self.vip)?;
    debug!("Cache service at {}", edda.base_url());
    Ok(edda)
  }

  /// Get the configuration to authn/authz with AWS that will be used across the genuine AWS clients
  async fn sdk_config(&self) -> Result<SdkConfig> {
    let aws_region = match &self.region {
      Some(region) => Some(Region::new(region.clone())),
      None => env::var("AWS_DEFAULT_REGION").ok().map(Region::new),
    };
    let region_provider = RegionProviderChain::first_try(aws_region).or_default_provider();

    let retry_config = RetryConfig::standard().with_max_attempts(self.config.max_error_retry.saturating_add(1));
    let timeout_config = TimeoutConfig::builder()
      .connect_timeout(self.config.connection_timeout())
      .read_timeout(self.config.socket_timeout())
      .build();

    let mut loader = aws_config::defaults(BehaviorVersion::latest())
      .region(region_provider)
      .retry_config(retry_config)
      .timeout_config(timeout_config);
    if let Some(provider) = &self.credentials_provider {
      loader = loader.credentials_provider(provider.clone());
    }
    let mut sdk_config = loader.load().await;

    if let Some((role_arn, session_name)) = self.config.assume_role() {
      info!("Assuming role {role_arn} as {session_name}");
      let provider = AssumeRoleProvider::builder(role_arn)
        .session_name(session_name)
        .configure(&sdk_config)
        .build()
        .await;
      sdk_config = sdk_config
        .into_builder()
        .credentials_provider(SharedCredentialsProvider::new(provider))
        .build();
    }

    if self.config.max_connections != AwsConfiguration::default().max_connections {
      warn!(
        "maxConnections={} only applies to the cache service; AWS clients keep the SDK's connection pool",
        self.config.max_connections
      );
    }

    Ok(sdk_config)
  }

  pub async fn new_ec2_client(&self) -> Result<Ec2Client> {
    let mode = self.mode("EC2")?;
    let edda = EddaEc2Client::new(self.edda()?);
    if mode == ClientMode::ReadOnly {
      return Ok(Ec2Client::ReadOnly(edda));
    }

    let sdk_config = self.sdk_config().await?;
    let aws = aws_sdk_ec2::Client::from_conf(
      aws_sdk_ec2::config::Builder::from(&sdk_config)
        .endpoint_url(regional_endpoint("ec2", &sdk_config)?)
        .build(),
    );

    Ok(match mode {
      ClientMode::Wrapped => Ec2Client::Wrapped { edda, aws },
      _ => Ec2Client::Aws(aws),
    })
  }

  /// Route53 is a global service and keeps the SDK's default endpoint
  pub async fn new_route53_client(&self) -> Result<Route53Client> {
    let mode = self.mode("Route53")?;
    let edda = EddaRoute53Client::new(self.edda()?);
    if mode == ClientMode::ReadOnly {
      return Ok(Route53Client::ReadOnly(edda));
    }

    let sdk_config = self.sdk_config().await?;
    let aws = aws_sdk_route53::Client::new(&sdk_config);

    Ok(match mode {
      ClientMode::Wrapped => Route53Client::Wrapped { edda, aws },
      _ => Route53Client::Aws(aws),
    })
  }

  pub async fn new_autoscaling_client(&self) -> Result<AutoScalingClient> {
    let mode = self.mode("AutoScaling")?;
    let edda = EddaAutoScalingClient::new(self.edda()?);
    if mode == ClientMode::ReadOnly {
      return Ok(AutoScalingClient::ReadOnly(edda));
    }

    let sdk_config = self.sdk_config().await?;
    let aws = aws_sdk_autoscaling::Client::from_conf(
      aws_sdk_autoscaling::config::Builder::from(&sdk_config)
        .endpoint_url(regional_endpoint("autoscaling", &sdk_config)?)
        .build(),
    );

    Ok(match mode {
      ClientMode::Wrapped => AutoScalingClient::Wrapped { edda, aws },
      _ => AutoScalingClient::Aws(aws),
    })
  }

  pub async fn new_cloudwatch_client(&self) -> Result<CloudWatchClient> {
    let mode = self.mode("CloudWatch")?;
    let edda = EddaCloudWatchClient::new(self.edda()?);
    if mode == ClientMode::ReadOnly {
      return Ok(CloudWatchClient::ReadOnly(edda));
    }

    let sdk_config = self.sdk_config().await?;
    let aws = aws_sdk_cloudwatch::Client::from_conf(
      aws_sdk_cloudwatch::config::Builder::from(&sdk_config)
        .endpoint_url(regional_endpoint("monitoring", &sdk_config)?)
        .build(),
    );

    Ok(match mode {
      ClientMode::Wrapped => CloudWatchClient::Wrapped { edda, aws },
      _ => CloudWatchClient::Aws(aws),
    })
  }

  pub async fn new_elb_client(&self) -> Result<ElasticLoadBalancingClient> {
    let mode = self.mode("ElasticLoadBalancing")?;
    let edda = EddaElasticLoadBalancingClient::new(self.edda()?);
    if mode == ClientMode::ReadOnly {
      return Ok(ElasticLoadBalancingClient::ReadOnly(edda));
    }

    let sdk_config = self.sdk_config().await?;
    let aws = aws_sdk_elasticloadbalancing::Client::from_conf(
      aws_sdk_elasticloadbalancing::config::Builder::from(&sdk_config)
        .endpoint_url(regional_endpoint("elasticloadbalancing", &sdk_config)?)
        .build(),
    );

    Ok(match mode {
      ClientMode::Wrapped => ElasticLoadBalancingClient::Wrapped { edda, aws },
      _ => ElasticLoadBalancingClient::Aws(aws),
    })
  }
}

/// `https://{prefix}.{region}.amazonaws.com` for the resolved region
fn regional_endpoint(prefix: &str, sdk_config: &SdkConfig) -> Result<String> {
  match sdk_config.region() {
    Some(region) => Ok(format!("https://{prefix}.{region}.amazonaws.com")),
    None => Err(Error::Config(format!(
      "unable to resolve an AWS region for the {prefix} endpoint"
    ))),
  }
}
