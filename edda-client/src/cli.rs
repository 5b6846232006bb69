use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;

use crate::{
  commands,
  config::AwsConfiguration,
  error::Result,
  factory::{AwsClientFactory, DEFAULT_VIP},
};

/// Styles for CLI
fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .literal(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::BrightCyan))),
    )
    .usage(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
}

#[derive(Debug, Parser)]
#[command(author, about, version)]
#[command(propagate_version = true)]
#[command(styles=get_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Configuration file, YAML or TOML
  #[arg(short, long, global = true, env = "EDDA_CONFIG")]
  pub config: Option<PathBuf>,

  /// Base URL of the cache service; overrides `url` from the configuration file
  #[arg(long, global = true, env = "EDDA_URL")]
  pub url: Option<String>,

  /// Cache service address used when no URL is configured
  #[arg(long, global = true, default_value = DEFAULT_VIP)]
  pub vip: String,

  /// AWS region of the genuine AWS clients
  #[arg(long, global = true)]
  pub region: Option<String>,

  /// Build a genuine AWS client behind the cache-backed reads
  #[arg(long, global = true)]
  pub wrap_aws_client: bool,

  /// Read from AWS instead of the cache service; implies --wrap-aws-client
  #[arg(long, global = true)]
  pub no_edda: bool,

  /// Disable colored log output
  #[arg(long, global = true)]
  pub no_color: bool,

  #[clap(flatten)]
  pub verbose: Verbosity,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// EC2 describe operations
  #[command(subcommand)]
  Ec2(commands::ec2::Ec2),

  /// Route53 hosted zones and record sets
  #[command(subcommand)]
  Route53(commands::route53::Route53),

  /// Auto Scaling groups, launch configurations, and policies
  #[command(subcommand)]
  Autoscaling(commands::autoscaling::AutoScaling),

  /// CloudWatch alarms
  #[command(subcommand)]
  Cloudwatch(commands::cloudwatch::CloudWatch),

  /// Classic load balancers and the health of their instances
  #[command(subcommand)]
  Elb(commands::elb::Elb),
}

impl Cli {
  /// Configuration file values with command line overrides applied
  pub fn aws_configuration(&self) -> Result<AwsConfiguration> {
    let mut config = match &self.config {
      Some(path) => AwsConfiguration::read(path)?,
      None => AwsConfiguration::default(),
    };

    if let Some(url) = &self.url {
      config.url = Some(url.clone());
    }
    if self.wrap_aws_client {
      config.wrap_aws_client = true;
    }
    if self.no_edda {
      config.wrap_aws_client = true;
      config.use_edda = false;
    }

    config.validate()?;
    Ok(config)
  }

  pub fn factory(&self) -> Result<AwsClientFactory> {
    let mut factory = AwsClientFactory::new(self.aws_configuration()?).with_vip(&self.vip);
    if let Some(region) = &self.region {
      factory = factory.with_region(region);
    }

    Ok(factory)
  }
}
