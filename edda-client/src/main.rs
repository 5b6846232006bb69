use std::io;

use anyhow::Result;
use clap::Parser;
use edda_client::{Cli, Commands};
use tracing_log::AsTrace;
use tracing_subscriber::FmtSubscriber;

#[cfg(not(tarpaulin_include))]
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let subscriber = FmtSubscriber::builder()
    .with_max_level(cli.verbose.log_level_filter().as_trace())
    .without_time()
    .with_ansi(!cli.no_color)
    .with_writer(io::stderr)
    .finish();
  tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

  let factory = cli.factory()?;

  match &cli.command {
    Commands::Ec2(ec2) => ec2.run(&factory).await,
    Commands::Route53(route53) => route53.run(&factory).await,
    Commands::Autoscaling(autoscaling) => autoscaling.run(&factory).await,
    Commands::Cloudwatch(cloudwatch) => cloudwatch.run(&factory).await,
    Commands::Elb(elb) => elb.run(&factory).await,
  }
}
