pub mod autoscaling;
pub mod cloudwatch;
pub mod ec2;
pub mod elb;
pub mod route53;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

/// Resource IDs or names to return; everything when none are given
#[derive(Args, Debug)]
pub struct Selection {
  #[arg(value_name = "ID")]
  pub values: Vec<String>,
}

/// Write a result envelope to stdout as pretty JSON
pub fn print<T: Serialize>(result: &T) -> Result<()> {
  let out = serde_json::to_string_pretty(result)?;
  println!("{out}");

  Ok(())
}
