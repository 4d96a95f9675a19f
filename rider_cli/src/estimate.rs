use std::path::PathBuf;

use clap::Args;
use jiff::Zoned;
use tracing::debug;

use crate::{file_utils::load_fare_schedule, parsers, render};

#[derive(Args)]
pub struct EstimateArgs {
    /// Trip distance in kilometers
    #[arg(long, value_parser = parsers::parse_non_negative)]
    distance_km: f64,

    /// Trip duration in minutes
    #[arg(long, value_parser = parsers::parse_non_negative)]
    duration_minutes: f64,

    /// JSON fare schedule overriding the default rates
    #[arg(long)]
    fares: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: EstimateArgs) -> anyhow::Result<()> {
    let schedule = load_fare_schedule(args.fares.as_deref())?;
    debug!("Using fare schedule {:?}", schedule);

    let estimates =
        schedule.estimate_ride_classes(args.distance_km, args.duration_minutes, &Zoned::now());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimates)?);
    } else {
        println!("{}", render::estimates_table(&estimates));
    }

    Ok(())
}
