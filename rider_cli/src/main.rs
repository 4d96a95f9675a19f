use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;
use trip_geometry::GeoPoint;

use crate::{estimate::EstimateArgs, lookup::RouteArgs};

mod estimate;
mod file_utils;
mod geometry;
mod lookup;
mod parsers;
mod render;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an encoded polyline into JSON points
    Decode { polyline: String },

    /// Encode `lat,lng` points into a polyline
    Encode {
        #[arg(required = true, allow_hyphen_values = true, value_parser = parsers::parse_point)]
        points: Vec<GeoPoint>,
    },

    /// Price every ride class for a trip
    #[command(visible_alias = "e")]
    Estimate {
        #[command(flatten)]
        args: EstimateArgs,
    },

    /// Route between two places and price the trip
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },

    /// Look up an address, or the address at `lat,lng`
    Geocode { query: String },

    /// Suggest places matching a partial input
    Autocomplete {
        input: String,

        /// Also fetch the details of every suggestion
        #[arg(long)]
        details: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Decode { polyline } => geometry::decode(&polyline)?,
        Commands::Encode { points } => geometry::encode(&points),
        Commands::Estimate { args } => estimate::run(args)?,
        Commands::Route { args } => lookup::route(args).await?,
        Commands::Geocode { query } => lookup::geocode(&query).await?,
        Commands::Autocomplete { input, details } => {
            lookup::autocomplete(&input, details).await?
        }
    }

    Ok(())
}
