use std::{path::PathBuf, time::Duration};

use clap::Args;
use indicatif::ProgressBar;
use jiff::Zoned;
use map_providers::{
    cache::{FileCache, MemoryCache, RouteCache},
    google_maps_api::GoogleMapsClient,
    map_provider::{MapProvider, Waypoint},
    route_service::RouteService,
};
use tracing::info;

use crate::{file_utils::load_fare_schedule, parsers, render};

#[derive(Args)]
pub struct RouteArgs {
    /// Pickup address or `lat,lng`
    #[arg(long, allow_hyphen_values = true, value_parser = parsers::parse_waypoint)]
    from: Waypoint,

    /// Drop-off address or `lat,lng`
    #[arg(long, allow_hyphen_values = true, value_parser = parsers::parse_waypoint)]
    to: Waypoint,

    /// JSON fare schedule overriding the default rates
    #[arg(long)]
    fares: Option<PathBuf>,

    /// Print JSON, including the decoded path, instead of a table
    #[arg(long)]
    json: bool,
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.enable_steady_tick(Duration::from_millis(120));
    bar.set_message(message.to_string());
    bar
}

pub async fn route(args: RouteArgs) -> anyhow::Result<()> {
    let schedule = load_fare_schedule(args.fares.as_deref())?;
    let provider = GoogleMapsClient::from_env()?;

    match FileCache::from_env()? {
        Some(cache) => {
            info!("Caching routes in {}", cache.folder().display());
            print_route(RouteService::new(provider, cache, schedule), &args).await
        }
        None => {
            print_route(
                RouteService::new(provider, MemoryCache::default(), schedule),
                &args,
            )
            .await
        }
    }
}

async fn print_route<P, C>(service: RouteService<P, C>, args: &RouteArgs) -> anyhow::Result<()>
where
    P: MapProvider,
    C: RouteCache,
{
    let bar = spinner(&format!("Routing {} → {}", args.from, args.to));
    let preview = service.preview(&args.from, &args.to, &Zoned::now()).await;
    bar.finish_and_clear();

    let Some(preview) = preview? else {
        info!("No route found from {} to {}", args.from, args.to);
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else {
        println!("{}", render::trip_summary(&preview));
        println!("{}", render::estimates_table(&preview.estimates));
    }

    Ok(())
}

pub async fn geocode(query: &str) -> anyhow::Result<()> {
    let provider = GoogleMapsClient::from_env()?;

    let place = match parsers::parse_point(query) {
        Ok(point) => provider.reverse_geocode(point).await?,
        Err(_) => provider.geocode(query).await?,
    };

    match place {
        Some(place) => println!("{}", render::places_table(&[place])),
        None => info!("No place found for {}", query),
    }

    Ok(())
}

pub async fn autocomplete(input: &str, details: bool) -> anyhow::Result<()> {
    let provider = GoogleMapsClient::from_env()?;
    let predictions = provider.autocomplete(input).await?;

    if predictions.is_empty() {
        info!("No suggestions for {}", input);
        return Ok(());
    }

    println!("{}", render::predictions_table(&predictions));

    if details {
        let mut places = Vec::with_capacity(predictions.len());
        for prediction in &predictions {
            if let Some(place) = provider.place_details(&prediction.place_id).await? {
                places.push(place);
            }
        }
        provider.reset_session_token();

        println!("{}", render::places_table(&places));
    }

    Ok(())
}
