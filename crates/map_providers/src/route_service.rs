use jiff::Zoned;
use tracing::{debug, warn};
use trip_geometry::{FareSchedule, TripPreview};

use crate::{
    cache::{NoCache, RouteCache},
    map_provider::{MapProvider, RouteData, Waypoint},
};

/// Routes through a [`MapProvider`], remembering results in a [`RouteCache`],
/// and prices them.
pub struct RouteService<P, C = NoCache> {
    provider: P,
    cache: C,
    schedule: FareSchedule,
}

impl<P: MapProvider> RouteService<P, NoCache> {
    pub fn uncached(provider: P, schedule: FareSchedule) -> Self {
        Self::new(provider, NoCache, schedule)
    }
}

impl<P, C> RouteService<P, C>
where
    P: MapProvider,
    C: RouteCache,
{
    pub fn new(provider: P, cache: C, schedule: FareSchedule) -> Self {
        Self {
            provider,
            cache,
            schedule,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn schedule(&self) -> &FareSchedule {
        &self.schedule
    }

    /// A failing cache never fails the lookup, the provider is asked instead.
    pub async fn route(
        &self,
        origin: &Waypoint,
        destination: &Waypoint,
    ) -> anyhow::Result<Option<RouteData>> {
        match self.cache.get(origin, destination) {
            Ok(Some(route)) => {
                debug!("[CACHE HIT] {} → {}", origin, destination);
                return Ok(Some(route));
            }
            Ok(None) => {}
            Err(error) => warn!("Route cache read failed: {}", error),
        }

        let Some(route) = self.provider.route(origin, destination).await? else {
            return Ok(None);
        };

        if let Err(error) = self.cache.put(origin, destination, &route) {
            warn!("Route cache write failed: {}", error);
        }

        Ok(Some(route))
    }

    pub async fn preview(
        &self,
        origin: &Waypoint,
        destination: &Waypoint,
        now: &Zoned,
    ) -> anyhow::Result<Option<TripPreview>> {
        let route = self.route(origin, destination).await?;

        Ok(route.map(|route| TripPreview::from_route(&route.summary(), &self.schedule, now)))
    }
}
