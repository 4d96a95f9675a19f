use std::{
    collections::HashMap,
    hash::{Hash, Hasher},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use fxhash::FxHasher64;
use parking_lot::RwLock;
use thiserror::Error;

use crate::map_provider::{RouteData, Waypoint};

pub const CACHE_FOLDER_ENV_VAR: &str = "RIDER_CACHE_FOLDER";

#[derive(Debug, Error)]
pub enum RouteCacheError {
    #[error("Path {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("Cache I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache entry could not be (de)serialized: {0}")]
    Serde(#[from] serde_json::Error),
}

pub trait RouteCache: Send + Sync {
    fn get(
        &self,
        origin: &Waypoint,
        destination: &Waypoint,
    ) -> Result<Option<RouteData>, RouteCacheError>;

    fn put(
        &self,
        origin: &Waypoint,
        destination: &Waypoint,
        route: &RouteData,
    ) -> Result<(), RouteCacheError>;
}

/// Stable key for an origin/destination pair. Direction matters.
pub fn cache_key(origin: &Waypoint, destination: &Waypoint) -> String {
    let mut hasher = FxHasher64::default();
    origin.hash(&mut hasher);
    destination.hash(&mut hasher);

    format!("{:016x}", hasher.finish())
}

#[derive(Default)]
pub struct NoCache;

impl RouteCache for NoCache {
    fn get(&self, _: &Waypoint, _: &Waypoint) -> Result<Option<RouteData>, RouteCacheError> {
        Ok(None)
    }

    fn put(&self, _: &Waypoint, _: &Waypoint, _: &RouteData) -> Result<(), RouteCacheError> {
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCache {
    routes: RwLock<HashMap<String, RouteData>>,
}

impl MemoryCache {
    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }
}

impl RouteCache for MemoryCache {
    fn get(
        &self,
        origin: &Waypoint,
        destination: &Waypoint,
    ) -> Result<Option<RouteData>, RouteCacheError> {
        Ok(self
            .routes
            .read()
            .get(&cache_key(origin, destination))
            .cloned())
    }

    fn put(
        &self,
        origin: &Waypoint,
        destination: &Waypoint,
        route: &RouteData,
    ) -> Result<(), RouteCacheError> {
        self.routes
            .write()
            .insert(cache_key(origin, destination), route.clone());
        Ok(())
    }
}

/// One JSON file per origin/destination pair.
pub struct FileCache {
    folder: PathBuf,
}

impl FileCache {
    pub fn new(folder: impl Into<PathBuf>) -> Result<Self, RouteCacheError> {
        let folder = folder.into();

        if !folder.is_dir() {
            return Err(RouteCacheError::NotADirectory(folder));
        }

        Ok(Self { folder })
    }

    /// `None` when the cache folder variable is not set.
    pub fn from_env() -> Result<Option<Self>, RouteCacheError> {
        match std::env::var(CACHE_FOLDER_ENV_VAR) {
            Ok(folder) => Ok(Some(Self::new(folder)?)),
            Err(_) => Ok(None),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    fn file_path(&self, origin: &Waypoint, destination: &Waypoint) -> PathBuf {
        self.folder
            .join(format!("{}.json", cache_key(origin, destination)))
    }
}

impl RouteCache for FileCache {
    fn get(
        &self,
        origin: &Waypoint,
        destination: &Waypoint,
    ) -> Result<Option<RouteData>, RouteCacheError> {
        let file_path = self.file_path(origin, destination);

        if !file_path.is_file() {
            return Ok(None);
        }

        let file = std::fs::File::open(file_path)?;
        let route: RouteData = serde_json::from_reader(std::io::BufReader::new(file))?;

        Ok(Some(route))
    }

    fn put(
        &self,
        origin: &Waypoint,
        destination: &Waypoint,
        route: &RouteData,
    ) -> Result<(), RouteCacheError> {
        let file = std::fs::File::create(self.file_path(origin, destination))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, route)?;
        writer.flush()?;

        Ok(())
    }
}
