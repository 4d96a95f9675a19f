use std::{fs::File, io::BufReader, path::Path};

use serde::de::DeserializeOwned;
use trip_geometry::FareSchedule;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// The default schedule unless a fares file is given.
pub fn load_fare_schedule(path: Option<&Path>) -> anyhow::Result<FareSchedule> {
    match path {
        Some(path) => read_json(path),
        None => Ok(FareSchedule::default()),
    }
}
