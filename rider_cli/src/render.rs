use comfy_table::Table;
use map_providers::map_provider::{Place, PlacePrediction};
use trip_geometry::{RideClassEstimate, TripPreview};

pub fn estimates_table(estimates: &[RideClassEstimate]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Class", "Seats", "Pickup", "Price"]);

    for estimate in estimates {
        table.add_row(vec![
            estimate.display_name.clone(),
            estimate.seat_capacity.clone(),
            estimate.estimated_arrival.clone(),
            format!("{}{}", estimate.currency_symbol, estimate.price),
        ]);
    }

    table
}

pub fn trip_summary(preview: &TripPreview) -> String {
    format!(
        "{:.1} km, {} min, {} points ({:.1} km along the path)",
        preview.distance_km,
        preview.duration_minutes,
        preview.path.len(),
        preview.path_length_km
    )
}

pub fn places_table(places: &[Place]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Address", "Coordinates", "Place id"]);

    for place in places {
        table.add_row(vec![
            place.name.clone(),
            place.address.clone(),
            place.point.to_string(),
            place.place_id.clone().unwrap_or_default(),
        ]);
    }

    table
}

pub fn predictions_table(predictions: &[PlacePrediction]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Place", "Description", "Place id"]);

    for prediction in predictions {
        table.add_row(vec![
            prediction.main_text.clone().unwrap_or_default(),
            prediction.description.clone(),
            prediction.place_id.clone(),
        ]);
    }

    table
}
