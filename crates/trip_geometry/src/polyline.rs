//! Encoded Polyline Algorithm Format.
//!
//! Coordinates are scaled by 1e5, delta-coded against the previous point,
//! zig-zag mapped to unsigned values and written as little-endian 5-bit chunks
//! offset by 63. Every chunk except the last of a value has bit `0x20` set.

use tracing::debug;

use crate::geopoint::GeoPoint;

const PRECISION: f64 = 1e5;
const CHUNK_OFFSET: i64 = 63;
const CONTINUATION_BIT: i64 = 0x20;
const CHUNK_MASK: i64 = 0x1f;

/// Decodes an encoded polyline into its points, in encoding order.
///
/// Malformed input never panics: decoding is best effort and stops at the
/// first value that runs past the end of the input. A trailing latitude
/// without its longitude is dropped.
pub fn decode_polyline(encoded: &str) -> Vec<GeoPoint> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let Some(delta_lat) = next_value(bytes, &mut index) else {
            debug!("Polyline ended inside a latitude value at byte {}", index);
            break;
        };
        let Some(delta_lng) = next_value(bytes, &mut index) else {
            debug!("Polyline ended inside a longitude value at byte {}", index);
            break;
        };

        lat = lat.wrapping_add(delta_lat);
        lng = lng.wrapping_add(delta_lng);

        points.push(GeoPoint::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
    }

    points
}

fn next_value(bytes: &[u8], index: &mut usize) -> Option<i64> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let chunk = i64::from(*bytes.get(*index)?) - CHUNK_OFFSET;
        *index += 1;

        // Shifts past the width of the accumulator only happen on garbage input.
        result |= (chunk & CHUNK_MASK).checked_shl(shift).unwrap_or(0);
        shift = shift.saturating_add(5);

        if chunk < CONTINUATION_BIT {
            break;
        }
    }

    Some(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

/// Encodes points with the same format [`decode_polyline`] reads.
pub fn encode_polyline(points: &[GeoPoint]) -> String {
    let mut encoded = String::new();
    let mut previous_lat: i64 = 0;
    let mut previous_lng: i64 = 0;

    for point in points {
        let lat = (point.latitude * PRECISION).round() as i64;
        let lng = (point.longitude * PRECISION).round() as i64;

        push_value(&mut encoded, lat.wrapping_sub(previous_lat));
        push_value(&mut encoded, lng.wrapping_sub(previous_lng));

        previous_lat = lat;
        previous_lng = lng;
    }

    encoded
}

fn push_value(encoded: &mut String, delta: i64) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };

    while value >= CONTINUATION_BIT {
        encoded.push(chunk_char((value & CHUNK_MASK) | CONTINUATION_BIT));
        value >>= 5;
    }

    encoded.push(chunk_char(value));
}

fn chunk_char(chunk: i64) -> char {
    // chunk is at most 0x3f, so the offset value always fits in printable ASCII
    char::from((chunk + CHUNK_OFFSET) as u8)
}
