// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Shadow geometry and sun exposure costs
//!
//! Sun altitude and azimuth are inputs here; computing them from a date and
//! place is left to an ephemeris library.

use crate::types::{GeoPoint, Shadow, SunPosition};

/// Meters per degree of latitude in the flat-earth approximation
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Length of the shadow cast by a vertical object of `height_m`.
///
/// `None` when the sun is at or below the horizon.
#[must_use]
pub fn shadow_length(height_m: f64, altitude_deg: f64) -> Option<f64> {
    if altitude_deg <= 0.0 {
        return None;
    }
    Some(height_m / altitude_deg.to_radians().tan())
}

/// Move `distance_m` from `(lat, lon)` along compass bearing `azimuth_deg`.
///
/// Good for the few hundred meters a shadow spans, not for navigation.
#[must_use]
pub fn offset_coordinates(lat: f64, lon: f64, distance_m: f64, azimuth_deg: f64) -> GeoPoint {
    let bearing = azimuth_deg.to_radians();
    let delta_lat = distance_m * bearing.cos() / METERS_PER_DEGREE;
    let delta_lon = distance_m * bearing.sin() / (METERS_PER_DEGREE * lat.to_radians().cos());
    GeoPoint {
        lat: lat + delta_lat,
        lon: lon + delta_lon,
    }
}

/// Shadow of a vertical object standing at `origin`
#[must_use]
pub fn cast_shadow(origin: GeoPoint, height_m: f64, sun: SunPosition) -> Option<Shadow> {
    let length = shadow_length(height_m, sun.altitude)?;
    let bearing = (sun.azimuth + 180.0).rem_euclid(360.0);
    Some(Shadow {
        length,
        bearing,
        origin,
        tip: offset_coordinates(origin.lat, origin.lon, length, bearing),
    })
}

/// Cost of walking a segment of `length` under a sun at `altitude_deg`.
///
/// Sunlit segments get heavier as the sun climbs, up to twice their length
/// at zenith. With the sun down, cost is plain length.
#[must_use]
pub fn exposure_cost(length: f64, altitude_deg: f64) -> f64 {
    if altitude_deg <= 0.0 {
        return length;
    }
    length * (1.0 + altitude_deg.min(90.0).to_radians().sin())
}
