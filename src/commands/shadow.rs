// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Shadow command - where a building's shadow falls

use super::Settings;
use crate::shadow::cast_shadow;
use crate::types::{GeoPoint, SunPosition};
use anyhow::Result;

/// Run the shadow command
pub fn run(origin: GeoPoint, height: f64, sun: SunPosition, settings: &Settings) -> Result<()> {
    tracing::info!(
        "Sun at altitude {}°, azimuth {}°",
        sun.altitude,
        sun.azimuth
    );
    let shadow = cast_shadow(origin, height, sun);

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&shadow)?);
        return Ok(());
    }

    match shadow {
        Some(s) => {
            println!("{} {:.2} m", settings.heading("Shadow length:"), s.length);
            println!("Bearing: {:.2}°", s.bearing);
            println!("From: {:.6}, {:.6}", s.origin.lat, s.origin.lon);
            println!("To:   {:.6}, {:.6}", s.tip.lat, s.tip.lon);
        }
        None => {
            println!(
                "{}",
                settings.warning("The sun is below the horizon, no shadow.")
            );
        }
    }

    Ok(())
}
