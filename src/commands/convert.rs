// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Convert command - change the base of an integer

use super::Settings;
use crate::radix;
use anyhow::{Context, Result};
use serde_json::json;

/// Run the convert command
pub fn run(value: &str, from: u32, to: u32, settings: &Settings) -> Result<()> {
    let converted = radix::convert(value, from, to)
        .with_context(|| format!("Cannot convert '{value}' from base {from} to base {to}"))?;

    if settings.json {
        let out = json!({ "input": value, "from": from, "to": to, "output": converted });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{converted}");
    }
    Ok(())
}
