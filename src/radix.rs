// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integer base conversion

use crate::types::{GridError, GridResult};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn check_base(base: u32) -> GridResult<()> {
    if (2..=36).contains(&base) {
        Ok(())
    } else {
        Err(GridError::InvalidBase(base))
    }
}

/// Parse `value` written in `base`.
///
/// Accepts a leading `-`, a `0b`/`0o`/`0x` prefix matching the base,
/// `_` separators and digits in either case.
pub fn parse(value: &str, base: u32) -> GridResult<i128> {
    check_base(base)?;
    let invalid = || GridError::InvalidDigits {
        value: value.to_string(),
        base,
    };

    let trimmed = value.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let prefix = match base {
        2 => Some("0b"),
        8 => Some("0o"),
        16 => Some("0x"),
        _ => None,
    };
    let lower = rest.to_ascii_lowercase();
    let digits: String = prefix
        .and_then(|p| lower.strip_prefix(p))
        .unwrap_or(&lower)
        .chars()
        .filter(|&c| c != '_')
        .collect();
    // from_str_radix would take a sign of its own
    if digits.is_empty() || digits.starts_with('+') {
        return Err(invalid());
    }

    let magnitude = u128::from_str_radix(&digits, base).map_err(|_| invalid())?;
    if negative {
        // i128::MIN has no positive counterpart, so negate as u128
        if magnitude > i128::MIN.unsigned_abs() {
            return Err(invalid());
        }
        #[allow(clippy::cast_possible_wrap)]
        let value = 0u128.wrapping_sub(magnitude) as i128;
        Ok(value)
    } else {
        i128::try_from(magnitude).map_err(|_| invalid())
    }
}

/// Render `value` in `base`, lowercase digits, no prefix
pub fn format(value: i128, base: u32) -> GridResult<String> {
    check_base(base)?;
    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return Ok("0".to_string());
    }

    let mut out = Vec::new();
    let base = u128::from(base);
    while magnitude > 0 {
        // Remainder is below 36
        #[allow(clippy::cast_possible_truncation)]
        out.push(DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
    }
    if value < 0 {
        out.push(b'-');
    }
    out.reverse();
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Convert `value` from one base to another
pub fn convert(value: &str, from_base: u32, to_base: u32) -> GridResult<String> {
    check_base(to_base)?;
    format(parse(value, from_base)?, to_base)
}
