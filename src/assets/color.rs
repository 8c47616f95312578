use crate::foundation::core::Rgba8;
use crate::foundation::error::{SnapError, SnapResult};

/// Parse a hex color: `#RGB` or `#RRGGBB` (leading `#` optional, case-insensitive).
///
/// 3-digit colors are expanded by nibble duplication, so `#F00` and `#FF0000` are identical.
pub fn parse_hex_color(s: &str) -> SnapResult<Rgba8> {
    let raw = s.trim();
    let hex = raw.strip_prefix('#').unwrap_or(raw);

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SnapError::config(format!("invalid hex color \"{raw}\"")));
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_owned(),
        _ => {
            return Err(SnapError::config(format!(
                "hex color must be #RGB or #RRGGBB (got \"{raw}\")"
            )));
        }
    };

    let byte = |i: usize| -> SnapResult<u8> {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|_| SnapError::config(format!("invalid hex color \"{raw}\"")))
    };
    Ok(Rgba8::rgb(byte(0)?, byte(2)?, byte(4)?))
}

/// Parse a CSS-like color: hex (see [`parse_hex_color`]), `#RRGGBBAA`, `rgb(r, g, b)` or
/// `rgba(r, g, b, a)` with `a` in `[0, 1]`.
pub fn parse_color(s: &str) -> SnapResult<Rgba8> {
    let raw = s.trim();
    let lower = raw.to_ascii_lowercase();

    if let Some(body) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
    {
        return parse_functional(raw, body);
    }

    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if hex.len() == 8 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        let rgb = parse_hex_color(&hex[..6])?;
        let a = u8::from_str_radix(&hex[6..8], 16)
            .map_err(|_| SnapError::config(format!("invalid hex color \"{raw}\"")))?;
        return Ok(Rgba8 { a, ..rgb });
    }

    parse_hex_color(raw)
}

fn parse_functional(raw: &str, body: &str) -> SnapResult<Rgba8> {
    let inner = body
        .strip_suffix(')')
        .ok_or_else(|| SnapError::config(format!("unterminated color function \"{raw}\"")))?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(SnapError::config(format!(
            "color function needs 3 or 4 components (got \"{raw}\")"
        )));
    }

    let channel = |p: &str| -> SnapResult<u8> {
        let v: f64 = p
            .parse()
            .map_err(|_| SnapError::config(format!("invalid color component \"{p}\"")))?;
        if !(0.0..=255.0).contains(&v) {
            return Err(SnapError::config(format!(
                "color component out of range 0..255: {p}"
            )));
        }
        Ok(v.round() as u8)
    };

    let a = match parts.get(3) {
        None => 255,
        Some(p) => {
            let v: f64 = p
                .parse()
                .map_err(|_| SnapError::config(format!("invalid alpha component \"{p}\"")))?;
            if !(0.0..=1.0).contains(&v) {
                return Err(SnapError::config(format!("alpha out of range 0..1: {p}")));
            }
            (v * 255.0).round() as u8
        }
    };

    Ok(Rgba8::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        a,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
