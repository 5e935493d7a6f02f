//! Byte-size parsing and formatting helpers.

use crate::error::Error;

/// Parses a size with an optional `K`, `M` or `G` suffix (binary units).
///
/// Suffixes are case-insensitive; a bare number is a byte count.
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] if the string is empty, the number does
/// not parse, the suffix is unknown, or the result overflows `usize`.
pub fn parse_size(s: &str) -> std::result::Result<usize, Error> {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    let s = s.trim();
    let Some(last_char) = s.chars().last() else {
        return Err(Error::InvalidSize("Empty size".to_string()));
    };

    let (number_part, multiplier) = match last_char.to_ascii_uppercase() {
        'K' => (&s[..s.len() - 1], KB),
        'M' => (&s[..s.len() - 1], MB),
        'G' => (&s[..s.len() - 1], GB),
        _ if last_char.is_ascii_digit() => (s, 1),
        _ => {
            return Err(Error::InvalidSize(format!(
                "Invalid size suffix: {last_char}"
            )))
        }
    };

    let number: usize = number_part
        .parse()
        .map_err(|_| Error::InvalidSize(format!("Invalid number: {number_part}")))?;

    number
        .checked_mul(multiplier)
        .ok_or_else(|| Error::InvalidSize("Size too large (overflow)".to_string()))
}

/// Formats a byte count for humans.
///
/// Uses `KiB`, `MiB` or `GiB` once the value reaches the unit.
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= GIB {
        format!("{:.1} GiB", bytes_f / GIB)
    } else if bytes_f >= MIB {
        format!("{:.1} MiB", bytes_f / MIB)
    } else if bytes_f >= KIB {
        format!("{:.1} KiB", bytes_f / KIB)
    } else {
        format!("{bytes} B")
    }
}
