use std::time::Duration;

/// Parse a compact timeout token like `30s`, `2m`, `1h`, or plain seconds.
///
/// Zero-length windows are rejected; a confirmation that can never be
/// answered is a configuration mistake.
pub fn parse_timeout(raw: &str) -> Option<Duration> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    let mut chars = value.chars();
    let unit = chars.next_back();

    let (number_raw, unit_secs) = match unit {
        Some('s') | Some('S') => (chars.as_str(), 1_u64),
        Some('m') | Some('M') => (chars.as_str(), 60_u64),
        Some('h') | Some('H') => (chars.as_str(), 60_u64 * 60),
        Some(last) if last.is_ascii_digit() => (value, 1_u64),
        _ => return None,
    };

    let number = number_raw.parse::<u64>().ok()?;
    if number == 0 {
        return None;
    }

    number.checked_mul(unit_secs).map(Duration::from_secs)
}
