//! Parsing of KOM/XOM best-effort times.
//!
//! Strava renders segment best efforts as display text, not numbers:
//! `"6:36"`, `"13s"`, occasionally noisier strings with locale punctuation.
//! `parse_kom_time` normalizes them into whole seconds and returns `None`
//! for anything it cannot make sense of. It never panics.

/// Convert raw best-effort text into seconds.
///
/// Steps, first match wins:
/// 1. characters other than digits, `:` and `s` are dropped;
/// 2. one colon means minutes:seconds (two colons or more is unparseable);
/// 3. a trailing `s` means a bare seconds count;
/// 4. otherwise the first contiguous digit run in the raw text is the
///    seconds count, so punctuation acts as a boundary (`"200,2000"` is
///    200 seconds, not 2002000).
///
/// Malformed input is logged at debug level and yields `None`.
pub fn parse_kom_time(raw: &str) -> Option<u32> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ':' || *c == 's')
        .collect();

    if cleaned.contains(':') {
        let parts: Vec<&str> = cleaned.split(':').collect();
        if parts.len() != 2 {
            tracing::debug!("Unexpected KOM time format: {:?}", raw);
            return None;
        }
        match (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
            (Ok(minutes), Ok(seconds)) => Some(minutes * 60 + seconds),
            _ => {
                tracing::debug!("Unexpected KOM time format: {:?}", raw);
                None
            }
        }
    } else if cleaned.ends_with('s') {
        match cleaned.replace('s', "").parse::<u32>() {
            Ok(seconds) => Some(seconds),
            Err(_) => {
                tracing::debug!("Could not parse KOM time: {:?}", raw);
                None
            }
        }
    } else {
        match first_digit_run(raw).map(str::parse::<u32>) {
            Some(Ok(seconds)) => Some(seconds),
            _ => {
                tracing::debug!("Could not parse KOM time: {:?}", raw);
                None
            }
        }
    }
}

/// First contiguous run of ASCII digits in the raw text.
fn first_digit_run(raw: &str) -> Option<&str> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let rest = &raw[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
