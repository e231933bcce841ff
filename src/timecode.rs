use chrono::{NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

// @module: EBU-TT clock values and SRT timestamps

// @const: EBU-TT media time (HH:MM:SS.fff)
static EBUTT_TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})\.([0-9]{1,3})$").unwrap()
});

/// Parse an EBU-TT `begin`/`end` attribute value.
///
/// The fraction is read as a decimal fraction of a second, so `.5` is
/// 500 ms and `.05` is 50 ms. Anything that is not a valid time of day in
/// `HH:MM:SS.fff` form yields `None`.
pub fn parse_ebutt_timestamp(value: &str) -> Option<NaiveTime> {
    let caps = EBUTT_TIMESTAMP_REGEX.captures(value)?;

    let hours: u32 = caps[1].parse().ok()?;
    let minutes: u32 = caps[2].parse().ok()?;
    let seconds: u32 = caps[3].parse().ok()?;

    // ASCII digits only, so the byte length is the digit count
    let fraction = &caps[4];
    let digits: u32 = fraction.parse().ok()?;
    let millis = digits * 10u32.pow(3u32.checked_sub(fraction.len() as u32)?);

    // Seconds are limited to 59 here; chrono would accept 60 as a leap second
    if seconds > 59 {
        return None;
    }

    NaiveTime::from_hms_milli_opt(hours, minutes, seconds, millis)
}

/// Milliseconds since midnight, rounded half-up from the stored fraction
pub fn round_to_millis(time: NaiveTime) -> u64 {
    let whole_seconds = u64::from(time.num_seconds_from_midnight());
    let nanos = u64::from(time.nanosecond());

    whole_seconds * 1_000 + (nanos + 500_000) / 1_000_000
}

/// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Render a time of day as an SRT timestamp
pub fn format_srt_timestamp(time: NaiveTime) -> String {
    format_timestamp(round_to_millis(time))
}
