//! Conversions between `H:MM:SS` timestamp strings and integer seconds.
//!
//! Parsing is lenient about missing data (the source dataset marks absent
//! checkpoint times with an en-dash) but strict about shape: anything other
//! than three colon-separated integer fields is a format error.

use crate::error::{Result, SplitError};

/// Sentinel the source dataset uses for a missing checkpoint time
pub const MISSING_SENTINEL: &str = "\u{2013}";

/// Parse an `H:MM:SS` string into seconds.
///
/// Returns `Ok(None)` for null input, an empty string, or the missing-data
/// sentinel; `SplitError::Format` for any other malformed value.
pub fn parse_duration(text: Option<&str>) -> Result<Option<i64>> {
    let Some(text) = text else {
        return Ok(None);
    };
    let text = text.trim();
    if text.is_empty() || text == MISSING_SENTINEL {
        return Ok(None);
    }

    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() != 3 {
        return Err(SplitError::Format {
            value: text.to_string(),
        });
    }

    let parse_field = |field: &str| -> Result<i64> {
        field.parse::<i64>().map_err(|_| SplitError::Format {
            value: text.to_string(),
        })
    };

    let hours = parse_field(fields[0])?;
    let minutes = parse_field(fields[1])?;
    let seconds = parse_field(fields[2])?;
    Ok(Some(hours * 3600 + minutes * 60 + seconds))
}

/// Format seconds as `H:MM:SS`. Hours are unpadded, minutes and seconds are
/// zero-padded to two digits, fractional seconds are truncated.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds as i64;
    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    let secs = total % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}

/// Format seconds as `M:SS` for durations under one hour, falling back to
/// the full `H:MM:SS` form otherwise.
pub fn format_duration_short(seconds: f64) -> String {
    let total = seconds as i64;
    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    let secs = total % 60;
    if hours == 0 {
        format!("{minutes}:{secs:02}")
    } else {
        format!("{hours}:{minutes:02}:{secs:02}")
    }
}

/// Format a per-mile pace in seconds as `M:SS`
pub fn format_pace(seconds: f64) -> String {
    let total = seconds as i64;
    let minutes = total / 60;
    let secs = total % 60;
    format!("{minutes}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse_duration(Some("04:00:00")).unwrap(), Some(14_400));
        assert_eq!(parse_duration(Some("1:01:01")).unwrap(), Some(3661));
        assert_eq!(parse_duration(Some("0:00:00")).unwrap(), Some(0));
    }

    #[test]
    fn test_parse_missing() {
        assert_eq!(parse_duration(None).unwrap(), None);
        assert_eq!(parse_duration(Some("")).unwrap(), None);
        assert_eq!(parse_duration(Some(MISSING_SENTINEL)).unwrap(), None);
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_duration(Some("4:00")),
            Err(SplitError::Format { .. })
        ));
        assert!(matches!(
            parse_duration(Some("1:2:3:4")),
            Err(SplitError::Format { .. })
        ));
        assert!(matches!(
            parse_duration(Some("a:bb:cc")),
            Err(SplitError::Format { .. })
        ));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00:00");
        assert_eq!(format_duration(3661.0), "1:01:01");
        assert_eq!(format_duration(14_400.0), "4:00:00");
        // fractional seconds truncate, never round
        assert_eq!(format_duration(3661.9), "1:01:01");
    }

    #[test]
    fn test_format_duration_short() {
        assert_eq!(format_duration_short(359.0), "5:59");
        assert_eq!(format_duration_short(59.0), "0:59");
        // an hour or more keeps the full form
        assert_eq!(format_duration_short(3661.0), "1:01:01");
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(579.0), "9:39");
        assert_eq!(format_pace(579.36), "9:39");
        assert_eq!(format_pace(600.0), "10:00");
    }

    proptest! {
        #[test]
        fn parse_format_round_trip(secs in 0i64..360_000) {
            let text = format_duration(secs as f64);
            prop_assert_eq!(parse_duration(Some(&text)).unwrap(), Some(secs));
        }
    }
}
