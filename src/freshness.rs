/// Observation staleness detection.
///
/// Buoys report roughly hourly; a reading more than two hours old usually
/// means a telemetry gap rather than calm seas, so the output flags it. The
/// timestamp comes from the page's conditions caption, e.g.
/// "Conditions at 46053 as of (8:00 pm UTC) 1800 GMT on 05/01/2024".
///
/// # Clock injection
/// `is_stale_at` accepts a `now: DateTime<Utc>` parameter rather than calling
/// `Utc::now()` internally. This makes staleness purely deterministic in
/// tests without mocking or time manipulation.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::model::NdbcError;

/// Readings at least this old are stale.
pub const STALE_AFTER_SECS: i64 = 2 * 60 * 60;

fn caption_time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{4}) GMT on (\d{2}/\d{2}/\d{4})").expect("caption pattern must compile")
    })
}

// ---------------------------------------------------------------------------
// Timestamp reconstruction
// ---------------------------------------------------------------------------

/// Rebuilds the UTC observation instant from a conditions caption.
///
/// The caption carries a zero-padded 24-hour "HHMM GMT on MM/DD/YYYY"
/// fragment. A caption without that fragment is a malformed page, fatal for
/// the whole reading.
pub fn parse_observation_time(caption: &str) -> Result<DateTime<Utc>, NdbcError> {
    let caps = caption_time_re()
        .captures(caption)
        .ok_or_else(|| NdbcError::TimestampFormat(caption.trim().to_string()))?;

    let stamp = format!("{} {}", &caps[1], &caps[2]);
    let naive = NaiveDateTime::parse_from_str(&stamp, "%H%M %m/%d/%Y")
        .map_err(|e| NdbcError::TimestampFormat(format!("{}: {}", stamp, e)))?;

    Ok(naive.and_utc())
}

// ---------------------------------------------------------------------------
// Staleness check
// ---------------------------------------------------------------------------

/// Returns `true` when `observed` is at least `STALE_AFTER_SECS` before `now`.
///
/// Exactly at the threshold counts as stale:
///   elapsed >= 2h  →  stale
///   elapsed <  2h  →  fresh
/// A timestamp in the future is not stale.
pub fn is_stale_at(observed: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(observed).num_seconds() >= STALE_AFTER_SECS
}

/// Convenience wrapper that uses the real current time.
/// Use `is_stale_at` in tests to keep them deterministic.
pub fn is_stale(observed: DateTime<Utc>) -> bool {
    is_stale_at(observed, Utc::now())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    /// A fixed "now" used across all tests: 2024-05-01 20:00:00 UTC.
    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap()
    }

    // --- Timestamp parsing --------------------------------------------------

    #[test]
    fn test_caption_timestamp_parses_as_utc() {
        let observed = parse_observation_time(
            "Conditions at 46053 as of (8:00 pm UTC) 1800 GMT on 05/01/2024:",
        )
        .expect("well-formed caption should parse");
        assert_eq!(observed, Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap());
    }

    #[test]
    fn test_caption_without_time_fragment_is_an_error() {
        let result = parse_observation_time("Conditions at 46053, updated recently");
        assert!(
            matches!(result, Err(NdbcError::TimestampFormat(_))),
            "caption without a GMT fragment should fail, got {:?}",
            result
        );
    }

    #[test]
    fn test_caption_with_impossible_date_is_an_error() {
        let result = parse_observation_time("Conditions at ... 1800 GMT on 13/45/2024");
        assert!(result.is_err(), "month 13 should not parse, got {:?}", result);
    }

    // --- Staleness ----------------------------------------------------------

    #[test]
    fn test_reading_just_under_two_hours_old_is_fresh() {
        let observed = fixed_now() - Duration::seconds(2 * 60 * 60 - 1); // 1:59:59
        assert!(!is_stale_at(observed, fixed_now()));
    }

    #[test]
    fn test_reading_exactly_two_hours_old_is_stale() {
        let observed = fixed_now() - Duration::seconds(2 * 60 * 60);
        assert!(is_stale_at(observed, fixed_now()));
    }

    #[test]
    fn test_reading_from_yesterday_is_stale() {
        // Whole-day gaps must register; second-of-day arithmetic would wrap
        // a 24-hour-old reading back to "fresh".
        let observed = fixed_now() - Duration::hours(24);
        assert!(is_stale_at(observed, fixed_now()));
    }

    #[test]
    fn test_future_reading_is_not_stale() {
        let observed = fixed_now() + Duration::minutes(10);
        assert!(!is_stale_at(observed, fixed_now()));
    }
}
