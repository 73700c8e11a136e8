/// Unit stripping for raw value-cell text.
///
/// Each metric has one anchored unit pattern. The embedded value is captured
/// only when the whole text matches; anything else — wrong unit, sensor
/// outage markers like "N/A", compound ranges — yields `None`. No defaults
/// are ever substituted.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{DirectionValue, Magnitude, WholeCount};

// ---------------------------------------------------------------------------
// Unit patterns
// ---------------------------------------------------------------------------

fn direction_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\w+) \( (\d+) deg true \)$").expect("direction pattern must compile")
    })
}

fn speed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+.*) kts$").expect("speed pattern must compile"))
}

fn temperature_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+\.\d+) .*$").expect("temperature pattern must compile"))
}

fn height_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+.*) ft$").expect("height pattern must compile"))
}

fn period_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+) sec$").expect("period pattern must compile"))
}

fn decimal_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.\d+").expect("decimal token pattern must compile"))
}

// ---------------------------------------------------------------------------
// Per-metric normalizers
// ---------------------------------------------------------------------------

/// "<COMPASS> ( <DEGREES> deg true )" → compass label plus whole degrees.
/// Both parts come from the same match; there is no partial direction.
pub fn direction(raw: &str) -> Option<DirectionValue> {
    let caps = direction_re().captures(raw)?;
    let compass = caps[1].to_string();
    let angle_deg = caps[2].parse().ok()?;
    Some(DirectionValue { angle_deg, compass })
}

/// "<NUMBER> kts" → decimal magnitude.
pub fn speed_kts(raw: &str) -> Option<Magnitude> {
    let caps = speed_re().captures(raw)?;
    Magnitude::from_token(&caps[1])
}

/// "<DECIMAL> <anything>" → the leading decimal token. Covers both air
/// temperature ("18.3 C (64.9 F)") and water temperature cells.
pub fn temperature(raw: &str) -> Option<Magnitude> {
    let caps = temperature_re().captures(raw)?;
    Magnitude::from_token(&caps[1])
}

/// "<NUMBER> ft" → decimal magnitude.
pub fn height_ft(raw: &str) -> Option<Magnitude> {
    let caps = height_re().captures(raw)?;
    Magnitude::from_token(&caps[1])
}

/// "<INTEGER> sec" → integer magnitude.
pub fn period_sec(raw: &str) -> Option<WholeCount> {
    let caps = period_re().captures(raw)?;
    WholeCount::from_token(&caps[1])
}

/// Fallback: the first decimal-formatted token anywhere in the text.
pub fn decimal_token(raw: &str) -> Option<Magnitude> {
    let token = decimal_token_re().find(raw)?;
    Magnitude::from_token(token.as_str())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Direction ----------------------------------------------------------

    #[test]
    fn test_direction_captures_compass_and_degrees_together() {
        let d = direction("NW ( 315 deg true )").expect("direction should parse");
        assert_eq!(d.compass, "NW");
        assert_eq!(d.angle_deg, 315);
    }

    #[test]
    fn test_direction_rejects_partial_forms() {
        assert!(direction("NW").is_none());
        assert!(direction("( 315 deg true )").is_none());
        assert!(direction("NW ( 315 deg magnetic )").is_none());
    }

    // --- Scalars ------------------------------------------------------------

    #[test]
    fn test_speed_captures_exact_decimal_text() {
        let m = speed_kts("12.3 kts").expect("speed should parse");
        assert_eq!(m.text, "12.3");
        assert_eq!(m.value, 12.3);
    }

    #[test]
    fn test_speed_requires_the_kts_unit() {
        assert!(speed_kts("12.3 m/s").is_none());
        assert!(speed_kts("12.3 kts gusting").is_none());
    }

    #[test]
    fn test_temperature_takes_the_leading_decimal_token() {
        let m = temperature("14.5 C (58.1 F)").expect("temperature should parse");
        assert_eq!(m.text, "14.5");
    }

    #[test]
    fn test_temperature_requires_a_decimal_point() {
        // Whole-degree cells do not fit the observed pattern and must be
        // reported absent rather than reinterpreted.
        assert!(temperature("14 C").is_none());
    }

    #[test]
    fn test_height_captures_exact_decimal_text() {
        let m = height_ft("6.2 ft").expect("height should parse");
        assert_eq!(m.text, "6.2");
        assert_eq!(m.value, 6.2);
    }

    #[test]
    fn test_period_captures_integer_text() {
        let c = period_sec("8 sec").expect("period should parse");
        assert_eq!(c.text, "8");
        assert_eq!(c.value, 8);
    }

    #[test]
    fn test_period_rejects_decimal_seconds() {
        assert!(period_sec("8.5 sec").is_none());
    }

    // --- Failure policy -----------------------------------------------------

    #[test]
    fn test_malformed_input_is_absent_not_zero() {
        assert!(height_ft("N/A").is_none());
        assert!(speed_kts("N/A").is_none());
        assert!(period_sec("N/A").is_none());
        assert!(temperature("N/A").is_none());
        assert!(direction("N/A").is_none());
    }

    #[test]
    fn test_decimal_token_fallback_finds_first_token() {
        let m = decimal_token("reading was 3.7 then 4.1").expect("token should be found");
        assert_eq!(m.text, "3.7");
    }

    #[test]
    fn test_decimal_token_fallback_needs_a_decimal() {
        assert!(decimal_token("no numbers here").is_none());
        assert!(decimal_token("42").is_none());
    }
}
