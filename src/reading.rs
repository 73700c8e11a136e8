/// Reading assembly and rendering.
///
/// Composes the page lookups, the normalizer, and the freshness check into
/// the wave and wind readings, and renders a combined report either as the
/// nested JSON structure or as the one-line glyph summary.
///
/// Staleness is computed once per parsed page and shared by every metric
/// drawn from it. A field required by the requested kind that fails to match
/// or normalize aborts that reading with `MissingMetric`; library callers who
/// prefer partial data can call the page/normalize layers directly.

use chrono::{DateTime, Utc};

use crate::model::{NdbcError, StationReport, WaveReading, WindReading};
use crate::page::{ExtractMode, StationPage};
use crate::{freshness, indicators, normalize};

// ---------------------------------------------------------------------------
// Label patterns
// ---------------------------------------------------------------------------

pub const WAVE_HEIGHT_LABEL: &str = r"Wave Height \(WVHT\):";
pub const WAVE_PERIOD_LABEL: &str = r"Dominant Wave Period \(DPD\):";
pub const WAVE_DIRECTION_LABEL: &str = r"Mean Wave Direction \(MWD\):";
pub const WATER_TEMP_LABEL: &str = r"Water Temperature \(WTMP\):";
pub const WIND_DIRECTION_LABEL: &str = r"Wind Direction \(WDIR\):";
pub const WIND_SPEED_LABEL: &str = r"Wind Speed \(WSPD\):";
pub const AIR_TEMP_LABEL: &str = r"Air Temperature \(ATMP\):";

/// Labels for the raw swell dump; matched as bare text, not whole cells.
pub const SWELL_LABELS: &[&str] = &["Swell Height", "Swell Period", "Swell Direction"];

fn require<T>(field: &'static str, value: Option<T>) -> Result<T, NdbcError> {
    value.ok_or(NdbcError::MissingMetric(field))
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Assembles the wave reading from a parsed page.
pub fn wave_reading(page: &StationPage) -> Result<WaveReading, NdbcError> {
    wave_reading_at(page, Utc::now())
}

/// Clock-injected variant of `wave_reading`; `now` only feeds the
/// staleness check.
pub fn wave_reading_at(page: &StationPage, now: DateTime<Utc>) -> Result<WaveReading, NdbcError> {
    let observed = freshness::parse_observation_time(&page.conditions_caption()?)?;
    let stale = freshness::is_stale_at(observed, now);

    let raw = |label| page.metric(label, ExtractMode::SiblingCell);
    let height = require("wave height", raw(WAVE_HEIGHT_LABEL).and_then(|t| normalize::height_ft(&t)))?;
    let period = require("wave period", raw(WAVE_PERIOD_LABEL).and_then(|t| normalize::period_sec(&t)))?;
    let direction =
        require("wave direction", raw(WAVE_DIRECTION_LABEL).and_then(|t| normalize::direction(&t)))?;
    let temperature =
        require("water temperature", raw(WATER_TEMP_LABEL).and_then(|t| normalize::temperature(&t)))?;

    Ok(WaveReading { stale, height, period, temperature, direction })
}

/// Assembles the wind reading from a parsed page.
pub fn wind_reading(page: &StationPage) -> Result<WindReading, NdbcError> {
    wind_reading_at(page, Utc::now())
}

/// Clock-injected variant of `wind_reading`.
pub fn wind_reading_at(page: &StationPage, now: DateTime<Utc>) -> Result<WindReading, NdbcError> {
    let observed = freshness::parse_observation_time(&page.conditions_caption()?)?;
    let stale = freshness::is_stale_at(observed, now);

    let raw = |label| page.metric(label, ExtractMode::SiblingCell);
    let speed = require("wind speed", raw(WIND_SPEED_LABEL).and_then(|t| normalize::speed_kts(&t)))?;
    let direction =
        require("wind direction", raw(WIND_DIRECTION_LABEL).and_then(|t| normalize::direction(&t)))?;
    let temperature =
        require("air temperature", raw(AIR_TEMP_LABEL).and_then(|t| normalize::temperature(&t)))?;

    Ok(WindReading { stale, speed, temperature, direction })
}

/// Raw value text for each swell label, via the next-node extraction mode.
/// No normalization and no staleness; this is an inspection aid.
pub fn swell_summary(page: &StationPage) -> Vec<(&'static str, Option<String>)> {
    SWELL_LABELS
        .iter()
        .map(|label| (*label, page.metric(label, ExtractMode::NextNode)))
        .collect()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Renders the combined report as one line:
/// stale marker, height tier + height, wave compass glyphs + label,
/// `@ <period>s` + period tier, then the wind half: stale marker, 💨,
/// speed, wind compass glyphs + label. Absent kinds are skipped; stale
/// markers appear only on stale readings.
pub fn pretty_line(report: &StationReport) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(wave) = &report.wave {
        if wave.stale {
            parts.push("⚠️".to_string());
        }
        parts.push(indicators::height_indicator(wave.height.value).to_string());
        parts.push(format!("{}'", wave.height.text));
        parts.push(indicators::direction_indicator(&wave.direction.compass).to_string());
        parts.push(wave.direction.compass.clone());
        parts.push(format!("@ {}s", wave.period.text));
        parts.push(indicators::period_indicator(wave.period.value).to_string());
    }

    if let Some(wind) = &report.wind {
        if wind.stale {
            parts.push("⚠️".to_string());
        }
        parts.push("💨".to_string());
        parts.push(format!("{}kt", wind.speed.text));
        parts.push(indicators::direction_indicator(&wind.direction.compass).to_string());
        parts.push(wind.direction.compass.clone());
    }

    parts.join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
