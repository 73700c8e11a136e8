/// Core data types for the buoy observation scraper.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no I/O and no parsing logic — only types, their serialized
/// shape, and the crate-wide error enum.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Normalized metric values
// ---------------------------------------------------------------------------

/// A decimal measurement captured from a value cell, e.g. wave height "6.2".
///
/// Holds both the exact captured token (what the page said, and what the
/// structured output emits) and its parsed numeric value (what the indicator
/// classifier needs). Only constructed when the token parses; a token that
/// matched a unit pattern but is not a number yields no metric at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Magnitude {
    pub text: String,
    pub value: f64,
}

impl Magnitude {
    pub fn from_token(token: &str) -> Option<Self> {
        let value = token.parse().ok()?;
        Some(Self { text: token.to_string(), value })
    }
}

impl Serialize for Magnitude {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// An integer measurement, e.g. dominant wave period "9".
#[derive(Debug, Clone, PartialEq)]
pub struct WholeCount {
    pub text: String,
    pub value: i64,
}

impl WholeCount {
    pub fn from_token(token: &str) -> Option<Self> {
        let value = token.parse().ok()?;
        Some(Self { text: token.to_string(), value })
    }
}

impl Serialize for WholeCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// A wave or wind bearing: degrees true plus the 16-point compass label.
///
/// Both parts come from one captured pattern; there is no way to build a
/// direction with only one of them.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionValue {
    pub angle_deg: u16,
    pub compass: String,
}

impl Serialize for DirectionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Angle is emitted as a string to keep the output shape of the
        // historical consumers: {"angle": "315", "indicator": "NW"}.
        let mut state = serializer.serialize_struct("DirectionValue", 2)?;
        state.serialize_field("angle", &self.angle_deg.to_string())?;
        state.serialize_field("indicator", &self.compass)?;
        state.end()
    }
}

// ---------------------------------------------------------------------------
// Station readings
// ---------------------------------------------------------------------------

/// Wave observation for one station, built from a single page fetch.
/// Immutable once assembled; never merged across fetches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveReading {
    pub stale: bool,
    pub height: Magnitude,
    pub period: WholeCount,
    pub temperature: Magnitude,
    pub direction: DirectionValue,
}

/// Wind observation for one station, built from a single page fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindReading {
    pub stale: bool,
    pub speed: Magnitude,
    pub temperature: Magnitude,
    pub direction: DirectionValue,
}

/// Combined report for one invocation. Either side may be absent when the
/// caller only requested one kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave: Option<WaveReading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<WindReading>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or scraping an NDBC station page.
///
/// Missing or ambiguous individual metrics are reported as `None` by the
/// matcher and normalizer, not as errors; `MissingMetric` only appears when
/// the assembler escalates a field that its reading kind requires.
#[derive(Debug, PartialEq)]
pub enum NdbcError {
    /// The station id was empty after trimming.
    EmptyStationId,
    /// Non-2xx HTTP response from the station page.
    HttpStatus(u16),
    /// Transport-level failure (connect, timeout, body read).
    Request(String),
    /// Zero or more than one "Conditions at" caption on the page.
    MalformedCaption { count: usize },
    /// The caption was found but its timestamp fragment did not parse.
    TimestampFormat(String),
    /// A field required for the requested reading kind was absent.
    MissingMetric(&'static str),
}

impl std::fmt::Display for NdbcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NdbcError::EmptyStationId => write!(f, "Station id must be non-empty"),
            NdbcError::HttpStatus(code) => write!(f, "HTTP error: {}", code),
            NdbcError::Request(msg) => write!(f, "Request failed: {}", msg),
            NdbcError::MalformedCaption { count } => {
                write!(f, "Expected exactly one \"Conditions at\" caption, found {}", count)
            }
            NdbcError::TimestampFormat(msg) => {
                write!(f, "Could not parse observation timestamp: {}", msg)
            }
            NdbcError::MissingMetric(field) => write!(f, "Metric unavailable: {}", field),
        }
    }
}

impl std::error::Error for NdbcError {}

impl From<reqwest::Error> for NdbcError {
    fn from(err: reqwest::Error) -> Self {
        NdbcError::Request(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
