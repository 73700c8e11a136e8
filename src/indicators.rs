/// Display bucket classification for normalized metrics.
///
/// Pure, stateless mappings from numeric or categorical values to the glyphs
/// the pretty output uses. Every function is total over its input type; out
/// of the sixteen compass labels, anything else gets the unknown glyph.

// ---------------------------------------------------------------------------
// Wave height tiers
// ---------------------------------------------------------------------------

/// Maps wave height in feet to a four-symbol tier, filling up as the
/// height climbs.
pub fn height_indicator(feet: f64) -> &'static str {
    if feet <= 1.0 {
        "💛💛💛💛"
    } else if feet <= 3.0 {
        "💙💛💛💛"
    } else if feet <= 5.0 {
        "💙💙💛💛"
    } else if feet <= 8.0 {
        "💙💙💙💛"
    } else {
        "💙💙💙💙"
    }
}

// ---------------------------------------------------------------------------
// Wave period tiers
// ---------------------------------------------------------------------------

/// Maps dominant period in whole seconds to short/medium/long swell.
pub fn period_indicator(seconds: i64) -> &'static str {
    if seconds <= 6 {
        "🔴"
    } else if seconds <= 9 {
        "🟡"
    } else {
        "🟢"
    }
}

// ---------------------------------------------------------------------------
// Compass glyph pairs
// ---------------------------------------------------------------------------

/// Glyph pair shown for a direction the page did not report, or reported
/// with a label outside the 16-point compass.
pub const UNKNOWN_DIRECTION: &str = "❓";

/// Arrow pair per compass label. Arrows point where the wave or wind is
/// going (a north reading travels southward).
pub static DIRECTION_GLYPHS: &[(&str, &str)] = &[
    ("N", "⬇️ ⬇️"),
    ("NNE", "⬇️ ↙️"),
    ("NE", "↙️ ↙️"),
    ("ENE", "⬅️ ↙️"),
    ("E", "⬅️ ⬅️"),
    ("ESE", "⬅️ ↖️"),
    ("SE", "↖️ ↖️"),
    ("SSE", "⬆️ ↖️"),
    ("S", "⬆️ ⬆️"),
    ("SSW", "⬆️ ↗️"),
    ("SW", "↗️ ↗️"),
    ("WSW", "➡️ ↗️"),
    ("W", "➡️ ➡️"),
    ("WNW", "➡️ ↘️"),
    ("NW", "↘️ ↘️"),
    ("NNW", "⬇️ ↘️"),
];

/// Looks up the glyph pair for a compass label.
pub fn direction_indicator(compass: &str) -> &'static str {
    DIRECTION_GLYPHS
        .iter()
        .find(|(label, _)| *label == compass)
        .map(|(_, glyphs)| *glyphs)
        .unwrap_or(UNKNOWN_DIRECTION)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
