//! WMO weather interpretation codes.
//!
//! The table is partial on purpose; codes it does not list read as [`UNKNOWN`].
//! See: https://open-meteo.com/en/docs#weathervariables

pub const UNKNOWN: &str = "Unknown";

const TABLE: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (61, "Rain (slight)"),
    (63, "Rain (moderate)"),
    (65, "Rain (heavy)"),
];

/// Human-readable condition for a WMO code.
pub fn describe(code: i32) -> &'static str {
    TABLE
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, text)| *text)
        .unwrap_or(UNKNOWN)
}
