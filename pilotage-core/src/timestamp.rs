use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Asia::Singapore;

/// All rendered timestamps use Singapore local time (UTC+8, no DST).
pub const NOT_AVAILABLE: &str = "N/A";

/// Parses an upstream timestamp string, failing softly: absent, empty, or
/// unparsable input yields `None`. A value with an explicit zone offset is
/// honored as given; a bare local-style value is taken to be UTC, which is
/// how the source system emits its lifecycle timestamps.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Renders a timestamp for display in Singapore time, day before month:
/// `1 Jan 2024, 18:00`. An absent timestamp renders as `N/A`.
pub fn format_display(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        None => NOT_AVAILABLE.into(),
        Some(ts) => ts
            .with_timezone(&Singapore)
            .format("%-d %b %Y, %H:%M")
            .to_string(),
    }
}
