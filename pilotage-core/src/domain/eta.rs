use chrono::{DateTime, Duration, Utc};

// Fixed travel-time offsets, in minutes, applied to a phase's anchor
// timestamp. Arriving traffic waits longer than anchorage-to-anchorage
// shifts at the same lifecycle stage.
pub const ARRIVING_REQUESTED_MIN: i64 = 120;
pub const ARRIVING_ONBOARD_MIN: i64 = 120;
pub const ARRIVING_UNDERWAY_MIN: i64 = 90;
pub const TRANSIT_ARRIVED_MIN: i64 = 90;
pub const TRANSIT_ONBOARD_MIN: i64 = 60;
pub const TRANSIT_UNDERWAY_MIN: i64 = 30;

/// Estimated time of arrival/departure: the anchor timestamp plus a fixed
/// offset. No calendar semantics; Singapore has no DST.
pub fn estimate(anchor: DateTime<Utc>, offset_minutes: i64) -> DateTime<Utc> {
    anchor + Duration::minutes(offset_minutes)
}
