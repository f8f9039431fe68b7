use pilotage_core::{LocationCode, Snapshot, parse_timestamp};
use serde::Deserialize;

/// One pilotage lifecycle snapshot exactly as the API serves it. Field
/// names mirror the wire format; timestamps stay raw strings here because
/// the feed intermittently carries empty or malformed values and parsing
/// is the engine's soft-failure concern, not the wire model's.
#[derive(Debug, Clone, Deserialize)]
pub struct PilotageSnapshot {
    /// Vessel name.
    pub pilotage_nm: String,
    /// Vessel IMO number, as the API reports it.
    pub pilotage_imo: String,
    /// When the pilotage service was requested by the vessel.
    pub pilotage_cst_dt_time: String,
    /// When this snapshot of the service status was taken.
    pub pilotage_snapshot_dt: String,
    /// Where the vessel is coming from.
    pub pilotage_loc_from_code: String,
    /// Where the vessel is going.
    pub pilotage_loc_to_code: String,
    /// When the vessel arrived at the pilot boarding location.
    pub pilotage_arrival_dt_time: Option<String>,
    /// When the pilot got on board.
    pub pilotage_onboard_dt_time: Option<String>,
    /// When the pilotage service started.
    pub pilotage_start_dt_time: Option<String>,
    /// When the pilotage service ended.
    pub pilotage_end_dt_time: Option<String>,
}

impl From<PilotageSnapshot> for Snapshot {
    fn from(v: PilotageSnapshot) -> Self {
        Self {
            imo: v.pilotage_imo,
            vessel_name: v.pilotage_nm,
            from: LocationCode::new(v.pilotage_loc_from_code),
            to: LocationCode::new(v.pilotage_loc_to_code),
            requested_at: parse_timestamp(Some(&v.pilotage_cst_dt_time)),
            arrived_at: parse_timestamp(v.pilotage_arrival_dt_time.as_deref()),
            pilot_onboard_at: parse_timestamp(v.pilotage_onboard_dt_time.as_deref()),
            service_started_at: parse_timestamp(v.pilotage_start_dt_time.as_deref()),
            service_ended_at: parse_timestamp(v.pilotage_end_dt_time.as_deref()),
            captured_at: parse_timestamp(Some(&v.pilotage_snapshot_dt)),
        }
    }
}
