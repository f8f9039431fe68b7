mod direction;
mod eta;
mod messages;
mod phase;
mod recent;
mod report;
mod snapshot;

pub use direction::*;
pub use eta::*;
pub use messages::*;
pub use phase::*;
pub use recent::*;
pub use report::*;
pub use snapshot::*;

#[cfg(test)]
pub(crate) mod test_util {
    use chrono::{DateTime, Utc};

    use super::{LocationCode, Snapshot};

    pub fn ts(raw: &str) -> DateTime<Utc> {
        crate::parse_timestamp(Some(raw)).unwrap()
    }

    /// A snapshot with every lifecycle timestamp absent; tests fill in the
    /// fields their presence pattern needs.
    pub fn snapshot(from: &str, to: &str) -> Snapshot {
        Snapshot {
            imo: "9074729".into(),
            vessel_name: "EVER TRUST".into(),
            from: LocationCode::new(from),
            to: LocationCode::new(to),
            requested_at: None,
            arrived_at: None,
            pilot_onboard_at: None,
            service_started_at: None,
            service_ended_at: None,
            captured_at: None,
        }
    }
}
