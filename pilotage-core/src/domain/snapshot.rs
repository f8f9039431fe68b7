use std::fmt::Display;

use chrono::{DateTime, Utc};

/// Location code class, decided by the code's first character. The source
/// system prefixes anchorages with `A` and pilot boarding grounds with `P`;
/// the comparison is case sensitive to match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationClass {
    Anchorage,
    BoardingGround,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationCode(String);

impl LocationCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn class(&self) -> LocationClass {
        match self.0.as_bytes().first() {
            Some(b'A') => LocationClass::Anchorage,
            Some(b'P') => LocationClass::BoardingGround,
            _ => LocationClass::Other,
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for LocationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for LocationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One captured observation of a vessel's pilotage lifecycle, as received
/// from the upstream source. Immutable; the engine never writes back.
///
/// All timestamps are optional: the wire format carries raw strings and a
/// malformed value degrades to absence rather than an error. The four
/// lifecycle timestamps are assumed (not enforced) to be non-decreasing in
/// the order arrival, onboard, start, end.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Vessel identity exactly as received; not validated here.
    pub imo: String,
    pub vessel_name: String,
    pub from: LocationCode,
    pub to: LocationCode,
    /// When the vessel requested pilotage service.
    pub requested_at: Option<DateTime<Utc>>,
    /// When the vessel arrived at the pilot boarding location.
    pub arrived_at: Option<DateTime<Utc>>,
    /// When the pilot boarded.
    pub pilot_onboard_at: Option<DateTime<Utc>>,
    /// When the pilotage service started.
    pub service_started_at: Option<DateTime<Utc>>,
    /// When the pilotage service ended.
    pub service_ended_at: Option<DateTime<Utc>>,
    /// When this snapshot of the lifecycle was taken.
    pub captured_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_first_character() {
        assert_eq!(LocationCode::new("AXYZ").class(), LocationClass::Anchorage);
        assert_eq!(
            LocationCode::new("PABC").class(),
            LocationClass::BoardingGround
        );
        assert_eq!(LocationCode::new("BXYZ").class(), LocationClass::Other);
        assert_eq!(LocationCode::new("").class(), LocationClass::Other);
    }

    #[test]
    fn class_is_case_sensitive() {
        assert_eq!(LocationCode::new("axyz").class(), LocationClass::Other);
        assert_eq!(LocationCode::new("pabc").class(), LocationClass::Other);
    }
}
