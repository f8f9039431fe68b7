use strum::Display;

use super::{LocationClass, LocationCode};

/// Journey direction derived from the origin/destination code classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Direction {
    ArrivingAtPort,
    DepartingPort,
    MovingBetweenAnchorages,
    Unknown,
}

impl Direction {
    /// Total over all code pairs; anything outside the three recognized
    /// class combinations is `Unknown`.
    pub fn classify(from: &LocationCode, to: &LocationCode) -> Direction {
        use LocationClass::*;

        match (from.class(), to.class()) {
            (BoardingGround, Anchorage) => Direction::ArrivingAtPort,
            (Anchorage, BoardingGround) => Direction::DepartingPort,
            (Anchorage, Anchorage) => Direction::MovingBetweenAnchorages,
            _ => Direction::Unknown,
        }
    }
}
