use chrono::{DateTime, Utc};

use super::{
    Direction, LocationCode, Snapshot,
    eta::{
        ARRIVING_ONBOARD_MIN, ARRIVING_REQUESTED_MIN, ARRIVING_UNDERWAY_MIN, TRANSIT_ARRIVED_MIN,
        TRANSIT_ONBOARD_MIN, TRANSIT_UNDERWAY_MIN, estimate,
    },
};

/// Lifecycle stage of an anchorage-to-anchorage shift, in sequence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitStage {
    Arrived,
    PilotBoarded,
    PilotageStarted,
}

impl TransitStage {
    pub fn english(&self) -> &'static str {
        match self {
            TransitStage::Arrived => "Arrived",
            TransitStage::PilotBoarded => "Pilot boarded",
            TransitStage::PilotageStarted => "Pilotage started",
        }
    }

    pub fn chinese(&self) -> &'static str {
        match self {
            TransitStage::Arrived => "已到达",
            TransitStage::PilotBoarded => "引航员登船",
            TransitStage::PilotageStarted => "引航开始",
        }
    }
}

/// The inferred current stage of a vessel's pilotage journey, carrying the
/// values its narrative needs. Derivation is a pure function of the journey
/// direction and the presence pattern of the four lifecycle timestamps.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Pilotage completed; the vessel is at its destination anchorage.
    /// Produced by both the arriving and between-anchorages directions.
    ReachedAnchorage {
        to: LocationCode,
        ended_at: DateTime<Utc>,
    },
    /// Waiting at the pilot boarding ground; the ETA extrapolates from the
    /// service-request time, so it is absent when that time is.
    AtBoardingGround {
        from: LocationCode,
        to: LocationCode,
        arrived_at: DateTime<Utc>,
        eta: Option<DateTime<Utc>>,
    },
    PilotBoarded {
        to: LocationCode,
        onboard_at: DateTime<Utc>,
        eta: DateTime<Utc>,
    },
    PilotageStarted {
        to: LocationCode,
        started_at: DateTime<Utc>,
        eta: DateTime<Utc>,
    },
    /// Departing vessel has left its anchorage.
    LeftAnchorage {
        from: LocationCode,
        left_at: DateTime<Utc>,
    },
    /// Departing vessel still at anchor; the departure estimate is the
    /// service-request time itself.
    AtAnchorage {
        from: LocationCode,
        departing_at: Option<DateTime<Utc>>,
    },
    /// Under way between two anchorages.
    Transit {
        from: LocationCode,
        to: LocationCode,
        stage: TransitStage,
        at: DateTime<Utc>,
        eta: DateTime<Utc>,
    },
    Unknown,
}

impl Phase {
    /// Derives the phase for one snapshot. Each direction is an ordered rule
    /// table over the presence pattern of (arrival, onboard, start, end);
    /// the first matching arm wins and unmatched patterns fall through to
    /// `Unknown`. The arm order is part of the contract: rows must not be
    /// reordered or merged, and the gaps are intentional.
    pub fn derive(direction: Direction, snapshot: &Snapshot) -> Phase {
        match direction {
            Direction::ArrivingAtPort => arriving(snapshot),
            Direction::DepartingPort => departing(snapshot),
            Direction::MovingBetweenAnchorages => transit(snapshot),
            Direction::Unknown => Phase::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Phase::Unknown)
    }
}

fn arriving(s: &Snapshot) -> Phase {
    match (
        s.arrived_at,
        s.pilot_onboard_at,
        s.service_started_at,
        s.service_ended_at,
    ) {
        (Some(_), Some(_), Some(_), Some(ended_at)) => Phase::ReachedAnchorage {
            to: s.to.clone(),
            ended_at,
        },
        (Some(arrived_at), None, None, None) => Phase::AtBoardingGround {
            from: s.from.clone(),
            to: s.to.clone(),
            arrived_at,
            eta: s
                .requested_at
                .map(|requested| estimate(requested, ARRIVING_REQUESTED_MIN)),
        },
        (Some(_), Some(onboard_at), None, None) => Phase::PilotBoarded {
            to: s.to.clone(),
            onboard_at,
            eta: estimate(onboard_at, ARRIVING_ONBOARD_MIN),
        },
        (Some(_), Some(_), Some(started_at), None) => Phase::PilotageStarted {
            to: s.to.clone(),
            started_at,
            eta: estimate(started_at, ARRIVING_UNDERWAY_MIN),
        },
        _ => Phase::Unknown,
    }
}

fn departing(s: &Snapshot) -> Phase {
    match (
        s.arrived_at,
        s.pilot_onboard_at,
        s.service_started_at,
        s.service_ended_at,
    ) {
        // A departing vessel's arrival timestamp marks it leaving the
        // anchorage, whatever the other three say.
        (Some(left_at), _, _, _) => Phase::LeftAnchorage {
            from: s.from.clone(),
            left_at,
        },
        (None, None, None, None) => Phase::AtAnchorage {
            from: s.from.clone(),
            departing_at: s.requested_at,
        },
        _ => Phase::Unknown,
    }
}

fn transit(s: &Snapshot) -> Phase {
    match (
        s.arrived_at,
        s.pilot_onboard_at,
        s.service_started_at,
        s.service_ended_at,
    ) {
        (Some(at), None, None, None) => Phase::Transit {
            from: s.from.clone(),
            to: s.to.clone(),
            stage: TransitStage::Arrived,
            at,
            eta: estimate(at, TRANSIT_ARRIVED_MIN),
        },
        (Some(_), Some(at), None, None) => Phase::Transit {
            from: s.from.clone(),
            to: s.to.clone(),
            stage: TransitStage::PilotBoarded,
            at,
            eta: estimate(at, TRANSIT_ONBOARD_MIN),
        },
        (Some(_), Some(_), Some(at), None) => Phase::Transit {
            from: s.from.clone(),
            to: s.to.clone(),
            stage: TransitStage::PilotageStarted,
            at,
            eta: estimate(at, TRANSIT_UNDERWAY_MIN),
        },
        // Completion narrates the same way as an arriving vessel reaching
        // its anchorage, end time included.
        (Some(_), Some(_), Some(_), Some(ended_at)) => Phase::ReachedAnchorage {
            to: s.to.clone(),
            ended_at,
        },
        _ => Phase::Unknown,
    }
}
