use tracing::warn;

use super::{
    BilingualText, Direction, Phase, Snapshot,
    messages::render,
    recent::{DEFAULT_WINDOW, is_most_recent, recent_snapshots},
};
use crate::format_display;

/// One rendered table row. Rows exist only for the duration of a render
/// pass; there is one per retained snapshot, not one per vessel, so recent
/// history stays visible alongside the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub imo: String,
    pub vessel_name: String,
    pub status: BilingualText,
    pub updated_at: String,
    /// True for the newest retained snapshot of the vessel; the
    /// presentation layer highlights it.
    pub latest: bool,
}

/// The full classification pass: window the input, then classify and
/// narrate every retained snapshot. Total over any input; snapshots that
/// fit no rule surface as the Unknown narrative, which is an expected
/// output, not a failure.
pub fn status_rows(snapshots: Vec<Snapshot>) -> Vec<DisplayRow> {
    let retained = recent_snapshots(snapshots, DEFAULT_WINDOW);

    retained
        .iter()
        .map(|snapshot| {
            let direction = Direction::classify(&snapshot.from, &snapshot.to);
            let phase = Phase::derive(direction, snapshot);
            if phase.is_unknown() {
                // Worth counting in production: a drift in the upstream
                // schema shows up here first.
                warn!(
                    imo = %snapshot.imo,
                    %direction,
                    "snapshot matched no journey phase",
                );
            }

            DisplayRow {
                imo: snapshot.imo.clone(),
                vessel_name: snapshot.vessel_name.clone(),
                status: render(&phase),
                updated_at: format_display(snapshot.captured_at),
                latest: is_most_recent(snapshot, &retained),
            }
        })
        .collect()
}
