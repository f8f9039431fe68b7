use async_trait::async_trait;

use crate::{Imo, Result, Snapshot};

/// The engine's only seam to the outside world: something that can produce
/// the pilotage lifecycle snapshots recorded for a vessel.
#[async_trait]
pub trait PilotageSource: Send + Sync {
    async fn pilotage_snapshots(&self, imo: &Imo) -> Result<Vec<Snapshot>>;
}
