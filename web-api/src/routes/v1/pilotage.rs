use actix_web::web::{self, Path};
use pilotage_core::{DisplayRow, Imo, PilotageSource, status_rows};
use serde::Serialize;
use tracing::error;

use crate::error::ApiError;

/// Returns the recent pilotage status rows recorded for the given vessel,
/// one row per retained snapshot. The IMO check digit gates the upstream
/// call; identifiers that fail it are rejected without leaving the process.
#[tracing::instrument(skip(source))]
pub async fn pilotage_status<T: PilotageSource + 'static>(
    source: web::Data<T>,
    path: Path<String>,
) -> Result<web::Json<Vec<PilotageStatus>>, ApiError> {
    let imo: Imo = path.into_inner().parse().map_err(|error| {
        error!("rejected pilotage lookup: {error}");
        ApiError::InvalidImo
    })?;

    let snapshots = source.pilotage_snapshots(&imo).await.map_err(|error| {
        error!(%imo, "failed to retrieve pilotage snapshots: {error}");
        ApiError::RetrievalFailed
    })?;

    let rows = status_rows(snapshots)
        .into_iter()
        .map(PilotageStatus::from)
        .collect();

    Ok(web::Json(rows))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PilotageStatus {
    pub imo: String,
    pub vessel_name: String,
    pub status_english: String,
    pub status_chinese: String,
    pub updated_at: String,
    pub latest: bool,
}

impl From<DisplayRow> for PilotageStatus {
    fn from(v: DisplayRow) -> Self {
        let DisplayRow {
            imo,
            vessel_name,
            status,
            updated_at,
            latest,
        } = v;

        PilotageStatus {
            imo,
            vessel_name,
            status_english: status.english,
            status_chinese: status.chinese,
            updated_at,
            latest,
        }
    }
}
