use async_trait::async_trait;
use http_client::HttpClient;
use pilotage_core::{Imo, PilotageSource, RetrievalSnafu, Snapshot};
use snafu::IntoError;
use tracing::instrument;

use crate::{PilotageSnapshot, Result};

/// SGTradex pilotage API client. The API exposes a single resource:
/// `GET {base}/pilotage/{imo}`.
#[derive(Debug, Clone)]
pub struct SgtradexClient {
    client: HttpClient,
    base_url: String,
}

impl SgtradexClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), base_url)
    }

    pub fn with_client(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn pilotage_url(&self, imo: &Imo) -> String {
        format!("{}/pilotage/{imo}", self.base_url.trim_end_matches('/'))
    }

    /// All recorded lifecycle snapshots for the vessel, in wire form and
    /// whatever order the API returns them.
    #[instrument(skip(self))]
    pub async fn fetch_pilotage(&self, imo: &Imo) -> Result<Vec<PilotageSnapshot>> {
        Ok(self.client.download(self.pilotage_url(imo)).await?)
    }
}

#[async_trait]
impl PilotageSource for SgtradexClient {
    async fn pilotage_snapshots(&self, imo: &Imo) -> pilotage_core::Result<Vec<Snapshot>> {
        let snapshots = self
            .fetch_pilotage(imo)
            .await
            .map_err(|error| RetrievalSnafu.into_error(Box::new(error)))?;

        Ok(snapshots.into_iter().map(Snapshot::from).collect())
    }
}
