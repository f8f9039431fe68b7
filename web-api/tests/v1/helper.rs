use std::net::TcpListener;

use async_trait::async_trait;
use pilotage_core::{Imo, LocationCode, PilotageSource, RetrievalSnafu, Snapshot, parse_timestamp};
use snafu::IntoError;
use web_api::startup::create_server;

/// Serves a fixed snapshot list (or a retrieval failure) in place of the
/// real upstream client.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub snapshots: Vec<Snapshot>,
    pub fail: bool,
}

#[async_trait]
impl PilotageSource for StaticSource {
    async fn pilotage_snapshots(&self, _imo: &Imo) -> pilotage_core::Result<Vec<Snapshot>> {
        if self.fail {
            return Err(RetrievalSnafu.into_error(Box::new(std::io::Error::other(
                "upstream unavailable",
            ))));
        }
        Ok(self.snapshots.clone())
    }
}

pub struct TestHelper {
    address: String,
}

impl TestHelper {
    pub async fn spawn(source: StaticSource) -> TestHelper {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = create_server(source, listener).unwrap();
        tokio::spawn(server);

        TestHelper {
            address: format!("http://127.0.0.1:{port}"),
        }
    }

    pub fn pilotage_url(&self, imo: &str) -> String {
        format!("{}/v1.0/pilotage/{imo}", self.address)
    }
}

pub fn arriving_snapshot(captured_at: &str) -> Snapshot {
    Snapshot {
        imo: "9074729".into(),
        vessel_name: "EVER TRUST".into(),
        from: LocationCode::new("PABC"),
        to: LocationCode::new("AXYZ"),
        requested_at: parse_timestamp(Some("2024-01-01T08:00:00")),
        arrived_at: parse_timestamp(Some("2024-01-01T10:00:00")),
        pilot_onboard_at: None,
        service_started_at: None,
        service_ended_at: None,
        captured_at: parse_timestamp(Some(captured_at)),
    }
}
