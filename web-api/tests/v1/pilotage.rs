use http_client::{HttpClient, StatusCode};
use serde_json::Value;

use super::helper::{arriving_snapshot, StaticSource, TestHelper};

#[tokio::test]
async fn returns_one_row_per_retained_snapshot() {
    let source = StaticSource {
        snapshots: vec![
            arriving_snapshot("2024-01-01T10:05:00"),
            arriving_snapshot("2024-01-01T11:05:00"),
        ],
        ..Default::default()
    };
    let helper = TestHelper::spawn(source).await;

    let rows: Vec<Value> = HttpClient::new()
        .download(helper.pilotage_url("9074729"))
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    // Newest snapshot first and flagged as the vessel's current state.
    assert_eq!(rows[0]["updatedAt"], "1 Jan 2024, 19:05");
    assert_eq!(rows[0]["latest"], true);
    assert_eq!(rows[1]["latest"], false);
    assert_eq!(rows[0]["imo"], "9074729");
    assert_eq!(rows[0]["vesselName"], "EVER TRUST");
    assert_eq!(
        rows[0]["statusEnglish"],
        "Vessel is at Pilot Boarding Ground (PABC) since 1 Jan 2024, 18:00. \
         Estimated arrival at anchor (AXYZ) by 1 Jan 2024, 18:00."
    );
    assert_eq!(
        rows[0]["statusChinese"],
        "船舶在引航员登船地点 (PABC) 自 1 Jan 2024, 18:00。预计到达锚地 (AXYZ) 在 1 Jan 2024, 18:00。"
    );
}

#[tokio::test]
async fn rejects_an_invalid_imo_without_calling_upstream() {
    let helper = TestHelper::spawn(StaticSource::default()).await;

    for imo in ["1234566", "123456", "abcdefg"] {
        let error = HttpClient::new()
            .download::<Vec<Value>>(helper.pilotage_url(imo))
            .await
            .unwrap_err();

        assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
        assert!(error.body().unwrap().contains("InvalidImo"));
    }
}

#[tokio::test]
async fn upstream_failure_is_a_generic_retrieval_error() {
    let source = StaticSource {
        fail: true,
        ..Default::default()
    };
    let helper = TestHelper::spawn(source).await;

    // No retries; a bad gateway is not transient here.
    let error = HttpClient::builder()
        .max_retries(0)
        .build()
        .download::<Vec<Value>>(helper.pilotage_url("9074729"))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::BAD_GATEWAY));
    assert!(error.body().unwrap().contains("RetrievalFailed"));
}
