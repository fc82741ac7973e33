use anyhow::Result;
use paymenthighway_core::ErrorKind;
use pretty_assertions::assert_eq;

use super::init_mock_api;
use super::mock::MockResponse;

#[tokio::test]
async fn test_fetch_report() -> Result<()> {
    let (mock, api) = init_mock_api();
    mock.respond(MockResponse::ok(
        r#"{
            "settlements": [{
                "id": "5b4d5dd0-5ba4-4a0a-b7c4-1f8ef5f4c4a7",
                "batch": "000123",
                "timestamp": "2015-01-01T20:15:03Z",
                "reference": "11111111111",
                "transaction_count": 2,
                "net_amount": 9999,
                "currency": "EUR",
                "transactions": [{"id": "f23a9be0-15fe-43df-98ac-92f6a5731c3b", "amount": 9999}]
            }],
            "result": {"code": 100, "message": "OK"}
        }"#,
    ));

    let resp = api.fetch_report("20150101").await?;
    assert_eq!(resp.settlements.len(), 1);
    let settlement = &resp.settlements[0];
    assert_eq!(settlement.batch.as_deref(), Some("000123"));
    assert_eq!(settlement.net_amount.as_deref(), Some("9999"));
    assert_eq!(settlement.transactions.len(), 1);

    let req = mock.last_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path_and_query, "/report/batch/20150101");
    assert!(req.signature_valid);
    Ok(())
}

#[tokio::test]
async fn test_fetch_reconciliation_report() -> Result<()> {
    let (mock, api) = init_mock_api();
    mock.respond(MockResponse::ok(
        r#"{
            "reconciliation_settlements": [{
                "batch": "000123",
                "date_processed": "2015-01-02",
                "net_amount": "9999",
                "currency": "EUR",
                "transaction_count": 2
            }],
            "result": {"code": 100, "message": "OK"}
        }"#,
    ));

    let resp = api.fetch_reconciliation_report("20150101", false).await?;
    assert_eq!(resp.reconciliation_settlements.len(), 1);
    assert_eq!(
        resp.reconciliation_settlements[0].date_processed.as_deref(),
        Some("2015-01-02")
    );

    api.fetch_reconciliation_report("20150101", true).await?;

    let uris: Vec<String> = mock
        .requests()
        .into_iter()
        .inspect(|r| assert!(r.signature_valid))
        .map(|r| r.path_and_query)
        .collect();
    assert_eq!(
        uris,
        vec![
            "/report/reconciliation/20150101?use-date-processed=false",
            "/report/reconciliation/20150101?use-date-processed=true",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_fetch_report_invalid_date() -> Result<()> {
    let (mock, api) = init_mock_api();

    let err = api.fetch_report("2015-01-01").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    let err = api
        .fetch_reconciliation_report("../transaction", false)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);

    assert!(mock.requests().is_empty());
    Ok(())
}
