use anyhow::Result;
use http::StatusCode;
use paymenthighway_core::{ErrorKind, ParameterSet};
use paymenthighway_payment_api::{
    Card, CommitTransactionRequest, Customer, ResultStatus, RevertTransactionRequest, Token,
    TransactionRequest,
};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use super::init_mock_api;
use super::mock::{MockResponse, Signing, OK_RESULT, RESPONSE_ID};
use super::SERVICE_URL;

const TRANSACTION_ID: &str = "f23a9be0-15fe-43df-98ac-92f6a5731c3b";

fn transaction_id() -> Uuid {
    Uuid::parse_str(TRANSACTION_ID).expect("must be valid uuid")
}

fn card_request() -> TransactionRequest {
    let card = Card::new("4153013999700024", "2017", "11").with_cvc("024");
    TransactionRequest::with_card(card, 9999, "EUR")
        .with_customer(Customer::new("83.145.208.186"))
        .with_commit(false)
}

#[tokio::test]
async fn test_init_transaction() -> Result<()> {
    let (mock, api) = init_mock_api();
    mock.respond(MockResponse::ok(&format!(
        r#"{{"id":"{TRANSACTION_ID}","result":{{"code":100,"message":"OK"}}}}"#
    )));

    let resp = api.init_transaction().await?;
    assert_eq!(resp.id, Some(transaction_id()));
    assert_eq!(resp.result.map(|r| r.message).as_deref(), Some("OK"));

    let req = mock.last_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.uri, format!("{SERVICE_URL}/transaction"));
    assert_eq!(req.path_and_query, "/transaction");
    assert_eq!(req.body, "");
    assert!(req.signature_valid);

    let header = |name: &str| {
        req.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    };
    assert_eq!(header("user-agent").as_deref(), Some("PaymentHighway Rust Lib"));
    assert_eq!(
        header("content-type").as_deref(),
        Some("application/json; charset=utf-8")
    );
    assert_eq!(header("sph-api-version").as_deref(), Some("20160630"));
    assert_eq!(header("sph-account").as_deref(), Some("test"));
    assert_eq!(header("sph-merchant").as_deref(), Some("test_merchantId"));
    assert!(header("sph-timestamp").is_some());
    assert!(header("sph-request-id").is_some());
    assert!(header("signature").is_some_and(|v| v.starts_with("SPH1 testKey ")));
    Ok(())
}

#[tokio::test]
async fn test_debit_transaction() -> Result<()> {
    let (mock, api) = init_mock_api();
    mock.respond(MockResponse::ok(
        r#"{"filing_code":"150821000001","result":{"code":100,"message":"OK"}}"#,
    ));

    let request = card_request();
    let resp = api.debit_transaction(transaction_id(), &request).await?;
    assert_eq!(resp.filing_code.as_deref(), Some("150821000001"));

    let req = mock.last_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path_and_query, format!("/transaction/{TRANSACTION_ID}/debit"));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&req.body)?,
        serde_json::to_value(&request)?
    );
    assert!(req.signature_valid);
    Ok(())
}

#[tokio::test]
async fn test_credit_transaction_with_token() -> Result<()> {
    let (mock, api) = init_mock_api();

    let token = Token::new(Uuid::parse_str("08cc223a-cf93-437c-97a2-f338eaf0d860")?);
    let request = TransactionRequest::with_token(token, 1990, "EUR").with_order("1000123A");
    api.credit_transaction(transaction_id(), &request).await?;

    let req = mock.last_request();
    assert_eq!(req.path_and_query, format!("/transaction/{TRANSACTION_ID}/credit"));
    assert!(req.body.contains(r#""token":{"id":"08cc223a-cf93-437c-97a2-f338eaf0d860"}"#));
    assert!(req.signature_valid);
    Ok(())
}

#[tokio::test]
async fn test_revert_transaction() -> Result<()> {
    let (mock, api) = init_mock_api();

    api.revert_transaction(transaction_id(), &RevertTransactionRequest::new().with_amount(500))
        .await?;

    let req = mock.last_request();
    assert_eq!(req.path_and_query, format!("/transaction/{TRANSACTION_ID}/revert"));
    assert_eq!(req.body, r#"{"amount":500,"blocking":true}"#);
    assert!(req.signature_valid);
    Ok(())
}

#[tokio::test]
async fn test_commit_transaction() -> Result<()> {
    let (mock, api) = init_mock_api();
    mock.respond(MockResponse::ok(
        r#"{"committed":true,"committed_amount":"9999","result":{"code":100,"message":"OK"}}"#,
    ));

    let resp = api
        .commit_transaction(transaction_id(), &CommitTransactionRequest::new(9999, "EUR"))
        .await?;
    assert_eq!(resp.committed, Some(true));
    assert_eq!(resp.committed_amount.as_deref(), Some("9999"));

    let req = mock.last_request();
    assert_eq!(req.path_and_query, format!("/transaction/{TRANSACTION_ID}/commit"));
    assert!(req.signature_valid);
    Ok(())
}

#[tokio::test]
async fn test_transaction_queries() -> Result<()> {
    let (mock, api) = init_mock_api();

    api.transaction_result(transaction_id()).await?;
    api.transaction_status(transaction_id()).await?;
    api.tokenization(Uuid::parse_str("08cc223a-cf93-437c-97a2-f338eaf0d860")?)
        .await?;
    api.search_orders("order 1/2").await?;

    let requests = mock.requests();
    let uris: Vec<&str> = requests.iter().map(|r| r.path_and_query.as_str()).collect();
    assert_eq!(
        uris,
        vec![
            "/transaction/f23a9be0-15fe-43df-98ac-92f6a5731c3b/result",
            "/transaction/f23a9be0-15fe-43df-98ac-92f6a5731c3b",
            "/tokenization/08cc223a-cf93-437c-97a2-f338eaf0d860",
            "/transactions/?order=order%201%2F2",
        ]
    );
    for req in requests {
        assert_eq!(req.method, "GET");
        assert_eq!(req.body, "");
        assert!(req.signature_valid, "{} must be signed", req.path_and_query);
    }
    Ok(())
}

#[tokio::test]
async fn test_request_ids_are_unique() -> Result<()> {
    let (mock, api) = init_mock_api();

    api.init_transaction().await?;
    api.init_transaction().await?;

    let ids: Vec<_> = mock
        .requests()
        .iter()
        .map(|r| r.headers.get("sph-request-id").cloned())
        .collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    Ok(())
}

#[tokio::test]
async fn test_tampered_response_signature() -> Result<()> {
    let (mock, api) = init_mock_api();
    mock.respond(MockResponse::ok(OK_RESULT).with_signing(Signing::Tampered));

    let err = api.init_transaction().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
    Ok(())
}

#[tokio::test]
async fn test_missing_response_signature() -> Result<()> {
    let (mock, api) = init_mock_api();
    mock.respond(MockResponse::ok(OK_RESULT).with_signing(Signing::Missing));

    let err = api.transaction_status(transaction_id()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
    Ok(())
}

#[tokio::test]
async fn test_http_error_status() -> Result<()> {
    let (mock, api) = init_mock_api();
    mock.respond(
        MockResponse::ok("Unauthorized")
            .with_status(StatusCode::UNAUTHORIZED)
            .with_signing(Signing::Missing),
    );

    let err = api.init_transaction().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert!(err.to_string().contains("401"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_response_body() -> Result<()> {
    let (mock, api) = init_mock_api();
    mock.respond(MockResponse::ok("<html>"));

    let err = api.init_transaction().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
    Ok(())
}

#[tokio::test]
async fn test_response_status_not_checked_by_default() -> Result<()> {
    let (mock, api) = init_mock_api();
    mock.respond(MockResponse::ok(
        r#"{"result":{"code":200,"message":"Authorization failed"}}"#,
    ));

    let resp = api.debit_transaction(transaction_id(), &card_request()).await?;
    assert_eq!(resp.result.map(|r| r.code).as_deref(), Some("200"));
    Ok(())
}

#[tokio::test]
async fn test_response_status_checked() -> Result<()> {
    let (mock, api) = init_mock_api();
    let api = api.with_check_response_status(true);
    mock.respond(MockResponse::ok(
        r#"{"result":{"code":200,"message":"Authorization failed"}}"#,
    ));
    mock.respond(MockResponse::ok("{}"));

    let err = api
        .debit_transaction(transaction_id(), &card_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ErrorResponse);
    assert_eq!(err.to_string(), "error code 200 (Authorization failed)");
    let result = err
        .downcast_source::<ResultStatus>()
        .expect("result must be attached");
    assert_eq!(result.code, "200");
    assert_eq!(result.message, "Authorization failed");

    let err = api.init_transaction().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ErrorResponse);

    api.init_transaction().await?;
    Ok(())
}

#[tokio::test]
async fn test_validate_form_redirect() -> Result<()> {
    let (_, api) = init_mock_api();

    // Sign like the payment form does when redirecting back to the merchant.
    let params = ParameterSet::new()
        .with("sph-account", "test")
        .with("sph-merchant", "test_merchantId")
        .with("sph-order", "1000123A")
        .with("sph-request-id", RESPONSE_ID)
        .with("sph-success", "OK")
        .with("sph-tokenization-id", "08cc223a-cf93-437c-97a2-f338eaf0d860");
    let signature = api.signer().sign("GET", "", &params, "");

    let query = params
        .iter()
        .chain([("signature", signature.as_str())])
        .fold(form_urlencoded_serializer(), |mut s, (k, v)| {
            s.append_pair(k, v);
            s
        })
        .finish();

    assert!(api
        .signer()
        .validate_form_redirect(&ParameterSet::from_query(&query)));
    assert!(!api
        .signer()
        .validate_form_redirect(&ParameterSet::from_query(&query.replace("OK", "FAILURE"))));
    Ok(())
}

fn form_urlencoded_serializer() -> form_urlencoded::Serializer<'static, String> {
    form_urlencoded::Serializer::new(String::new())
}
