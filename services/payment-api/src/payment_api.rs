//! Payment Highway Payment API client.

use bytes::Bytes;
use http::header;
use http::Method;
use log::debug;
use log::warn;
use paymenthighway_core::time::{format_utc_timestamp, now};
use paymenthighway_core::{Context, Error, ParameterSet, Result, Signer};
use percent_encoding::utf8_percent_encode;
use serde::Serialize;
use uuid::Uuid;

use crate::constants::*;
use crate::model::*;
use crate::Config;

/// PaymentApi calls the Payment Highway Payment API.
///
/// Every request is signed with the configured key and every response
/// signature is validated before its body is parsed.
///
/// ```no_run
/// use paymenthighway_core::{Context, OsEnv};
/// use paymenthighway_http_send_reqwest::ReqwestHttpSend;
/// use paymenthighway_payment_api::{Config, PaymentApi};
///
/// # async fn example() -> paymenthighway_core::Result<()> {
/// let ctx = Context::new()
///     .with_http_send(ReqwestHttpSend::default())
///     .with_env(OsEnv);
/// let api = PaymentApi::new(ctx.clone(), Config::new().from_env(&ctx))?;
///
/// let init = api.init_transaction().await?;
/// println!("transaction: {:?}", init.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PaymentApi {
    ctx: Context,
    service_url: String,
    account: String,
    merchant: String,
    check_response_status: bool,
    signer: Signer,
}

impl PaymentApi {
    /// Create a client from config.
    ///
    /// Returns a `ConfigInvalid` error if a required value is missing or the
    /// service url isn't a plain `scheme://host[:port]` url.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let service_url = required(config.service_url, "service_url")?;
        let service_url = service_url.trim_end_matches('/').to_string();
        let uri: http::Uri = service_url.parse().map_err(|e| {
            Error::config_invalid(format!("service_url {service_url} is invalid")).with_source(e)
        })?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::config_invalid(format!(
                "service_url {service_url} must have scheme and host"
            )));
        }
        if uri.path() != "/" || uri.query().is_some() {
            return Err(Error::config_invalid(format!(
                "service_url {service_url} must not have path or query"
            )));
        }

        let signer = Signer::new(
            required(config.signature_key_id, "signature_key_id")?,
            required(config.signature_secret, "signature_secret")?,
        );

        Ok(Self {
            ctx,
            service_url,
            account: required(config.account, "account")?,
            merchant: required(config.merchant, "merchant")?,
            check_response_status: config.check_response_status.unwrap_or_default(),
            signer,
        })
    }

    /// Set whether to ensure that the result code of every response is `100`.
    ///
    /// If enabled, any other code returns an `ErrorResponse` error carrying the
    /// [`ResultStatus`] as source.
    pub fn with_check_response_status(mut self, check_response_status: bool) -> Self {
        self.check_response_status = check_response_status;
        self
    }

    /// The signer used by this client, also useful for validating form redirects.
    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Initialize a new transaction.
    pub async fn init_transaction(&self) -> Result<InitTransactionResponse> {
        self.execute(Method::POST, "/transaction", None).await
    }

    /// Debit a transaction.
    pub async fn debit_transaction(
        &self,
        transaction_id: Uuid,
        request: &TransactionRequest,
    ) -> Result<TransactionResponse> {
        let uri = format!("/transaction/{transaction_id}/debit");
        self.execute(Method::POST, &uri, Some(to_json(request)?))
            .await
    }

    /// Credit a transaction.
    pub async fn credit_transaction(
        &self,
        transaction_id: Uuid,
        request: &TransactionRequest,
    ) -> Result<TransactionResponse> {
        let uri = format!("/transaction/{transaction_id}/credit");
        self.execute(Method::POST, &uri, Some(to_json(request)?))
            .await
    }

    /// Revert a transaction, entirely or partly.
    pub async fn revert_transaction(
        &self,
        transaction_id: Uuid,
        request: &RevertTransactionRequest,
    ) -> Result<TransactionResponse> {
        let uri = format!("/transaction/{transaction_id}/revert");
        self.execute(Method::POST, &uri, Some(to_json(request)?))
            .await
    }

    /// Commit a transaction that was debited with `commit: false`.
    pub async fn commit_transaction(
        &self,
        transaction_id: Uuid,
        request: &CommitTransactionRequest,
    ) -> Result<CommitTransactionResponse> {
        let uri = format!("/transaction/{transaction_id}/commit");
        self.execute(Method::POST, &uri, Some(to_json(request)?))
            .await
    }

    /// Get the outcome of a transaction.
    pub async fn transaction_result(
        &self,
        transaction_id: Uuid,
    ) -> Result<TransactionResultResponse> {
        let uri = format!("/transaction/{transaction_id}/result");
        self.execute(Method::GET, &uri, None).await
    }

    /// Get the status of a transaction.
    pub async fn transaction_status(
        &self,
        transaction_id: Uuid,
    ) -> Result<TransactionStatusResponse> {
        let uri = format!("/transaction/{transaction_id}");
        self.execute(Method::GET, &uri, None).await
    }

    /// Search transactions by merchant order id.
    pub async fn search_orders(&self, order: &str) -> Result<OrderSearchResponse> {
        let uri = format!(
            "/transactions/?order={}",
            utf8_percent_encode(order, &QUERY_VALUE_ENCODE_SET)
        );
        self.execute(Method::GET, &uri, None).await
    }

    /// Get the card token and card details of a tokenization.
    pub async fn tokenization(&self, tokenization_id: Uuid) -> Result<TokenizationResponse> {
        let uri = format!("/tokenization/{tokenization_id}");
        self.execute(Method::GET, &uri, None).await
    }

    /// Fetch the daily batch report, `date` is `yyyyMMdd`.
    pub async fn fetch_report(&self, date: &str) -> Result<ReportResponse> {
        check_report_date(date)?;
        let uri = format!("/report/batch/{date}");
        self.execute(Method::GET, &uri, None).await
    }

    /// Fetch the reconciliation report of a day, `date` is `yyyyMMdd`.
    ///
    /// With `use_date_processed` the date is matched against the processing date
    /// of settlements instead of their value date.
    pub async fn fetch_reconciliation_report(
        &self,
        date: &str,
        use_date_processed: bool,
    ) -> Result<ReconciliationReportResponse> {
        check_report_date(date)?;
        let uri =
            format!("/report/reconciliation/{date}?use-date-processed={use_date_processed}");
        self.execute(Method::GET, &uri, None).await
    }

    /// Parameters sent with every request.
    fn sph_params(&self) -> ParameterSet {
        ParameterSet::new()
            .with(SPH_API_VERSION, API_VERSION)
            .with(SPH_ACCOUNT, &self.account)
            .with(SPH_MERCHANT, &self.merchant)
            .with(SPH_TIMESTAMP, format_utc_timestamp(now()))
            .with(SPH_REQUEST_ID, Uuid::new_v4().to_string())
    }

    async fn execute<T: Response>(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> Result<T> {
        let body = body.unwrap_or_default();

        let mut req = http::Request::builder()
            .method(method)
            .uri(format!("{}{uri}", self.service_url))
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON);
        for (k, v) in self.sph_params().iter() {
            req = req.header(k, v);
        }
        let (mut parts, _) = req.body(())?.into_parts();
        self.signer.sign_request(&mut parts, &body)?;

        let method = parts.method.clone();
        let signed_uri = parts
            .uri
            .path_and_query()
            .map(|v| v.as_str())
            .unwrap_or("/")
            .to_string();
        debug!("payment api request: {method} {signed_uri}");

        let resp = self
            .ctx
            .http_send_as_string(http::Request::from_parts(parts, Bytes::from(body)))
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::unexpected(format!(
                "{method} {signed_uri} failed with status {status}: {}",
                resp.body()
            )));
        }

        if !self
            .signer
            .validate_response(method.as_str(), &signed_uri, resp.headers(), resp.body())
        {
            warn!("response signature of {method} {signed_uri} doesn't match");
            return Err(Error::authentication(format!(
                "response signature of {method} {signed_uri} doesn't match"
            )));
        }

        let resp: T = serde_json::from_str(resp.body())?;
        self.check_result(&resp)?;
        Ok(resp)
    }

    fn check_result<T: Response>(&self, resp: &T) -> Result<()> {
        if !self.check_response_status {
            return Ok(());
        }

        match resp.result() {
            Some(result) if result.is_ok() => Ok(()),
            Some(result) => {
                Err(Error::error_response(result.to_string()).with_source(result.clone()))
            }
            None => Err(Error::error_response("response without result status")),
        }
    }
}

fn required(v: Option<String>, name: &str) -> Result<String> {
    match v {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::config_invalid(format!("{name} is required"))),
    }
}

fn to_json(v: &impl Serialize) -> Result<String> {
    serde_json::to_string(v)
        .map_err(|e| Error::request_invalid("request body can't be serialized").with_source(e))
}

fn check_report_date(date: &str) -> Result<()> {
    if date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Error::request_invalid(format!(
            "report date {date} must be formatted as yyyyMMdd"
        )))
    }
}
