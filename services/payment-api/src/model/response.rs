use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Deserializer;
use uuid::Uuid;

use crate::constants::RESULT_CODE_OK;

/// Result status every Payment Highway response carries.
///
/// Code `100` means success; the service documents the others.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, thiserror::Error)]
#[error("error code {code} ({message})")]
pub struct ResultStatus {
    /// Result code like `100`.
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    /// Human readable message like `OK`.
    #[serde(default)]
    pub message: String,
}

impl ResultStatus {
    /// Returns `true` if the code is `100`.
    pub fn is_ok(&self) -> bool {
        self.code == RESULT_CODE_OK
    }
}

/// Response is implemented by all typed Payment Highway responses.
pub trait Response: DeserializeOwned {
    /// The result status, if the service sent one.
    fn result(&self) -> Option<&ResultStatus>;
}

macro_rules! impl_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Response for $ty {
                fn result(&self) -> Option<&ResultStatus> {
                    self.result.as_ref()
                }
            }
        )+
    };
}

impl_response!(
    InitTransactionResponse,
    TransactionResponse,
    TransactionOutcomeResponse,
    TransactionStatusResponse,
    OrderSearchResponse,
    TokenizationResponse,
    ReportResponse,
    ReconciliationReportResponse,
);

/// Card details as returned by the service. The pan is never returned in full.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CardInfo {
    /// Card scheme like `Visa`.
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    /// Last four digits.
    pub partial_pan: Option<String>,
    /// Expiry year.
    pub expire_year: Option<String>,
    /// Expiry month.
    pub expire_month: Option<String>,
    /// First six digits.
    pub bin: Option<String>,
    /// `debit`, `credit` or `unknown`.
    pub funding: Option<String>,
    /// `consumer`, `business` or `unknown`.
    pub category: Option<String>,
    /// Issuer country, ISO 3166-1 alpha-2.
    pub country_code: Option<String>,
    /// Whether cvc is required for token payments: `yes`, `no` or `not_tested`.
    pub cvc_required: Option<String>,
}

/// Customer details as seen by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CustomerInfo {
    /// IP address of the customer.
    pub network_address: Option<String>,
    /// Country resolved from the network address.
    pub country_code: Option<String>,
}

/// Response of `POST /transaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InitTransactionResponse {
    /// The new transaction id.
    pub id: Option<Uuid>,
    /// Result status.
    pub result: Option<ResultStatus>,
}

/// Response of debit, credit and revert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransactionResponse {
    /// Filing code of the acquirer, set for successful debits.
    pub filing_code: Option<String>,
    /// Result status.
    pub result: Option<ResultStatus>,
}

/// Outcome of a finished transaction, returned by commit and result queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransactionOutcomeResponse {
    /// Card token, only set when the transaction was paid with a token.
    pub card_token: Option<Uuid>,
    /// Card details.
    pub card: Option<CardInfo>,
    /// Customer details.
    pub customer: Option<CustomerInfo>,
    /// 3-D Secure outcome: `no`, `attempted` or `fully`.
    pub cardholder_authentication: Option<String>,
    /// Filing code of the acquirer.
    pub filing_code: Option<String>,
    /// Whether the transaction is committed.
    pub committed: Option<bool>,
    /// Committed amount.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub committed_amount: Option<String>,
    /// Result status.
    pub result: Option<ResultStatus>,
}

/// Response of `POST /transaction/{id}/commit`.
pub type CommitTransactionResponse = TransactionOutcomeResponse;

/// Response of `GET /transaction/{id}/result`.
pub type TransactionResultResponse = TransactionOutcomeResponse;

/// State of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransactionState {
    /// State name like `ok`.
    pub state: Option<String>,
    /// State code.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub code: Option<String>,
}

/// A transaction as listed by status queries and order searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransactionStatus {
    /// Transaction id.
    pub id: Option<Uuid>,
    /// Transaction type like `debit`.
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// Original amount.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub amount: Option<String>,
    /// Amount left after reverts.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub current_amount: Option<String>,
    /// Currency.
    pub currency: Option<String>,
    /// Creation time.
    pub timestamp: Option<String>,
    /// Last modification time.
    pub modified: Option<String>,
    /// Filing code of the acquirer.
    pub filing_code: Option<String>,
    /// Authorization code of the acquirer.
    pub authorization_code: Option<String>,
    /// Current state.
    pub status: Option<TransactionState>,
    /// Card details.
    pub card: Option<CardInfo>,
    /// Whether the transaction is committed.
    pub committed: Option<bool>,
    /// Committed amount.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub committed_amount: Option<String>,
}

/// Response of `GET /transaction/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransactionStatusResponse {
    /// The transaction.
    pub transaction: Option<TransactionStatus>,
    /// Result status.
    pub result: Option<ResultStatus>,
}

/// Response of `GET /transactions/?order={order}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrderSearchResponse {
    /// Transactions made for the order.
    pub transactions: Vec<TransactionStatus>,
    /// Result status.
    pub result: Option<ResultStatus>,
}

/// Response of `GET /tokenization/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenizationResponse {
    /// The card token to pay with later.
    pub card_token: Option<Uuid>,
    /// Card details.
    pub card: Option<CardInfo>,
    /// Customer details.
    pub customer: Option<CustomerInfo>,
    /// 3-D Secure outcome: `no`, `attempted` or `fully`.
    pub cardholder_authentication: Option<String>,
    /// Result status.
    pub result: Option<ResultStatus>,
}

/// One settlement batch of a daily report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settlement {
    /// Settlement id.
    pub id: Option<Uuid>,
    /// Batch number.
    pub batch: Option<String>,
    /// Settlement time.
    pub timestamp: Option<String>,
    /// Acquirer reference.
    pub reference: Option<String>,
    /// Number of transactions in the batch.
    pub transaction_count: Option<u64>,
    /// Net amount of the batch.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub net_amount: Option<String>,
    /// Currency.
    pub currency: Option<String>,
    /// Transactions of the batch.
    pub transactions: Vec<TransactionStatus>,
}

/// Response of `GET /report/batch/{date}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportResponse {
    /// Settlements of the day.
    pub settlements: Vec<Settlement>,
    /// Result status.
    pub result: Option<ResultStatus>,
}

/// One settlement as reported by the acquirer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReconciliationSettlement {
    /// Batch number.
    pub batch: Option<String>,
    /// Acquirer reference.
    pub reference: Option<String>,
    /// Processing date.
    pub date_processed: Option<String>,
    /// Net amount.
    #[serde(deserialize_with = "opt_string_or_number")]
    pub net_amount: Option<String>,
    /// Currency.
    pub currency: Option<String>,
    /// Number of transactions.
    pub transaction_count: Option<u64>,
}

/// Response of `GET /report/reconciliation/{date}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReconciliationReportResponse {
    /// Settlements of the day.
    pub reconciliation_settlements: Vec<ReconciliationSettlement>,
    /// Result status.
    pub result: Option<ResultStatus>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(v: StringOrNumber) -> Self {
        match v {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

/// The service sends codes and amounts as numbers while older versions sent strings.
fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    StringOrNumber::deserialize(d).map(String::from)
}

fn opt_string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<StringOrNumber>::deserialize(d)?.map(String::from))
}
