use std::fmt::{Debug, Formatter};

use paymenthighway_core::utils::Redact;
use serde::Serialize;
use uuid::Uuid;

/// A previously tokenized card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The card token.
    pub id: Uuid,
    /// Card verification code, only needed when the payment requires it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
}

impl Token {
    /// Create a token without cvc.
    pub fn new(id: Uuid) -> Self {
        Self { id, cvc: None }
    }

    /// Set cvc
    pub fn with_cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }
}

/// Raw card data.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Primary account number.
    pub pan: String,
    /// Expiry year, `2017`.
    pub expiry_year: String,
    /// Expiry month, `11`.
    pub expiry_month: String,
    /// Card verification code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
}

impl Card {
    /// Create a card.
    pub fn new(
        pan: impl Into<String>,
        expiry_year: impl Into<String>,
        expiry_month: impl Into<String>,
    ) -> Self {
        Self {
            pan: pan.into(),
            expiry_year: expiry_year.into(),
            expiry_month: expiry_month.into(),
            cvc: None,
        }
    }

    /// Set cvc
    pub fn with_cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }
}

impl Debug for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("pan", &Redact::from(&self.pan))
            .field("expiry_year", &self.expiry_year)
            .field("expiry_month", &self.expiry_month)
            .field("cvc", &self.cvc.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Customer information sent along a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    /// IP address of the customer.
    pub network_address: String,
}

impl Customer {
    /// Create customer info from its network address.
    pub fn new(network_address: impl Into<String>) -> Self {
        Self {
            network_address: network_address.into(),
        }
    }
}

/// The instrument a transaction is paid with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentInstrument {
    /// Pay with a card token.
    Token(Token),
    /// Pay with raw card data.
    Card(Card),
}

/// Body of debit and credit requests.
///
/// ```
/// use paymenthighway_payment_api::{Card, Customer, TransactionRequest};
///
/// let card = Card::new("4153013999700024", "2017", "11").with_cvc("024");
/// let req = TransactionRequest::with_card(card, 9999, "EUR")
///     .with_customer(Customer::new("83.145.208.186"))
///     .with_commit(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    /// Amount in the smallest currency unit.
    pub amount: u64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Wait for the acquirer before responding.
    pub blocking: bool,
    /// Merchant order id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Token or card.
    #[serde(flatten)]
    pub instrument: PaymentInstrument,
    /// Customer info.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Commit right away, or only authorize when `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<bool>,
}

impl TransactionRequest {
    /// Create a blocking transaction paid with a card token.
    pub fn with_token(token: Token, amount: u64, currency: impl Into<String>) -> Self {
        Self::new(PaymentInstrument::Token(token), amount, currency)
    }

    /// Create a blocking transaction paid with raw card data.
    pub fn with_card(card: Card, amount: u64, currency: impl Into<String>) -> Self {
        Self::new(PaymentInstrument::Card(card), amount, currency)
    }

    fn new(instrument: PaymentInstrument, amount: u64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            blocking: true,
            order: None,
            instrument,
            customer: None,
            commit: None,
        }
    }

    /// Set blocking
    pub fn with_blocking(mut self, blocking: bool) -> Self {
        self.blocking = blocking;
        self
    }

    /// Set order
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Set customer
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Set commit
    pub fn with_commit(mut self, commit: bool) -> Self {
        self.commit = Some(commit);
        self
    }
}

/// Body of revert requests.
///
/// Without an amount the whole remaining amount is reverted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevertTransactionRequest {
    /// Amount to revert in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    /// Wait for the acquirer before responding.
    pub blocking: bool,
}

impl Default for RevertTransactionRequest {
    fn default() -> Self {
        Self {
            amount: None,
            blocking: true,
        }
    }
}

impl RevertTransactionRequest {
    /// Revert the whole remaining amount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Revert only `amount`.
    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set blocking
    pub fn with_blocking(mut self, blocking: bool) -> Self {
        self.blocking = blocking;
        self
    }
}

/// Body of commit requests, used for transactions debited with `commit: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitTransactionRequest {
    /// Amount to commit in the smallest currency unit.
    pub amount: u64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Wait for the acquirer before responding.
    pub blocking: bool,
}

impl CommitTransactionRequest {
    /// Create a blocking commit request.
    pub fn new(amount: u64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            blocking: true,
        }
    }

    /// Set blocking
    pub fn with_blocking(mut self, blocking: bool) -> Self {
        self.blocking = blocking;
        self
    }
}
