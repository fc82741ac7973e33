//! Request and response bodies of the Payment API.

mod request;
pub use request::{
    Card, CommitTransactionRequest, Customer, PaymentInstrument, RevertTransactionRequest, Token,
    TransactionRequest,
};

mod response;
pub use response::{
    CardInfo, CommitTransactionResponse, CustomerInfo, InitTransactionResponse,
    OrderSearchResponse, ReconciliationReportResponse, ReconciliationSettlement, ReportResponse,
    Response, ResultStatus, Settlement, TokenizationResponse, TransactionOutcomeResponse,
    TransactionResponse, TransactionResultResponse, TransactionState, TransactionStatus,
    TransactionStatusResponse,
};
