use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used in Payment Highway services.
pub const PAYMENT_HIGHWAY_SERVICE_URL: &str = "PAYMENT_HIGHWAY_SERVICE_URL";
pub const PAYMENT_HIGHWAY_SIGNATURE_KEY_ID: &str = "PAYMENT_HIGHWAY_SIGNATURE_KEY_ID";
pub const PAYMENT_HIGHWAY_SIGNATURE_SECRET: &str = "PAYMENT_HIGHWAY_SIGNATURE_SECRET";
pub const PAYMENT_HIGHWAY_ACCOUNT: &str = "PAYMENT_HIGHWAY_ACCOUNT";
pub const PAYMENT_HIGHWAY_MERCHANT: &str = "PAYMENT_HIGHWAY_MERCHANT";
pub const PAYMENT_HIGHWAY_CHECK_RESPONSE_STATUS: &str = "PAYMENT_HIGHWAY_CHECK_RESPONSE_STATUS";

// Headers used in Payment Highway services.
pub const SPH_API_VERSION: &str = "sph-api-version";
pub const SPH_ACCOUNT: &str = "sph-account";
pub const SPH_MERCHANT: &str = "sph-merchant";
pub const SPH_TIMESTAMP: &str = "sph-timestamp";
pub const SPH_REQUEST_ID: &str = "sph-request-id";

/// API version sent with every request.
pub const API_VERSION: &str = "20160630";
pub const USER_AGENT: &str = "PaymentHighway Rust Lib";
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Result code of a successful operation.
pub const RESULT_CODE_OK: &str = "100";

/// AsciiSet for encoding values put into the request query.
///
/// Unreserved characters of RFC 3986 are kept as-is.
pub static QUERY_VALUE_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
