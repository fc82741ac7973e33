//! Payment Highway message signing.
//!
//! Messages are signed with the `SPH1` scheme:
//!
//! ```text
//! SPH1 <key id> <lowercase hex HMAC-SHA256 of the string to sign>
//! ```
//!
//! The string to sign is built from the method, the request uri, every
//! `sph-` prefixed parameter and the trimmed body. See [`Signer::string_to_sign`].

use http::header::HeaderName;
use http::HeaderMap;
use http::HeaderValue;
use log::debug;

use crate::hash::hex_hmac_sha256;
use crate::{Credential, ParameterSet, Result};

/// Signature scheme tag, marks the signature format version.
pub const SIGNATURE_SCHEME: &str = "SPH1";

/// Only parameters with this prefix take part in the signature.
pub const SPH_PREFIX: &str = "sph-";

/// Name of the parameter or header carrying the signature.
pub const SIGNATURE: &str = "signature";

/// Signer creates and validates signatures of Payment Highway messages.
///
/// A signer holds nothing but an immutable [`Credential`], so one instance can
/// be shared by any number of threads.
///
/// ```
/// use paymenthighway_core::{ParameterSet, Signer};
///
/// let signer = Signer::new("testKey", "testSecret");
/// let params = ParameterSet::new()
///     .with("sph-api-version", "20151028")
///     .with("sph-account", "test");
///
/// let signature = signer.sign("POST", "/transaction", &params, "");
/// assert!(signature.starts_with("SPH1 testKey "));
/// ```
#[derive(Debug, Clone)]
pub struct Signer {
    credential: Credential,
}

impl Signer {
    /// Create a signer from key id and shared secret.
    ///
    /// The HMAC key is the UTF-8 bytes of `secret`; any length is accepted.
    pub fn new(key_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::from_credential(Credential::new(key_id, secret))
    }

    /// Create a signer from an existing credential.
    pub fn from_credential(credential: Credential) -> Self {
        Self { credential }
    }

    /// The key id put into every signature.
    pub fn key_id(&self) -> &str {
        self.credential.key_id()
    }

    /// Construct string to sign
    ///
    /// ## Format
    ///
    /// ```text
    /// Method + "\n" +
    /// Uri + "\n" +
    /// SphParameters + "\n" +
    /// TrimmedBody
    /// ```
    ///
    /// `SphParameters` are the parameters whose name starts with `sph-` (ignoring
    /// case), stably sorted by their original name in byte order, each written as
    /// `lowercase(name) + ":" + value` and joined by `"\n"`. Duplicated names are
    /// all kept.
    pub fn string_to_sign(method: &str, uri: &str, params: &ParameterSet, body: &str) -> String {
        let mut sph = params.to_vec_with_prefix(SPH_PREFIX);
        sph.sort_by(|(a, _), (b, _)| a.cmp(b));

        let body = trim_body(body);
        let mut s = String::with_capacity(
            method.len()
                + uri.len()
                + sph.iter().map(|(k, v)| k.len() + v.len() + 2).sum::<usize>()
                + body.len()
                + 3,
        );

        s.push_str(method);
        s.push('\n');
        s.push_str(uri);
        s.push('\n');
        for (idx, (k, v)) in sph.into_iter().enumerate() {
            if idx != 0 {
                s.push('\n');
            }
            s.push_str(&k.to_ascii_lowercase());
            s.push(':');
            s.push_str(v);
        }
        s.push('\n');
        s.push_str(body);

        debug!("string to sign: {}", &s);
        s
    }

    /// Create the signature of a message.
    ///
    /// Returns `SPH1 <key id> <hex>`. Parameters without the `sph-` prefix are
    /// ignored, use `""` as body for requests without one.
    pub fn sign(&self, method: &str, uri: &str, params: &ParameterSet, body: &str) -> String {
        let string_to_sign = Self::string_to_sign(method, uri, params, body);
        let digest = hex_hmac_sha256(self.credential.secret_bytes(), string_to_sign.as_bytes());

        format!("{SIGNATURE_SCHEME} {} {digest}", self.credential.key_id())
    }

    /// Validate a message by checking the `signature` parameter it carries
    /// against the calculated one.
    ///
    /// Returns `false` if no non-empty `signature` parameter is found or if it
    /// doesn't match. The first `signature` parameter wins when there are several.
    pub fn validate_signature(
        &self,
        method: &str,
        uri: &str,
        params: &ParameterSet,
        content: &str,
    ) -> bool {
        let received = match params.get(SIGNATURE) {
            Some(v) if !v.is_empty() => v,
            _ => return false,
        };

        self.sign(method, uri, params, content) == received
    }

    /// Validate the parameters of a redirect coming back from the payment form.
    ///
    /// Redirects are signed as `GET` with an empty uri and an empty body.
    pub fn validate_form_redirect(&self, params: &ParameterSet) -> bool {
        self.validate_signature("GET", "", params, "")
    }

    /// Validate a response by its headers and body.
    ///
    /// `method` and `uri` are the ones of the request this response answers.
    pub fn validate_response(
        &self,
        method: &str,
        uri: &str,
        headers: &HeaderMap,
        content: &str,
    ) -> bool {
        self.validate_signature(method, uri, &ParameterSet::from_headers(headers), content)
    }

    /// Sign a request in place.
    ///
    /// The request headers are the parameter set and the path with query of the
    /// request uri is the signed uri. The signature is inserted as the `signature`
    /// header, replacing any previous one.
    pub fn sign_request(&self, parts: &mut http::request::Parts, body: &str) -> Result<()> {
        let uri = parts
            .uri
            .path_and_query()
            .map(|v| v.as_str())
            .unwrap_or("/");
        let params = ParameterSet::from_headers(&parts.headers);
        let signature = self.sign(parts.method.as_str(), uri, &params, body);

        let mut value: HeaderValue = signature.parse()?;
        value.set_sensitive(true);
        parts
            .headers
            .insert(HeaderName::from_static(SIGNATURE), value);

        Ok(())
    }
}

/// Trim the body like the Payment Highway service does: every char up to and
/// including `' '` is whitespace, which covers all ASCII control chars.
fn trim_body(body: &str) -> &str {
    body.trim_matches(|c: char| c <= ' ')
}
