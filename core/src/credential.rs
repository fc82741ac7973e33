use std::fmt::{Debug, Formatter};

use crate::utils::Redact;

/// Credential used to sign Payment Highway messages.
///
/// It's immutable once built and its `Debug` output never reveals the secret.
#[derive(Clone)]
pub struct Credential {
    key_id: String,
    secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(key_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            secret: secret.into(),
        }
    }

    /// The signature key id, sent in clear as part of every signature.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// The shared secret as HMAC key bytes.
    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("key_id", &Redact::from(&self.key_id))
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}
