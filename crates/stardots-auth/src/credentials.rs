//! Client credentials

use std::fmt;

/// A client key/secret pair issued by the StarDots console.
///
/// Immutable once constructed; the secret only ever enters the signature
/// pre-image and is never sent or serialized on its own.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Public client key, sent as the `x-stardots-key` header
    pub client_key: String,
    /// Client secret, mixed into the request signature
    pub client_secret: String,
}

impl Credentials {
    /// Create a new credential pair
    pub fn new(client_key: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_key: client_key.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_key", &self.client_key)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
