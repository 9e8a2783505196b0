//! # StarDots Auth
//!
//! Request-signing primitives for the StarDots open API.
//!
//! Every API call carries five `x-stardots-*` headers derived from the
//! caller's credentials: a unix-seconds timestamp, a per-request nonce, the
//! client key, an MD5 signature over the three, and a JSON blob identifying
//! the SDK build. This crate produces that header set.
//!
//! MD5 is what the server verifies; the digest here has to match it
//! bit-for-bit and is not used for anything beyond that handshake.
//!
//! ## Example
//!
//! ```rust,ignore
//! use stardots_auth::{sign, Credentials};
//!
//! let creds = Credentials::new("client-key", "client-secret");
//! let headers = sign(&creds);
//! for (name, value) in headers.header_pairs() {
//!     println!("{name}: {value}");
//! }
//! ```

pub mod credentials;
pub mod metadata;
pub mod signer;

pub use credentials::Credentials;
pub use metadata::{SdkMetadata, SDK_LANGUAGE, SDK_VERSION};
pub use signer::{
    sign, sign_at, signature_digest, SignedHeaders, HEADER_EXTRA, HEADER_KEY, HEADER_NONCE,
    HEADER_SIGN, HEADER_TIMESTAMP,
};
