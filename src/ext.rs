//! Public extension contracts for attaching search credentials to outbound requests.
//!
//! The trait stays generic over request and error types so any HTTP client can carry the
//! credential. With the `reqwest` feature, [`SearchTokenSigner`] covers the crate's own transport.

pub mod request_signer;

pub use request_signer::*;
