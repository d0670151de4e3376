//! Access-token record, credential payload, and integrity tag helpers.

pub mod access;
pub mod claims;
pub mod credential;
pub mod integrity;
