//! Optional observability helpers for token operations and API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `offer_search_token.op` with the `op` and
//!   `stage` (call site) fields, plus `debug` events when a credential is rejected.
//! - Enable `metrics` to increment the `offer_search_token_op_total` counter for every
//!   attempt/success/failure, labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenOp {
	/// Minting a fresh credential.
	Mint,
	/// Freshness check of a held token.
	Validate,
	/// Decoding a credential back into its identity.
	Decode,
	/// Session re-mint triggered by a missing or stale token.
	SessionRefresh,
	/// Remote API call.
	ApiCall,
}
impl TokenOp {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenOp::Mint => "mint",
			TokenOp::Validate => "validate",
			TokenOp::Decode => "decode",
			TokenOp::SessionRefresh => "session_refresh",
			TokenOp::ApiCall => "api_call",
		}
	}
}
impl Display for TokenOp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpOutcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Rejection or failure returned to the caller.
	Failure,
}
impl OpOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpOutcome::Attempt => "attempt",
			OpOutcome::Success => "success",
			OpOutcome::Failure => "failure",
		}
	}

	/// Maps a boolean result onto success/failure.
	pub const fn from_bool(ok: bool) -> Self {
		if ok { OpOutcome::Success } else { OpOutcome::Failure }
	}
}
impl Display for OpOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
