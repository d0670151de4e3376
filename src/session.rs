//! Search session owning the single active token slot.
//!
//! Exactly one token is active per session. [`SearchSession::select`] supersedes it when the
//! caller switches role or subject. [`SearchSession::ensure_token`] silently re-mints before a
//! search when the slot is empty or stale. Both run synchronously and never touch the network.
//! The session is passed explicitly (`&mut`) to every call that attaches a credential.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credential, Role, SubjectId},
	obs::{self, OpOutcome, OpSpan, TokenOp},
	service::TokenService,
};
#[cfg(feature = "reqwest")] use crate::ext::SearchTokenSigner;

/// Header name/value pair produced by [`SearchSession::credential_header`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialHeader {
	/// Header name, e.g. `X-Search-Token`.
	pub name: String,
	/// Credential to send as the header value.
	pub value: Credential,
}

/// Explicit owner of the selected identity and its current token.
#[derive(Clone, Debug)]
pub struct SearchSession {
	service: TokenService,
	role: Role,
	subject: SubjectId,
	current: Option<AccessToken>,
	#[cfg(feature = "reqwest")]
	signer: SearchTokenSigner,
}
impl SearchSession {
	/// Starts a session for the default selection and mints its first token.
	///
	/// Fails with [`Error::InvalidInput`] for a malformed subject and, with the `reqwest`
	/// feature, with [`Error::Config`] when the configured header name is not a valid HTTP
	/// header name.
	pub fn new(service: TokenService, role: Role, subject: impl AsRef<str>) -> Result<Self> {
		let subject = SubjectId::new(subject).map_err(InvalidInputError::from)?;
		#[cfg(feature = "reqwest")]
		let signer = SearchTokenSigner::new(&service.config().header_name)?;
		let mut session = Self {
			service,
			role,
			subject,
			current: None,
			#[cfg(feature = "reqwest")]
			signer,
		};

		session.remint(OffsetDateTime::now_utc())?;

		Ok(session)
	}

	/// Token service backing the session.
	pub fn service(&self) -> &TokenService {
		&self.service
	}

	/// Currently selected role.
	pub fn role(&self) -> Role {
		self.role
	}

	/// Currently selected subject.
	pub fn subject(&self) -> &SubjectId {
		&self.subject
	}

	/// Token currently held, valid or not.
	pub fn current(&self) -> Option<&AccessToken> {
		self.current.as_ref()
	}

	/// Signer for the configured credential header, built once when the session starts.
	#[cfg(feature = "reqwest")]
	pub fn signer(&self) -> &SearchTokenSigner {
		&self.signer
	}

	/// Switches identity and mints a replacement token that supersedes the previous one.
	///
	/// The slot is only replaced when validation and minting succeed.
	pub fn select(
		&mut self,
		role: Role,
		subject: impl AsRef<str>,
	) -> Result<&AccessToken, InvalidInputError> {
		let subject = SubjectId::new(subject)?;
		let token = self.service.mint_for(
			role,
			subject.clone(),
			self.service.config().validity_window,
			OffsetDateTime::now_utc(),
		)?;

		self.role = role;
		self.subject = subject;

		Ok(self.current.insert(token))
	}

	/// Returns a valid token, re-minting first when the slot is empty or stale.
	pub fn ensure_token(&mut self) -> Result<&AccessToken, InvalidInputError> {
		self.ensure_token_at(OffsetDateTime::now_utc())
	}

	/// Same as [`ensure_token`](Self::ensure_token) with an explicit clock.
	pub fn ensure_token_at(
		&mut self,
		now: OffsetDateTime,
	) -> Result<&AccessToken, InvalidInputError> {
		let token = match self.current.take() {
			Some(token) if self.service.is_valid_at(&token, now) => token,
			_ => self.mint_replacement(now)?,
		};

		Ok(self.current.insert(token))
	}

	/// Ensures a valid token and returns the header that carries its credential.
	pub fn credential_header(&mut self) -> Result<CredentialHeader, InvalidInputError> {
		self.credential_header_at(OffsetDateTime::now_utc())
	}

	/// Same as [`credential_header`](Self::credential_header) with an explicit clock.
	pub fn credential_header_at(
		&mut self,
		now: OffsetDateTime,
	) -> Result<CredentialHeader, InvalidInputError> {
		let value = self.ensure_token_at(now)?.credential().clone();

		Ok(CredentialHeader { name: self.service.config().header_name.clone(), value })
	}

	fn remint(&mut self, now: OffsetDateTime) -> Result<(), InvalidInputError> {
		let token = self.mint_replacement(now)?;

		self.current = Some(token);

		Ok(())
	}

	fn mint_replacement(&self, now: OffsetDateTime) -> Result<AccessToken, InvalidInputError> {
		const OP: TokenOp = TokenOp::SessionRefresh;

		let _span = OpSpan::new(OP, "mint_replacement").entered();

		obs::record_op_outcome(OP, OpOutcome::Attempt);

		let result = self.service.mint_for(
			self.role,
			self.subject.clone(),
			self.service.config().validity_window,
			now,
		);

		obs::record_op_outcome(OP, OpOutcome::from_bool(result.is_ok()));

		result
	}
}
