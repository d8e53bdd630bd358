//! Credentials and the session exchange that trades them for a bearer token.

// crates.io
use reqwest::StatusCode;
// self
use crate::{_prelude::*, http, http::Endpoints, obs::CallSpan};

const ENDPOINT: &str = "session";
const AUTH_TOKEN_FIELD: &str = "authToken";

/// Immutable email/password pair supplied at client construction time.
///
/// No client-side validation is applied; empty strings are forwarded to the API as-is.
#[derive(Clone, Debug)]
pub struct Credentials {
	/// Account email address.
	pub email: String,
	/// Account password, redacted in `Debug`/`Display` output.
	pub password: Password,
}
impl Credentials {
	/// Bundles an email/password pair.
	pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
		Self { email: email.into(), password: Password::new(password) }
	}
}

/// Redacted password wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);
impl Password {
	/// Wraps a new password string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner password. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for Password {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Password").field(&"<redacted>").finish()
	}
}
impl Display for Password {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Redacted bearer token returned by the session endpoint.
///
/// A token lives for the duration of a single upload call; it is never cached, persisted, or
/// refreshed. Each exported upload operation performs its own session exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);
impl AuthToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for AuthToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AuthToken").field(&"<redacted>").finish()
	}
}
impl Display for AuthToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
	#[serde(default, rename = "authToken")]
	auth_token: Option<String>,
}

/// Posts the credentials to the session endpoint and extracts the bearer token.
///
/// A 200 response whose body omits or nulls `authToken` fails with
/// [`Error::MissingField`]; any other status fails with [`Error::UnexpectedStatus`].
pub(crate) async fn exchange_session(
	client: &ReqwestClient,
	endpoints: &Endpoints,
	credentials: &Credentials,
) -> Result<AuthToken> {
	let span = CallSpan::new(ENDPOINT);

	span.instrument(async move {
		let form = [
			("email", credentials.email.as_str()),
			("password", credentials.password.expose()),
		];
		let response: SessionResponse =
			http::post_form(client, ENDPOINT, &endpoints.sessions, &form, None, StatusCode::OK)
				.await?;
		let token = response
			.auth_token
			.ok_or(Error::MissingField { endpoint: ENDPOINT, field: AUTH_TOKEN_FIELD })?;

		Ok(AuthToken::new(token))
	})
	.await
}
