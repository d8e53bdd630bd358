//! Endpoint set and transport plumbing shared by the session and diff calls.
//!
//! All outbound traffic funnels through a single form-POST helper so status checking, body
//! consumption, and JSON decoding behave identically for both round-trips. Response
//! bodies are fully consumed (or dropped) on every exit path before the call returns.

// crates.io
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, auth::AuthToken};

/// Production API origin. Not configurable for normal use; tests point the client at a mock
/// server through [`DiffCheckerBuilder::api_origin`](crate::client::DiffCheckerBuilder::api_origin).
pub const API_ORIGIN: &str = "https://diffchecker-api-production.herokuapp.com";
/// Public web origin used to compose the shareable result URL.
pub const WEB_ORIGIN: &str = "https://www.diffchecker.com/";

/// Resolved endpoint set a client instance talks to.
#[derive(Clone, Debug)]
pub struct Endpoints {
	/// Session endpoint exchanging credentials for a bearer token.
	pub sessions: Url,
	/// Diff-creation endpoint accepting the authorized upload.
	pub diffs: Url,
	/// Web origin the returned slug is joined onto.
	pub web: Url,
}
impl Endpoints {
	/// Builds the endpoint set for the production API origin.
	pub fn production() -> Result<Self> {
		let origin = Url::parse(API_ORIGIN).map_err(|source| Error::InvalidEndpoint { source })?;

		Self::for_api_origin(origin)
	}

	/// Builds the endpoint set for an arbitrary API origin.
	///
	/// The web origin stays fixed regardless of the API origin, matching the remote
	/// contract that shareable URLs always live on `www.diffchecker.com`.
	pub fn for_api_origin(origin: Url) -> Result<Self> {
		let join = |path| origin.join(path).map_err(|source| Error::InvalidEndpoint { source });

		Ok(Self {
			sessions: join("sessions")?,
			diffs: join("diffs")?,
			web: Url::parse(WEB_ORIGIN).map_err(|source| Error::InvalidEndpoint { source })?,
		})
	}
}

/// Sends a form-encoded POST and decodes the JSON response into `T`.
///
/// The status is checked before the body is read: anything other than `expected` fails with
/// [`Error::UnexpectedStatus`] carrying the observed code. Malformed JSON (or a field of the
/// wrong type) fails with [`Error::MalformedResponse`] pointing at the offending path.
pub(crate) async fn post_form<T>(
	client: &ReqwestClient,
	endpoint: &'static str,
	url: &Url,
	form: &[(&str, &str)],
	bearer: Option<&AuthToken>,
	expected: StatusCode,
) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut request = client.post(url.clone()).form(form);

	if let Some(token) = bearer {
		request = request.bearer_auth(token.expose());
	}

	let response =
		request.send().await.map_err(|source| Error::Transport { endpoint, source })?;
	let observed = response.status();

	if observed != expected {
		return Err(Error::UnexpectedStatus {
			endpoint,
			expected: expected.as_u16(),
			observed: observed.as_u16(),
		});
	}

	let body = response.bytes().await.map_err(|source| Error::Transport { endpoint, source })?;

	decode_json(endpoint, &body)
}

fn decode_json<T>(endpoint: &'static str, body: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::MalformedResponse { endpoint, source })
}
