//! The client value and its upload operations.

// std
use std::time::Duration;
// crates.io
use reqwest::StatusCode;
// self
use crate::{
	_prelude::*,
	auth::{self, Credentials},
	expiry::Expiry,
	http,
	http::Endpoints,
	obs::CallSpan,
};

const ENDPOINT: &str = "diff";
const SLUG_FIELD: &str = "slug";

/// Request timeout applied when the caller does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Diffchecker API.
///
/// Holds immutable credentials, the resolved endpoint set, and a reused HTTP transport.
/// Every upload operation authenticates first and spends the resulting token on exactly one
/// diff creation; a failure in either round-trip aborts the call with no side effects beyond
/// the returned error. Because no state is mutated between calls, a single value can serve
/// concurrent tasks.
#[derive(Clone, Debug)]
pub struct DiffChecker {
	credentials: Credentials,
	endpoints: Endpoints,
	http: ReqwestClient,
}
impl DiffChecker {
	/// Creates a client against the production API with the default transport.
	pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self> {
		Self::builder(email, password).build()
	}

	/// Starts a builder for callers that need a custom timeout, transport, or API origin.
	pub fn builder(
		email: impl Into<String>,
		password: impl Into<String>,
	) -> DiffCheckerBuilder {
		DiffCheckerBuilder {
			credentials: Credentials::new(email, password),
			timeout: DEFAULT_TIMEOUT,
			api_origin: None,
			http: None,
		}
	}

	/// Uploads two text payloads and returns the shareable comparison URL.
	///
	/// The comparison is kept forever; use [`upload_with_expiry`](Self::upload_with_expiry)
	/// to pick a shorter retention. An empty `title` is omitted from the request entirely.
	pub async fn upload(&self, left: &str, right: &str, title: &str) -> Result<Url> {
		self.upload_with_expiry(left, right, title, Expiry::Forever).await
	}

	/// Uploads two byte payloads, converting them to text (lossy UTF-8) first.
	pub async fn upload_bytes(&self, left: &[u8], right: &[u8], title: &str) -> Result<Url> {
		self.upload_bytes_with_expiry(left, right, title, Expiry::Forever).await
	}

	/// Byte-payload variant of [`upload_with_expiry`](Self::upload_with_expiry).
	pub async fn upload_bytes_with_expiry(
		&self,
		left: &[u8],
		right: &[u8],
		title: &str,
		expiry: Expiry,
	) -> Result<Url> {
		self.upload_with_expiry(
			&String::from_utf8_lossy(left),
			&String::from_utf8_lossy(right),
			title,
			expiry,
		)
		.await
	}

	/// Uploads two text payloads with an explicit retention policy.
	///
	/// Authenticates, posts the form body with `Authorization: Bearer <token>`, and joins
	/// the returned slug onto the public web origin. An authentication failure is returned
	/// unchanged and the diff endpoint is never called.
	pub async fn upload_with_expiry(
		&self,
		left: &str,
		right: &str,
		title: &str,
		expiry: Expiry,
	) -> Result<Url> {
		let span = CallSpan::new(ENDPOINT);

		span.instrument(async move {
			let token =
				auth::exchange_session(&self.http, &self.endpoints, &self.credentials).await?;
			let form = diff_form(left, right, title, expiry);
			let response: DiffResponse = http::post_form(
				&self.http,
				ENDPOINT,
				&self.endpoints.diffs,
				&form,
				Some(&token),
				StatusCode::CREATED,
			)
			.await?;
			let slug = response
				.slug
				.ok_or(Error::MissingField { endpoint: ENDPOINT, field: SLUG_FIELD })?;

			self.endpoints.web.join(&slug).map_err(|source| Error::InvalidEndpoint { source })
		})
		.await
	}
}

/// Builder for [`DiffChecker`] values.
#[derive(Clone, Debug)]
pub struct DiffCheckerBuilder {
	credentials: Credentials,
	timeout: Duration,
	api_origin: Option<Url>,
	http: Option<ReqwestClient>,
}
impl DiffCheckerBuilder {
	/// Overrides the request timeout applied to the default transport.
	///
	/// Ignored when a custom transport is supplied via
	/// [`http_client`](Self::http_client); configure that client's timeout directly.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Points the client at a different API origin.
	///
	/// Intended for tests running against a local mock server; production callers keep the
	/// default. The web origin used to compose result URLs is not affected.
	pub fn api_origin(mut self, origin: Url) -> Self {
		self.api_origin = Some(origin);

		self
	}

	/// Supplies a pre-built transport instead of the default one.
	pub fn http_client(mut self, client: ReqwestClient) -> Self {
		self.http = Some(client);

		self
	}

	/// Resolves the endpoint set and transport and builds the client.
	pub fn build(self) -> Result<DiffChecker> {
		let endpoints = match self.api_origin {
			Some(origin) => Endpoints::for_api_origin(origin)?,
			None => Endpoints::production()?,
		};
		let http = match self.http {
			Some(client) => client,
			None => ReqwestClient::builder()
				.timeout(self.timeout)
				.build()
				.map_err(|source| Error::HttpClientBuild { source })?,
		};

		Ok(DiffChecker { credentials: self.credentials, endpoints, http })
	}
}

#[derive(Debug, Deserialize)]
struct DiffResponse {
	#[serde(default)]
	slug: Option<String>,
}

fn diff_form<'a>(
	left: &'a str,
	right: &'a str,
	title: &'a str,
	expiry: Expiry,
) -> Vec<(&'a str, &'a str)> {
	let mut form = vec![("left", left), ("right", right), ("expiry", expiry.as_str())];

	// The API treats an empty `title` field differently from no field at all.
	if !title.is_empty() {
		form.push(("title", title));
	}

	form
}
