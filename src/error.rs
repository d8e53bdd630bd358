//! Client-level error types shared across the session and diff calls.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical client error exposed by public APIs.
///
/// Every failure path returns a value of this type; nothing in the crate panics on remote
/// misbehavior. The `endpoint` label names the call that failed (`"session"` or `"diff"`) so
/// callers can report which of the two round-trips went wrong.
#[derive(Debug, ThisError)]
pub enum Error {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: ReqwestError,
	},
	/// An endpoint or result URL could not be parsed.
	#[error("Endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the {endpoint} endpoint.")]
	Transport {
		/// Label of the call that failed.
		endpoint: &'static str,
		/// Transport-specific network error.
		#[source]
		source: ReqwestError,
	},
	/// Endpoint answered with a status outside the expected set.
	#[error("The {endpoint} endpoint returned status {observed}, expected {expected}.")]
	UnexpectedStatus {
		/// Label of the call that failed.
		endpoint: &'static str,
		/// Status the remote contract promises on success.
		expected: u16,
		/// Status actually observed.
		observed: u16,
	},
	/// Well-formed response body omitted or nulled an expected field.
	#[error("The {endpoint} response did not contain `{field}`.")]
	MissingField {
		/// Label of the call that failed.
		endpoint: &'static str,
		/// Name of the absent field.
		field: &'static str,
	},
	/// Response body was not valid JSON or a field had the wrong type.
	#[error("The {endpoint} endpoint returned a malformed response.")]
	MalformedResponse {
		/// Label of the call that failed.
		endpoint: &'static str,
		/// Structured parsing failure pointing at the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
