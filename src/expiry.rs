//! Retention policies understood by the Diffchecker API.

// std
use std::str::FromStr;
// self
use crate::_prelude::*;

/// Retention duration applied to an uploaded comparison.
///
/// The remote API accepts these as literal string tokens in the `expiry` form field; the
/// tokens are an external contract and must not change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Expiry {
	/// Keep the comparison indefinitely.
	#[default]
	Forever,
	/// Discard the comparison after one hour.
	Hour,
	/// Discard the comparison after one day.
	Day,
	/// Discard the comparison after one month.
	Month,
}
impl Expiry {
	/// Returns the wire token the API expects in the `expiry` form field.
	pub fn as_str(self) -> &'static str {
		match self {
			Expiry::Forever => "forever",
			Expiry::Hour => "hour",
			Expiry::Day => "day",
			Expiry::Month => "month",
		}
	}
}
impl Display for Expiry {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Expiry {
	type Err = ExpiryParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"forever" => Ok(Expiry::Forever),
			"hour" => Ok(Expiry::Hour),
			"day" => Ok(Expiry::Day),
			"month" => Ok(Expiry::Month),
			other => Err(ExpiryParseError { token: other.to_owned() }),
		}
	}
}

/// Raised when a string does not match any expiry wire token.
#[derive(Debug, ThisError)]
#[error("`{token}` is not a known expiry policy.")]
pub struct ExpiryParseError {
	/// The rejected input.
	pub token: String,
}
