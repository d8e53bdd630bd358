//! Minimal authenticated client for the Diffchecker API—trade an email/password pair for a
//! bearer token and post two text blobs for a shareable comparison URL.
//!
//! The crate exposes a single value type, [`DiffChecker`](client::DiffChecker), that holds
//! immutable credentials and a reused HTTP transport. Every upload operation performs its own
//! session exchange; no token is cached between calls, so the client carries no mutable state
//! and is safe to share across tasks.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod error;
pub mod expiry;
pub mod http;
pub mod obs;

mod _prelude {
	pub use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::Deserialize;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, tokio as _};
