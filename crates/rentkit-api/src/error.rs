//! The client-side error taxonomy
//!
//! Mirrors the failure classes the pages care about: a request that
//! never completed, a non-success HTTP status, a well-formed rejection
//! envelope, a body that would not parse, and a protected call made
//! without a credential. Client-side validation failures never reach
//! this layer; they stay inside the forms crate.

/// Errors raised by API calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	/// The request never completed (DNS, connect, timeout, ...)
	#[error("Request failed: {0}")]
	Transport(String),

	/// The server answered with a non-success HTTP status
	#[error("Server returned HTTP {code}: {message}")]
	Status {
		/// HTTP status code
		code: u16,
		/// Best-effort message extracted from the body
		message: String,
	},

	/// A `success: false` envelope carrying the server's message
	#[error("{0}")]
	Rejected(String),

	/// The body was not the JSON the client expects
	#[error("Invalid server response: {0}")]
	InvalidResponse(String),

	/// A protected call was attempted without a bearer token
	#[error("Not authenticated")]
	Unauthenticated,

	/// The configured base URL and path do not form a valid URL
	#[error("Invalid request URL: {0}")]
	InvalidUrl(String),
}

impl ApiError {
	/// True for failures where the request never reached the server
	pub fn is_transport(&self) -> bool {
		matches!(self, ApiError::Transport(_))
	}

	/// True when the server understood the request and said no
	pub fn is_rejected(&self) -> bool {
		matches!(self, ApiError::Rejected(_))
	}
}

/// Result alias for API calls
pub type Result<T> = std::result::Result<T, ApiError>;

/// Fast-fails a protected call that has no credential
///
/// # Examples
///
/// ```
/// use rentkit_api::{ApiError, require_token};
///
/// assert_eq!(require_token(Some("abc".to_string())).unwrap(), "abc");
/// assert!(matches!(
///     require_token(None),
///     Err(ApiError::Unauthenticated)
/// ));
/// ```
pub fn require_token(token: Option<String>) -> Result<String> {
	token.ok_or(ApiError::Unauthenticated)
}
