//! Page-level failures

use rentkit_api::ApiError;

/// What a page operation can fail with
#[derive(Debug, thiserror::Error)]
pub enum PageError {
	/// The backend call failed; see the inner taxonomy
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Client-side input was rejected before any network traffic
	#[error("{0}")]
	Validation(String),
	/// A table operation (filter configuration, export) failed
	#[error(transparent)]
	Table(#[from] rentkit_tables::TableError),
}

impl PageError {
	/// The text shown to the user for this failure
	pub fn user_message(&self) -> String {
		self.to_string()
	}
}

/// Result alias for page operations
pub type Result<T> = std::result::Result<T, PageError>;
