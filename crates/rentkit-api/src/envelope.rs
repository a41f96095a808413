//! The `{success, data|message}` response envelope

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Wire envelope every backend response uses
///
/// Rejections may carry their text under either `message` or `error`;
/// both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
	/// Whether the operation succeeded
	pub success: bool,
	/// Payload on success
	#[serde(default)]
	pub data: Option<serde_json::Value>,
	/// Human-readable outcome text
	#[serde(default)]
	pub message: Option<String>,
	/// Alternate rejection text key used by some endpoints
	#[serde(default)]
	pub error: Option<String>,
}

impl Envelope {
	/// Parses raw bytes into an envelope
	///
	/// A body that is not an envelope at all is the distinct
	/// "invalid server response" failure, not a crash.
	pub fn from_bytes(body: &[u8]) -> Result<Self> {
		serde_json::from_slice(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
	}

	fn rejection_text(&self) -> String {
		self.message
			.clone()
			.or_else(|| self.error.clone())
			.unwrap_or_else(|| "The server rejected the request".to_string())
	}

	/// Ensures the envelope reports success
	pub fn accept(self) -> Result<Self> {
		if self.success {
			Ok(self)
		} else {
			Err(ApiError::Rejected(self.rejection_text()))
		}
	}

	/// Extracts and decodes `data` from a successful envelope
	pub fn into_data<T: DeserializeOwned>(self) -> Result<T> {
		let envelope = self.accept()?;
		let data = envelope.data.unwrap_or(serde_json::Value::Null);
		serde_json::from_value(data).map_err(|e| ApiError::InvalidResponse(e.to_string()))
	}
}
