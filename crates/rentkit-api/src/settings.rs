//! Client configuration

use std::time::Duration;

use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how the client talks to the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
	/// Base URL every endpoint path is appended to
	#[serde(default = "default_base_url")]
	pub base_url: String,
	/// Per-request timeout in seconds
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
}

fn default_base_url() -> String {
	DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
	DEFAULT_TIMEOUT_SECS
}

impl Default for ApiSettings {
	fn default() -> Self {
		Self {
			base_url: default_base_url(),
			timeout_secs: default_timeout_secs(),
		}
	}
}

impl ApiSettings {
	/// Defaults overridden by `RENTKIT_API_URL` and
	/// `RENTKIT_API_TIMEOUT_SECS` when set
	pub fn from_env() -> Self {
		let mut settings = Self::default();
		if let Ok(url) = std::env::var("RENTKIT_API_URL")
			&& !url.trim().is_empty()
		{
			settings.base_url = url;
		}
		if let Ok(raw) = std::env::var("RENTKIT_API_TIMEOUT_SECS")
			&& let Ok(secs) = raw.trim().parse::<u64>()
		{
			settings.timeout_secs = secs;
		}
		settings
	}

	/// The request timeout as a [`Duration`]
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}
}
