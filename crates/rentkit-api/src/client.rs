//! The API client core: URL assembly, envelope handling, status checks
//!
//! Endpoint groups live in sibling modules (`cars`, `bookings`, `auth`,
//! `admin`) as further `impl ApiClient` blocks; this module owns the
//! shared request path they all go through.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::envelope::Envelope;
use crate::error::{ApiError, Result};
use crate::settings::ApiSettings;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport};

/// Builder for [`ApiClient`]
///
/// # Example
///
/// ```rust,no_run
/// use rentkit_api::{ApiClientBuilder, ApiSettings};
///
/// let client = ApiClientBuilder::new()
///     .settings(ApiSettings::from_env())
///     .build()
///     .expect("client configuration is valid");
/// # let _ = client;
/// ```
pub struct ApiClientBuilder {
	settings: ApiSettings,
	transport: Option<Arc<dyn HttpTransport>>,
}

impl ApiClientBuilder {
	/// Starts from default settings
	pub fn new() -> Self {
		Self {
			settings: ApiSettings::default(),
			transport: None,
		}
	}

	/// Replaces the settings wholesale
	pub fn settings(mut self, settings: ApiSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Sets the base URL
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.settings.base_url = base_url.into();
		self
	}

	/// Swaps the transport (tests script responses through this)
	pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
		self.transport = Some(transport);
		self
	}

	/// Validates the base URL and assembles the client
	pub fn build(self) -> Result<ApiClient> {
		let base = Url::parse(self.settings.base_url.trim_end_matches('/'))
			.map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
		let transport = match self.transport {
			Some(transport) => transport,
			None => Arc::new(ReqwestTransport::new(&self.settings)?),
		};
		Ok(ApiClient {
			base,
			transport,
		})
	}
}

impl Default for ApiClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Typed client over the rental backend
pub struct ApiClient {
	base: Url,
	transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
	/// Shorthand for `ApiClientBuilder::new()`
	pub fn builder() -> ApiClientBuilder {
		ApiClientBuilder::new()
	}

	fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
		let mut url = Url::parse(&format!("{}/{}", self.base, path))
			.map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
		if !query.is_empty() {
			let mut pairs = url.query_pairs_mut();
			for (key, value) in query {
				pairs.append_pair(key, value);
			}
		}
		Ok(url.into())
	}

	fn check_status(response: &ApiResponse) -> Result<()> {
		if (200..300).contains(&response.status) {
			return Ok(());
		}
		// Error statuses often still carry an envelope; surface its
		// text when they do.
		let message = Envelope::from_bytes(&response.body)
			.ok()
			.and_then(|e| e.message.or(e.error))
			.unwrap_or_else(|| "request failed".to_string());
		Err(ApiError::Status {
			code: response.status,
			message,
		})
	}

	pub(crate) async fn send(
		&self,
		method: Method,
		path: &str,
		query: &[(&str, String)],
		bearer: Option<&str>,
		body: Option<serde_json::Value>,
	) -> Result<Envelope> {
		let url = self.endpoint(path, query)?;
		let response = self
			.transport
			.execute(ApiRequest {
				method,
				url,
				bearer: bearer.map(str::to_string),
				body,
			})
			.await?;
		Self::check_status(&response)?;
		Envelope::from_bytes(&response.body)
	}

	/// Sends and decodes `data` into `T`
	pub(crate) async fn fetch<T: DeserializeOwned>(
		&self,
		method: Method,
		path: &str,
		query: &[(&str, String)],
		bearer: Option<&str>,
		body: Option<serde_json::Value>,
	) -> Result<T> {
		self.send(method, path, query, bearer, body)
			.await?
			.into_data()
	}

	/// Sends and only checks the envelope's success flag
	pub(crate) async fn fetch_unit(
		&self,
		method: Method,
		path: &str,
		query: &[(&str, String)],
		bearer: Option<&str>,
		body: Option<serde_json::Value>,
	) -> Result<()> {
		self.send(method, path, query, bearer, body)
			.await?
			.accept()
			.map(|_| ())
	}
}
