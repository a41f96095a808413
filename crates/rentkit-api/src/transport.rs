//! The HTTP seam
//!
//! [`HttpTransport`] is the narrow interface the client sends requests
//! through. Production uses [`ReqwestTransport`]; tests implement the
//! trait with scripted responses so no server is involved.

use std::fmt;

use async_trait::async_trait;

use crate::error::{ApiError, Result};
use crate::settings::ApiSettings;

/// HTTP method of an [`ApiRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
	/// Read
	Get,
	/// Create
	Post,
	/// Update
	Put,
	/// Remove
	Delete,
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
		};
		f.write_str(name)
	}
}

/// One outgoing request, fully assembled by the client
#[derive(Debug, Clone)]
pub struct ApiRequest {
	/// HTTP method
	pub method: Method,
	/// Absolute URL including query parameters
	pub url: String,
	/// Bearer credential for the `Authorization` header
	pub bearer: Option<String>,
	/// JSON body, when the method carries one
	pub body: Option<serde_json::Value>,
}

/// Raw response handed back by the transport
#[derive(Debug, Clone)]
pub struct ApiResponse {
	/// HTTP status code
	pub status: u16,
	/// Raw body bytes
	pub body: Vec<u8>,
}

/// Sends an [`ApiRequest`] and returns the raw response
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
	/// Executes the request
	///
	/// Implementations return [`ApiError::Transport`] only when the
	/// request never completed; a completed request with any status is
	/// an `Ok` response.
	async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Production transport over [`reqwest`]
pub struct ReqwestTransport {
	client: reqwest::Client,
}

impl ReqwestTransport {
	/// Builds a transport with the configured timeout
	pub fn new(settings: &ApiSettings) -> Result<Self> {
		let client = reqwest::Client::builder()
			.timeout(settings.timeout())
			.build()
			.map_err(|e| ApiError::Transport(e.to_string()))?;
		Ok(Self { client })
	}
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
	async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
		let method = match request.method {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Put => reqwest::Method::PUT,
			Method::Delete => reqwest::Method::DELETE,
		};

		let mut builder = self.client.request(method, &request.url);
		if let Some(bearer) = &request.bearer {
			builder = builder.bearer_auth(bearer);
		}
		if let Some(body) = &request.body {
			builder = builder.json(body);
		}

		let response = builder
			.send()
			.await
			.map_err(|e| ApiError::Transport(e.to_string()))?;
		let status = response.status().as_u16();
		let body = response
			.bytes()
			.await
			.map_err(|e| ApiError::Transport(e.to_string()))?
			.to_vec();

		tracing::debug!(url = %request.url, method = %request.method, status, "request completed");
		Ok(ApiResponse { status, body })
	}
}
