//! Authenticated session state for rentkit
//!
//! The session is an injected service rather than ambient global
//! state: pages receive a [`Session`] handle and read the current
//! identity and bearer token through it. State persists to a pluggable
//! [`SessionStorage`] backend (the browser-storage analog) under the
//! `user` and `token` keys and is rehydrated on startup.

pub mod profile;
pub mod session;
pub mod storage;

pub use profile::{Role, UserProfile};
pub use session::{KEY_TOKEN, KEY_USER, Session};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};

/// Errors raised by session persistence
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
	/// The storage backend failed to read or write
	#[error("Session storage failed: {0}")]
	Storage(String),
	/// A stored profile could not be decoded
	#[error("Stored session data is corrupt: {0}")]
	Corrupt(String),
}

/// Result alias for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
