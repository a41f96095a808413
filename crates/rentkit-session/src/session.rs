//! The injected session service

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::profile::UserProfile;
use crate::storage::SessionStorage;
use crate::{Result, SessionError};

/// Storage key holding the JSON-encoded profile
pub const KEY_USER: &str = "user";

/// Storage key holding the bearer credential
pub const KEY_TOKEN: &str = "token";

// Earlier client versions wrote the credential under this key; restore
// still reads it so an upgrade does not log everyone out.
const KEY_TOKEN_LEGACY: &str = "authToken";

#[derive(Debug, Clone)]
struct AuthState {
	user: UserProfile,
	token: String,
}

/// Holds the current authenticated identity and bearer token
///
/// Cloning shares the same underlying state. Pages never reach into
/// storage directly; they ask this service, which makes the session
/// swappable and testable in isolation.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use rentkit_session::{MemoryStorage, Session};
///
/// # async fn demo() -> rentkit_session::Result<()> {
/// let session = Session::new(Arc::new(MemoryStorage::new()));
/// session.restore().await?;
/// assert!(!session.is_authenticated().await);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
	storage: Arc<dyn SessionStorage>,
	state: Arc<RwLock<Option<AuthState>>>,
}

impl Session {
	/// Creates a logged-out session over the given backend
	pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
		Self {
			storage,
			state: Arc::new(RwLock::new(None)),
		}
	}

	/// Signs in: persists the profile and token, then updates in-memory
	/// state
	pub async fn login(&self, user: UserProfile, token: impl Into<String>) -> Result<()> {
		let token = token.into();
		let encoded = serde_json::to_string(&user)
			.map_err(|e| SessionError::Storage(e.to_string()))?;
		self.storage.set(KEY_USER, &encoded).await?;
		self.storage.set(KEY_TOKEN, &token).await?;

		tracing::debug!(username = %user.username, "session established");
		*self.state.write().await = Some(AuthState { user, token });
		Ok(())
	}

	/// Signs out: clears both storage keys and in-memory state
	pub async fn logout(&self) -> Result<()> {
		self.storage.remove(KEY_USER).await?;
		self.storage.remove(KEY_TOKEN).await?;
		self.storage.remove(KEY_TOKEN_LEGACY).await?;
		*self.state.write().await = None;
		tracing::debug!("session cleared");
		Ok(())
	}

	/// Rehydrates the session from storage
	///
	/// Both keys must be present and the profile must decode; anything
	/// else (including corrupt stored JSON) leaves the session logged
	/// out rather than failing the caller.
	pub async fn restore(&self) -> Result<bool> {
		let token = match self.storage.get(KEY_TOKEN).await {
			Ok(Some(token)) => Some(token),
			Ok(None) => self.storage.get(KEY_TOKEN_LEGACY).await.unwrap_or(None),
			Err(e) => {
				tracing::warn!(error = %e, "token unreadable, treating as logged out");
				None
			}
		};
		let raw_user = self.storage.get(KEY_USER).await.unwrap_or(None);

		let state = match (token, raw_user) {
			(Some(token), Some(raw)) => match serde_json::from_str::<UserProfile>(&raw) {
				Ok(user) => Some(AuthState { user, token }),
				Err(e) => {
					tracing::warn!(error = %e, "stored profile corrupt, discarding session");
					self.storage.remove(KEY_USER).await.ok();
					self.storage.remove(KEY_TOKEN).await.ok();
					None
				}
			},
			_ => None,
		};

		let restored = state.is_some();
		*self.state.write().await = state;
		Ok(restored)
	}

	/// Replaces the cached profile after a successful profile update
	pub async fn refresh_user(&self, user: UserProfile) -> Result<()> {
		let encoded = serde_json::to_string(&user)
			.map_err(|e| SessionError::Storage(e.to_string()))?;
		self.storage.set(KEY_USER, &encoded).await?;
		if let Some(state) = self.state.write().await.as_mut() {
			state.user = user;
		}
		Ok(())
	}

	/// The bearer token, when signed in
	pub async fn token(&self) -> Option<String> {
		self.state.read().await.as_ref().map(|s| s.token.clone())
	}

	/// The signed-in profile, when present
	pub async fn user(&self) -> Option<UserProfile> {
		self.state.read().await.as_ref().map(|s| s.user.clone())
	}

	/// Whether a token is held
	pub async fn is_authenticated(&self) -> bool {
		self.state.read().await.is_some()
	}

	/// Whether the signed-in user has administrative access
	pub async fn is_admin(&self) -> bool {
		self.state
			.read()
			.await
			.as_ref()
			.map(|s| s.user.is_admin())
			.unwrap_or(false)
	}
}
