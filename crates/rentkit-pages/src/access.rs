//! Route access decisions
//!
//! Routing itself is out of scope; pages return a decision and the
//! shell acts on it.

use rentkit_session::Session;

/// Outcome of an access check for a protected surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
	/// Render the page
	Granted,
	/// No credential held: send the user to login
	RedirectToLogin,
	/// Signed in but lacking the required role
	Forbidden,
}

/// Any signed-in user may pass
pub async fn require_customer(session: &Session) -> Access {
	if session.is_authenticated().await {
		Access::Granted
	} else {
		Access::RedirectToLogin
	}
}

/// Only administrators may pass
pub async fn require_admin(session: &Session) -> Access {
	if !session.is_authenticated().await {
		return Access::RedirectToLogin;
	}
	if session.is_admin().await {
		Access::Granted
	} else {
		Access::Forbidden
	}
}
