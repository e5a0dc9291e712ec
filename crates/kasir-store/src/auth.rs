//! # Auth Service
//!
//! Login, logout and the current session.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login("admin", "admin123")                                            │
//! │       │                                                                 │
//! │       ├── no match ──────► Ok(None), session untouched                 │
//! │       │                                                                 │
//! │       └── match ─────────► session["pos-user"] = User JSON (no pwd)    │
//! │                            Ok(Some(User))                               │
//! │                                                                         │
//! │  get_current_user() ─────► parse session["pos-user"]                   │
//! │  logout() ───────────────► remove session["pos-user"]                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kasir_core::User;
use tracing::{debug, info, warn};

use crate::database::{Operation, Shared};
use crate::error::StoreResult;
use crate::repository::user::UserRepository;
use crate::session::SESSION_KEY;

#[derive(Clone)]
pub struct AuthService {
    shared: Shared,
}

impl AuthService {
    pub(crate) fn new(shared: Shared) -> Self {
        AuthService { shared }
    }

    /// Checks the credentials and starts a session on success.
    ///
    /// Wrong credentials are not an error: the result is `None`.
    pub async fn login(&self, username: &str, password: &str) -> StoreResult<Option<User>> {
        self.shared.latency(Operation::Login).await;

        let users = UserRepository::new(self.shared.clone());
        match users.verify(username, password).await {
            Some(user) => {
                let json = serde_json::to_string(&user)?;
                self.shared.session.set(SESSION_KEY, &json)?;
                info!(user = %user.username, role = %user.role, "Login succeeded");
                Ok(Some(user))
            }
            None => {
                warn!(user = %username, "Login failed");
                Ok(None)
            }
        }
    }

    pub async fn logout(&self) -> StoreResult<()> {
        self.shared.latency(Operation::Logout).await;
        self.shared.session.remove(SESSION_KEY)?;
        info!("Logged out");
        Ok(())
    }

    /// The user stored in the session, if any.
    pub async fn get_current_user(&self) -> StoreResult<Option<User>> {
        self.shared.latency(Operation::GetCurrentUser).await;
        match self.shared.session.get(SESSION_KEY)? {
            Some(json) => {
                let user: User = serde_json::from_str(&json)?;
                debug!(user = %user.username, "Session restored");
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }
}
