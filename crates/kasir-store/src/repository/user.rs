//! # User Repository
//!
//! Stored accounts carry a plain-text password. Nothing leaves this module
//! with it: every public return value is a [`User`].

use kasir_core::{User, UserInput, UserRole};
use tracing::{debug, info};

use crate::database::{new_id, Operation, Shared};
use crate::error::{StoreError, StoreResult};

/// A stored account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    pub role: UserRole,
    password: String,
}

impl UserAccount {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        role: UserRole,
        password: impl Into<String>,
    ) -> Self {
        UserAccount {
            id: id.into(),
            username: username.into(),
            role,
            password: password.into(),
        }
    }

    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }

    /// The account without its password.
    pub fn public(&self) -> User {
        User {
            id: self.id.clone(),
            username: self.username.clone(),
            role: self.role,
        }
    }
}

/// Repository for user operations.
#[derive(Clone)]
pub struct UserRepository {
    shared: Shared,
}

impl UserRepository {
    pub(crate) fn new(shared: Shared) -> Self {
        UserRepository { shared }
    }

    /// All users, passwords stripped.
    pub async fn get_users(&self) -> StoreResult<Vec<User>> {
        self.shared.latency(Operation::GetUsers).await;
        let tables = self.shared.tables.read().await;
        debug!(count = tables.users.len(), "Loaded users");
        Ok(tables.users.iter().map(UserAccount::public).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        let tables = self.shared.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).map(UserAccount::public))
    }

    /// Adds or edits a user.
    ///
    /// ## Behavior
    /// - edit: username and role are replaced; the password only when a
    ///   non-empty one is supplied
    /// - add: new `user_<uuid>` account with the supplied password
    pub async fn save_user(&self, input: UserInput) -> StoreResult<User> {
        self.shared.latency(Operation::SaveUser).await;
        let mut tables = self.shared.tables.write().await;

        let new_password = input.new_password().map(str::to_string);
        let username = input.username.trim().to_string();

        match input.id {
            Some(id) => {
                let account = tables
                    .users
                    .iter_mut()
                    .find(|u| u.id == id)
                    .ok_or_else(|| StoreError::not_found("User", id.as_str()))?;

                account.username = username;
                account.role = input.role;
                if let Some(password) = new_password {
                    account.password = password;
                }

                info!(id = %account.id, role = %account.role, "User updated");
                Ok(account.public())
            }
            None => {
                let account = UserAccount::new(
                    new_id("user"),
                    username,
                    input.role,
                    new_password.unwrap_or_default(),
                );
                info!(id = %account.id, role = %account.role, "User added");
                let user = account.public();
                tables.users.push(account);
                Ok(user)
            }
        }
    }

    /// Deletes a user. Deleting an unknown id is a no-op.
    pub async fn delete_user(&self, id: &str) -> StoreResult<()> {
        self.shared.latency(Operation::DeleteUser).await;
        let mut tables = self.shared.tables.write().await;

        let before = tables.users.len();
        tables.users.retain(|u| u.id != id);
        if tables.users.len() < before {
            info!(id = %id, "User deleted");
        }
        Ok(())
    }

    /// Finds the account matching the credentials. Plain-text comparison.
    pub(crate) async fn verify(&self, username: &str, password: &str) -> Option<User> {
        let tables = self.shared.tables.read().await;
        tables
            .users
            .iter()
            .find(|u| u.username == username && u.password_matches(password))
            .map(UserAccount::public)
    }
}
