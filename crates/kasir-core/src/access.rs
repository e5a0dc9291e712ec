//! # Access Module
//!
//! The role gate: which screens each role may open.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View            admin   kasir                                          │
//! │  ──────────────  ─────   ─────                                          │
//! │  dashboard         ✓                                                    │
//! │  pos               ✓       ✓                                            │
//! │  inventory         ✓                                                    │
//! │  transactions      ✓       ✓                                            │
//! │  users             ✓                                                    │
//! │  settings          ✓                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{User, UserRole, View};

/// Roles permitted to open `view`.
pub fn permitted_roles(view: View) -> &'static [UserRole] {
    match view {
        View::Pos | View::Transactions => &[UserRole::Admin, UserRole::Kasir],
        View::Dashboard | View::Inventory | View::Users | View::Settings => &[UserRole::Admin],
    }
}

pub fn can_access(role: UserRole, view: View) -> bool {
    permitted_roles(view).contains(&role)
}

/// Views visible to `role`, in sidebar order.
pub fn allowed_views(role: UserRole) -> Vec<View> {
    View::ALL
        .into_iter()
        .filter(|v| can_access(role, *v))
        .collect()
}

/// Screen shown right after login.
pub fn landing_view(role: UserRole) -> View {
    match role {
        UserRole::Admin => View::Dashboard,
        UserRole::Kasir => View::Pos,
    }
}

/// Sidebar label for a view.
pub fn view_label(view: View) -> &'static str {
    match view {
        View::Dashboard => "Dashboard",
        View::Pos => "Kasir (POS)",
        View::Inventory => "Inventaris",
        View::Transactions => "Transaksi",
        View::Users => "Pengguna",
        View::Settings => "Pengaturan",
    }
}

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub view: View,
    pub label: String,
}

pub fn nav_items(role: UserRole) -> Vec<NavItem> {
    allowed_views(role)
        .into_iter()
        .map(|view| NavItem {
            view,
            label: view_label(view).to_string(),
        })
        .collect()
}

/// Rejects deleting the account that is currently logged in.
pub fn ensure_can_delete_user(current: &User, target_id: &str) -> CoreResult<()> {
    if current.id == target_id {
        return Err(CoreError::CannotDeleteSelf);
    }
    Ok(())
}
