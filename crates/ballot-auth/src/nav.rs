//! Header menu entries visible for a session state.

use serde::Serialize;

use crate::guard::Route;
use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavItem {
    Login,
    Signup,
    Elections,
    Admin,
    Logout,
}

impl NavItem {
    /// Route the entry navigates to. Logout has none; it ends on the login page.
    #[must_use]
    pub fn route(self) -> Option<Route> {
        match self {
            Self::Login => Some(Route::Login),
            Self::Signup => Some(Route::Signup),
            Self::Elections => Some(Route::Elections),
            Self::Admin => Some(Route::AdminDashboard),
            Self::Logout => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
            Self::Elections => "Elections",
            Self::Admin => "Admin Dashboard",
            Self::Logout => "Logout",
        }
    }
}

#[must_use]
pub fn visible_items(state: &SessionState) -> Vec<NavItem> {
    match state {
        SessionState::Loading => Vec::new(),
        SessionState::Anonymous => vec![NavItem::Login, NavItem::Signup],
        SessionState::Authenticated(identity) => {
            let mut items = vec![NavItem::Elections];
            if identity.is_admin() {
                items.push(NavItem::Admin);
            }
            items.push(NavItem::Logout);
            items
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballot_core::enums::Role;
    use ballot_core::identity::Identity;
    use pretty_assertions::assert_eq;

    fn signed_in(role: Role) -> SessionState {
        SessionState::Authenticated(Identity {
            id: "1".into(),
            email: "a@x.com".into(),
            full_name: "A".into(),
            role,
            is_active: true,
            created_at: String::new(),
        })
    }

    #[test]
    fn menu_per_state() {
        assert!(visible_items(&SessionState::Loading).is_empty());
        assert_eq!(
            visible_items(&SessionState::Anonymous),
            vec![NavItem::Login, NavItem::Signup]
        );
        assert_eq!(
            visible_items(&signed_in(Role::User)),
            vec![NavItem::Elections, NavItem::Logout]
        );
        assert_eq!(
            visible_items(&signed_in(Role::Admin)),
            vec![NavItem::Elections, NavItem::Admin, NavItem::Logout]
        );
    }

    #[test]
    fn admin_item_points_at_dashboard() {
        assert_eq!(NavItem::Admin.route(), Some(Route::AdminDashboard));
        assert_eq!(NavItem::Logout.route(), None);
    }
}
