//! Route table and access decisions.
//!
//! A decision is computed from the current [`SessionState`] every time a view
//! is entered; nothing is cached between navigations.

use std::fmt;

use ballot_core::enums::Role;
use serde::Serialize;

use crate::session::SessionState;

/// Where anonymous visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where authenticated users without the required role are sent.
pub const LANDING_PATH: &str = "/elections";

/// Who may enter a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Public,
    /// Any logged-in identity.
    Authenticated,
    Role(Role),
}

impl Access {
    #[must_use]
    pub const fn required_role(self) -> Option<Role> {
        match self {
            Self::Role(role) => Some(role),
            Self::Public | Self::Authenticated => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Signup,
    Elections,
    ElectionDetails(String),
    Vote(String),
    Results(String),
    AdminDashboard,
    CreateElection,
    Students,
    StudentValidator,
    AdminElectionDetails(String),
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::Login => LOGIN_PATH.into(),
            Self::Signup => "/signup".into(),
            Self::Elections => LANDING_PATH.into(),
            Self::ElectionDetails(id) => format!("/elections/{id}"),
            Self::Vote(id) => format!("/elections/{id}/vote"),
            Self::Results(id) => format!("/elections/{id}/results"),
            Self::AdminDashboard => "/admin".into(),
            Self::CreateElection => "/admin/create-election".into(),
            Self::Students => "/admin/students".into(),
            Self::StudentValidator => "/admin/student-validator".into(),
            Self::AdminElectionDetails(id) => format!("/admin/elections/{id}"),
        }
    }

    #[must_use]
    pub const fn access(&self) -> Access {
        match self {
            Self::Home | Self::Login | Self::Signup => Access::Public,
            Self::Elections | Self::ElectionDetails(_) | Self::Results(_) => Access::Authenticated,
            Self::Vote(_) => Access::Role(Role::User),
            Self::AdminDashboard
            | Self::CreateElection
            | Self::Students
            | Self::StudentValidator
            | Self::AdminElectionDetails(_) => Access::Role(Role::Admin),
        }
    }

    /// Match a path against the route table. Unknown paths yield `None`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        let route = match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["elections"] => Self::Elections,
            ["elections", id] => Self::ElectionDetails((*id).to_string()),
            ["elections", id, "vote"] => Self::Vote((*id).to_string()),
            ["elections", id, "results"] => Self::Results((*id).to_string()),
            ["admin"] => Self::AdminDashboard,
            ["admin", "create-election"] => Self::CreateElection,
            ["admin", "students"] => Self::Students,
            ["admin", "student-validator"] => Self::StudentValidator,
            ["admin", "elections", id] => Self::AdminElectionDetails((*id).to_string()),
            _ => return None,
        };
        Some(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RedirectReason {
    NotAuthenticated,
    MissingRole { required: Role },
}

/// Outcome of guarding a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Session validation is still running; show a placeholder.
    Loading,
    Render,
    Redirect {
        to: &'static str,
        reason: RedirectReason,
    },
}

impl GuardDecision {
    #[must_use]
    pub const fn is_render(self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Decide whether a view that needs a session (and optionally a role) may render.
#[must_use]
pub fn guard(state: &SessionState, required_role: Option<Role>) -> GuardDecision {
    match state {
        SessionState::Loading => GuardDecision::Loading,
        SessionState::Anonymous => GuardDecision::Redirect {
            to: LOGIN_PATH,
            reason: RedirectReason::NotAuthenticated,
        },
        SessionState::Authenticated(identity) => match required_role {
            Some(required) if identity.role != required => GuardDecision::Redirect {
                to: LANDING_PATH,
                reason: RedirectReason::MissingRole { required },
            },
            _ => GuardDecision::Render,
        },
    }
}

/// Guard a route using its own access rule. Public routes always render.
#[must_use]
pub fn guard_route(state: &SessionState, route: &Route) -> GuardDecision {
    match route.access() {
        Access::Public => GuardDecision::Render,
        access => guard(state, access.required_role()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballot_core::identity::Identity;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn signed_in(role: Role) -> SessionState {
        SessionState::Authenticated(Identity {
            id: "1".into(),
            email: "a@x.com".into(),
            full_name: "A".into(),
            role,
            is_active: true,
            created_at: "...".into(),
        })
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Role::Admin))]
    #[case(Some(Role::User))]
    fn anonymous_always_goes_to_login(#[case] required: Option<Role>) {
        assert_eq!(
            guard(&SessionState::Anonymous, required),
            GuardDecision::Redirect {
                to: LOGIN_PATH,
                reason: RedirectReason::NotAuthenticated
            }
        );
    }

    #[test]
    fn loading_shows_placeholder() {
        assert_eq!(
            guard(&SessionState::Loading, Some(Role::Admin)),
            GuardDecision::Loading
        );
    }

    #[test]
    fn wrong_role_goes_to_landing_not_login() {
        assert_eq!(
            guard(&signed_in(Role::User), Some(Role::Admin)),
            GuardDecision::Redirect {
                to: LANDING_PATH,
                reason: RedirectReason::MissingRole {
                    required: Role::Admin
                }
            }
        );
        assert_eq!(
            guard(&signed_in(Role::Admin), Some(Role::User)),
            GuardDecision::Redirect {
                to: LANDING_PATH,
                reason: RedirectReason::MissingRole {
                    required: Role::User
                }
            }
        );
    }

    #[test]
    fn matching_or_absent_role_renders() {
        assert!(guard(&signed_in(Role::Admin), Some(Role::Admin)).is_render());
        assert!(guard(&signed_in(Role::User), None).is_render());
    }

    #[rstest]
    #[case(Route::Home)]
    #[case(Route::Login)]
    #[case(Route::Signup)]
    fn public_routes_render_in_every_state(#[case] route: Route) {
        for state in [SessionState::Loading, SessionState::Anonymous, signed_in(Role::User)] {
            assert!(guard_route(&state, &route).is_render());
        }
    }

    #[rstest]
    #[case("/", Route::Home)]
    #[case("/elections", Route::Elections)]
    #[case("/elections/e1", Route::ElectionDetails("e1".into()))]
    #[case("/elections/e1/vote", Route::Vote("e1".into()))]
    #[case("/elections/e1/results", Route::Results("e1".into()))]
    #[case("/admin", Route::AdminDashboard)]
    #[case("/admin/create-election", Route::CreateElection)]
    #[case("/admin/students", Route::Students)]
    #[case("/admin/student-validator", Route::StudentValidator)]
    #[case("/admin/elections/e1", Route::AdminElectionDetails("e1".into()))]
    fn paths_round_trip(#[case] path: &str, #[case] route: Route) {
        assert_eq!(Route::parse(path), Some(route.clone()));
        assert_eq!(route.path(), path);
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::parse("/elections/"), Some(Route::Elections));
    }

    #[test]
    fn unknown_paths_do_not_match() {
        assert_eq!(Route::parse("/nope"), None);
        assert_eq!(Route::parse("/admin/elections"), None);
    }

    #[test]
    fn vote_requires_user_and_admin_routes_require_admin() {
        assert_eq!(Route::Vote("e1".into()).access(), Access::Role(Role::User));
        assert_eq!(Route::Students.access(), Access::Role(Role::Admin));
        assert_eq!(Route::Results("e1".into()).access(), Access::Authenticated);
    }
}
