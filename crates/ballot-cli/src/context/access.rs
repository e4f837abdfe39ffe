use anyhow::bail;
use ballot_auth::guard::RedirectReason;
use ballot_auth::{GuardDecision, Route, SessionState, guard_route};

/// Apply the route guard to a command before it runs.
///
/// A login redirect means there is no session; a landing redirect means the
/// session lacks the route's role.
pub fn check_access(state: &SessionState, route: &Route) -> anyhow::Result<()> {
    match guard_route(state, route) {
        GuardDecision::Render => Ok(()),
        GuardDecision::Loading => bail!("session is still loading; try again"),
        GuardDecision::Redirect {
            reason: RedirectReason::NotAuthenticated,
            to,
        } => {
            tracing::debug!(%route, redirect = to, "guard redirect");
            bail!("not logged in: run `ballot auth login` first")
        }
        GuardDecision::Redirect {
            reason: RedirectReason::MissingRole { required },
            to,
        } => {
            tracing::debug!(%route, redirect = to, "guard redirect");
            bail!("{route} requires the {required} role")
        }
    }
}
