use ballot_auth::Route;
use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, CandidateCommands, ElectionCommands, StudentCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication and session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Elections, voting, and results.
    Elections {
        #[command(subcommand)]
        action: ElectionCommands,
    },
    /// Election candidates.
    Candidates {
        #[command(subcommand)]
        action: CandidateCommands,
    },
    /// Student roster.
    Students {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Check that the backend is reachable.
    Health,
}

impl Commands {
    /// The view a command stands in for. Access rules come from the route.
    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            Self::Auth { action } => match action {
                AuthCommands::Signup(_) => Route::Signup,
                AuthCommands::Login(_)
                | AuthCommands::Logout
                | AuthCommands::Status
                | AuthCommands::Refresh => Route::Login,
            },
            Self::Health => Route::Home,
            Self::Elections { action } => election_route(action),
            Self::Candidates { action } => match action {
                CandidateCommands::Add { election_id, .. }
                | CandidateCommands::Update { election_id, .. } => {
                    Route::AdminElectionDetails(election_id.clone())
                }
            },
            Self::Students { action } => match action {
                StudentCommands::Validate { .. } => Route::StudentValidator,
                _ => Route::Students,
            },
        }
    }
}

fn election_route(action: &ElectionCommands) -> Route {
    match action {
        ElectionCommands::List { .. } => Route::Elections,
        ElectionCommands::Get { id } => Route::ElectionDetails(id.clone()),
        ElectionCommands::Create(_) => Route::CreateElection,
        ElectionCommands::Update(args) => Route::AdminElectionDetails(args.id.clone()),
        ElectionCommands::Activate { id }
        | ElectionCommands::End { id }
        | ElectionCommands::Publish { id }
        | ElectionCommands::Votes { id } => Route::AdminElectionDetails(id.clone()),
        ElectionCommands::Results { id } => Route::Results(id.clone()),
        ElectionCommands::Vote { id, .. } => Route::Vote(id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use ballot_auth::guard::Access;
    use ballot_core::enums::Role;
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn route_of(args: &[&str]) -> Route {
        let mut argv = vec!["ballot"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("cli should parse").command.route()
    }

    #[test]
    fn auth_and_health_are_public() {
        for args in [
            &["auth", "status"][..],
            &["auth", "logout"],
            &["auth", "login", "--email", "a@x.com", "--password", "pw"],
            &["health"],
        ] {
            assert_eq!(route_of(args).access(), Access::Public, "{args:?}");
        }
    }

    #[test]
    fn voting_needs_the_user_role() {
        let route = route_of(&[
            "elections",
            "vote",
            "e1",
            "--candidate",
            "c1",
            "--student-id",
            "ST1",
        ]);
        assert_eq!(route, Route::Vote("e1".into()));
        assert_eq!(route.access(), Access::Role(Role::User));
    }

    #[test]
    fn admin_actions_map_to_admin_routes() {
        assert_eq!(
            route_of(&["elections", "activate", "e1"]),
            Route::AdminElectionDetails("e1".into())
        );
        assert_eq!(
            route_of(&["candidates", "add", "e1", "--name", "Ada"]),
            Route::AdminElectionDetails("e1".into())
        );
        assert_eq!(
            route_of(&["students", "validate", "ST1"]),
            Route::StudentValidator
        );
        assert_eq!(route_of(&["students", "count"]).access(), Access::Role(Role::Admin));
    }

    #[test]
    fn browsing_needs_any_session() {
        assert_eq!(route_of(&["elections", "list"]).access(), Access::Authenticated);
        assert_eq!(
            route_of(&["elections", "results", "e1"]),
            Route::Results("e1".into())
        );
    }
}
