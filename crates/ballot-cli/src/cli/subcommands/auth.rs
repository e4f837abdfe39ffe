use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Create an account and log in.
    Signup(AuthSignupArgs),
    /// Clear the stored token.
    Logout,
    /// Show the current session, menu, and token expiry.
    Status,
    /// Re-fetch the profile for the stored token.
    Refresh,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Password (or set BALLOT_PASSWORD).
    #[arg(long, env = "BALLOT_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub full_name: String,
    /// Password (or set BALLOT_PASSWORD).
    #[arg(long, env = "BALLOT_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Account role: user or admin. The backend decides when omitted.
    #[arg(long)]
    pub role: Option<String>,
}
