mod access;
mod app_context;
mod config_warnings;

pub use access::check_access;
pub use app_context::{AppContext, Session};
pub use config_warnings::warn_unconfigured;
