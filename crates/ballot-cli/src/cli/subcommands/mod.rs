pub mod auth;
pub mod candidates;
pub mod elections;
pub mod students;

pub use auth::AuthCommands;
pub use candidates::CandidateCommands;
pub use elections::ElectionCommands;
pub use students::StudentCommands;
