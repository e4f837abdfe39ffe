pub mod auth;
pub mod candidates;
pub mod dispatch;
pub mod elections;
pub mod health;
pub mod shared;
pub mod students;
