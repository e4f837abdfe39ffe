//! Backend resource records.

mod candidate;
mod election;
mod student;

pub use candidate::Candidate;
pub use election::{Election, VotingWindow};
pub use student::Student;
