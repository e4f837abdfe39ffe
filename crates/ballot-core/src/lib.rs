//! # ballot-core
//!
//! Core types and error types for the Ballot election client.
//!
//! This crate provides the foundational types shared across all Ballot crates:
//! - Entity structs for backend resources (elections, candidates, students)
//! - The authenticated [`identity::Identity`] and [`enums::Role`]
//! - Status enums with forward-only transitions
//! - Request payloads with client-side required-field checks
//! - Response envelopes returned by the backend
//! - Best-effort batch reports and the student verification state
//! - Student roster CSV parsing helpers

pub mod batch;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod requests;
pub mod responses;
pub mod roster;
pub mod timestamp;
pub mod verification;

pub use errors::CoreError;
