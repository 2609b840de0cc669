//! Candidate matching.
//!
//! A candidate matches when its parameter count, canonical parameter types
//! and enclosing namespace/type scopes all agree with the declaration
//! being searched for, checked in that order.

pub mod handler;
pub mod parameters;
pub mod scopes;

#[cfg(test)]
pub(crate) mod testing;

pub use handler::{MatchHandler, MatchOutcome, RejectReason};
pub use parameters::{ParameterMatch, match_parameters};
pub use scopes::{ScopeMatch, match_scopes};
