//! Definition search core.
//!
//! Given the declaration a call site refers to, pick out the one matching
//! definition among the same-named functions of a parsed program. A
//! candidate matches when its canonical parameter types and its enclosing
//! namespace/type scopes agree with the declaration.

pub mod config;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod search;
pub mod slot;
pub mod unit;

pub use config::{ScopeStrictness, SearchOptions, SlotPolicy, TraversalPolicy};
pub use error::{Result, SearchError};
pub use matcher::{MatchHandler, MatchOutcome, RejectReason};
pub use search::{Query, SearchReport, evaluate_candidates, find_definition};
pub use slot::{DefinitionSlot, StoreOutcome};
pub use unit::{
    FunctionDecl, FunctionRef, SourceCollector, TagKind, TranslationUnit, TranslationUnitBuilder,
    TypeRef, describe_declaration,
};
