//! Pure rule evaluation (no IO).
//!
//! Input: a validated fact store constructed from the answers document.
//! Output: one determination per rule + summary counts.
//!
//! The rule set is static data; `RuleGraph::new` checks it for undefined
//! dependencies and cycles before any evaluation happens.

#![forbid(unsafe_code)]

pub mod expr;
pub mod facts;
pub mod graph;
pub mod report;
pub mod rules;

mod engine;

pub use engine::evaluate;
pub use facts::{AnswersError, FactId, FactStore, Problem};
pub use graph::{GraphError, RuleDef, RuleGraph};
pub use report::DeterminationSet;

#[cfg(test)]
mod proptests;
