//! Stable DTOs and IDs used across the healthgate workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report envelope
//! - stable rule IDs
//! - explanation registry with compliance guidance per rule
//!
//! The decision logic itself lives in `healthgate-domain`.

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod report;

pub use explain::{Explanation, lookup_explanation};
pub use report::{
    Determination, GateData, GateReport, Outcome, RuleCategory, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
