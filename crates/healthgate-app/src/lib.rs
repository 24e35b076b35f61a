//! Use case orchestration for healthgate.
//!
//! This crate provides the application layer: use cases that coordinate
//! the domain and render layers. It is intentionally thin and delegates
//! heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod assess;
mod explain;
mod report;

pub use assess::{
    run_assess, verdict_exit_code, AssessError, AssessInput, AssessOutput, GateMode,
    EXIT_INVALID_INPUT,
};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use report::{parse_report_json, serialize_report, to_renderable};
