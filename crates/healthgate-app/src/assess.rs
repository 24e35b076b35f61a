//! The `assess` use case: validate answers, evaluate the rule graph, and
//! produce a report envelope.

use healthgate_domain::{evaluate, AnswersError, FactStore, GraphError, RuleGraph};
use healthgate_types::{GateData, GateReport, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use thiserror::Error;
use time::OffsetDateTime;

/// Exit code for invalid input, distinct from the warnings-triggered
/// exit so CI can tell "bad answers file" from "compliant but risky".
pub const EXIT_INVALID_INPUT: i32 = 2;

/// How the gate treats triggered warnings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateMode {
    /// Warnings fail the gate (exit 1).
    #[default]
    Enforce,
    /// Warnings are reported but the gate passes (exit 0).
    WarnOnly,
}

impl GateMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GateMode::Enforce => "enforce",
            GateMode::WarnOnly => "warn-only",
        }
    }
}

/// Input for the assess use case.
#[derive(Clone, Debug)]
pub struct AssessInput<'a> {
    /// Raw contents of the answers JSON document.
    pub answers_text: &'a str,
    pub mode: GateMode,
}

/// Output from the assess use case.
#[derive(Clone, Debug)]
pub struct AssessOutput {
    pub report: GateReport,
}

#[derive(Debug, Error)]
pub enum AssessError {
    #[error("answers document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Answers(#[from] AnswersError),

    /// A defect in the built-in rule set; should never occur at runtime.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Run the assess use case: parse and validate answers, evaluate the
/// rule graph, produce the report envelope.
pub fn run_assess(input: AssessInput<'_>) -> Result<AssessOutput, AssessError> {
    let started_at = OffsetDateTime::now_utc();

    let value: serde_json::Value = serde_json::from_str(input.answers_text)?;
    let facts = FactStore::from_value(&value)?;

    let graph = RuleGraph::builtin()?;
    let set = evaluate(&facts, &graph);

    let verdict = if !set.has_warnings {
        Verdict::Pass
    } else {
        match input.mode {
            GateMode::Enforce => Verdict::Fail,
            GateMode::WarnOnly => Verdict::Warn,
        }
    };

    let finished_at = OffsetDateTime::now_utc();

    let report = GateReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "healthgate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        data: GateData {
            mode: input.mode.as_str().to_string(),
            rules_evaluated: set.determinations.len() as u32,
            laws_applicable: set.applicable_laws,
            warnings_triggered: set.warnings_triggered,
            has_warnings: set.has_warnings,
        },
        determinations: set.determinations,
    };

    Ok(AssessOutput { report })
}

/// Map verdict to exit code: 0 = pass/warn-only, 1 = warnings triggered.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 1,
    }
}
