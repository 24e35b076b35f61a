use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for healthgate reports.
pub const SCHEMA_REPORT_V1: &str = "healthgate.report.v1";

/// Rule category maps directly to the CI gate semantics: triggered
/// warnings fail the gate, triggered laws are informational counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Law,
    Warning,
}

/// Evaluated outcome of one rule for one run.
///
/// `NotApplicable` means the rule's prerequisite was false and the main
/// predicate was never consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Triggered,
    NotTriggered,
    NotApplicable,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Determination {
    pub rule_id: String,
    pub category: RuleCategory,
    pub outcome: Outcome,

    /// Short rationale, present when the rule triggered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Healthgate-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct GateData {
    /// Gate mode: `enforce` or `warn-only`.
    pub mode: String,

    pub rules_evaluated: u32,
    pub laws_applicable: u32,
    pub warnings_triggered: u32,
    pub has_warnings: bool,
}

/// The report envelope written as the JSON artifact.
///
/// Determinations are in rule-graph evaluation order; consumers must not
/// rely on any other ordering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GateReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub determinations: Vec<Determination>,
    pub data: GateData,
}
