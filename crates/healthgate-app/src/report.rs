use anyhow::Context;
use healthgate_render::{
    RenderableCategory, RenderableData, RenderableDetermination, RenderableOutcome,
    RenderableReport, RenderableVerdict,
};
use healthgate_types::{GateReport, Outcome, RuleCategory, Verdict, SCHEMA_REPORT_V1};

pub fn serialize_report(report: &GateReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize report")?;
    data.push(b'\n');
    Ok(data)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<GateReport> {
    let report: GateReport = serde_json::from_str(text).context("parse report json")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!(
            "unknown report schema: {} (expected {})",
            report.schema,
            SCHEMA_REPORT_V1
        );
    }
    Ok(report)
}

pub fn to_renderable(report: &GateReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Warn => RenderableVerdict::Warn,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        determinations: report
            .determinations
            .iter()
            .map(|d| RenderableDetermination {
                rule_id: d.rule_id.clone(),
                category: match d.category {
                    RuleCategory::Law => RenderableCategory::Law,
                    RuleCategory::Warning => RenderableCategory::Warning,
                },
                outcome: match d.outcome {
                    Outcome::Triggered => RenderableOutcome::Triggered,
                    Outcome::NotTriggered => RenderableOutcome::NotTriggered,
                    Outcome::NotApplicable => RenderableOutcome::NotApplicable,
                },
                message: d.message.clone(),
            })
            .collect(),
        data: RenderableData {
            mode: report.data.mode.clone(),
            laws_applicable: report.data.laws_applicable,
            warnings_triggered: report.data.warnings_triggered,
            has_warnings: report.data.has_warnings,
        },
    }
}
