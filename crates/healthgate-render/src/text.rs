//! Console rendering of the assessment report.

use crate::{RenderableCategory, RenderableReport, RenderableVerdict};
use healthgate_types::lookup_explanation;

const RULER: &str = "================================================================================";
const LINE: &str = "--------------------------------------------------------------------------------";

/// Render the full console report: warnings first, then applicable laws,
/// obligations, resources, and the disclaimer.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(RULER);
    out.push_str("\nHEALTH DATA COMPLIANCE ASSESSMENT REPORT\n");
    out.push_str(RULER);
    out.push_str("\n\n");

    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "Verdict: {} ({} applicable law{}, {} warning{})\n\n",
        verdict,
        report.data.laws_applicable,
        plural(report.data.laws_applicable),
        report.data.warnings_triggered,
        plural(report.data.warnings_triggered),
    ));

    let warnings: Vec<_> = report.triggered(RenderableCategory::Warning).collect();
    if !warnings.is_empty() {
        out.push_str("CRITICAL WARNINGS:\n");
        out.push_str(LINE);
        out.push('\n');
        for d in &warnings {
            let title = title_for(&d.rule_id);
            out.push_str(&format!("  ! {}\n", title));
            if let Some(msg) = &d.message {
                out.push_str(&format!("    {}\n", msg));
            }
        }
        out.push('\n');
    }

    out.push_str("APPLICABLE FEDERAL LAWS & REGULATIONS:\n");
    out.push_str(LINE);
    out.push('\n');
    let laws: Vec<_> = report.triggered(RenderableCategory::Law).collect();
    if laws.is_empty() {
        out.push_str("  No specific health regulations identified, but general consumer\n");
        out.push_str("  protection laws may still apply.\n");
    } else {
        for d in &laws {
            out.push_str(&format!("  * {}\n", title_for(&d.rule_id)));
        }
    }
    out.push('\n');

    let mut obligations = Vec::new();
    let mut resources = Vec::new();
    for d in report.determinations.iter() {
        if d.outcome != crate::RenderableOutcome::Triggered {
            continue;
        }
        if let Some(exp) = lookup_explanation(&d.rule_id) {
            obligations.extend(exp.obligations.iter().copied());
            resources.extend(exp.resources.iter().copied());
        }
    }
    resources.sort();
    resources.dedup();

    if !obligations.is_empty() {
        out.push_str("REQUIRED COMPLIANCE ACTIONS:\n");
        out.push_str(LINE);
        out.push('\n');
        for action in obligations {
            out.push_str(&format!("  * {}\n", action));
        }
        out.push('\n');
    }

    if !resources.is_empty() {
        out.push_str("HELPFUL RESOURCES:\n");
        out.push_str(LINE);
        out.push('\n');
        for (label, url) in resources {
            out.push_str(&format!("  * {}\n    {}\n", label, url));
        }
        out.push('\n');
    }

    out.push_str(RULER);
    out.push_str("\nDISCLAIMER: This tool provides informational guidance only and does not\n");
    out.push_str("constitute legal advice. Consult with qualified legal counsel to ensure\n");
    out.push_str("full compliance with all applicable laws and regulations.\n");
    out.push_str(RULER);
    out.push('\n');

    out
}

fn title_for(rule_id: &str) -> &str {
    lookup_explanation(rule_id)
        .map(|e| e.title)
        .unwrap_or(rule_id)
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}
