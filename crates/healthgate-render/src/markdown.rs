use crate::{RenderableCategory, RenderableOutcome, RenderableReport, RenderableVerdict};
use healthgate_types::lookup_explanation;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Healthgate report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Applicable laws: {}\n- Warnings: {}\n\n",
        verdict, report.data.laws_applicable, report.data.warnings_triggered
    ));

    let warnings: Vec<_> = report.triggered(RenderableCategory::Warning).collect();
    if !warnings.is_empty() {
        out.push_str("## Warnings\n\n");
        for d in warnings {
            push_triggered_line(&mut out, d.rule_id.as_str(), d.message.as_deref());
        }
        out.push('\n');
    }

    let laws: Vec<_> = report.triggered(RenderableCategory::Law).collect();
    if !laws.is_empty() {
        out.push_str("## Applicable laws\n\n");
        for d in laws {
            push_triggered_line(&mut out, d.rule_id.as_str(), d.message.as_deref());
        }
        out.push('\n');
    } else {
        out.push_str(
            "No specific health regulations identified; general consumer \
protection law (the FTC Act) still applies to most tools.\n\n",
        );
    }

    out.push_str("## All determinations\n\n");
    out.push_str("| Rule | Category | Outcome |\n|---|---|---|\n");
    for d in &report.determinations {
        let category = match d.category {
            RenderableCategory::Law => "law",
            RenderableCategory::Warning => "warning",
        };
        let outcome = match d.outcome {
            RenderableOutcome::Triggered => "triggered",
            RenderableOutcome::NotTriggered => "not_triggered",
            RenderableOutcome::NotApplicable => "not_applicable",
        };
        out.push_str(&format!("| `{}` | {} | {} |\n", d.rule_id, category, outcome));
    }

    out
}

fn push_triggered_line(out: &mut String, rule_id: &str, message: Option<&str>) {
    let title = lookup_explanation(rule_id)
        .map(|e| e.title)
        .unwrap_or(rule_id);
    match message {
        Some(msg) => out.push_str(&format!("- **{}** (`{}`): {}\n", title, rule_id, msg)),
        None => out.push_str(&format!("- **{}** (`{}`)\n", title, rule_id)),
    }
}
