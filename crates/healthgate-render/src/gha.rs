use crate::{RenderableCategory, RenderableOutcome, RenderableReport};

/// Render triggered rules as GitHub Actions workflow command annotations.
///
/// Format: `::{level}::{message}`. Warnings annotate at `warning` level,
/// applicable laws at `notice`.
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for d in &report.determinations {
        if d.outcome != RenderableOutcome::Triggered {
            continue;
        }
        let level = match d.category {
            RenderableCategory::Warning => "warning",
            RenderableCategory::Law => "notice",
        };

        let body = match &d.message {
            Some(msg) => format!("[{}] {}", d.rule_id, msg),
            None => format!("[{}] triggered", d.rule_id),
        };
        let body = body
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        out.push(format!("::{}::{}", level, body));
    }

    out
}

/// Render the gate signals as `$GITHUB_OUTPUT` lines for downstream jobs.
pub fn render_github_outputs(report: &RenderableReport) -> Vec<String> {
    vec![
        format!("has_warnings={}", report.data.has_warnings),
        format!("applicable_laws={}", report.data.laws_applicable),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableDetermination, RenderableVerdict};
    use healthgate_types::ids;

    fn report() -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdict::Fail,
            determinations: vec![
                RenderableDetermination {
                    rule_id: ids::RULE_COPPA.to_string(),
                    category: RenderableCategory::Law,
                    outcome: RenderableOutcome::Triggered,
                    message: Some("children's data is collected\nsee COPPA".to_string()),
                },
                RenderableDetermination {
                    rule_id: ids::WARN_CHILDRENS_DATA.to_string(),
                    category: RenderableCategory::Warning,
                    outcome: RenderableOutcome::Triggered,
                    message: None,
                },
                RenderableDetermination {
                    rule_id: ids::RULE_HIPAA.to_string(),
                    category: RenderableCategory::Law,
                    outcome: RenderableOutcome::NotApplicable,
                    message: None,
                },
            ],
            data: RenderableData {
                mode: "enforce".to_string(),
                laws_applicable: 1,
                warnings_triggered: 1,
                has_warnings: true,
            },
        }
    }

    #[test]
    fn annotations_cover_only_triggered_rules_with_escaping() {
        let annotations = render_github_annotations(&report());
        assert_eq!(
            annotations,
            vec![
                "::notice::[law.coppa] children's data is collected%0Asee COPPA".to_string(),
                "::warning::[warn.childrens_data] triggered".to_string(),
            ]
        );
    }

    #[test]
    fn outputs_expose_the_gate_signals() {
        let outputs = render_github_outputs(&report());
        assert_eq!(
            outputs,
            vec!["has_warnings=true".to_string(), "applicable_laws=1".to_string()]
        );
    }
}
