use crate::expr::{all, fact, not, rule};
use crate::facts::FactId;
use crate::graph::RuleDef;
use healthgate_types::{ids, RuleCategory};

/// FTC Health Breach Notification Rule. HIPAA-covered data is carved out
/// of this rule, so HIPAA applicability suppresses it; this is the one
/// place a rule depends on a prior result rather than raw facts.
pub fn law() -> RuleDef {
    RuleDef {
        id: ids::RULE_FTC_BREACH,
        category: RuleCategory::Law,
        title: "FTC Health Breach Notification Rule",
        prerequisite: Some(all(vec![
            fact(FactId::CollectsHealthInfo),
            not(rule(ids::RULE_HIPAA)),
        ])),
        predicate: fact(FactId::InteractsWithPhr),
        triggered_message: "Health information flows through personal health records \
outside HIPAA; breach notifications to consumers and the FTC are required.",
    }
}

/// Consumer-facing PHR exposure warning: same carve-out as the law rule,
/// scoped to tools consumers use directly.
pub fn consumer_phr_warning() -> RuleDef {
    RuleDef {
        id: ids::WARN_CONSUMER_PHR,
        category: RuleCategory::Warning,
        title: "Consumer-facing PHR exposure",
        prerequisite: Some(fact(FactId::IsConsumerFacing)),
        predicate: all(vec![
            fact(FactId::InteractsWithPhr),
            not(rule(ids::RULE_HIPAA)),
        ]),
        triggered_message: "Consumer-facing tool interacts with personal health records \
outside HIPAA; failure to provide required breach notifications can bring FTC civil \
penalties.",
    }
}
