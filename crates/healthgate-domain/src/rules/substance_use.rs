use crate::expr::fact;
use crate::facts::FactId;
use crate::graph::RuleDef;
use healthgate_types::{ids, RuleCategory};

/// Substance use disorder treatment confidentiality (42 CFR Part 2;
/// deceptive-practice exposure under OARFPA).
pub fn law() -> RuleDef {
    RuleDef {
        id: ids::RULE_SUBSTANCE_USE,
        category: RuleCategory::Law,
        title: "Substance Use Confidentiality (42 CFR Part 2 / OARFPA)",
        prerequisite: Some(fact(FactId::CollectsHealthInfo)),
        predicate: fact(FactId::OffersSubstanceUseTreatment),
        triggered_message: "The tool offers a substance use disorder treatment service \
or product; treatment records are confidential and efficacy claims face enhanced \
scrutiny.",
    }
}
