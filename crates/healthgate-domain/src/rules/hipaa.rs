use crate::expr::{all, any, fact};
use crate::facts::FactId;
use crate::graph::RuleDef;
use healthgate_types::{ids, RuleCategory};

/// HIPAA applies through a covered-entity relationship: either the
/// developer operates on behalf of a covered entity (business associate),
/// or it is itself a provider or health plan handling individually
/// identifiable health information.
pub fn law() -> RuleDef {
    RuleDef {
        id: ids::RULE_HIPAA,
        category: RuleCategory::Law,
        title: "HIPAA Rules",
        prerequisite: Some(fact(FactId::CollectsHealthInfo)),
        predicate: any(vec![
            fact(FactId::WorksForCoveredEntity),
            all(vec![
                any(vec![
                    fact(FactId::IsHealthcareProvider),
                    fact(FactId::IsHealthPlan),
                ]),
                fact(FactId::HasIdentifiableHealthInfo),
            ]),
        ]),
        triggered_message: "Covered-entity relationship with individually identifiable \
health information; HIPAA Privacy, Security, and Breach Notification Rules apply.",
    }
}
