use crate::expr::{all, any, fact, not};
use crate::facts::FactId;
use crate::graph::RuleDef;
use healthgate_types::{ids, RuleCategory};

/// FD&C Act device oversight. Two pathways: a device software function
/// that is the focus of FDA oversight, or a prescription-gated tool
/// intended for medical use. Solely administrative/lifestyle tools are
/// exempt under section 520(o), and low-risk functions fall outside FDA
/// enforcement focus.
pub fn law() -> RuleDef {
    RuleDef {
        id: ids::RULE_FDA_DEVICE,
        category: RuleCategory::Law,
        title: "Federal Food, Drug, and Cosmetic Act (FD&C Act)",
        prerequisite: None,
        predicate: any(vec![
            all(vec![
                fact(FactId::HasFdaRegulatedFunction),
                not(fact(FactId::IsAdministrativeOrLifestyleOnly)),
                not(fact(FactId::IsLowRisk)),
            ]),
            all(vec![
                fact(FactId::IntendedForMedicalUse),
                fact(FactId::RequiresPrescription),
                not(fact(FactId::IsAdministrativeOrLifestyleOnly)),
            ]),
        ]),
        triggered_message: "The tool is within FDA's device oversight; pre-market review, \
registration, and ongoing compliance may be required.",
    }
}

/// The regulated function alone warrants a warning even when exemptions
/// keep the law rule from triggering.
pub fn function_warning() -> RuleDef {
    RuleDef {
        id: ids::WARN_FDA_FUNCTION,
        category: RuleCategory::Warning,
        title: "FDA-regulated device software function",
        prerequisite: None,
        predicate: fact(FactId::HasFdaRegulatedFunction),
        triggered_message: "The tool includes a device software function that is the \
focus of FDA oversight; confirm its classification before release.",
    }
}
