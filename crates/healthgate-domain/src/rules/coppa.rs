use crate::expr::{any, fact};
use crate::facts::FactId;
use crate::graph::RuleDef;
use healthgate_types::{ids, RuleCategory};

/// COPPA applies on intent, child-oriented design, or actual knowledge
/// that children under 13 use the tool.
pub fn law() -> RuleDef {
    RuleDef {
        id: ids::RULE_COPPA,
        category: RuleCategory::Law,
        title: "Children's Online Privacy Protection Act (COPPA)",
        prerequisite: None,
        predicate: any(vec![
            fact(FactId::IntendedForChildren),
            fact(FactId::HasChildOrientedFeatures),
            fact(FactId::ChildrenUsingApp),
        ]),
        triggered_message: "Data is collected from children under 13; parental notice, \
verifiable consent, and protection procedures are required.",
    }
}

/// The warning is narrower than the law: child-oriented design alone does
/// not raise it, only intent or actual knowledge of child users.
pub fn childrens_data_warning() -> RuleDef {
    RuleDef {
        id: ids::WARN_CHILDRENS_DATA,
        category: RuleCategory::Warning,
        title: "Children's data exposure",
        prerequisite: None,
        predicate: any(vec![
            fact(FactId::IntendedForChildren),
            fact(FactId::ChildrenUsingApp),
        ]),
        triggered_message: "Children are an intended or known audience; strict COPPA \
requirements apply to their data, consult counsel familiar with COPPA.",
    }
}
