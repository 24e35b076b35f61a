use crate::expr::{any, fact};
use crate::facts::FactId;
use crate::graph::RuleDef;
use healthgate_types::{ids, RuleCategory};

/// 21st Century Cures Act information blocking regulations: health care
/// providers, certified health IT developers, and health information
/// networks/exchanges are all regulated actors.
pub fn law() -> RuleDef {
    RuleDef {
        id: ids::RULE_INFO_BLOCKING,
        category: RuleCategory::Law,
        title: "21st Century Cures Act - Information Blocking Regulations",
        prerequisite: None,
        predicate: any(vec![
            fact(FactId::OffersCertifiedHit),
            fact(FactId::EnablesEhiExchange),
            fact(FactId::IsHealthcareProvider),
        ]),
        triggered_message: "As a regulated actor you cannot engage in practices that \
interfere with access, exchange, or use of Electronic Health Information unless a \
regulatory exception applies.",
    }
}
