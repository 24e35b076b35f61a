use crate::facts::FactStore;
use crate::graph::RuleGraph;
use crate::report::DeterminationSet;
use healthgate_types::{Determination, Outcome};
use std::collections::BTreeMap;

/// Evaluate the rule graph against one fact store.
///
/// Rules run in the graph's topological order. A false prerequisite
/// short-circuits the rule to `not_applicable` without touching its main
/// predicate, so downstream questions are never judged on answers that
/// were never meaningfully asked. Pure and deterministic: same facts,
/// same graph, same determinations.
pub fn evaluate(facts: &FactStore, graph: &RuleGraph) -> DeterminationSet {
    let mut prior: BTreeMap<&'static str, bool> = BTreeMap::new();
    let mut determinations = Vec::with_capacity(graph.len());

    for rule in graph.rules() {
        let applicable = rule
            .prerequisite
            .as_ref()
            .is_none_or(|prereq| prereq.eval(facts, &prior));

        let outcome = if !applicable {
            Outcome::NotApplicable
        } else if rule.predicate.eval(facts, &prior) {
            Outcome::Triggered
        } else {
            Outcome::NotTriggered
        };

        prior.insert(rule.id, outcome == Outcome::Triggered);

        determinations.push(Determination {
            rule_id: rule.id.to_string(),
            category: rule.category,
            outcome,
            message: (outcome == Outcome::Triggered).then(|| rule.triggered_message.to_string()),
        });
    }

    DeterminationSet::from_determinations(determinations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthgate_types::ids;

    fn graph() -> RuleGraph {
        RuleGraph::builtin().expect("builtin rules form a DAG")
    }

    /// The reference answer set: a consumer-facing lifestyle app with a
    /// PHR connection and no covered-entity relationship.
    fn reference_facts() -> FactStore {
        FactStore {
            collects_health_info: true,
            has_identifiable_health_info: true,
            is_administrative_or_lifestyle_only: true,
            is_low_risk: true,
            is_consumer_facing: true,
            interacts_with_phr: true,
            ..FactStore::default()
        }
    }

    #[test]
    fn reference_scenario() {
        let set = evaluate(&reference_facts(), &graph());

        assert_eq!(set.outcome(ids::RULE_HIPAA), Some(Outcome::NotTriggered));
        assert_eq!(set.outcome(ids::RULE_FTC_BREACH), Some(Outcome::Triggered));
        assert_eq!(set.outcome(ids::RULE_FDA_DEVICE), Some(Outcome::NotTriggered));
        assert_eq!(set.outcome(ids::RULE_COPPA), Some(Outcome::NotTriggered));
        assert_eq!(set.outcome(ids::WARN_CONSUMER_PHR), Some(Outcome::Triggered));

        assert_eq!(set.applicable_laws, 1);
        assert!(set.has_warnings);
    }

    #[test]
    fn totality_one_determination_per_rule() {
        let set = evaluate(&reference_facts(), &graph());
        assert_eq!(set.determinations.len(), graph().len());

        let mut ids_seen: Vec<&str> = set.determinations.iter().map(|d| d.rule_id.as_str()).collect();
        ids_seen.sort_unstable();
        ids_seen.dedup();
        assert_eq!(ids_seen.len(), graph().len());
    }

    #[test]
    fn no_health_info_short_circuits_collection_gated_rules() {
        let facts = FactStore {
            // Answers that would trigger HIPAA and Part 2 if the
            // prerequisite were ignored.
            collects_health_info: false,
            is_health_plan: true,
            has_identifiable_health_info: true,
            offers_substance_use_treatment: true,
            ..FactStore::default()
        };
        let set = evaluate(&facts, &graph());

        assert_eq!(set.outcome(ids::RULE_HIPAA), Some(Outcome::NotApplicable));
        assert_eq!(set.outcome(ids::RULE_FTC_BREACH), Some(Outcome::NotApplicable));
        assert_eq!(set.outcome(ids::RULE_SUBSTANCE_USE), Some(Outcome::NotApplicable));
    }

    #[test]
    fn hipaa_triggers_for_covered_entity_with_identifiable_info() {
        let facts = FactStore {
            collects_health_info: true,
            is_healthcare_provider: true,
            has_identifiable_health_info: true,
            ..FactStore::default()
        };
        let set = evaluate(&facts, &graph());
        assert_eq!(set.outcome(ids::RULE_HIPAA), Some(Outcome::Triggered));
    }

    #[test]
    fn hipaa_not_triggered_without_identifiable_info() {
        let facts = FactStore {
            collects_health_info: true,
            is_health_plan: true,
            ..FactStore::default()
        };
        let set = evaluate(&facts, &graph());
        assert_eq!(set.outcome(ids::RULE_HIPAA), Some(Outcome::NotTriggered));
    }

    #[test]
    fn business_associate_triggers_hipaa_alone() {
        let facts = FactStore {
            collects_health_info: true,
            works_for_covered_entity: true,
            ..FactStore::default()
        };
        let set = evaluate(&facts, &graph());
        assert_eq!(set.outcome(ids::RULE_HIPAA), Some(Outcome::Triggered));
    }

    #[test]
    fn hipaa_precedence_suppresses_ftc_breach_rule() {
        let facts = FactStore {
            collects_health_info: true,
            works_for_covered_entity: true,
            interacts_with_phr: true,
            is_consumer_facing: true,
            ..FactStore::default()
        };
        let set = evaluate(&facts, &graph());

        assert_eq!(set.outcome(ids::RULE_HIPAA), Some(Outcome::Triggered));
        // HIPAA-covered data is carved out of the FTC rule.
        assert_eq!(set.outcome(ids::RULE_FTC_BREACH), Some(Outcome::NotApplicable));
        assert_eq!(set.outcome(ids::WARN_CONSUMER_PHR), Some(Outcome::NotTriggered));
        assert!(!set.has_warnings);
    }

    #[test]
    fn fda_device_law_needs_more_than_the_regulated_function() {
        let regulated = FactStore {
            has_fda_regulated_function: true,
            ..FactStore::default()
        };
        let set = evaluate(&regulated, &graph());
        assert_eq!(set.outcome(ids::RULE_FDA_DEVICE), Some(Outcome::Triggered));
        assert_eq!(set.outcome(ids::WARN_FDA_FUNCTION), Some(Outcome::Triggered));

        let low_risk = FactStore {
            has_fda_regulated_function: true,
            is_low_risk: true,
            ..FactStore::default()
        };
        let set = evaluate(&low_risk, &graph());
        assert_eq!(set.outcome(ids::RULE_FDA_DEVICE), Some(Outcome::NotTriggered));
        // The function itself still warrants a warning.
        assert_eq!(set.outcome(ids::WARN_FDA_FUNCTION), Some(Outcome::Triggered));
    }

    #[test]
    fn prescription_gated_medical_use_triggers_fda_law() {
        let facts = FactStore {
            intended_for_medical_use: true,
            requires_prescription: true,
            ..FactStore::default()
        };
        let set = evaluate(&facts, &graph());
        assert_eq!(set.outcome(ids::RULE_FDA_DEVICE), Some(Outcome::Triggered));

        let exempt = FactStore {
            is_administrative_or_lifestyle_only: true,
            ..facts
        };
        let set = evaluate(&exempt, &graph());
        assert_eq!(set.outcome(ids::RULE_FDA_DEVICE), Some(Outcome::NotTriggered));
    }

    #[test]
    fn coppa_triggers_on_any_children_signal() {
        for setter in [
            |f: &mut FactStore| f.intended_for_children = true,
            |f: &mut FactStore| f.has_child_oriented_features = true,
            |f: &mut FactStore| f.children_using_app = true,
        ] {
            let mut facts = FactStore::default();
            setter(&mut facts);
            let set = evaluate(&facts, &graph());
            assert_eq!(set.outcome(ids::RULE_COPPA), Some(Outcome::Triggered));
        }
    }

    #[test]
    fn child_oriented_features_alone_do_not_warn() {
        // COPPA applies, but the warning needs intent or actual knowledge.
        let facts = FactStore {
            has_child_oriented_features: true,
            ..FactStore::default()
        };
        let set = evaluate(&facts, &graph());
        assert_eq!(set.outcome(ids::RULE_COPPA), Some(Outcome::Triggered));
        assert_eq!(set.outcome(ids::WARN_CHILDRENS_DATA), Some(Outcome::NotTriggered));
    }

    #[test]
    fn info_blocking_covers_all_three_actor_types() {
        for setter in [
            |f: &mut FactStore| f.offers_certified_hit = true,
            |f: &mut FactStore| f.enables_ehi_exchange = true,
            |f: &mut FactStore| f.is_healthcare_provider = true,
        ] {
            let mut facts = FactStore::default();
            setter(&mut facts);
            let set = evaluate(&facts, &graph());
            assert_eq!(set.outcome(ids::RULE_INFO_BLOCKING), Some(Outcome::Triggered));
        }
    }

    #[test]
    fn substance_use_rule_needs_health_info_collection() {
        let facts = FactStore {
            collects_health_info: true,
            offers_substance_use_treatment: true,
            ..FactStore::default()
        };
        let set = evaluate(&facts, &graph());
        assert_eq!(set.outcome(ids::RULE_SUBSTANCE_USE), Some(Outcome::Triggered));
        assert!(set.applicable_laws >= 1);
    }

    #[test]
    fn all_false_answers_trigger_nothing() {
        let set = evaluate(&FactStore::default(), &graph());
        assert_eq!(set.applicable_laws, 0);
        assert_eq!(set.warnings_triggered, 0);
        assert!(!set.has_warnings);
        assert!(set
            .determinations
            .iter()
            .all(|d| d.outcome != Outcome::Triggered));
    }

    #[test]
    fn triggered_rules_carry_a_message() {
        let set = evaluate(&reference_facts(), &graph());
        for d in &set.determinations {
            assert_eq!(d.message.is_some(), d.outcome == Outcome::Triggered);
        }
    }
}
