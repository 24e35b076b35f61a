//! Property-based tests for the evaluation engine.
//!
//! These pin the spec-level invariants across the whole fact space:
//! determinism, totality, short-circuit behavior, HIPAA/FTC precedence,
//! and warnings-flag consistency.

use crate::engine::evaluate;
use crate::facts::{FactStore, SCHEMA_FIELDS};
use crate::graph::RuleGraph;
use healthgate_types::{ids, Outcome, RuleCategory};
use proptest::prelude::*;

/// Every fact store, encoded as one bit per schema field.
fn arb_facts() -> impl Strategy<Value = FactStore> {
    any::<u32>().prop_map(|bits| {
        let mut facts = FactStore::default();
        for (i, &(_, id)) in SCHEMA_FIELDS.iter().enumerate() {
            facts.set(id, bits & (1 << i) != 0);
        }
        facts
    })
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(facts in arb_facts()) {
        let graph = RuleGraph::builtin().expect("builtin rules form a DAG");
        let first = evaluate(&facts, &graph);
        let second = evaluate(&facts, &graph);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_rule_gets_exactly_one_determination(facts in arb_facts()) {
        let graph = RuleGraph::builtin().expect("builtin rules form a DAG");
        let set = evaluate(&facts, &graph);

        prop_assert_eq!(set.determinations.len(), graph.len());
        let mut seen: Vec<&str> = set.determinations.iter().map(|d| d.rule_id.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), graph.len());
    }

    #[test]
    fn has_warnings_iff_a_warning_triggered(facts in arb_facts()) {
        let graph = RuleGraph::builtin().expect("builtin rules form a DAG");
        let set = evaluate(&facts, &graph);

        let warning_triggered = set.determinations.iter().any(|d| {
            d.category == RuleCategory::Warning && d.outcome == Outcome::Triggered
        });
        prop_assert_eq!(set.has_warnings, warning_triggered);
    }

    #[test]
    fn counts_match_the_determinations(facts in arb_facts()) {
        let graph = RuleGraph::builtin().expect("builtin rules form a DAG");
        let set = evaluate(&facts, &graph);

        let laws = set.determinations.iter().filter(|d| {
            d.category == RuleCategory::Law && d.outcome == Outcome::Triggered
        }).count() as u32;
        let warnings = set.determinations.iter().filter(|d| {
            d.category == RuleCategory::Warning && d.outcome == Outcome::Triggered
        }).count() as u32;

        prop_assert_eq!(set.applicable_laws, laws);
        prop_assert_eq!(set.warnings_triggered, warnings);
    }

    #[test]
    fn no_health_info_makes_collection_gated_rules_inapplicable(facts in arb_facts()) {
        let mut facts = facts;
        facts.collects_health_info = false;

        let graph = RuleGraph::builtin().expect("builtin rules form a DAG");
        let set = evaluate(&facts, &graph);

        for id in [ids::RULE_HIPAA, ids::RULE_FTC_BREACH, ids::RULE_SUBSTANCE_USE] {
            prop_assert_eq!(set.outcome(id), Some(Outcome::NotApplicable));
        }
    }

    #[test]
    fn hipaa_and_ftc_breach_never_both_trigger(facts in arb_facts()) {
        let graph = RuleGraph::builtin().expect("builtin rules form a DAG");
        let set = evaluate(&facts, &graph);

        let both = set.outcome(ids::RULE_HIPAA) == Some(Outcome::Triggered)
            && set.outcome(ids::RULE_FTC_BREACH) == Some(Outcome::Triggered);
        prop_assert!(!both);
    }
}
