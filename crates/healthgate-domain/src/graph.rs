//! Static rule definitions and graph validation.
//!
//! Rules may reference the results of other rules, so the set forms a
//! directed acyclic graph. `RuleGraph::new` is the single gate through
//! which a rule set becomes evaluatable: it rejects duplicate ids,
//! references to undefined rules, and cycles, and fixes the evaluation
//! order once so every run is deterministic.

use crate::expr::Expr;
use healthgate_types::RuleCategory;
use std::collections::BTreeMap;
use thiserror::Error;

/// One statically defined rule.
#[derive(Clone, Debug)]
pub struct RuleDef {
    pub id: &'static str,
    pub category: RuleCategory,
    pub title: &'static str,

    /// If present and false, the rule is `not_applicable` and the main
    /// predicate is never evaluated.
    pub prerequisite: Option<Expr>,
    pub predicate: Expr,

    /// Rationale recorded on the determination when the rule triggers.
    pub triggered_message: &'static str,
}

impl RuleDef {
    /// Every rule id referenced by the prerequisite or the predicate.
    pub fn rule_refs(&self) -> Vec<&'static str> {
        let mut refs = Vec::new();
        if let Some(prereq) = &self.prerequisite {
            prereq.rule_refs(&mut refs);
        }
        self.predicate.rule_refs(&mut refs);
        refs
    }
}

/// A malformed rule set. These are startup-time defects: with the
/// built-in rules they cannot occur, but they are checked rather than
/// assumed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("duplicate rule id: {id}")]
    DuplicateRule { id: String },

    #[error("rule {rule} depends on undefined rule {depends_on}")]
    UnknownDependency { rule: String, depends_on: String },

    #[error("rule dependency cycle involving: {}", .involved.join(", "))]
    Cycle { involved: Vec<String> },
}

/// A validated rule set, held in topological evaluation order.
#[derive(Clone, Debug)]
pub struct RuleGraph {
    ordered: Vec<RuleDef>,
}

impl RuleGraph {
    /// Validate a rule set and fix its evaluation order.
    ///
    /// The order is the topological order that stays closest to
    /// declaration order: among rules whose dependencies are satisfied,
    /// the earliest-declared rule goes next.
    pub fn new(rules: Vec<RuleDef>) -> Result<RuleGraph, GraphError> {
        let mut index_by_id: BTreeMap<&'static str, usize> = BTreeMap::new();
        for (idx, rule) in rules.iter().enumerate() {
            if index_by_id.insert(rule.id, idx).is_some() {
                return Err(GraphError::DuplicateRule {
                    id: rule.id.to_string(),
                });
            }
        }

        // Edges point dependency -> dependent; indegree counts unmet deps.
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); rules.len()];
        let mut indegree: Vec<usize> = vec![0; rules.len()];
        for (idx, rule) in rules.iter().enumerate() {
            for dep in rule.rule_refs() {
                let Some(&dep_idx) = index_by_id.get(dep) else {
                    return Err(GraphError::UnknownDependency {
                        rule: rule.id.to_string(),
                        depends_on: dep.to_string(),
                    });
                };
                dependents[dep_idx].push(idx);
                indegree[idx] += 1;
            }
        }

        // Kahn's algorithm; the candidate scan keeps declaration order.
        let mut placed = vec![false; rules.len()];
        let mut order: Vec<usize> = Vec::with_capacity(rules.len());
        while order.len() < rules.len() {
            let next = (0..rules.len()).find(|&i| !placed[i] && indegree[i] == 0);
            let Some(next) = next else {
                let involved = rules
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !placed[*i])
                    .map(|(_, r)| r.id.to_string())
                    .collect();
                return Err(GraphError::Cycle { involved });
            };
            placed[next] = true;
            for &dependent in &dependents[next] {
                indegree[dependent] -= 1;
            }
            order.push(next);
        }

        let mut by_index: Vec<Option<RuleDef>> = rules.into_iter().map(Some).collect();
        let ordered = order
            .into_iter()
            .filter_map(|i| by_index[i].take())
            .collect();

        Ok(RuleGraph { ordered })
    }

    /// The built-in regulatory rule set.
    pub fn builtin() -> Result<RuleGraph, GraphError> {
        RuleGraph::new(crate::rules::all())
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[RuleDef] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
