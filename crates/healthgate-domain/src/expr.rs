//! Declarative boolean expressions over facts and prior rule results.
//!
//! Keeping predicates as data (rather than opaque closures) is what makes
//! the rule graph statically checkable: dependency references can be
//! collected and validated before any evaluation runs.

use crate::facts::{FactId, FactStore};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// The answer to one question.
    Fact(FactId),
    /// The `triggered` result of a previously evaluated rule.
    Rule(&'static str),
    Not(Box<Expr>),
    /// Conjunction; empty means `true`.
    All(Vec<Expr>),
    /// Disjunction; empty means `false`.
    Any(Vec<Expr>),
}

pub fn fact(id: FactId) -> Expr {
    Expr::Fact(id)
}

pub fn rule(id: &'static str) -> Expr {
    Expr::Rule(id)
}

pub fn not(e: Expr) -> Expr {
    Expr::Not(Box::new(e))
}

pub fn all(exprs: Vec<Expr>) -> Expr {
    Expr::All(exprs)
}

pub fn any(exprs: Vec<Expr>) -> Expr {
    Expr::Any(exprs)
}

impl Expr {
    /// Evaluate against validated facts and earlier rule results.
    ///
    /// `prior` maps rule id to its triggered result. Graph validation
    /// guarantees every referenced rule was evaluated first; an absent id
    /// reads as `false` to keep evaluation total.
    pub fn eval(&self, facts: &FactStore, prior: &BTreeMap<&'static str, bool>) -> bool {
        match self {
            Expr::Fact(id) => facts.get(*id),
            Expr::Rule(id) => prior.get(id).copied().unwrap_or(false),
            Expr::Not(inner) => !inner.eval(facts, prior),
            Expr::All(exprs) => exprs.iter().all(|e| e.eval(facts, prior)),
            Expr::Any(exprs) => exprs.iter().any(|e| e.eval(facts, prior)),
        }
    }

    /// Collect every rule id this expression references.
    pub fn rule_refs(&self, out: &mut Vec<&'static str>) {
        match self {
            Expr::Fact(_) => {}
            Expr::Rule(id) => out.push(id),
            Expr::Not(inner) => inner.rule_refs(out),
            Expr::All(exprs) | Expr::Any(exprs) => {
                for e in exprs {
                    e.rule_refs(out);
                }
            }
        }
    }
}
