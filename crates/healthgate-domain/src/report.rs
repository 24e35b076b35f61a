use healthgate_types::{Determination, Outcome, RuleCategory};

/// The result of one evaluation run: exactly one determination per rule,
/// in evaluation order, plus the aggregate gate signals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeterminationSet {
    pub determinations: Vec<Determination>,
    pub applicable_laws: u32,
    pub warnings_triggered: u32,
    pub has_warnings: bool,
}

impl DeterminationSet {
    pub fn from_determinations(determinations: Vec<Determination>) -> Self {
        let mut applicable_laws = 0;
        let mut warnings_triggered = 0;
        for d in &determinations {
            if d.outcome == Outcome::Triggered {
                match d.category {
                    RuleCategory::Law => applicable_laws += 1,
                    RuleCategory::Warning => warnings_triggered += 1,
                }
            }
        }
        DeterminationSet {
            determinations,
            applicable_laws,
            warnings_triggered,
            has_warnings: warnings_triggered > 0,
        }
    }

    /// Outcome of one rule, if it exists in this set.
    pub fn outcome(&self, rule_id: &str) -> Option<Outcome> {
        self.determinations
            .iter()
            .find(|d| d.rule_id == rule_id)
            .map(|d| d.outcome)
    }
}
