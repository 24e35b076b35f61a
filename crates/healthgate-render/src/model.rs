//! Flattened report model for renderers, decoupled from the envelope so
//! renderer code never tracks schema versions.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableCategory {
    Law,
    Warning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableOutcome {
    Triggered,
    NotTriggered,
    NotApplicable,
}

#[derive(Clone, Debug)]
pub struct RenderableDetermination {
    pub rule_id: String,
    pub category: RenderableCategory,
    pub outcome: RenderableOutcome,
    pub message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RenderableData {
    pub mode: String,
    pub laws_applicable: u32,
    pub warnings_triggered: u32,
    pub has_warnings: bool,
}

#[derive(Clone, Debug)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub determinations: Vec<RenderableDetermination>,
    pub data: RenderableData,
}

impl RenderableReport {
    pub fn triggered(
        &self,
        category: RenderableCategory,
    ) -> impl Iterator<Item = &RenderableDetermination> {
        self.determinations.iter().filter(move |d| {
            d.category == category && d.outcome == RenderableOutcome::Triggered
        })
    }
}
