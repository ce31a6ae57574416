use crate::model::state_change::StateChange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    Applied,
    /// An HP delta hit the floor or the cap.
    Clamped { requested: u32, applied: u32 },
    Ignored { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeApplication {
    pub change: StateChange,
    pub outcome: ChangeOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub applications: Vec<ChangeApplication>,
}

impl ExtractionReport {
    pub fn applied_count(&self) -> usize {
        self.applications
            .iter()
            .filter(|a| !matches!(a.outcome, ChangeOutcome::Ignored { .. }))
            .count()
    }
}
