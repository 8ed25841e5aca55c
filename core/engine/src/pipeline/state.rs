use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::error::PipelineStage;

/// Orchestrator state. Transitions are strictly linear:
/// `Idle → Transcribing → Translating → Synthesizing → Done`, with
/// `Failed` reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Idle,
    Transcribing,
    Translating,
    Synthesizing,
    Done,
    Failed(PipelineStage),
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed(_))
    }
}

impl Display for PipelineState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::Transcribing => write!(f, "transcribing"),
            PipelineState::Translating => write!(f, "translating"),
            PipelineState::Synthesizing => write!(f, "synthesizing"),
            PipelineState::Done => write!(f, "done"),
            PipelineState::Failed(stage) => write!(f, "failed({})", stage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(PipelineState::Done.is_terminal());
        assert!(PipelineState::Failed(PipelineStage::Transcription).is_terminal());
        assert!(!PipelineState::Idle.is_terminal());
        assert!(!PipelineState::Synthesizing.is_terminal());
    }

    #[test]
    fn test_display_names_stage() {
        let state = PipelineState::Failed(PipelineStage::Synthesis);
        assert_eq!(state.to_string(), "failed(synthesis)");
    }
}
