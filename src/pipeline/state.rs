//! Pipeline state machine

use std::fmt;

/// Where a run currently is.
///
/// Transitions are strictly linear (Idle → Fetching → GeneratingMetadata →
/// Building → Installing → Done) except that any state may move to Failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Fetching,
    GeneratingMetadata,
    Building,
    Installing,
    Done,
    Failed,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// The state that follows on success, `None` once terminal
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Fetching),
            Self::Fetching => Some(Self::GeneratingMetadata),
            Self::GeneratingMetadata => Some(Self::Building),
            Self::Building => Some(Self::Installing),
            Self::Installing => Some(Self::Done),
            Self::Done | Self::Failed => None,
        }
    }

    /// Whether moving from `self` to `to` is allowed
    pub fn can_transition_to(self, to: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        to == Self::Failed || self.next() == Some(to)
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::GeneratingMetadata => "generating metadata",
            Self::Building => "building",
            Self::Installing => "installing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Receives every state transition of a run
pub trait PipelineObserver {
    fn on_transition(&self, from: PipelineState, to: PipelineState);
}
