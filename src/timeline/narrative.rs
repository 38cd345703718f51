//! Narrative scroll state machine
//!
//! One state per commit in narrative order. Scrolling a text block into the
//! active region enters its step. During fast scrolls several crossings may
//! arrive at once, possibly out of order; only the most recent Enter counts.

/// Boundary crossing of a narrative text block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Block `n` entered the active region
    Enter(usize),
    /// Block `n` left the active region
    Exit(usize),
}

/// Tracks which narrative step is current
#[derive(Debug, Clone, Default)]
pub struct NarrativeController {
    steps: usize,
    current: Option<usize>,
}

impl NarrativeController {
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            current: None,
        }
    }

    /// Step most recently entered
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Apply a batch of crossings and return the step to advance to
    ///
    /// Last writer wins: earlier Enters in the batch are dropped. Exits never
    /// move the state, since the following Enter carries the new step.
    /// Enters past the last step are ignored. Returns `None` when the batch
    /// holds no usable Enter.
    pub fn apply(&mut self, events: &[StepEvent]) -> Option<usize> {
        let step = events.iter().rev().find_map(|event| match *event {
            StepEvent::Enter(step) if step < self.steps => Some(step),
            _ => None,
        })?;
        self.current = Some(step);
        Some(step)
    }
}
