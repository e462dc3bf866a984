/// Click-driven viewer: regenerates on each accepted click, then waits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InteractiveState {
    Regenerating,
    Idle,
}

/// Fixed-target zoom: `Stepping(k)` is about to produce step `k`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimationState {
    Stepping(u32),
    Done,
}

impl AnimationState {
    #[must_use]
    pub fn initial(max_steps: u32) -> Self {
        if max_steps == 0 {
            Self::Done
        } else {
            Self::Stepping(0)
        }
    }

    /// State after step `step` has been presented.
    #[must_use]
    pub fn after(step: u32, max_steps: u32) -> Self {
        match step.checked_add(1) {
            Some(next) if next < max_steps => Self::Stepping(next),
            _ => Self::Done,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewState {
    Interactive(InteractiveState),
    Animated(AnimationState),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_steps_starts_done() {
        assert_eq!(AnimationState::initial(0), AnimationState::Done);
        assert_eq!(AnimationState::initial(3), AnimationState::Stepping(0));
    }

    #[test]
    fn last_step_moves_to_done() {
        assert_eq!(AnimationState::after(0, 3), AnimationState::Stepping(1));
        assert_eq!(AnimationState::after(1, 3), AnimationState::Stepping(2));
        assert_eq!(AnimationState::after(2, 3), AnimationState::Done);
        assert_eq!(AnimationState::after(u32::MAX, u32::MAX), AnimationState::Done);
    }
}
