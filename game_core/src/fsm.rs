//! Round state machine
//!
//! A round starts `Idle`; serving makes it `Active`, and the point that ends
//! the rally drops it back to `Idle`.

/// Play states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    /// Waiting for a serve (startup, or just scored)
    #[default]
    Idle,
    /// Simulation advancing
    Active,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAction {
    Serve,
    PointScored,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: PlayState,
    pub to_state: PlayState,
    pub action: PlayAction,
}

/// Round Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct RoundFsm {
    state: PlayState,
}

impl RoundFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == PlayState::Active
    }

    pub fn can_transition(&self, action: PlayAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition; rejected actions leave the state untouched
    pub fn transition(&mut self, action: PlayAction) -> TransitionResult {
        let from_state = self.state;

        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn next_state(&self, action: PlayAction) -> Option<PlayState> {
        match (self.state, action) {
            (PlayState::Idle, PlayAction::Serve) => Some(PlayState::Active),
            (PlayState::Active, PlayAction::PointScored) => Some(PlayState::Idle),
            _ => None,
        }
    }
}
