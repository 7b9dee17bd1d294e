use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first input; the bird bobs in place.
    Start,
    Playing,
    /// Simulation frozen until a restart.
    GameOver,
}

/// Events that can move the game between phases.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    Begin,
    Crash,
    Reset,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IllegalTransition {
    pub from: Phase,
    pub trigger: Trigger,
}

impl fmt::Display for IllegalTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot apply {:?} while in {:?}", self.trigger, self.from)
    }
}

impl std::error::Error for IllegalTransition {}

impl Phase {
    pub fn transition(self, trigger: Trigger) -> Result<Phase, IllegalTransition> {
        match (self, trigger) {
            (Phase::Start, Trigger::Begin) => Ok(Phase::Playing),
            (Phase::Playing, Trigger::Crash) => Ok(Phase::GameOver),
            (_, Trigger::Reset) => Ok(Phase::Start),
            (from, trigger) => Err(IllegalTransition { from, trigger }),
        }
    }
}
