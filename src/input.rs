//! Browser events reduce to two actions. What the primary action means
//! depends on the phase: begin, flap, or restart.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Primary,
    Restart,
}

/// Keyboard mapping. Auto-repeat never flaps.
pub fn action_for_key(code: &str, repeat: bool) -> Option<Action> {
    if repeat {
        return None;
    }
    match code {
        "Space" | "ArrowUp" => Some(Action::Primary),
        _ => None,
    }
}

/// Actions collected by the event listeners between two animation frames.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<Action>,
}

impl InputQueue {
    pub fn push(&mut self, action: Action) {
        self.pending.push(action);
    }

    pub fn drain(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_and_arrow_are_primary() {
        assert_eq!(action_for_key("Space", false), Some(Action::Primary));
        assert_eq!(action_for_key("ArrowUp", false), Some(Action::Primary));
        assert_eq!(action_for_key("KeyA", false), None);
        assert_eq!(action_for_key("Space", true), None);
    }

    #[test]
    fn drain_empties_in_order() {
        let mut queue = InputQueue::default();
        queue.push(Action::Primary);
        queue.push(Action::Restart);
        assert_eq!(queue.drain(), vec![Action::Primary, Action::Restart]);
        assert!(queue.is_empty());
    }
}
