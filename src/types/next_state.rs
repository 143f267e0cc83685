use crate::types::State;

/// What a reducer hands back to the chain.
///
/// `Undefined` is the absent result and is reported as a diagnostic, `Null` is the
/// deliberate "no value". Neither contributes keys when merged.
#[derive(Clone, PartialEq, Debug)]
pub enum NextState {
    Present(State),
    Null,
    Undefined,
}

impl NextState {
    pub fn is_undefined(&self) -> bool {
        matches!(self, NextState::Undefined)
    }
}

impl From<State> for NextState {
    fn from(state: State) -> Self {
        NextState::Present(state)
    }
}

impl From<Option<State>> for NextState {
    fn from(state: Option<State>) -> Self {
        match state {
            Some(state) => NextState::Present(state),
            None => NextState::Null,
        }
    }
}
