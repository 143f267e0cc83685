use std::sync::Arc;

use derive_more::Deref;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::runtime::Error;

/// Associative record threaded through a chain of reducers.
///
/// The record itself is immutable and shared, cloning a `State` only clones the handle.
/// Two handles are *identical* when they point to the same record, see [`State::ptr_eq`].
#[derive(Default, Clone, PartialEq, Deref, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct State(Arc<Map<String, Value>>);

impl State {
    pub fn new() -> Self {
        Self::default()
    }
    /// Reference equality, the only comparison used when deciding whether to merge.
    pub fn ptr_eq(&self, other: &State) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
    /// New record with every key of `self`, overwritten by every key of `patch`.
    ///
    /// Nested values are replaced wholesale.
    pub fn merged(&self, patch: &State) -> State {
        let mut record = self.0.as_ref().to_owned();
        record.extend(
            patch
                .0
                .iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned())),
        );
        State::from(record)
    }
    /// New record with the same keys and values as `self`.
    pub fn shallow_copy(&self) -> State {
        State::from(self.0.as_ref().to_owned())
    }
    pub fn into_value(self) -> Value {
        Value::Object(Arc::try_unwrap(self.0).unwrap_or_else(|record| record.as_ref().to_owned()))
    }
}

impl From<Map<String, Value>> for State {
    fn from(record: Map<String, Value>) -> Self {
        State(Arc::new(record))
    }
}

impl TryFrom<Value> for State {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(record) => Ok(State::from(record)),
            value => Err(Error::NotARecord(value)),
        }
    }
}

impl From<State> for Value {
    fn from(state: State) -> Self {
        state.into_value()
    }
}
