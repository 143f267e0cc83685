use std::borrow::Cow;

use serde_json::Value;

use crate::constants::ACTION_TYPE_FIELD;

/// An event passed through a chain. Only its discriminator is ever read, and only for
/// diagnostics.
pub trait Action {
    fn kind(&self) -> Option<Cow<'_, str>>;
}

impl Action for Value {
    fn kind(&self) -> Option<Cow<'_, str>> {
        match self.get(ACTION_TYPE_FIELD)? {
            Value::String(kind) => Some(Cow::Borrowed(kind)),
            // any other discriminator is rendered as compact JSON, e.g. `[1,2]` or `{"a":1}`
            kind => Some(Cow::Owned(kind.to_string())),
        }
    }
}
