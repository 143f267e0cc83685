use std::fmt;

use serde::Serialize;

use crate::constants::UNDEFINED_ACTION_KIND;

/// Non-fatal conditions reported while a chain runs.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Diagnostic {
    #[serde(rename_all = "camelCase")]
    UndefinedState {
        action: Option<String>,
        index: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UndefinedState { action, index } => write!(
                f,
                "Given action {}, reducer \"{}\" returned undefined. \
                 To ignore an action, you must explicitly return the previous state. \
                 If you want this reducer to hold no value, you can return null instead of undefined.",
                action.as_deref().unwrap_or(UNDEFINED_ACTION_KIND),
                index
            ),
        }
    }
}

/// The diagnostic sink a chain reports to.
pub trait Env {
    fn log(diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `tracing` facade.
pub enum TracingEnv {}

impl Env for TracingEnv {
    fn log(diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::UndefinedState { action, index } => tracing::warn!(
                action = action.as_deref().unwrap_or(UNDEFINED_ACTION_KIND),
                reducer = index,
                "{}",
                diagnostic
            ),
        }
    }
}
