mod action;
pub use action::*;

mod next_state;
pub use next_state::*;

mod state;
pub use state::*;
