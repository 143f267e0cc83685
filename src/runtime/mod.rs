mod chain;
pub use chain::*;

mod env;
pub use env::*;

mod error;
pub use error::*;

mod reducer;
pub use reducer::*;
