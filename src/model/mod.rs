mod player;
mod session;
mod stats;

pub use player::*;
pub use session::*;
pub use stats::*;
