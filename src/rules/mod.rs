pub mod roll;
pub mod trick;

pub use roll::{RngRoller, Roller, ScriptedRoller};
pub use trick::{is_tricked, trick_odds};
