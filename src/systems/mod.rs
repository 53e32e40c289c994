pub mod cycle;
pub mod leaderboard;

pub use cycle::{advance_cycle_system, reset_tricked_system, CycleCounter};
pub use leaderboard::{combo_leader, pick_leader, standings_system, trick_leader, Leader, Standings};
