pub mod ecs;
pub mod ledger;
pub mod serialization;
pub mod world;

pub use ledger::{Ledger, ParticipantView};
pub use serialization::{SaveState, SavedParticipant};
pub use world::{CycleReport, Game, TrickOutcome};
