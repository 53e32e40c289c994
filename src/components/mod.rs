pub mod participant;
pub mod treat;

pub use participant::{Combo, ParticipantId, TreatBag, Tricked};
pub use treat::Treat;
