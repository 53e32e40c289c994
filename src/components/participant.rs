use bevy_ecs::prelude::*;

use crate::components::treat::Treat;

/// Stable identity handed to us by the chat transport.
#[derive(Component, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantId(pub String);

/// Everything a participant has collected, oldest first.
#[derive(Component, Debug, Clone, Default)]
pub struct TreatBag(pub Vec<Treat>);

/// Consecutive survived pulls and the best run so far.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Combo {
    pub current: u32,
    pub max: u32,
}

impl Combo {
    pub fn extend(&mut self) -> u32 {
        self.current += 1;
        self.max = self.max.max(self.current);
        self.current
    }

    pub fn break_run(&mut self) {
        self.current = 0;
    }
}

/// Per-cycle gate. While set, the participant earns nothing.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tricked(pub bool);
