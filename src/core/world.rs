use std::sync::{Mutex, MutexGuard, PoisonError};

use bevy_ecs::prelude::*;

use crate::components::treat::Treat;
use crate::core::ecs::create_cycle_schedule;
use crate::core::ledger::{Ledger, ParticipantView};
use crate::core::serialization::SaveState;
use crate::rules::roll::Roller;
use crate::rules::trick::{is_tricked, trick_odds};
use crate::simulation::treats::TreatGenerator;
use crate::systems::cycle::CycleCounter;
use crate::systems::leaderboard::{Leader, Standings};

/// Result of one trick attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrickOutcome {
    AlreadyTricked,
    Spared { treat: Treat, combo: u32 },
    Tricked { treat: Treat },
}

/// What a cycle boundary produced, copied out from under the lock.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub cycle: u64,
    pub standings: Standings,
    pub snapshot: SaveState,
}

struct GameState {
    ledger: Ledger,
    cycle: Schedule,
    roller: Box<dyn Roller>,
}

/// The game engine. One lock guards the ledger, the cycle schedule and the
/// roller; every operation holds it only for its own duration.
pub struct Game {
    state: Mutex<GameState>,
    generator: TreatGenerator,
}

impl Game {
    pub fn new(generator: TreatGenerator, roller: Box<dyn Roller>) -> Self {
        Self::with_ledger(Ledger::new(), generator, roller)
    }

    /// Start from a previously saved ledger.
    pub fn restore(state: &SaveState, generator: TreatGenerator, roller: Box<dyn Roller>) -> Self {
        Self::with_ledger(Ledger::from_state(state), generator, roller)
    }

    fn with_ledger(ledger: Ledger, generator: TreatGenerator, roller: Box<dyn Roller>) -> Self {
        Self {
            state: Mutex::new(GameState {
                ledger,
                cycle: create_cycle_schedule(),
                roller,
            }),
            generator,
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pull a treat for `identity`, then roll to see if they get tricked.
    pub fn attempt_trick(&self, identity: &str) -> TrickOutcome {
        let mut guard = self.lock();
        let GameState { ledger, roller, .. } = &mut *guard;

        let entity = ledger.get_or_insert(identity);
        if ledger.is_tricked(entity) {
            return TrickOutcome::AlreadyTricked;
        }

        let treat = self.generator.generate(&mut **roller);
        let count = ledger.add_treat(entity, treat.clone());
        let draw = roller.roll_below(trick_odds(count));

        if is_tricked(draw) {
            ledger.trick(entity);
            TrickOutcome::Tricked { treat }
        } else {
            let combo = ledger.extend_combo(entity);
            TrickOutcome::Spared { treat, combo }
        }
    }

    /// Copy of a participant's treats; unknown identities have none.
    pub fn treats_of(&self, identity: &str) -> Vec<Treat> {
        self.lock().ledger.treats(identity)
    }

    pub fn participant(&self, identity: &str) -> Option<ParticipantView> {
        self.lock().ledger.participant(identity)
    }

    pub fn participant_count(&self) -> usize {
        self.lock().ledger.len()
    }

    pub fn combo_leader(&self) -> Option<Leader> {
        self.lock().ledger.combo_leader()
    }

    pub fn trick_leader(&self) -> Option<Leader> {
        self.lock().ledger.trick_leader()
    }

    /// Run a cycle boundary: clear every trick, refresh the standings, and
    /// snapshot the ledger for persistence.
    pub fn run_cycle(&self) -> CycleReport {
        let mut guard = self.lock();
        let GameState { ledger, cycle, .. } = &mut *guard;

        let world = ledger.world_mut();
        cycle.run(world);
        let standings = world.resource::<Standings>().clone();
        let counter = world.resource::<CycleCounter>().0;

        CycleReport {
            cycle: counter,
            standings,
            snapshot: ledger.extract_state(),
        }
    }

    /// Extract a serializable save state from the current ledger.
    pub fn snapshot(&self) -> SaveState {
        self.lock().ledger.extract_state()
    }
}
