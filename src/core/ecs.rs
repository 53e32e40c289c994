use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{ExecutorKind, SystemSet};

use crate::core::ledger::ParticipantIndex;
use crate::systems::cycle::{advance_cycle_system, reset_tricked_system, CycleCounter};
use crate::systems::leaderboard::{standings_system, Standings};

/// Canonical ordering for a cycle boundary.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum CycleSet {
    Reset,
    Standings,
}

/// Build the ECS world with baseline resources.
pub fn create_world() -> World {
    let mut world = World::new();
    world.insert_resource(ParticipantIndex::default());
    world.insert_resource(Standings::default());
    world.insert_resource(CycleCounter::default());
    world
}

/// Build the cycle schedule. Runs on the caller's thread; it executes while
/// the ledger lock is held.
pub fn create_cycle_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);

    schedule.configure_sets((CycleSet::Reset, CycleSet::Standings).chain());

    schedule.add_systems((
        reset_tricked_system.in_set(CycleSet::Reset),
        advance_cycle_system.in_set(CycleSet::Reset),
        standings_system.in_set(CycleSet::Standings),
    ));

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::participant::{Combo, ParticipantId, TreatBag, Tricked};
    use crate::components::treat::Treat;

    #[test]
    fn cycle_resets_gate_and_keeps_progress() {
        let mut world = create_world();
        let mut schedule = create_cycle_schedule();
        let treats = vec![Treat::new(1, "fun", "fresh", "Pods"); 3];
        let entity = world
            .spawn((
                ParticipantId("u1".into()),
                TreatBag(treats.clone()),
                Combo { current: 2, max: 4 },
                Tricked(true),
            ))
            .id();

        schedule.run(&mut world);

        assert_eq!(world.get::<Tricked>(entity), Some(&Tricked(false)));
        assert_eq!(world.get::<Combo>(entity), Some(&Combo { current: 0, max: 4 }));
        assert_eq!(world.get::<TreatBag>(entity).map(|b| b.0.clone()), Some(treats));
        assert_eq!(world.resource::<CycleCounter>().0, 1);

        let standings = world.resource::<Standings>();
        assert_eq!(standings.combo.as_ref().map(|l| l.score), Some(4));
        assert_eq!(standings.treats.as_ref().map(|l| l.identity.as_str()), Some("u1"));
    }
}
