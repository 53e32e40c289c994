use bevy_ecs::prelude::*;

use crate::components::participant::{Combo, Tricked};

/// Number of completed cycles since the process started.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleCounter(pub u64);

/// System: lifts every trick and breaks every running combo.
/// Treats and max combos carry over.
pub fn reset_tricked_system(mut query: Query<(&mut Tricked, &mut Combo)>) {
    for (mut tricked, mut combo) in query.iter_mut() {
        tricked.0 = false;
        combo.break_run();
    }
}

/// System: advances the cycle counter.
pub fn advance_cycle_system(mut counter: ResMut<CycleCounter>) {
    counter.0 += 1;
}
