use bevy_ecs::prelude::*;

use crate::components::participant::{Combo, ParticipantId, TreatBag};

/// Who currently leads a board, and by how much.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leader {
    pub identity: String,
    pub score: u64,
}

/// Resource holding the standings computed on the last cycle.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    pub combo: Option<Leader>,
    pub treats: Option<Leader>,
}

/// Highest non-zero score wins; ties go to the smallest identity.
pub fn pick_leader<'a>(entries: impl IntoIterator<Item = (&'a str, u64)>) -> Option<Leader> {
    let mut best: Option<(&str, u64)> = None;
    for (identity, score) in entries {
        if score == 0 {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_id, best_score)) => {
                score > best_score || (score == best_score && identity < best_id)
            }
        };
        if better {
            best = Some((identity, score));
        }
    }
    best.map(|(identity, score)| Leader {
        identity: identity.to_string(),
        score,
    })
}

pub fn combo_leader(world: &mut World) -> Option<Leader> {
    let mut query = world.query::<(&ParticipantId, &Combo)>();
    pick_leader(
        query
            .iter(world)
            .map(|(id, combo)| (id.0.as_str(), u64::from(combo.max))),
    )
}

pub fn trick_leader(world: &mut World) -> Option<Leader> {
    let mut query = world.query::<(&ParticipantId, &TreatBag)>();
    pick_leader(
        query
            .iter(world)
            .map(|(id, bag)| (id.0.as_str(), bag.0.len() as u64)),
    )
}

/// System: recomputes both boards into the `Standings` resource.
pub fn standings_system(
    query: Query<(&ParticipantId, &Combo, &TreatBag)>,
    mut standings: ResMut<Standings>,
) {
    standings.combo = pick_leader(
        query
            .iter()
            .map(|(id, combo, _)| (id.0.as_str(), u64::from(combo.max))),
    );
    standings.treats = pick_leader(
        query
            .iter()
            .map(|(id, _, bag)| (id.0.as_str(), bag.0.len() as u64)),
    );
}
