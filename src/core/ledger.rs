use std::collections::HashMap;

use bevy_ecs::prelude::*;

use crate::components::participant::{Combo, ParticipantId, TreatBag, Tricked};
use crate::components::treat::Treat;
use crate::core::ecs::create_world;
use crate::core::serialization::{SaveState, SavedParticipant};
use crate::systems::leaderboard::{self, Leader};

/// Resource mapping participant identity to its entity.
#[derive(Resource, Debug, Default)]
pub struct ParticipantIndex(pub HashMap<String, Entity>);

/// Read-only copy of one participant's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantView {
    pub identity: String,
    pub treats: Vec<Treat>,
    pub combo: u32,
    pub max_combo: u32,
    pub tricked: bool,
}

/// Every participant, keyed by identity. Backed by an ECS world; callers only
/// get typed operations, never the world itself.
pub struct Ledger {
    world: World,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            world: create_world(),
        }
    }

    /// Rebuild a ledger from a save. Everyone starts untricked with no run.
    pub fn from_state(state: &SaveState) -> Self {
        let mut ledger = Self::new();
        for (identity, saved) in &state.participants {
            let entity = ledger.get_or_insert(identity);
            let mut ent = ledger.world.entity_mut(entity);
            ent.insert((
                TreatBag(saved.treats.clone()),
                Combo {
                    current: 0,
                    max: saved.max_combo,
                },
            ));
        }
        ledger
    }

    pub fn len(&self) -> usize {
        self.world.resource::<ParticipantIndex>().0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn lookup(&self, identity: &str) -> Option<Entity> {
        self.world
            .resource::<ParticipantIndex>()
            .0
            .get(identity)
            .copied()
    }

    /// Find a participant, creating a fresh one on first sight.
    pub(crate) fn get_or_insert(&mut self, identity: &str) -> Entity {
        if let Some(entity) = self.lookup(identity) {
            return entity;
        }
        let entity = self
            .world
            .spawn((
                ParticipantId(identity.to_string()),
                TreatBag::default(),
                Combo::default(),
                Tricked::default(),
            ))
            .id();
        self.world
            .resource_mut::<ParticipantIndex>()
            .0
            .insert(identity.to_string(), entity);
        entity
    }

    pub(crate) fn is_tricked(&self, entity: Entity) -> bool {
        self.world
            .get::<Tricked>(entity)
            .map(|t| t.0)
            .unwrap_or(false)
    }

    /// Append a treat and return the new bag size.
    pub(crate) fn add_treat(&mut self, entity: Entity, treat: Treat) -> usize {
        match self.world.get_mut::<TreatBag>(entity) {
            Some(mut bag) => {
                bag.0.push(treat);
                bag.0.len()
            }
            None => 0,
        }
    }

    /// Record a survived pull and return the running combo.
    pub(crate) fn extend_combo(&mut self, entity: Entity) -> u32 {
        self.world
            .get_mut::<Combo>(entity)
            .map(|mut combo| combo.extend())
            .unwrap_or(0)
    }

    pub(crate) fn trick(&mut self, entity: Entity) {
        if let Some(mut tricked) = self.world.get_mut::<Tricked>(entity) {
            tricked.0 = true;
        }
        if let Some(mut combo) = self.world.get_mut::<Combo>(entity) {
            combo.break_run();
        }
    }

    pub fn treats(&self, identity: &str) -> Vec<Treat> {
        self.lookup(identity)
            .and_then(|entity| self.world.get::<TreatBag>(entity))
            .map(|bag| bag.0.clone())
            .unwrap_or_default()
    }

    pub fn participant(&self, identity: &str) -> Option<ParticipantView> {
        let entity = self.lookup(identity)?;
        let combo = self.world.get::<Combo>(entity).copied().unwrap_or_default();
        Some(ParticipantView {
            identity: identity.to_string(),
            treats: self.treats(identity),
            combo: combo.current,
            max_combo: combo.max,
            tricked: self.is_tricked(entity),
        })
    }

    pub fn combo_leader(&mut self) -> Option<Leader> {
        leaderboard::combo_leader(&mut self.world)
    }

    pub fn trick_leader(&mut self) -> Option<Leader> {
        leaderboard::trick_leader(&mut self.world)
    }

    /// Extract a serializable snapshot of the ledger.
    pub fn extract_state(&mut self) -> SaveState {
        let mut query = self
            .world
            .query::<(&ParticipantId, &TreatBag, &Combo)>();
        let participants = query
            .iter(&self.world)
            .map(|(id, bag, combo)| {
                (
                    id.0.clone(),
                    SavedParticipant {
                        uid: id.0.clone(),
                        treats: bag.0.clone(),
                        max_combo: combo.max,
                    },
                )
            })
            .collect();
        SaveState { participants }
    }

    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazily_creates_blank_participant() {
        let mut ledger = Ledger::new();
        assert!(ledger.participant("u1").is_none());
        ledger.get_or_insert("u1");
        let view = ledger.participant("u1").unwrap();
        assert!(view.treats.is_empty());
        assert_eq!((view.combo, view.max_combo, view.tricked), (0, 0, false));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut ledger = Ledger::new();
        let a = ledger.get_or_insert("u1");
        let b = ledger.get_or_insert("u1");
        assert_eq!(a, b);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn state_round_trip_clears_gate() {
        let mut ledger = Ledger::new();
        let entity = ledger.get_or_insert("u1");
        ledger.add_treat(entity, Treat::new(4, "kid", "old", "Minties"));
        ledger.extend_combo(entity);
        ledger.extend_combo(entity);
        ledger.trick(entity);

        let state = ledger.extract_state();
        let restored = Ledger::from_state(&state);
        let view = restored.participant("u1").unwrap();
        assert_eq!(view.treats.len(), 1);
        assert_eq!(view.max_combo, 2);
        assert_eq!(view.combo, 0);
        assert!(!view.tricked);
    }
}
