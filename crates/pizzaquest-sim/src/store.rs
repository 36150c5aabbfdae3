//! Entity storage: the hecs world plus a per-cell occupancy index.
//!
//! Every materialized entity carries a `Placed` component. The index
//! lists each cell's occupants in materialization order, so "the entity
//! in that cell" is always the earliest one to arrive in the level.

use std::collections::HashMap;

use hecs::{Component, Entity, EntityBuilder, World};

use pizzaquest_core::components::Capabilities;
use pizzaquest_core::enums::Kind;
use pizzaquest_core::types::{EntityId, GridPos};
use pizzaquest_terrain::Grid;

use crate::error::SpawnError;

/// Where a materialized entity stands, and when it arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub position: GridPos,
    seq: u64,
}

#[derive(Default)]
pub struct EntityStore {
    world: World,
    cells: HashMap<GridPos, Vec<(u64, Entity)>>,
    next_seq: u64,
}

/// Stable id for an entity handle, as handed to collaborators.
pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `builder` at `position`. A solid entity may not join a cell
    /// that already holds a solid one.
    pub fn spawn(
        &mut self,
        grid: &Grid,
        position: GridPos,
        walkable: bool,
        mut builder: EntityBuilder,
    ) -> Result<Entity, SpawnError> {
        if !grid.contains(position) {
            return Err(SpawnError::OutOfBounds(position));
        }
        if !walkable && self.solid_occupant(position, None).is_some() {
            return Err(SpawnError::Occupied(position));
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        builder.add(Placed { position, seq });
        let entity = self.world.spawn(builder.build());
        self.cells.entry(position).or_default().push((seq, entity));
        Ok(entity)
    }

    /// Remove an entity. Returns `false` if it was already gone.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        let Some(placed) = self.placed(entity) else {
            return false;
        };
        self.unindex(entity, placed.position);
        self.world.despawn(entity).is_ok()
    }

    /// Move an entity's position, keeping the index in step.
    pub fn relocate(&mut self, entity: Entity, to: GridPos) -> bool {
        let Ok(mut placed) = self.world.get::<&mut Placed>(entity) else {
            return false;
        };
        let from = placed.position;
        let seq = placed.seq;
        placed.position = to;
        drop(placed);

        self.unindex(entity, from);
        let occupants = self.cells.entry(to).or_default();
        let index = occupants.partition_point(|(s, _)| *s < seq);
        occupants.insert(index, (seq, entity));
        true
    }

    fn unindex(&mut self, entity: Entity, at: GridPos) {
        if let Some(occupants) = self.cells.get_mut(&at) {
            occupants.retain(|(_, e)| *e != entity);
            if occupants.is_empty() {
                self.cells.remove(&at);
            }
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Number of materialized entities.
    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    /// Read-only access for queries.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Copy a component out, `None` if the entity is gone or lacks it.
    pub fn get<T: Component + Copy>(&self, entity: Entity) -> Option<T> {
        self.world.get::<&T>(entity).ok().map(|c| *c)
    }

    /// Overwrite a component the entity already has.
    pub fn set<T: Component>(&mut self, entity: Entity, value: T) -> bool {
        match self.world.get::<&mut T>(entity) {
            Ok(mut slot) => {
                *slot = value;
                true
            }
            Err(_) => false,
        }
    }

    /// Mutate a component in place.
    pub fn update<T: Component, R>(
        &mut self,
        entity: Entity,
        f: impl FnOnce(&mut T) -> R,
    ) -> Option<R> {
        let mut slot = self.world.get::<&mut T>(entity).ok()?;
        Some(f(&mut *slot))
    }

    fn placed(&self, entity: Entity) -> Option<Placed> {
        self.get::<Placed>(entity)
    }

    pub fn position(&self, entity: Entity) -> Option<GridPos> {
        self.placed(entity).map(|p| p.position)
    }

    pub fn kind(&self, entity: Entity) -> Option<Kind> {
        self.get::<Kind>(entity)
    }

    pub fn caps(&self, entity: Entity) -> Option<Capabilities> {
        self.get::<Capabilities>(entity)
    }

    /// Everything in a cell, earliest arrival first.
    pub fn occupants(&self, position: GridPos) -> impl Iterator<Item = Entity> + '_ {
        self.cells
            .get(&position)
            .into_iter()
            .flat_map(|occupants| occupants.iter().map(|(_, e)| *e))
    }

    /// First occupant other than `except`.
    pub fn first_occupant(&self, position: GridPos, except: Option<Entity>) -> Option<Entity> {
        self.occupants(position).find(|e| Some(*e) != except)
    }

    /// First non-walkable occupant other than `except`.
    pub fn solid_occupant(&self, position: GridPos, except: Option<Entity>) -> Option<Entity> {
        self.occupants(position)
            .filter(|e| Some(*e) != except)
            .find(|e| self.caps(*e).is_some_and(|c| !c.walkable))
    }

    /// Entities whose kind satisfies `pred`, in storage order.
    pub fn entities_where(&self, pred: impl Fn(Kind) -> bool) -> Vec<Entity> {
        let mut query = self.world.query::<&Kind>();
        query
            .iter()
            .filter(|(_, kind)| pred(**kind))
            .map(|(e, _)| e)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizzaquest_core::components::Label;

    fn thing(walkable: bool) -> EntityBuilder {
        let mut builder = EntityBuilder::new();
        builder.add(Kind::Decoration).add(Label::new("Rock", "a rock")).add(
            Capabilities {
                walkable,
                ..Capabilities::SOLID
            },
        );
        builder
    }

    #[test]
    fn test_solid_entities_do_not_stack() {
        let grid = Grid::filled(4, 4, 0).unwrap();
        let mut store = EntityStore::new();
        let here = GridPos::new(1, 1);
        store.spawn(&grid, here, false, thing(false)).unwrap();
        assert_eq!(
            store.spawn(&grid, here, false, thing(false)),
            Err(SpawnError::Occupied(here))
        );
        assert!(store.spawn(&grid, here, true, thing(true)).is_ok());
        assert_eq!(
            store.spawn(&grid, GridPos::new(4, 0), true, thing(true)),
            Err(SpawnError::OutOfBounds(GridPos::new(4, 0)))
        );
    }

    #[test]
    fn test_occupants_keep_arrival_order() {
        let grid = Grid::filled(4, 4, 0).unwrap();
        let mut store = EntityStore::new();
        let a = store.spawn(&grid, GridPos::new(0, 0), true, thing(true)).unwrap();
        let b = store.spawn(&grid, GridPos::new(1, 0), true, thing(true)).unwrap();
        let c = store.spawn(&grid, GridPos::new(1, 0), true, thing(true)).unwrap();

        // `a` arrived first, so it sorts ahead after moving in.
        store.relocate(a, GridPos::new(1, 0));
        let order: Vec<Entity> = store.occupants(GridPos::new(1, 0)).collect();
        assert_eq!(order, vec![a, b, c]);
        assert_eq!(store.first_occupant(GridPos::new(1, 0), Some(a)), Some(b));
        assert_eq!(store.occupants(GridPos::new(0, 0)).count(), 0);
    }

    #[test]
    fn test_despawned_entity_leaves_index() {
        let grid = Grid::filled(2, 2, 0).unwrap();
        let mut store = EntityStore::new();
        let e = store.spawn(&grid, GridPos::new(0, 1), false, thing(false)).unwrap();
        assert!(store.despawn(e));
        assert!(!store.despawn(e));
        assert!(!store.contains(e));
        assert_eq!(store.position(e), None);
        assert_eq!(store.solid_occupant(GridPos::new(0, 1), None), None);
        assert!(store.is_empty());
    }
}
