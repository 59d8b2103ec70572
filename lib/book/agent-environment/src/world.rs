/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

use slotmap::SlotMap;

use crate::entity::{AgentKey, EntityKey, ThingKey};
use crate::error::EnvironmentError;
use crate::space::{Location, Space};
use crate::HashMap;

/// The part of an Environment that a [`crate::Task`] is allowed to read and change: the space,
/// the inert things, and where every agent and thing currently is.
///
/// Judges never appear here, they do not go on the gameboard.
#[derive(Debug, Clone)]
pub struct World<Thing> {
    space: Space,
    things: SlotMap<ThingKey, Thing>,
    placements: HashMap<EntityKey, Location>,
}

impl<Thing> World<Thing> {
    pub(crate) fn new(space: Space) -> Self {
        Self {
            space,
            things: SlotMap::with_key(),
            placements: HashMap::default(),
        }
    }

    pub fn space(&self) -> &Space {
        &self.space
    }

    pub fn location_of(&self, entity: impl Into<EntityKey>) -> Option<&Location> {
        self.placements.get(&entity.into())
    }

    pub fn agent_location(&self, agent: AgentKey) -> Result<&Location, EnvironmentError> {
        self.location_of(agent)
            .ok_or(EnvironmentError::AgentNotPlaced(agent))
    }

    pub fn is_placed(&self, entity: impl Into<EntityKey>) -> bool {
        self.placements.contains_key(&entity.into())
    }

    /// Moves an entity that is already placed. Bounds are the task's business, not the
    /// world's.
    pub fn relocate(
        &mut self,
        entity: impl Into<EntityKey>,
        location: Location,
    ) -> Result<(), EnvironmentError> {
        let entity = entity.into();
        match self.placements.get_mut(&entity) {
            Some(current) => {
                *current = location;
                Ok(())
            }
            None => Err(EnvironmentError::UnknownEntity(entity)),
        }
    }

    /// Snapshot of placed objects, optionally only those at `location`.
    pub fn objects_at(&self, location: Option<&Location>) -> HashMap<EntityKey, Location> {
        self.placements
            .iter()
            .filter(|(_, placed)| location.map_or(true, |location| *placed == location))
            .map(|(entity, placed)| (*entity, placed.clone()))
            .collect()
    }

    /// Things placed at `location`, in creation order.
    pub fn things_at(&self, location: &Location) -> Vec<(ThingKey, &Thing)> {
        let mut found: Vec<(ThingKey, &Thing)> = self
            .placements
            .iter()
            .filter(|(_, placed)| *placed == location)
            .filter_map(|(entity, _)| match entity {
                EntityKey::Thing(key) => self.things.get(*key).map(|thing| (*key, thing)),
                EntityKey::Agent(_) | EntityKey::Judge(_) => None,
            })
            .collect();
        found.sort_unstable_by_key(|(key, _)| *key);
        found
    }

    pub fn thing(&self, key: ThingKey) -> Option<&Thing> {
        self.things.get(key)
    }

    /// Takes a thing out of the world for good; its key becomes stale.
    pub fn remove_thing(&mut self, key: ThingKey) -> Option<Thing> {
        self.placements.remove(&EntityKey::Thing(key));
        self.things.remove(key)
    }

    /// Number of placed objects.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub(crate) fn insert_thing(&mut self, thing: Thing) -> ThingKey {
        self.things.insert(thing)
    }

    pub(crate) fn contains_thing(&self, key: ThingKey) -> bool {
        self.things.contains_key(key)
    }

    pub(crate) fn place(&mut self, entity: EntityKey, location: Location) {
        self.placements.insert(entity, location);
    }

    pub(crate) fn unplace(&mut self, entity: EntityKey) -> Option<Location> {
        self.placements.remove(&entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Dirt;

    fn two_squares() -> World<Dirt> {
        World::new(Space::new(vec![0..2]).unwrap())
    }

    #[test]
    fn test_things_at_filters_by_location() {
        let mut world = two_squares();
        let left = world.insert_thing(Dirt);
        let right = world.insert_thing(Dirt);
        world.place(left.into(), Location::from([0]));
        world.place(right.into(), Location::from([1]));

        let found = world.things_at(&Location::from([0]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, left);
        assert_eq!(world.objects_at(None).len(), 2);
        assert_eq!(world.objects_at(Some(&Location::from([1]))).len(), 1);
    }

    #[test]
    fn test_remove_thing_unplaces_it() {
        let mut world = two_squares();
        let dirt = world.insert_thing(Dirt);
        world.place(dirt.into(), Location::from([0]));

        assert_eq!(world.remove_thing(dirt), Some(Dirt));
        assert!(world.is_empty());
        assert!(world.thing(dirt).is_none());
        assert!(world.things_at(&Location::from([0])).is_empty());
    }

    #[test]
    fn test_relocate_unplaced_entity_is_an_error() {
        let mut world = two_squares();
        let dirt = world.insert_thing(Dirt);
        assert_eq!(
            world.relocate(dirt, Location::from([1])),
            Err(EnvironmentError::UnknownEntity(dirt.into()))
        );
    }
}
