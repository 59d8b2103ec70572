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

use agent_environment::{Agent, HashMap, Location, Space};

use crate::vacuum_world::{
    left, right, ReflexVacuumAgent, SquareState, VacuumWorldAction, VacuumWorldPercept,
};

/// Chapter 2 Figure 2.12, a model-based reflex agent.
///
/// The agent remembers the last state it saw for every square it tracks. Once it believes every
/// square is clean it stops and does `NoOp` forever; until then it behaves like the
/// [`ReflexVacuumAgent`].
#[derive(Debug, Clone)]
pub struct ModelBasedVacuumAgent {
    model: HashMap<Location, Option<SquareState>>,
}

impl Default for ModelBasedVacuumAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBasedVacuumAgent {
    /// Tracks the two squares of the two-square world.
    pub fn new() -> Self {
        Self::tracking([left(), right()])
    }

    /// Tracks every square of `space`.
    pub fn for_space(space: &Space) -> Self {
        Self::tracking(space.locations())
    }

    pub fn tracking(locations: impl IntoIterator<Item = Location>) -> Self {
        Self {
            model: locations
                .into_iter()
                .map(|location| (location, None))
                .collect(),
        }
    }

    /// Last state seen at `location`, None if never seen or not tracked.
    pub fn belief(&self, location: &Location) -> Option<SquareState> {
        self.model.get(location).copied().flatten()
    }

    pub fn believes_all_clean(&self) -> bool {
        self.model
            .values()
            .all(|belief| *belief == Some(SquareState::Clean))
    }
}

impl Agent for ModelBasedVacuumAgent {
    type Percept = VacuumWorldPercept;
    type Action = VacuumWorldAction;

    /// # Panics
    ///
    /// Panics if the percept comes from a square the agent does not track.
    fn execute(&mut self, percept: &VacuumWorldPercept) -> VacuumWorldAction {
        match self.model.get_mut(&percept.location) {
            Some(belief) => *belief = Some(percept.square_state),
            None => panic!("percept from untracked location {}", percept.location),
        }
        if self.believes_all_clean() {
            VacuumWorldAction::NoOp
        } else {
            ReflexVacuumAgent::reflex(percept)
        }
    }
}
