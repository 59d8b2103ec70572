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

// Let the world contain just two locations. Each location may or may not contain dirt, and the
// agent may be in one location or the other. The agent can move left, move right, or suck, and
// sucking is 100% effective. See Chapter 2 page 36 and Figure 2.2.

use std::fmt::{Display, Formatter};

use agent_environment::{
    Agent, AgentKey, Environment, EnvironmentConfig, EnvironmentError, HashMap, Location, Space,
    Task, ThingKey, World,
};
use serde::{Deserialize, Serialize};

pub type VacuumWorldEnvironment = Environment<VacuumWorld>;

pub fn left() -> Location {
    Location::from([0])
}

pub fn right() -> Location {
    Location::from([1])
}

/// The two-square world, `[0]` is left and `[1]` is right.
pub fn two_squares() -> Space {
    Space::new(vec![0..2]).expect("0..2 is a valid interval")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareState {
    Clean,
    Dirty,
}

impl Display for SquareState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SquareState::Clean => write!(f, "clean"),
            SquareState::Dirty => write!(f, "dirty"),
        }
    }
}

/// Left and right move along the first axis, up and down along the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VacuumWorldAction {
    Left,
    Right,
    Up,
    Down,
    Suck,
    NoOp,
}

impl Display for VacuumWorldAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VacuumWorldAction::Left => write!(f, "moveLeft"),
            VacuumWorldAction::Right => write!(f, "moveRight"),
            VacuumWorldAction::Up => write!(f, "moveUp"),
            VacuumWorldAction::Down => write!(f, "moveDown"),
            VacuumWorldAction::Suck => write!(f, "suck"),
            VacuumWorldAction::NoOp => write!(f, "noOp"),
        }
    }
}

/// VacuumWorldPercept is the Percept that the Agent receives from the Environment for just the
/// square it is on, e.g imagine a dirt sensor looking right down.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VacuumWorldPercept {
    pub location: Location,
    pub square_state: SquareState,
}

impl VacuumWorldPercept {
    pub fn new(location: Location, square_state: SquareState) -> Self {
        Self {
            location,
            square_state,
        }
    }
}

/// What a judge sees: the change an action actually caused. Moving into a wall is a `Bumped`,
/// not a `NoOp`, so that judges can tell a rejected move from a deliberate pause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VacuumWorldChange {
    NoOp,
    Moved { from: Location, to: Location },
    Bumped { location: Location },
    DirtRemoved { location: Location, count: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dirt;

/// The vacuum world task. The only things in it are dirt; a square is dirty iff at least one
/// piece of dirt is on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VacuumWorld;

impl VacuumWorld {
    pub fn environment(space: Space, config: EnvironmentConfig) -> VacuumWorldEnvironment {
        Environment::with_config(space, VacuumWorld, config)
    }

    pub fn square_state(world: &World<Dirt>, location: &Location) -> SquareState {
        if world.things_at(location).is_empty() {
            SquareState::Clean
        } else {
            SquareState::Dirty
        }
    }

    fn move_agent(
        world: &mut World<Dirt>,
        agent: AgentKey,
        from: Location,
        axis: usize,
        delta: i32,
    ) -> Result<VacuumWorldChange, EnvironmentError> {
        match from.offset(axis, delta) {
            Some(to) if world.space().contains(&to) => {
                world.relocate(agent, to.clone())?;
                Ok(VacuumWorldChange::Moved { from, to })
            }
            _ => Ok(VacuumWorldChange::Bumped { location: from }),
        }
    }

    fn suck(world: &mut World<Dirt>, location: Location) -> VacuumWorldChange {
        let dirt: Vec<ThingKey> = world
            .things_at(&location)
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        for key in &dirt {
            world.remove_thing(*key);
        }
        if dirt.is_empty() {
            VacuumWorldChange::NoOp
        } else {
            VacuumWorldChange::DirtRemoved {
                location,
                count: dirt.len(),
            }
        }
    }
}

impl Task for VacuumWorld {
    type Percept = VacuumWorldPercept;
    type Action = VacuumWorldAction;
    type Change = VacuumWorldChange;
    type Thing = Dirt;

    fn percept_seen_by(
        &self,
        world: &World<Dirt>,
        agent: AgentKey,
    ) -> Result<VacuumWorldPercept, EnvironmentError> {
        let location = world.agent_location(agent)?;
        Ok(VacuumWorldPercept::new(
            location.clone(),
            Self::square_state(world, location),
        ))
    }

    fn execute_action(
        &mut self,
        world: &mut World<Dirt>,
        agent: AgentKey,
        action: &VacuumWorldAction,
    ) -> Result<Vec<VacuumWorldChange>, EnvironmentError> {
        let location = world.agent_location(agent)?.clone();
        let change = match action {
            VacuumWorldAction::Left => Self::move_agent(world, agent, location, 0, -1)?,
            VacuumWorldAction::Right => Self::move_agent(world, agent, location, 0, 1)?,
            VacuumWorldAction::Up => Self::move_agent(world, agent, location, 1, 1)?,
            VacuumWorldAction::Down => Self::move_agent(world, agent, location, 1, -1)?,
            VacuumWorldAction::Suck => Self::suck(world, location),
            VacuumWorldAction::NoOp => VacuumWorldChange::NoOp,
        };
        Ok(vec![change])
    }
}

/// Chapter 2 Figure 2.8, the agent program for a simple reflex agent in the two-square vacuum
/// environment.
///
/// ```text
/// function REFLEX-VACUUM-AGENT([location, status]) returns an action
///   if status = Dirty then return Suck
///   else if location = A then return Right
///   else if location = B then return Left
/// ```
///
/// The same program can be written as the table of Figure 2.3, see
/// [`ReflexVacuumAgent::rule_based`]. Both give the same action for every percept of the
/// two-square world.
#[derive(Debug, Clone, Default)]
pub struct ReflexVacuumAgent {
    rules: Option<HashMap<VacuumWorldPercept, VacuumWorldAction>>,
}

impl ReflexVacuumAgent {
    pub fn new() -> Self {
        Self { rules: None }
    }

    pub fn rule_based() -> Self {
        let mut rules = HashMap::default();
        rules.insert(
            VacuumWorldPercept::new(left(), SquareState::Clean),
            VacuumWorldAction::Right,
        );
        rules.insert(
            VacuumWorldPercept::new(left(), SquareState::Dirty),
            VacuumWorldAction::Suck,
        );
        rules.insert(
            VacuumWorldPercept::new(right(), SquareState::Clean),
            VacuumWorldAction::Left,
        );
        rules.insert(
            VacuumWorldPercept::new(right(), SquareState::Dirty),
            VacuumWorldAction::Suck,
        );
        Self { rules: Some(rules) }
    }

    pub fn is_rule_based(&self) -> bool {
        self.rules.is_some()
    }

    pub(crate) fn reflex(percept: &VacuumWorldPercept) -> VacuumWorldAction {
        if percept.square_state == SquareState::Dirty {
            VacuumWorldAction::Suck
        } else if percept.location.coordinates().first() == Some(&0) {
            VacuumWorldAction::Right
        } else {
            VacuumWorldAction::Left
        }
    }
}

impl Agent for ReflexVacuumAgent {
    type Percept = VacuumWorldPercept;
    type Action = VacuumWorldAction;

    /// # Panics
    ///
    /// The rule-based flavour only knows the two squares of the two-square world and panics on
    /// any other location.
    fn execute(&mut self, percept: &VacuumWorldPercept) -> VacuumWorldAction {
        match &self.rules {
            None => Self::reflex(percept),
            Some(rules) => match rules.get(percept) {
                Some(action) => *action,
                None => panic!("no rule for percept {:?}", percept),
            },
        }
    }
}
