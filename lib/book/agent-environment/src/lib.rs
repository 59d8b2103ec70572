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

// PEAS - Performance, Environment, Action, Sensing
//
// See:
// -  Chapter 2: Intelligent Agents, pages 34 to 48

mod config;
mod entity;
mod environment;
mod error;
mod observer;
mod score;
mod space;
mod world;

pub use config::EnvironmentConfig;
pub use entity::{AgentKey, EntityKey, JudgeKey, ThingKey};
pub use environment::{Environment, Task};
pub use error::{EnvironmentError, SpaceError};
pub use observer::{ActionTracker, Observer};
pub use score::ScoreTable;
pub use space::{Location, Space};
pub use world::World;

pub type Int = i32;
pub type Score = f64;
pub type Rng = rand_pcg::Pcg64;
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// An Agent acts in a Performance, Environment, Action, Sensing (PEAS) cycle.
/// For a given Percept, the Agent will return an Action.
///
/// A reflex agent does not need to store any state. A model-based agent keeps
/// whatever memory it needs in `self`; the Environment owns the Agent, so that
/// memory lives exactly as long as the Agent does.
///
/// Notice that the Agent is not aware of an Environment, it's only interface
/// is the Percept coming in then the Action going out.
pub trait Agent {
    type Percept;
    type Action;

    fn execute(&mut self, percept: &Self::Percept) -> Self::Action;
}

/// A Judge is a performance measure. It never sees an Agent, only the changes to the
/// Environment that the Agent's action actually caused, and maps each change to a score.
///
/// Judges are stateless. The Environment sums the scores per Agent.
pub trait Judge {
    type Percept;

    fn execute(&self, percept: &Self::Percept) -> Score;
}
