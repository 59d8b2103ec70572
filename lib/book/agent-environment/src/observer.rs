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

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use crate::entity::AgentKey;
use crate::environment::Task;
use crate::space::Location;

/// Passive listener notified by an Environment. Observers cannot change the simulation.
pub trait Observer<T: Task> {
    /// An agent was just placed in the environment.
    fn agent_added(&mut self, _agent: AgentKey, _location: &Location) {}

    /// An agent perceived `percept` and performed `action`.
    fn agent_acted(&mut self, agent: AgentKey, percept: &T::Percept, action: &T::Action);
}

// The Environment owns its observers, so a harness that wants to read one back after the run
// hands over a shared handle instead.
impl<T: Task, O: Observer<T>> Observer<T> for Rc<RefCell<O>> {
    fn agent_added(&mut self, agent: AgentKey, location: &Location) {
        self.borrow_mut().agent_added(agent, location);
    }

    fn agent_acted(&mut self, agent: AgentKey, percept: &T::Percept, action: &T::Action) {
        self.borrow_mut().agent_acted(agent, percept, action);
    }
}

/// Logs every performed action and provides a comma-separated String with all actions
/// performed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTracker {
    actions: Vec<String>,
}

impl ActionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> String {
        self.actions.join(", ")
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<T> Observer<T> for ActionTracker
where
    T: Task,
    T::Action: Display,
{
    fn agent_acted(&mut self, _agent: AgentKey, _percept: &T::Percept, action: &T::Action) {
        self.actions.push(action.to_string());
    }
}
