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

use crate::entity::{AgentKey, JudgeKey};
use crate::{HashMap, Score};

/// Cumulative score of every agent as seen by every judge registered for it.
///
/// A judge is only registered against the agents already present when it was added; an agent
/// added later starts with an empty row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    rows: HashMap<AgentKey, HashMap<JudgeKey, Score>>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_agent(&self, agent: AgentKey) -> bool {
        self.rows.contains_key(&agent)
    }

    pub fn insert_agent(&mut self, agent: AgentKey) {
        self.rows.entry(agent).or_default();
    }

    pub fn remove_agent(&mut self, agent: AgentKey) -> bool {
        self.rows.remove(&agent).is_some()
    }

    /// Gives the judge a zero entry in every row that does not have one yet.
    pub fn register_judge(&mut self, judge: JudgeKey) {
        for row in self.rows.values_mut() {
            row.entry(judge).or_insert(0.0);
        }
    }

    pub fn unregister_judge(&mut self, judge: JudgeKey) -> bool {
        let mut removed = false;
        for row in self.rows.values_mut() {
            removed |= row.remove(&judge).is_some();
        }
        removed
    }

    /// Adds `score(judge)` to every entry in the agent's row. Unknown agents are ignored.
    pub fn accrue<F>(&mut self, agent: AgentKey, mut score: F)
    where
        F: FnMut(JudgeKey) -> Score,
    {
        if let Some(row) = self.rows.get_mut(&agent) {
            for (judge, total) in row.iter_mut() {
                *total += score(*judge);
            }
        }
    }

    pub fn row(&self, agent: AgentKey) -> Option<&HashMap<JudgeKey, Score>> {
        self.rows.get(&agent)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
