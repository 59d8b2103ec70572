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

use agent_environment::{Judge, Score};
use serde::{Deserialize, Serialize};

use crate::vacuum_world::VacuumWorldChange;

/// Points awarded per kind of change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoring {
    pub no_op: Score,
    pub moved: Score,
    /// Trying to move through a wall. Counts as a move by default.
    pub bumped: Score,
    pub dirt_removed: Score,
}

impl Scoring {
    pub fn new(no_op: Score, moved: Score, bumped: Score, dirt_removed: Score) -> Self {
        Self {
            no_op,
            moved,
            bumped,
            dirt_removed,
        }
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::new(0.0, -1.0, -1.0, 10.0)
    }
}

/// Performance measure for the vacuum world: reward cleaning, penalise electricity spent moving.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VacuumWorldJudge {
    scoring: Scoring,
}

impl VacuumWorldJudge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoring(scoring: Scoring) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }
}

impl Judge for VacuumWorldJudge {
    type Percept = VacuumWorldChange;

    fn execute(&self, percept: &VacuumWorldChange) -> Score {
        match percept {
            VacuumWorldChange::NoOp => self.scoring.no_op,
            VacuumWorldChange::Moved { .. } => self.scoring.moved,
            VacuumWorldChange::Bumped { .. } => self.scoring.bumped,
            VacuumWorldChange::DirtRemoved { .. } => self.scoring.dirt_removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use agent_environment::Location;
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_default_scoring() {
        let judge = VacuumWorldJudge::new();
        assert_abs_diff_eq!(judge.execute(&VacuumWorldChange::NoOp), 0.0);
        assert_abs_diff_eq!(
            judge.execute(&VacuumWorldChange::Moved {
                from: Location::from([0]),
                to: Location::from([1]),
            }),
            -1.0
        );
        assert_abs_diff_eq!(
            judge.execute(&VacuumWorldChange::Bumped {
                location: Location::from([0]),
            }),
            -1.0
        );
        assert_abs_diff_eq!(
            judge.execute(&VacuumWorldChange::DirtRemoved {
                location: Location::from([0]),
                count: 3,
            }),
            10.0
        );
    }

    #[test]
    fn test_bump_score_is_configurable() {
        let judge = VacuumWorldJudge::with_scoring(Scoring {
            bumped: 0.0,
            ..Scoring::default()
        });
        assert_abs_diff_eq!(
            judge.execute(&VacuumWorldChange::Bumped {
                location: Location::from([1]),
            }),
            0.0
        );
    }

    #[test]
    fn test_partial_scoring_fills_in_defaults() {
        let scoring: Scoring = serde_json::from_str(r#"{ "bumped": 0.0 }"#).unwrap();
        assert_eq!(scoring, Scoring::new(0.0, -1.0, 0.0, 10.0));
    }
}
