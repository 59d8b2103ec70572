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

// Chapter 2 Exercises 11 and 12: a performance-measuring simulator for the two-square vacuum
// world, run for every initial dirt configuration and agent location.

use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use agent_environment::{
    ActionTracker, AgentKey, EnvironmentConfig, EnvironmentError, JudgeKey, Location, Score,
};
use serde::{Deserialize, Serialize};

use crate::judge::{Scoring, VacuumWorldJudge};
use crate::model_based_agent::ModelBasedVacuumAgent;
use crate::vacuum_world::{
    left, right, two_squares, Dirt, ReflexVacuumAgent, SquareState, VacuumWorld,
    VacuumWorldEnvironment,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Reflex,
    RuleBasedReflex,
    ModelBased,
}

impl Display for AgentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Reflex => write!(f, "reflex"),
            AgentKind::RuleBasedReflex => write!(f, "rule-based reflex"),
            AgentKind::ModelBased => write!(f, "model-based"),
        }
    }
}

/// One of the two squares of the two-square world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    Left,
    Right,
}

impl Square {
    pub fn location(&self) -> Location {
        match self {
            Square::Left => left(),
            Square::Right => right(),
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Left => write!(f, "left"),
            Square::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of time steps per trial.
    pub steps: usize,
    pub seed: Option<u64>,
    pub scoring: Scoring,
}

impl SimulationConfig {
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            seed: None,
            scoring: Scoring::default(),
        }
    }
}

/// An initial configuration of the two-square world: which agent, where it starts, and which
/// squares start dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trial {
    pub agent_kind: AgentKind,
    pub agent_location: Square,
    pub left: SquareState,
    pub right: SquareState,
}

impl Trial {
    pub fn new(
        agent_kind: AgentKind,
        agent_location: Square,
        left: SquareState,
        right: SquareState,
    ) -> Self {
        Self {
            agent_kind,
            agent_location,
            left,
            right,
        }
    }

    /// All eight initial configurations for `agent_kind`.
    pub fn all(agent_kind: AgentKind) -> Vec<Trial> {
        let states = [SquareState::Clean, SquareState::Dirty];
        let mut trials = Vec::with_capacity(8);
        for agent_location in [Square::Left, Square::Right] {
            for left in states {
                for right in states {
                    trials.push(Trial::new(agent_kind, agent_location, left, right));
                }
            }
        }
        trials
    }

    pub fn run(&self, config: &SimulationConfig) -> Result<TrialOutcome, EnvironmentError> {
        let mut simulation = Simulation::new(self, config)?;
        simulation.run()?;
        Ok(simulation.outcome())
    }
}

impl Display for Trial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.agent_location, self.left, self.right)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Comma-separated action names, in the order they were performed.
    pub actions: String,
    pub score: Score,
}

/// A Simulation runs a single Agent and a single Judge in the two-square world for a fixed
/// number of time steps. The Agent's score (Performance) is kept up to date by the Environment.
pub struct Simulation {
    environment: VacuumWorldEnvironment,
    agent: AgentKey,
    judge: JudgeKey,
    tracker: Rc<RefCell<ActionTracker>>,
    time_steps: usize,
}

impl Simulation {
    pub fn new(trial: &Trial, config: &SimulationConfig) -> Result<Self, EnvironmentError> {
        let mut environment =
            VacuumWorld::environment(two_squares(), EnvironmentConfig::new(config.seed));
        let tracker = Rc::new(RefCell::new(ActionTracker::new()));
        environment.add_observer(Rc::clone(&tracker));

        // The judge only scores agents already present, so the agent goes in first.
        let location = Some(trial.agent_location.location());
        let agent = match trial.agent_kind {
            AgentKind::Reflex => environment.add_agent(ReflexVacuumAgent::new(), location)?,
            AgentKind::RuleBasedReflex => {
                environment.add_agent(ReflexVacuumAgent::rule_based(), location)?
            }
            AgentKind::ModelBased => {
                environment.add_agent(ModelBasedVacuumAgent::new(), location)?
            }
        };
        let judge = environment.add_judge(VacuumWorldJudge::with_scoring(config.scoring))?;

        for (location, state) in [(left(), trial.left), (right(), trial.right)] {
            if state == SquareState::Dirty {
                environment.add_thing(Dirt, Some(location))?;
            }
        }

        Ok(Self {
            environment,
            agent,
            judge,
            tracker,
            time_steps: config.steps,
        })
    }

    pub fn run(&mut self) -> Result<(), EnvironmentError> {
        self.environment.step_n(self.time_steps)
    }

    pub fn score(&self) -> Score {
        self.environment
            .scores()
            .row(self.agent)
            .and_then(|row| row.get(&self.judge))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn actions(&self) -> String {
        self.tracker.borrow().actions()
    }

    pub fn outcome(&self) -> TrialOutcome {
        TrialOutcome {
            actions: self.actions(),
            score: self.score(),
        }
    }

    pub fn environment(&self) -> &VacuumWorldEnvironment {
        &self.environment
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialScore {
    pub trial: Trial,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub agent_kind: AgentKind,
    pub steps: usize,
    pub trials: Vec<TrialScore>,
    pub average_score: Score,
}

/// Run `agent_kind` for every initial dirt configuration and agent location, recording the
/// score of each and the overall average.
pub fn evaluate(
    agent_kind: AgentKind,
    config: &SimulationConfig,
) -> Result<EvaluationReport, EnvironmentError> {
    let mut trials = Vec::new();
    for trial in Trial::all(agent_kind) {
        let outcome = trial.run(config)?;
        log::debug!("{} {}: {}", agent_kind, trial, outcome.actions);
        log::info!("{} {} scored {}", agent_kind, trial, outcome.score);
        trials.push(TrialScore {
            trial,
            score: outcome.score,
        });
    }
    let average_score = if trials.is_empty() {
        0.0
    } else {
        trials.iter().map(|trial| trial.score).sum::<Score>() / trials.len() as Score
    };
    Ok(EvaluationReport {
        agent_kind,
        steps: config.steps,
        trials,
        average_score,
    })
}
