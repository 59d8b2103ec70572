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
// -  Chapter 2: Intelligent Agents, page 40

pub mod judge;
pub mod model_based_agent;
pub mod simulation;
pub mod vacuum_world;

pub use judge::{Scoring, VacuumWorldJudge};
pub use model_based_agent::ModelBasedVacuumAgent;
pub use simulation::{
    evaluate, AgentKind, EvaluationReport, Simulation, SimulationConfig, Square, Trial,
    TrialOutcome, TrialScore,
};
pub use vacuum_world::{
    Dirt, ReflexVacuumAgent, SquareState, VacuumWorld, VacuumWorldAction, VacuumWorldChange,
    VacuumWorldEnvironment, VacuumWorldPercept,
};
