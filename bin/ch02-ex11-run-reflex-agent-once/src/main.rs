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

use std::error::Error;

use vacuum_cleaner::{AgentKind, Simulation, SimulationConfig, Square, SquareState, Trial};

// Chapter 2 Intelligent Agents Exercises 11 and 12.
//
// Exercise 11:
//
// Implement a performance-measuring environment simulator for the vacuum-cleaner world depicted in
// Figure 2.8 and specified on page . Your implementation should be modular so that the sensors,
// actuators, and environment characteristics (size, shape, dirt placement, etc.) can be changed
// easily. (Note: for some choices of programming language and operating system there are already
// implementations in the online code repository.)
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let trial = Trial::new(
        AgentKind::Reflex,
        Square::Left,
        SquareState::Dirty,
        SquareState::Dirty,
    );
    let config = SimulationConfig::default();
    log::info!("running {} agent for {} steps from {}", trial.agent_kind, config.steps, trial);

    let mut simulation = Simulation::new(&trial, &config)?;
    simulation.run()?;
    println!("score: {}", simulation.score());
    Ok(())
}
