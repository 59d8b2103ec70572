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

#![warn(missing_docs)]

//! Chapter 2, Exercise 12, Evaluate Reflex Agent.

use std::error::Error;

use vacuum_cleaner::{evaluate, AgentKind, SimulationConfig};

// Exercise 12:
//
// Implement a simple reflex agent for the vacuum environment in Exercise 2.10. Run the environment
// with this agent for all possible initial dirt configurations and agent locations. Record the
// performance score for each configuration and the overall average score.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = SimulationConfig::default();
    for agent_kind in [AgentKind::Reflex, AgentKind::ModelBased] {
        let report = evaluate(agent_kind, &config)?;
        println!("{} agent, {} steps", agent_kind, report.steps);
        for trial_score in &report.trials {
            println!("  {}: {}", trial_score.trial, trial_score.score);
        }
        println!("  average: {}", report.average_score);
        log::debug!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
