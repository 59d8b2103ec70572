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

use crate::entity::{AgentKey, EntityKey};
use crate::Int;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpaceError {
    #[error("invalid interval {start}..{end} for dimension {dimension}")]
    InvalidInterval {
        dimension: usize,
        start: Int,
        end: Int,
    },
}

/// Configuration defects. None of these happen in a correctly wired simulation, so callers
/// are expected to propagate them rather than recover.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvironmentError {
    #[error("unknown entity: {0:?}")]
    UnknownEntity(EntityKey),

    #[error("agent has no location in the environment: {0:?}")]
    AgentNotPlaced(AgentKey),

    #[error("cannot draw a random location from space {0}")]
    NoRandomLocation(String),

    #[error(transparent)]
    Space(#[from] SpaceError),
}
