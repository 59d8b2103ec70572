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

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

// Entities are compared by identity, never by value: two dirt piles are different dirt
// piles even though they look the same. The keys are handed out when an entity is
// created in an Environment's arena and stay valid until it is destroyed.
new_key_type! {
    pub struct AgentKey;
    pub struct JudgeKey;
    pub struct ThingKey;
}

/// Any handle that can be passed to [`crate::Environment::add_object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKey {
    Agent(AgentKey),
    Judge(JudgeKey),
    Thing(ThingKey),
}

impl From<AgentKey> for EntityKey {
    fn from(key: AgentKey) -> Self {
        EntityKey::Agent(key)
    }
}

impl From<JudgeKey> for EntityKey {
    fn from(key: JudgeKey) -> Self {
        EntityKey::Judge(key)
    }
}

impl From<ThingKey> for EntityKey {
    fn from(key: ThingKey) -> Self {
        EntityKey::Thing(key)
    }
}
