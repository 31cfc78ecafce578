//! Action vocabulary
//!
//! The closed set of executable orders a bot can be given. Actions are
//! immutable descriptions of intent; execution lives entirely in the
//! external entity-simulation layer.

use serde::{Deserialize, Serialize};

use crate::core::types::{PlayerId, TargetId, Vec2, ZoneId};

/// One unit of bot intent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Move to a world position
    MoveTo(Vec2),
    /// Stay close to and protect a specific player
    CoverEntity(PlayerId),
    /// Hold and defend a zone
    DefendZone(ZoneId),
    /// Defend a specific target with a bomb on it
    DefendPlantedTarget(TargetId),
    /// Plant a bomb on the nearest reachable objective
    PlantBomb,
    /// Defuse the nearest armed bomb
    DefuseBomb,
    /// Push toward a zone and clear it
    Infiltrate(ZoneId),
    /// Wander to a random reachable point
    Wander,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Movement,
    Objective,
    Defense,
    Idle,
}

impl Action {
    pub fn category(&self) -> ActionCategory {
        match self {
            Action::MoveTo(_) | Action::Infiltrate(_) => ActionCategory::Movement,
            Action::PlantBomb | Action::DefuseBomb => ActionCategory::Objective,
            Action::CoverEntity(_) | Action::DefendZone(_) | Action::DefendPlantedTarget(_) => {
                ActionCategory::Defense
            }
            Action::Wander => ActionCategory::Idle,
        }
    }
}
