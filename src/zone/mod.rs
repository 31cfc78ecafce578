//! Map zones and their objective targets
//!
//! Zones are built by the map loader and read-only afterwards, except for
//! target state which the entity-simulation layer drives; this core only
//! reads it.

use serde::{Deserialize, Serialize};

use crate::core::types::{Rect, TargetId, Vec2, ZoneId};

/// Lifecycle of a plantable objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BombTargetState {
    #[default]
    Inactive,
    /// A bomb is being planted on it
    Arming,
    /// A bomb is planted and ticking
    Active,
    /// Defused or destroyed; no longer an objective
    Neutralized,
}

/// A plantable/defusable objective marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BombTarget {
    pub id: TargetId,
    pub position: Vec2,
    pub state: BombTargetState,
}

impl BombTarget {
    pub fn new(id: TargetId, position: Vec2) -> Self {
        Self { id, position, state: BombTargetState::Inactive }
    }

    /// Still worth attacking: anything short of neutralized.
    pub fn is_objective(&self) -> bool {
        self.state != BombTargetState::Neutralized
    }

    /// A bomb is on it right now (being planted or armed).
    pub fn is_planted(&self) -> bool {
        matches!(self.state, BombTargetState::Arming | BombTargetState::Active)
    }
}

/// Named rectangular map region, possibly containing objective targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub bounds: Rect,
    pub targets: Vec<BombTarget>,
}

impl Zone {
    pub fn new(id: ZoneId, bounds: Rect) -> Self {
        Self { id, bounds, targets: Vec::new() }
    }

    pub fn with_targets(id: ZoneId, bounds: Rect, targets: Vec<BombTarget>) -> Self {
        Self { id, bounds, targets }
    }

    /// Does this zone still hold at least one un-neutralized target?
    pub fn has_active_targets(&self) -> bool {
        self.targets.iter().any(|t| t.is_objective())
    }

    /// The first target with a bomb planted on it, if any
    pub fn planted_target(&self) -> Option<&BombTarget> {
        self.targets.iter().find(|t| t.is_planted())
    }

    /// Is any bomb in this zone armed and ticking?
    pub fn has_armed_bomb(&self) -> bool {
        self.targets.iter().any(|t| t.state == BombTargetState::Active)
    }
}

/// Opaque "most contested area" statistic supplied by an external stats
/// component. Fallback when no objective-bearing zone qualifies.
pub trait ContestedOracle {
    fn deadliest_zone(&self) -> Option<ZoneId>;
}

/// Query surface over the zones of the current map
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneIndex {
    zones: Vec<Zone>,
}

impl ZoneIndex {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Zones that still hold at least one un-neutralized bomb target,
    /// in load order.
    pub fn zones_with_active_targets(&self) -> Vec<&Zone> {
        self.zones.iter().filter(|z| z.has_active_targets()).collect()
    }

    /// The zones worth fighting over right now: objective-bearing zones,
    /// else whatever the contested-area oracle nominates. May be empty;
    /// callers must treat that as "no zone available".
    pub fn zones_of_interest(&self, oracle: &dyn ContestedOracle) -> Vec<&Zone> {
        let active = self.zones_with_active_targets();
        if !active.is_empty() {
            return active;
        }
        oracle
            .deadliest_zone()
            .and_then(|id| self.zone(id))
            .into_iter()
            .collect()
    }

    /// Entity-simulation layer write path; the AI core never calls this.
    pub fn set_target_state(&mut self, target: TargetId, state: BombTargetState) {
        for zone in &mut self.zones {
            for t in &mut zone.targets {
                if t.id == target {
                    t.state = state;
                    return;
                }
            }
        }
    }
}
