//! Offense objective strategy
//!
//! Drives one attacking team through the bomb-objective game type: wander
//! for a randomized opening window, then converge on a target zone, plant,
//! and defend the plant until the zone is spent.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::actions::Action;
use crate::core::config::AiConfig;
use crate::core::types::{PlayerId, TimeStep, Vec2, ZoneId};
use crate::game::Agent;
use crate::strategy::TeamStrategy;
use crate::zone::{ContestedOracle, Zone, ZoneIndex};

/// State machine of the offense strategy
///
/// `Random` is both the entry state and the reset state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffensiveState {
    Random,
    Infiltrate,
    PlantBomb,
    Defend,
    Done,
}

pub struct OffenseObjectiveStrategy {
    config: AiConfig,
    rng: ChaCha8Rng,

    state: OffensiveState,
    zone_to_attack: Option<ZoneId>,
    /// Remaining opening window; while positive every bot just wanders
    time_until_organized_attack_ms: u64,
}

impl OffenseObjectiveStrategy {
    /// Create with a fixed seed. Deterministic for testing.
    pub fn new(config: AiConfig) -> Self {
        Self::with_seed(config, 42)
    }

    /// Create with a specific RNG seed
    pub fn with_seed(config: AiConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state: OffensiveState::Random,
            zone_to_attack: None,
            time_until_organized_attack_ms: 0,
        }
    }

    pub fn state(&self) -> OffensiveState {
        self.state
    }

    pub fn zone_to_attack(&self) -> Option<ZoneId> {
        self.zone_to_attack
    }

    /// Opening pick: uniformly random among zones of interest, so the
    /// round opening is not immediately optimal.
    fn pick_opening_zone(&mut self, zones: &ZoneIndex, oracle: &dyn ContestedOracle) -> Option<ZoneId> {
        let candidates = zones.zones_of_interest(oracle);
        if candidates.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..candidates.len());
        Some(candidates[idx].id)
    }

    /// Mid-round recomputation: closest zone of interest by squared
    /// distance from `from` to the zone bounds' origin, ties broken by
    /// iteration order. Falls back to the oracle via `zones_of_interest`.
    fn pick_closest_zone(
        &self,
        zones: &ZoneIndex,
        oracle: &dyn ContestedOracle,
        from: Vec2,
    ) -> Option<ZoneId> {
        let candidates = zones.zones_of_interest(oracle);
        let mut best: Option<(&Zone, f32)> = None;
        for zone in candidates {
            let d = from.distance_sq(&zone.bounds.origin());
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((zone, d)),
            }
        }
        best.map(|(z, _)| z.id)
    }

    /// The order the current state issues to a bot at `pos`.
    ///
    /// Recomputes the target zone lazily when none is tracked.
    fn current_action(
        &mut self,
        pos: Vec2,
        zones: &ZoneIndex,
        oracle: &dyn ContestedOracle,
    ) -> Option<Action> {
        if self.zone_to_attack.is_none() {
            self.zone_to_attack = self.pick_closest_zone(zones, oracle, pos);
        }

        match self.state {
            OffensiveState::Defend => {
                let zone_id = self.zone_to_attack?;
                let zone = zones.zone(zone_id)?;
                match zone.planted_target() {
                    Some(target) => Some(Action::DefendPlantedTarget(target.id)),
                    None => Some(Action::DefendZone(zone_id)),
                }
            }
            OffensiveState::Infiltrate => match self.zone_to_attack {
                Some(zone_id) => Some(Action::Infiltrate(zone_id)),
                None => Some(Action::Wander),
            },
            OffensiveState::PlantBomb => Some(Action::PlantBomb),
            OffensiveState::Random => Some(Action::Wander),
            OffensiveState::Done => self.zone_to_attack.map(Action::Infiltrate),
        }
    }

    /// Edge-triggered broadcast: when the computed state differs from the
    /// current one, every living bot on the team gets the new order,
    /// backlogged or not. No-op when the state is unchanged.
    fn give_orders(
        &mut self,
        state: OffensiveState,
        zones: &ZoneIndex,
        oracle: &dyn ContestedOracle,
        squad: &mut [&mut dyn Agent],
    ) {
        if self.state == state {
            return;
        }
        tracing::debug!(from = ?self.state, to = ?state, "offense state transition");
        self.state = state;

        for agent in squad.iter_mut() {
            if agent.is_bot() && agent.is_alive() {
                let pos = agent.position();
                if let Some(action) = self.current_action(pos, zones, oracle) {
                    agent.post(action);
                }
            }
        }
    }

    /// Gated keep-alive: bots whose inbox has drained get the current
    /// state's order re-issued; backlogged bots are left alone.
    fn keep_alive(
        &mut self,
        zones: &ZoneIndex,
        oracle: &dyn ContestedOracle,
        squad: &mut [&mut dyn Agent],
    ) {
        for agent in squad.iter_mut() {
            if agent.is_bot() && agent.is_alive() && !agent.has_pending_orders() {
                let pos = agent.position();
                if let Some(action) = self.current_action(pos, zones, oracle) {
                    agent.post(action);
                }
            }
        }
    }
}

impl TeamStrategy for OffenseObjectiveStrategy {
    fn desirability(&self) -> f32 {
        self.config.offense_desirability
    }

    fn start_of_round(&mut self, zones: &ZoneIndex, oracle: &dyn ContestedOracle) {
        self.zone_to_attack = self.pick_opening_zone(zones, oracle);
        self.state = OffensiveState::Random;
        let jitter = self
            .rng
            .gen_range(0..self.config.organized_attack_jitter_steps) as u64;
        self.time_until_organized_attack_ms = self.config.organized_attack_delay_ms + jitter * 1000;
    }

    fn end_of_round(&mut self) {
        self.state = OffensiveState::Random;
        self.zone_to_attack = None;
    }

    fn update(
        &mut self,
        step: TimeStep,
        zones: &ZoneIndex,
        oracle: &dyn ContestedOracle,
        squad: &mut [&mut dyn Agent],
    ) {
        // Opening window: keep everyone wandering so early-round behavior
        // stays dynamic.
        if self.time_until_organized_attack_ms > 0 {
            self.time_until_organized_attack_ms = self
                .time_until_organized_attack_ms
                .saturating_sub(step.delta_ms);
            self.give_orders(OffensiveState::Random, zones, oracle, squad);
            self.keep_alive(zones, oracle, squad);
            return;
        }

        // Nothing to attack; stand down for this tick.
        let Some(zone_id) = self.zone_to_attack else {
            return;
        };
        let Some(zone) = zones.zone(zone_id) else {
            self.zone_to_attack = None;
            return;
        };

        if zone.has_active_targets() {
            if zone.planted_target().is_some() {
                self.give_orders(OffensiveState::Defend, zones, oracle, squad);
            } else {
                self.give_orders(OffensiveState::PlantBomb, zones, oracle, squad);
            }
        } else {
            // Zone is spent; converge on the next one.
            let from = squad
                .iter()
                .find(|a| a.is_bot() && a.is_alive())
                .map(|a| a.position())
                .unwrap_or_default();
            self.zone_to_attack = self.pick_closest_zone(zones, oracle, from);
            if self.zone_to_attack.is_some() {
                self.give_orders(OffensiveState::Infiltrate, zones, oracle, squad);
            }
        }

        self.keep_alive(zones, oracle, squad);
    }

    fn action_for(
        &mut self,
        agent: &dyn Agent,
        zones: &ZoneIndex,
        oracle: &dyn ContestedOracle,
    ) -> Option<Action> {
        self.current_action(agent.position(), zones, oracle)
    }

    fn player_spawned(
        &mut self,
        agent: &mut dyn Agent,
        zones: &ZoneIndex,
        oracle: &dyn ContestedOracle,
    ) {
        if agent.is_bot() {
            let pos = agent.position();
            if let Some(action) = self.current_action(pos, zones, oracle) {
                agent.post(action);
            }
        }
    }

    fn player_killed(&mut self, _player: PlayerId) {}
}
