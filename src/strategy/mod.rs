//! Team-objective strategies
//!
//! Each strategy owns one team's objective logic and scores its own
//! applicability through a uniform `desirability` contract; the round
//! orchestrator (external) picks the highest-scoring strategy per round,
//! holding them as trait objects.

pub mod offense;

use crate::actions::Action;
use crate::core::types::{PlayerId, TimeStep};
use crate::game::Agent;
use crate::zone::{ContestedOracle, ZoneIndex};

pub use offense::{OffenseObjectiveStrategy, OffensiveState};

/// One interchangeable team-objective behavior
pub trait TeamStrategy {
    /// Fixed applicability score reported to the strategy selector
    fn desirability(&self) -> f32;

    /// Round start: reset state and pick an opening target zone
    fn start_of_round(&mut self, zones: &ZoneIndex, oracle: &dyn ContestedOracle);

    /// Round end: back to the reset state
    fn end_of_round(&mut self);

    /// One simulation tick. Runs the state machine and issues orders to
    /// every squad member that is ready for them. Fully serialized per
    /// team; no two bots' order issuance interleave.
    fn update(
        &mut self,
        step: TimeStep,
        zones: &ZoneIndex,
        oracle: &dyn ContestedOracle,
        squad: &mut [&mut dyn Agent],
    );

    /// The current marching order for one bot, if the strategy has one
    fn action_for(
        &mut self,
        agent: &dyn Agent,
        zones: &ZoneIndex,
        oracle: &dyn ContestedOracle,
    ) -> Option<Action>;

    /// A freshly spawned bot missed the last broadcast; give it the
    /// current state's order immediately.
    fn player_spawned(
        &mut self,
        agent: &mut dyn Agent,
        zones: &ZoneIndex,
        oracle: &dyn ContestedOracle,
    );

    fn player_killed(&mut self, player: PlayerId);
}
