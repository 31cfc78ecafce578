//! Narrow interfaces onto external collaborators
//!
//! The entity-simulation layer owns players, brains and their order queues;
//! this core only consumes the surface below. Tests provide in-crate mocks.

use crate::actions::Action;
use crate::core::types::{PlayerId, Vec2};

/// Read-only snapshot of one player, as supplied by the simulation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub alive: bool,
    pub bot: bool,
    pub position: Vec2,
}

/// Read-only lookup into the running game
pub trait GameView {
    fn player(&self, id: PlayerId) -> Option<PlayerSnapshot>;
}

/// One bot agent: identity plus its order inbox.
///
/// `post` respects normal queueing; `post_top_priority` is the external
/// override path and inserts at the front of the inbox regardless of how
/// backlogged the bot is.
pub trait Agent {
    fn id(&self) -> PlayerId;
    fn is_alive(&self) -> bool;
    fn is_bot(&self) -> bool;
    fn position(&self) -> Vec2;

    /// Whether the inbox already holds queued orders ("busy")
    fn has_pending_orders(&self) -> bool;

    fn post(&mut self, action: Action);
    fn post_top_priority(&mut self, action: Action);
}
