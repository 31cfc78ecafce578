//! AI configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

/// Configuration for the bot AI core
///
/// These values have been tuned to produce believable early-round behavior.
/// Changing them will affect pacing and how quickly a team commits to an
/// objective.
#[derive(Debug, Clone)]
pub struct AiConfig {
    // === TEAM STRATEGY ===
    /// Base delay before a team stops wandering and organizes an attack (ms)
    ///
    /// During this window every bot receives wander orders regardless of
    /// world state, so the opening of a round looks organic rather than
    /// immediately optimal.
    pub organized_attack_delay_ms: u64,

    /// Number of one-second jitter steps added to the base delay
    ///
    /// The actual countdown is `delay + rand(0..jitter_steps) * 1000` ms,
    /// so two rounds rarely organize at the same moment.
    pub organized_attack_jitter_steps: u32,

    /// Fixed applicability score the offense strategy reports to the
    /// round orchestrator's strategy selector
    pub offense_desirability: f32,

    // === PATHFINDING ===
    /// Seed for the per-cell fuzzy-path penalty hash
    ///
    /// Fuzzy paths are deterministic for a given seed; vary it per match
    /// if repeated fuzzy queries should differ between sessions.
    pub fuzzy_seed: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            organized_attack_delay_ms: 15_000,
            organized_attack_jitter_steps: 25,
            offense_desirability: 0.8,
            fuzzy_seed: 0x5eed_1e55,
        }
    }
}
