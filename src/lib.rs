//! Ironsight - bot decision-making and pathfinding core
//!
//! Runs inside the game's single-threaded fixed-tick update: team
//! strategies turn coarse objectives into per-bot orders, the tile graph
//! answers spatial queries, and the command translator compiles external
//! text directives into the same action vocabulary. Rendering, scripting,
//! networking and entity simulation are external collaborators reached
//! through the narrow traits in [`game`].

pub mod actions;
pub mod command;
pub mod core;
pub mod game;
pub mod map;
pub mod strategy;
pub mod zone;
