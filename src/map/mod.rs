//! Tile graph and the search engine behind it

pub mod graph;
pub mod search;

pub use graph::{Cell, TileCell, TileGraph, TilePath};
pub use search::{search, ExactPolicy, SearchPath, SearchPolicy, SearchSpace};
