//! **tilepath-core**: priced tile-grid pathfinding, core types.
//!
//! This crate provides the foundational types used across the *tilepath*
//! workspace: integer coordinates, adjacency policies, priced tiles, and
//! the rectangular [`TileGrid`] built from cost or walkability data.

pub mod geom;
pub mod grid;
pub mod tile;

pub use geom::{Adjacency, Coord};
pub use grid::{GridError, TileGrid};
pub use tile::Tile;
