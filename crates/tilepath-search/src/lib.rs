//! Priced A* path search over tile layouts.
//!
//! The search runs over anything implementing [`Topology`] (the stock
//! implementation is `tilepath_core::TileGrid`) and returns the route as
//! an ordered list of coordinates, excluding the start and ending at the
//! goal. An empty list means no path.
//!
//! Searches go through a [`Pathfinder`], which owns and reuses all
//! transient state (open heap, per-coordinate bookkeeping, neighbor
//! buffer) so repeated queries incur zero allocations after warm-up; the
//! free [`find_path`] runs a single query on throwaway state.
//!
//! Step costs use the decimeter-scaled octile metric (10 orthogonal,
//! 14 diagonal) multiplied by the destination tile's price, with
//! 4-directional and 8-directional adjacency selected per query via
//! `tilepath_core::Adjacency`.

mod astar;
mod distance;
mod pathfinder;
mod traits;

pub use astar::find_path;
pub use distance::{chebyshev, manhattan, octile};
pub use pathfinder::Pathfinder;
pub use traits::Topology;
