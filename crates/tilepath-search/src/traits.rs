use tilepath_core::{Adjacency, Coord, Tile, TileGrid};

/// A searchable tile layout.
///
/// Rectangular grids are the stock implementation; anything that can
/// resolve a coordinate to a [`Tile`] and enumerate neighbors under an
/// adjacency policy can be searched, including irregular or offset
/// (hexagonal-style) layouts.
pub trait Topology {
    /// Tile at `at`, or `None` when the coordinate is outside the layout.
    fn tile(&self, at: Coord) -> Option<Tile>;

    /// Append the in-layout neighbors of `at` into `buf`. The caller
    /// clears `buf` before calling.
    ///
    /// The order must be deterministic for a given coordinate and policy,
    /// and every appended coordinate must resolve via
    /// [`Topology::tile`]. Blocked tiles are included; the search filters
    /// walkability itself.
    fn neighbors(&self, at: Coord, adjacency: Adjacency, buf: &mut Vec<Coord>);
}

impl Topology for TileGrid {
    #[inline]
    fn tile(&self, at: Coord) -> Option<Tile> {
        TileGrid::tile(self, at)
    }

    #[inline]
    fn neighbors(&self, at: Coord, adjacency: Adjacency, buf: &mut Vec<Coord>) {
        TileGrid::neighbors(self, at, adjacency, buf);
    }
}
