//! A rectangular tile matrix: [`TileGrid`] and [`GridError`].

use std::fmt;

use crate::geom::{Adjacency, Coord};
use crate::tile::Tile;

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors from grid construction, refresh, and checked lookups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    /// The supplied tile data does not fit the stated dimensions, or a
    /// dimension is negative.
    InvalidDimensions {
        width: i32,
        height: i32,
        len: usize,
    },
    /// A coordinate lies outside the grid extents.
    OutOfBounds { at: Coord, size: Coord },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { width, height, len } => {
                write!(f, "{len} tiles do not fit a {width}x{height} grid")
            }
            GridError::OutOfBounds { at, size } => {
                write!(f, "coordinate {at} outside grid of size {size}")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// TileGrid
// ---------------------------------------------------------------------------

/// A width × height matrix of [`Tile`]s in flat row-major storage.
///
/// Built from a cost slice or a walkability slice, and refreshable from
/// either; a refresh to the same dimensions overwrites tiles in place,
/// while a dimension change reallocates the storage. The grid carries no
/// search state, so shared references to it stay valid and consistent for
/// the whole duration of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Build a grid from per-tile traversal costs, row by row.
    ///
    /// A cost of `0.0` makes the tile blocked. `costs.len()` must equal
    /// `width * height`.
    pub fn from_costs(width: i32, height: i32, costs: &[f32]) -> Result<Self, GridError> {
        Self::check_shape(width, height, costs.len())?;
        Ok(Self {
            width,
            height,
            tiles: costs.iter().map(|&price| Tile::new(price)).collect(),
        })
    }

    /// Build a grid from a walkability mask, row by row.
    ///
    /// Walkable tiles get price `1.0`, blocked tiles `0.0`.
    pub fn from_walkable(width: i32, height: i32, walkable: &[bool]) -> Result<Self, GridError> {
        Self::check_shape(width, height, walkable.len())?;
        Ok(Self {
            width,
            height,
            tiles: walkable.iter().map(|&w| Tile::from(w)).collect(),
        })
    }

    /// Replace all tile data from a cost slice.
    ///
    /// Tiles are overwritten in place when the dimensions are unchanged;
    /// a dimension change reallocates the storage. On error the grid is
    /// left untouched.
    pub fn refresh_costs(
        &mut self,
        width: i32,
        height: i32,
        costs: &[f32],
    ) -> Result<(), GridError> {
        Self::check_shape(width, height, costs.len())?;
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.tiles = costs.iter().map(|&price| Tile::new(price)).collect();
        } else {
            for (tile, &price) in self.tiles.iter_mut().zip(costs) {
                *tile = Tile::new(price);
            }
        }
        Ok(())
    }

    /// Replace all tile data from a walkability mask. Same reallocation
    /// rules as [`TileGrid::refresh_costs`].
    pub fn refresh_walkable(
        &mut self,
        width: i32,
        height: i32,
        walkable: &[bool],
    ) -> Result<(), GridError> {
        Self::check_shape(width, height, walkable.len())?;
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.tiles = walkable.iter().map(|&w| Tile::from(w)).collect();
        } else {
            for (tile, &w) in self.tiles.iter_mut().zip(walkable) {
                *tile = Tile::from(w);
            }
        }
        Ok(())
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a [`Coord`] (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Coord {
        Coord::new(self.width, self.height)
    }

    /// Whether the coordinate is inside the grid.
    #[inline]
    pub fn contains(&self, at: Coord) -> bool {
        at.x >= 0 && at.y >= 0 && at.x < self.width && at.y < self.height
    }

    /// Tile at a coordinate, or `None` when out of bounds.
    #[inline]
    pub fn tile(&self, at: Coord) -> Option<Tile> {
        if !self.contains(at) {
            return None;
        }
        Some(self.tiles[self.idx(at)])
    }

    /// Tile at a coordinate, or [`GridError::OutOfBounds`].
    pub fn get(&self, at: Coord) -> Result<Tile, GridError> {
        self.tile(at).ok_or(GridError::OutOfBounds {
            at,
            size: self.size(),
        })
    }

    /// Append the in-bounds neighbors of `at` under the given adjacency
    /// policy, in the fixed order of [`Coord::neighbors_4`] /
    /// [`Coord::neighbors_8`]. The caller clears `buf` beforehand.
    ///
    /// Blocked tiles are included; filtering on walkability is the
    /// search's job.
    pub fn neighbors(&self, at: Coord, adjacency: Adjacency, buf: &mut Vec<Coord>) {
        match adjacency {
            Adjacency::Manhattan => {
                for n in at.neighbors_4() {
                    if self.contains(n) {
                        buf.push(n);
                    }
                }
            }
            Adjacency::Euclidean => {
                for n in at.neighbors_8() {
                    if self.contains(n) {
                        buf.push(n);
                    }
                }
            }
        }
    }

    #[inline]
    fn idx(&self, at: Coord) -> usize {
        (at.y * self.width + at.x) as usize
    }

    fn check_shape(width: i32, height: i32, len: usize) -> Result<(), GridError> {
        if width < 0 || height < 0 || width as usize * height as usize != len {
            return Err(GridError::InvalidDimensions { width, height, len });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
mod grid_serde {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::TileGrid;

    /// Wire form: dimensions plus the row-major cost values.
    #[derive(Serialize, Deserialize)]
    struct RawGrid {
        width: i32,
        height: i32,
        costs: Vec<f32>,
    }

    impl Serialize for TileGrid {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            RawGrid {
                width: self.width,
                height: self.height,
                costs: self.tiles.iter().map(|t| t.price).collect(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for TileGrid {
        /// Re-validates the shape, so corrupt payloads surface as
        /// deserialization errors rather than inconsistent grids.
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = RawGrid::deserialize(deserializer)?;
            TileGrid::from_costs(raw.width, raw.height, &raw.costs).map_err(D::Error::custom)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_from_costs() {
        let grid = TileGrid::from_costs(3, 2, &[1.0, 0.0, 2.0, 1.0, 1.0, 0.5]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.size(), Coord::new(3, 2));
        assert_eq!(grid.tile(Coord::new(2, 0)), Some(Tile::new(2.0)));
        assert_eq!(grid.tile(Coord::new(2, 1)), Some(Tile::new(0.5)));
        assert!(!grid.tile(Coord::new(1, 0)).unwrap().walkable());
    }

    #[test]
    fn build_from_walkable() {
        let grid = TileGrid::from_walkable(2, 2, &[true, false, true, true]).unwrap();
        assert_eq!(grid.tile(Coord::new(0, 0)), Some(Tile::OPEN));
        assert_eq!(grid.tile(Coord::new(1, 0)), Some(Tile::BLOCKED));
        assert_eq!(grid.tile(Coord::new(1, 1)).unwrap().price, 1.0);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        assert_eq!(
            TileGrid::from_costs(2, 2, &[1.0, 1.0, 1.0]),
            Err(GridError::InvalidDimensions {
                width: 2,
                height: 2,
                len: 3,
            })
        );
        assert!(TileGrid::from_walkable(-1, 3, &[]).is_err());
        assert!(TileGrid::from_costs(0, 0, &[]).is_ok());
    }

    #[test]
    fn lookups_outside_bounds() {
        let grid = TileGrid::from_walkable(2, 2, &[true; 4]).unwrap();
        assert_eq!(grid.tile(Coord::new(-1, 0)), None);
        assert_eq!(grid.tile(Coord::new(0, 2)), None);
        assert!(grid.get(Coord::new(1, 1)).is_ok());
        assert_eq!(
            grid.get(Coord::new(5, 1)),
            Err(GridError::OutOfBounds {
                at: Coord::new(5, 1),
                size: Coord::new(2, 2),
            })
        );
    }

    #[test]
    fn neighbors_respect_bounds_and_policy() {
        let grid = TileGrid::from_walkable(3, 3, &[true; 9]).unwrap();
        let mut buf = Vec::new();

        grid.neighbors(Coord::new(0, 0), Adjacency::Manhattan, &mut buf);
        assert_eq!(buf, vec![Coord::new(1, 0), Coord::new(0, 1)]);

        buf.clear();
        grid.neighbors(Coord::new(0, 0), Adjacency::Euclidean, &mut buf);
        assert_eq!(
            buf,
            vec![Coord::new(1, 0), Coord::new(1, 1), Coord::new(0, 1)]
        );

        buf.clear();
        grid.neighbors(Coord::new(1, 1), Adjacency::Euclidean, &mut buf);
        assert_eq!(buf.len(), 8);

        // Same query, same order.
        let mut again = Vec::new();
        grid.neighbors(Coord::new(1, 1), Adjacency::Euclidean, &mut again);
        assert_eq!(buf, again);
    }

    #[test]
    fn refresh_in_place_keeps_dimensions() {
        let mut grid = TileGrid::from_costs(2, 2, &[1.0, 1.0, 1.0, 1.0]).unwrap();
        grid.refresh_costs(2, 2, &[0.0, 2.0, 1.0, 1.0]).unwrap();
        assert_eq!(grid.size(), Coord::new(2, 2));
        assert_eq!(grid.tile(Coord::new(0, 0)), Some(Tile::BLOCKED));
        assert_eq!(grid.tile(Coord::new(1, 0)), Some(Tile::new(2.0)));
    }

    #[test]
    fn refresh_reallocates_on_dimension_change() {
        let mut grid = TileGrid::from_costs(2, 2, &[1.0; 4]).unwrap();
        grid.refresh_walkable(3, 1, &[true, false, true]).unwrap();
        assert_eq!(grid.size(), Coord::new(3, 1));
        assert_eq!(grid.tile(Coord::new(1, 0)), Some(Tile::BLOCKED));
        assert_eq!(grid.tile(Coord::new(0, 1)), None);
    }

    #[test]
    fn failed_refresh_leaves_grid_untouched() {
        let mut grid = TileGrid::from_costs(2, 1, &[1.0, 2.0]).unwrap();
        let before = grid.clone();
        assert!(grid.refresh_costs(3, 3, &[1.0, 1.0]).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn refresh_with_same_data_is_idempotent() {
        let costs = [1.0, 0.0, 0.5, 2.0, 1.0, 1.0];
        let mut grid = TileGrid::from_costs(3, 2, &costs).unwrap();
        let before = grid.clone();
        grid.refresh_costs(3, 2, &costs).unwrap();
        grid.refresh_costs(3, 2, &costs).unwrap();
        for y in 0..2 {
            for x in 0..3 {
                let at = Coord::new(x, y);
                assert_eq!(grid.tile(at), before.tile(at));
            }
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_roundtrip() {
        let grid = TileGrid::from_costs(2, 3, &[1.0, 0.0, 0.5, 2.0, 1.0, 1.0]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: TileGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn corrupt_shape_fails_to_deserialize() {
        let json = r#"{"width":2,"height":2,"costs":[1.0,1.0,1.0]}"#;
        assert!(serde_json::from_str::<TileGrid>(json).is_err());
    }
}
