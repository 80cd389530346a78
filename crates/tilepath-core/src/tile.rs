//! The [`Tile`] value type: per-tile traversal price.

/// A single grid tile, described entirely by its traversal price.
///
/// A price of `0.0` marks the tile as blocked; anything else is walkable,
/// with `1.0` the baseline and larger values costlier to cross. Prices
/// must not be negative. Walkability is derived from the price, so the
/// two can never disagree.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub price: f32,
}

impl Tile {
    /// A walkable tile at the baseline price.
    pub const OPEN: Self = Self { price: 1.0 };

    /// A blocked tile. Also the `Default`.
    pub const BLOCKED: Self = Self { price: 0.0 };

    /// Create a tile with the given traversal price.
    #[inline]
    pub const fn new(price: f32) -> Self {
        Self { price }
    }

    /// Whether the tile can be stepped on.
    #[inline]
    pub fn walkable(self) -> bool {
        self.price != 0.0
    }
}

impl From<f32> for Tile {
    #[inline]
    fn from(price: f32) -> Self {
        Self { price }
    }
}

impl From<bool> for Tile {
    /// `true` becomes [`Tile::OPEN`], `false` becomes [`Tile::BLOCKED`].
    #[inline]
    fn from(walkable: bool) -> Self {
        if walkable { Self::OPEN } else { Self::BLOCKED }
    }
}
