use std::collections::{BinaryHeap, HashMap};

use tilepath_core::Coord;

// ---------------------------------------------------------------------------
// Internal per-coordinate bookkeeping
// ---------------------------------------------------------------------------

/// Search record for one discovered coordinate.
#[derive(Clone, Copy)]
pub(crate) struct Node {
    /// Accumulated cost of the best known route from the start.
    pub(crate) g: i32,
    /// Estimated remaining cost to the goal, fixed at discovery.
    pub(crate) h: i32,
    pub(crate) parent: Option<Coord>,
    /// Finalized positions are never reopened.
    pub(crate) closed: bool,
}

/// Open-heap entry, ordered by total estimated cost for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenRef {
    pub(crate) pos: Coord,
    pub(crate) f: i32,
    pub(crate) h: i32,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest f first;
        // equal f prefers the entry estimated closer to the goal.
        other.f.cmp(&self.f).then_with(|| other.h.cmp(&self.h))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Reusable state for path searches over a [`Topology`](crate::Topology).
///
/// `Pathfinder` owns the open heap, the per-coordinate bookkeeping map,
/// and a neighbor scratch buffer, so repeated queries incur no
/// allocations once warm. All transient search state lives here and is
/// reset at the start of every search; the topology itself is only read,
/// and nothing carries over from one query to the next.
///
/// The bookkeeping map is keyed by coordinate and populated lazily, so a
/// search only pays for the tiles it actually visits.
pub struct Pathfinder {
    pub(crate) nodes: HashMap<Coord, Node>,
    pub(crate) open: BinaryHeap<OpenRef>,
    pub(crate) nbuf: Vec<Coord>,
}

impl Pathfinder {
    /// Create a pathfinder with empty scratch.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(8),
        }
    }
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_heap_pops_lowest_f_then_lowest_h() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenRef {
            pos: Coord::new(0, 0),
            f: 30,
            h: 10,
        });
        heap.push(OpenRef {
            pos: Coord::new(1, 0),
            f: 20,
            h: 18,
        });
        heap.push(OpenRef {
            pos: Coord::new(2, 0),
            f: 20,
            h: 4,
        });

        let first = heap.pop().unwrap();
        assert_eq!((first.f, first.h), (20, 4));
        let second = heap.pop().unwrap();
        assert_eq!((second.f, second.h), (20, 18));
        let third = heap.pop().unwrap();
        assert_eq!(third.f, 30);
    }
}
