use std::collections::hash_map::Entry;

use tilepath_core::{Adjacency, Coord};

use crate::Pathfinder;
use crate::distance::octile;
use crate::pathfinder::{Node, OpenRef};
use crate::traits::Topology;

impl Pathfinder {
    /// Find a cheapest walkable route from `from` to `to` using A*.
    ///
    /// The returned coordinates exclude `from` and, when non-empty, end
    /// with `to`; walking them in order reaches the goal. An empty vector
    /// means no path, and is also the answer when `from == to` or when
    /// either endpoint lies outside the topology.
    ///
    /// Each step costs its octile distance times the destination tile's
    /// decimal-scaled price, or times 1 when `ignore_prices` is set.
    /// Frontier ties on total estimated cost prefer the position
    /// estimated closer to the goal.
    pub fn find_path<T: Topology>(
        &mut self,
        topology: &T,
        from: Coord,
        to: Coord,
        adjacency: Adjacency,
        ignore_prices: bool,
    ) -> Vec<Coord> {
        if topology.tile(from).is_none() || topology.tile(to).is_none() {
            return Vec::new();
        }
        if from == to {
            return Vec::new();
        }

        // Reset scratch from any previous search.
        self.nodes.clear();
        self.open.clear();

        let start_h = octile(from, to);
        self.nodes.insert(
            from,
            Node {
                g: 0,
                h: start_h,
                parent: None,
                closed: false,
            },
        );
        self.open.push(OpenRef {
            pos: from,
            f: start_h,
            h: start_h,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let mut expanded = 0u32;
        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };
            let cur = current.pos;

            // Skip stale entries for positions finalized meanwhile.
            let Some(node) = self.nodes.get_mut(&cur) else {
                continue;
            };
            if node.closed {
                continue;
            }
            node.closed = true;
            let current_g = node.g;
            expanded += 1;

            if cur == to {
                break 'search true;
            }

            nbuf.clear();
            topology.neighbors(cur, adjacency, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(tile) = topology.tile(np) else {
                    continue;
                };
                if !tile.walkable() {
                    continue;
                }

                let factor = if ignore_prices {
                    1
                } else {
                    (10.0 * tile.price).round() as i32
                };
                let tentative_g = current_g + octile(cur, np) * factor;

                match self.nodes.entry(np) {
                    Entry::Occupied(mut e) => {
                        let n = e.get_mut();
                        // Finalized positions are never reopened.
                        if n.closed || tentative_g >= n.g {
                            continue;
                        }
                        n.g = tentative_g;
                        n.parent = Some(cur);
                        let h = n.h;
                        self.open.push(OpenRef {
                            pos: np,
                            f: tentative_g + h,
                            h,
                        });
                    }
                    Entry::Vacant(e) => {
                        let h = octile(np, to);
                        e.insert(Node {
                            g: tentative_g,
                            h,
                            parent: Some(cur),
                            closed: false,
                        });
                        self.open.push(OpenRef {
                            pos: np,
                            f: tentative_g + h,
                            h,
                        });
                    }
                }
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("no path {from} -> {to} after {expanded} expansions");
            return Vec::new();
        }

        // Walk parent links back from the goal; `from` itself stays out.
        let mut path = Vec::new();
        let mut cur = to;
        while cur != from {
            path.push(cur);
            let Some(prev) = self.nodes.get(&cur).and_then(|n| n.parent) else {
                break;
            };
            cur = prev;
        }
        path.reverse();
        log::debug!(
            "path {from} -> {to}: {} steps, {expanded} expansions",
            path.len()
        );
        path
    }
}

/// One-shot convenience: run a single search on a throwaway [`Pathfinder`].
///
/// Callers issuing many queries should hold on to a [`Pathfinder`] and
/// call [`Pathfinder::find_path`] so the search scratch gets reused.
pub fn find_path<T: Topology>(
    topology: &T,
    from: Coord,
    to: Coord,
    adjacency: Adjacency,
    ignore_prices: bool,
) -> Vec<Coord> {
    Pathfinder::new().find_path(topology, from, to, adjacency, ignore_prices)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
