//! Random-cost map demo: a 100×100 grid of random traversal prices,
//! queried with one long route under every policy combination.
//!
//! Run with `RUST_LOG=debug` to see the search's own reporting.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilepath_core::{Adjacency, Coord, TileGrid};
use tilepath_search::Pathfinder;

const WIDTH: i32 = 100;
const HEIGHT: i32 = 100;

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let costs: Vec<f32> = (0..WIDTH * HEIGHT).map(|_| rng.random()).collect();
    let grid = match TileGrid::from_costs(WIDTH, HEIGHT, &costs) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("bad map: {err}");
            return;
        }
    };

    let from = Coord::new(1, 1);
    let to = Coord::new(90, 90);
    println!("searching {from} -> {to} on a {WIDTH}x{HEIGHT} random-price map");

    let mut pf = Pathfinder::new();
    for (label, adjacency, ignore_prices) in [
        ("euclidean, priced", Adjacency::Euclidean, false),
        ("euclidean, unpriced", Adjacency::Euclidean, true),
        ("manhattan, priced", Adjacency::Manhattan, false),
        ("manhattan, unpriced", Adjacency::Manhattan, true),
    ] {
        let t0 = Instant::now();
        let path = pf.find_path(&grid, from, to, adjacency, ignore_prices);
        let elapsed = t0.elapsed();
        match path.last() {
            Some(end) => println!(
                "{label:>20}: {:3} steps, first {} last {end} ({elapsed:?})",
                path.len(),
                path[0],
            ),
            None => println!("{label:>20}: no path ({elapsed:?})"),
        }
    }
}
