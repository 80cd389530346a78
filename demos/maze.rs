//! Maze demo: parse an ASCII map into a walkability grid, search an
//! orthogonal route, and print the map with the path drawn in.

use tilepath_core::{Adjacency, Coord, TileGrid};
use tilepath_search::find_path;

const MAP: &str = "\
##############
#......#.....#
#......#.....#
#..##..#..#..#
#..##.....#..#
#......#..#..#
#......#..#..#
##############";

fn main() {
    env_logger::init();

    let lines: Vec<&str> = MAP.lines().collect();
    let height = lines.len() as i32;
    let width = lines.first().map_or(0, |line| line.len()) as i32;
    let walkable: Vec<bool> = lines
        .iter()
        .flat_map(|line| line.chars().map(|ch| ch != '#'))
        .collect();

    let grid = match TileGrid::from_walkable(width, height, &walkable) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("bad map: {err}");
            return;
        }
    };

    let from = Coord::new(1, 1);
    let to = Coord::new(12, 6);
    let path = find_path(&grid, from, to, Adjacency::Manhattan, false);
    if path.is_empty() {
        println!("no route from {from} to {to}");
        return;
    }

    let mut rows: Vec<Vec<char>> = lines.iter().map(|line| line.chars().collect()).collect();
    for &step in &path {
        rows[step.y as usize][step.x as usize] = '*';
    }
    rows[from.y as usize][from.x as usize] = '@';

    for row in rows {
        let line: String = row.into_iter().collect();
        println!("{line}");
    }
    println!("{} steps from {from} to {to}", path.len());
}
