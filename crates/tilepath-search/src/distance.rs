use tilepath_core::Coord;

/// Octile distance between two coordinates, scaled by 10: orthogonal
/// steps count 10, diagonal steps 14 (≈ 10√2).
///
/// This is the step metric and heuristic used by the pathfinder. It is
/// exact for 8-directional movement and an underestimate for
/// 4-directional movement, so it stays admissible under both policies.
#[inline]
pub fn octile(a: Coord, b: Coord) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    14 * dx.min(dy) + 10 * (dx - dy).abs()
}

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octile_known_values() {
        let o = Coord::ZERO;
        assert_eq!(octile(o, o), 0);
        assert_eq!(octile(o, Coord::new(3, 0)), 30);
        assert_eq!(octile(o, Coord::new(0, -2)), 20);
        assert_eq!(octile(o, Coord::new(2, 2)), 28);
        assert_eq!(octile(o, Coord::new(3, 1)), 34);
        assert_eq!(octile(Coord::new(-1, -1), Coord::new(1, 2)), 38);
    }

    #[test]
    fn metrics_are_symmetric() {
        let a = Coord::new(-4, 7);
        let b = Coord::new(3, -2);
        assert_eq!(octile(a, b), octile(b, a));
        assert_eq!(manhattan(a, b), manhattan(b, a));
        assert_eq!(chebyshev(a, b), chebyshev(b, a));
    }

    #[test]
    fn octile_bounded_by_scaled_l1_and_linf() {
        for (a, b) in [
            (Coord::ZERO, Coord::new(5, 3)),
            (Coord::new(2, -1), Coord::new(-3, 4)),
            (Coord::new(1, 1), Coord::new(1, 9)),
        ] {
            let o = octile(a, b);
            assert!(o >= 10 * chebyshev(a, b));
            assert!(o <= 10 * manhattan(a, b));
        }
    }
}
