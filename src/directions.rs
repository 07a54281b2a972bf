use crate::point::Point;
use crate::primes::primes_below;

/// Build the set of direction vectors to cast rays along.
///
/// Three seed vectors cover the axis and diagonal steps, then one vector
/// per ordered pair of distinct primes below `max_extent`. The sweep
/// driver passes `max(width, height) + 1`, so the pairs range over primes
/// up to the larger grid dimension. `(p1, p2)` and `(p2, p1)` are
/// genuinely different slopes and both are kept.
///
/// The construction is deliberately not a complete coprime-slope
/// enumeration; the marking behavior depends on exactly this set.
pub fn build_directions(max_extent: i32) -> Vec<Point> {
    let primes: Vec<i32> = primes_below(max_extent).collect();

    let mut directions = vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)];
    for &p1 in &primes {
        for &p2 in &primes {
            if p1 != p2 {
                directions.push(Point::new(p1, p2));
            }
        }
    }

    directions
}
