use crate::directions::build_directions;
use crate::grid::{Grid, TARGETED};
use crate::point::Point;

/// Terminal state of a single ray cast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastOutcome {
    /// First occupied cell along the direction, now marked
    Hit(Point),
    /// The ray left the grid without meeting an occupied cell
    Exited,
}

/// Walk cells from `origin + direction` until the first occupied cell
/// (marked as targeted) or grid exit.
///
/// An already-targeted cell still counts as occupied, so re-casting a
/// direction re-marks the same cell and changes nothing.
pub fn cast_and_mark(grid: &mut Grid, origin: Point, direction: Point) -> CastOutcome {
    let mut offset = origin + direction;
    while grid.is_in_bounds(offset) {
        if grid.get(offset) > 0 {
            grid.set(offset, TARGETED);
            return CastOutcome::Hit(offset);
        }
        offset = offset + direction;
    }
    CastOutcome::Exited
}

/// Cast one ray per generated direction, sequentially, and mark every
/// first hit. Returns the outcome of each direction in generation order.
pub fn sweep(grid: &mut Grid, origin: Point) -> Vec<(Point, CastOutcome)> {
    let max_extent = grid.width.max(grid.height) + 1;

    let mut outcomes = Vec::new();
    for direction in build_directions(max_extent) {
        let outcome = cast_and_mark(grid, origin, direction);
        outcomes.push((direction, outcome));
    }
    outcomes
}
