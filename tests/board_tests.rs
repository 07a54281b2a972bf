mod common;

use common::{grid_from_rows, render_rows};
use gridsight::grid::{EMPTY, OCCUPIED, TARGETED};
use gridsight::{Grid, GridError, Point};

#[test]
fn parses_dimensions_and_cells() {
    let grid = grid_from_rows(&["#..", ".#.", "..#"]);
    assert_eq!(grid.width, 3);
    assert_eq!(grid.height, 3);
    assert_eq!(grid.get(Point::new(0, 0)), OCCUPIED);
    assert_eq!(grid.get(Point::new(1, 0)), EMPTY);
    assert_eq!(grid.get(Point::new(1, 1)), OCCUPIED);
    assert_eq!(grid.get(Point::new(2, 2)), OCCUPIED);
}

#[test]
fn non_hash_characters_are_empty() {
    let grid = grid_from_rows(&["#xO", "@.#"]);
    assert_eq!(render_rows(&grid), vec!["100", "001"]);
}

#[test]
fn blank_lines_and_surrounding_whitespace_are_dropped() {
    let grid = Grid::from_text("\n  ##.  \n\n  .#.  \n\n").unwrap();
    assert_eq!(grid.width, 3);
    assert_eq!(grid.height, 2);
    assert_eq!(render_rows(&grid), vec!["110", "010"]);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(Grid::from_text("").unwrap_err(), GridError::EmptyInput);
    assert_eq!(
        Grid::from_text("  \n\n   \n").unwrap_err(),
        GridError::EmptyInput
    );
}

#[test]
fn shape_mismatch_reports_both_lengths() {
    let err = Grid::from_text("##\n#").unwrap_err();
    assert_eq!(
        err,
        GridError::ShapeMismatch {
            expected: 2,
            actual: 1
        }
    );
    assert!(err.to_string().contains("1 vs 2"));
}

#[test]
fn out_of_bounds_get_returns_empty() {
    let grid = grid_from_rows(&["##", "##"]);
    assert_eq!(grid.get(Point::new(-1, 0)), EMPTY);
    assert_eq!(grid.get(Point::new(0, -1)), EMPTY);
    assert_eq!(grid.get(Point::new(2, 0)), EMPTY);
    assert_eq!(grid.get(Point::new(0, 2)), EMPTY);
    assert_eq!(grid.get(Point::new(1000, -1000)), EMPTY);
}

#[test]
fn out_of_bounds_set_is_a_no_op() {
    let mut grid = grid_from_rows(&["#.", ".#"]);
    let before = grid.clone();
    grid.set(Point::new(-1, 0), TARGETED);
    grid.set(Point::new(2, 1), TARGETED);
    grid.set(Point::new(0, 99), TARGETED);
    assert_eq!(grid.cells, before.cells);
    assert_eq!(grid.get_revision(), before.get_revision());
}

#[test]
fn set_tracks_revisions_only_on_change() {
    let mut grid = grid_from_rows(&["#."]);
    assert_eq!(grid.get_revision(), 0);
    grid.set(Point::new(0, 0), TARGETED);
    assert_eq!(grid.get_revision(), 1);
    grid.set(Point::new(0, 0), TARGETED);
    assert_eq!(grid.get_revision(), 1);
}

#[test]
fn clone_is_a_deep_copy() {
    let grid = grid_from_rows(&["#.", ".#"]);
    let mut copy = grid.clone();
    copy.set(Point::new(1, 0), TARGETED);
    assert_eq!(grid.get(Point::new(1, 0)), EMPTY);
    assert_eq!(copy.get(Point::new(1, 0)), TARGETED);
}

#[test]
fn occupied_cells_are_row_major() {
    let grid = grid_from_rows(&[".#", "#."]);
    assert_eq!(
        grid.occupied_cells(),
        vec![Point::new(1, 0), Point::new(0, 1)]
    );
}

#[test]
fn render_has_no_trailing_separator() {
    let grid = grid_from_rows(&["#.", ".#"]);
    assert_eq!(grid.to_string(), "10\n01");
}
