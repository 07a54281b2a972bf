use crate::point::Point;
use std::fmt;

/// Grid structure for storing cell states
/// Cell values: 0=empty, 1=occupied/untargeted, 9=occupied-and-targeted
pub const EMPTY: i32 = 0;
pub const OCCUPIED: i32 = 1;
pub const TARGETED: i32 = 9;

/// Structural problems in the board text, detected once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No non-blank lines in the input
    EmptyInput,
    /// A row's trimmed length disagrees with the first row's length
    ShapeMismatch { expected: i32, actual: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::EmptyInput => write!(f, "Board is empty"),
            GridError::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "All rows in input must have the same length ({} vs {})",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

#[derive(Clone, Debug)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    /// Flat buffer, row-major: index = x + y * width
    pub cells: Vec<i32>,
    /// Revision number - incremented whenever grid cells change
    pub revision: u64,
}

impl Grid {
    /// Build a grid from a textual board description.
    ///
    /// Lines are trimmed and blank lines dropped; the first kept line
    /// defines the width. '#' maps to occupied, anything else to empty.
    pub fn from_text(input: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(GridError::EmptyInput);
        }

        let width = lines[0].chars().count() as i32;
        let height = lines.len() as i32;
        let mut cells = vec![EMPTY; (width * height) as usize];

        for (y, line) in lines.iter().enumerate() {
            let actual = line.chars().count() as i32;
            if actual != width {
                return Err(GridError::ShapeMismatch {
                    expected: width,
                    actual,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                if ch == '#' {
                    cells[x + y * width as usize] = OCCUPIED;
                }
            }
        }

        Ok(Grid {
            width,
            height,
            cells,
            revision: 0,
        })
    }

    /// Check if a point lies inside the grid rectangle
    pub fn is_in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    fn cell_index(&self, p: Point) -> usize {
        (p.x + p.y * self.width) as usize
    }

    /// Get cell value at a point, or 0 if out of bounds
    pub fn get(&self, p: Point) -> i32 {
        if !self.is_in_bounds(p) {
            return EMPTY;
        }
        self.cells[self.cell_index(p)]
    }

    /// Set cell value at a point; out-of-bounds writes are a no-op
    pub fn set(&mut self, p: Point, value: i32) {
        if !self.is_in_bounds(p) {
            return;
        }
        let index = self.cell_index(p);
        if self.cells[index] != value {
            self.cells[index] = value;
            self.revision += 1;
        }
    }

    /// All points holding a non-zero value, in row-major order
    pub fn occupied_cells(&self) -> Vec<Point> {
        let mut occupied = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Point::new(x, y);
                if self.get(p) != EMPTY {
                    occupied.push(p);
                }
            }
        }
        occupied
    }

    /// Get current grid revision number
    pub fn get_revision(&self) -> u64 {
        self.revision
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                write!(f, "{}", self.get(Point::new(x, y)))?;
            }
        }
        Ok(())
    }
}
