use gridsight::Grid;

/// Build a grid from row strings, panicking on malformed test boards
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    Grid::from_text(&rows.join("\n")).expect("test board must parse")
}

/// Rendered grid as one string per row
pub fn render_rows(grid: &Grid) -> Vec<String> {
    grid.to_string().lines().map(str::to_string).collect()
}
