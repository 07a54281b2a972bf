use gridsight::config::Config;
use gridsight::grid::OCCUPIED;
use gridsight::{sweep, Grid, Point, SweepLog};
use std::fs;

/// Fallback board used when the configured board file is missing
const DEFAULT_BOARD: &str = "\
......#.#.
#..#.#....
..#######.
.#.#.###..
.#..#.....
..#....#.#
#..#....#.
.##.#..###
##...#..#.
.#....####";

fn main() {
    let config = Config::load();

    let args: Vec<String> = std::env::args().collect();
    let board_path = if args.len() > 1 {
        args[1].clone()
    } else {
        config.board.path.clone()
    };

    let text = match fs::read_to_string(&board_path) {
        Ok(contents) => contents,
        Err(_) => {
            println!("No board file at {}, using built-in default board", board_path);
            DEFAULT_BOARD.to_string()
        }
    };

    let mut grid = match Grid::from_text(&text) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Failed to build grid: {}", e);
            std::process::exit(1);
        }
    };

    let before = grid.clone();
    let origin = Point::new(config.observer.x, config.observer.y);
    let outcomes = sweep(&mut grid, origin);

    let mut log = SweepLog::new();
    for &(direction, outcome) in &outcomes {
        log.log(direction, outcome);
    }

    println!("{}", grid);
    println!();
    println!("Observer at {}", origin);
    println!("{}", log.summary());
    println!(
        "Occupied cells: {} before sweep, {} still untargeted",
        before.occupied_cells().len(),
        grid.cells.iter().filter(|&&v| v == OCCUPIED).count()
    );

    if config.logging.enable_cast_log {
        if let Err(e) = log.save_to_file(&config.logging.cast_log_path) {
            eprintln!("Failed to save cast log: {}", e);
        } else {
            println!("Cast log saved to {}", config.logging.cast_log_path);
        }
    }
}
