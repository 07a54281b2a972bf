use crate::point::Point;
use crate::sweep::CastOutcome;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;

/// Cast outcome as stored in the log
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CastResult {
    /// The ray hit and marked the cell at (x, y)
    Hit { x: i32, y: i32 },
    /// The ray left the grid
    Exited,
}

impl From<CastOutcome> for CastResult {
    fn from(outcome: CastOutcome) -> Self {
        match outcome {
            CastOutcome::Hit(p) => CastResult::Hit { x: p.x, y: p.y },
            CastOutcome::Exited => CastResult::Exited,
        }
    }
}

/// One logged ray cast
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CastRecord {
    /// Milliseconds since the sweep started
    pub timestamp_ms: u64,
    /// Direction components
    pub dx: i32,
    pub dy: i32,
    /// What the ray found
    pub result: CastResult,
}

/// Sweep logger
pub struct SweepLog {
    start_time: Instant,
    records: Vec<CastRecord>,
}

impl SweepLog {
    pub fn new() -> Self {
        SweepLog {
            start_time: Instant::now(),
            records: Vec::new(),
        }
    }

    /// Log a cast with current timestamp
    pub fn log(&mut self, direction: Point, outcome: CastOutcome) {
        let elapsed = self.start_time.elapsed();
        let timestamp_ms = elapsed.as_millis() as u64;

        self.records.push(CastRecord {
            timestamp_ms,
            dx: direction.x,
            dy: direction.y,
            result: outcome.into(),
        });
    }

    /// Get all logged casts
    pub fn records(&self) -> &Vec<CastRecord> {
        &self.records
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Print log to console
    pub fn print(&self) {
        println!("\n=== Cast Log ({} rays) ===", self.records.len());
        for (i, record) in self.records.iter().enumerate() {
            let result_str = match &record.result {
                CastResult::Hit { x, y } => format!("hit ({},{})", x, y),
                CastResult::Exited => "exited".to_string(),
            };
            println!(
                "[{:6}ms] #{:3} ({},{}) -> {}",
                record.timestamp_ms,
                i + 1,
                record.dx,
                record.dy,
                result_str
            );
        }
        println!("=== End of Log ===\n");
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut hits = 0;
        let mut exits = 0;
        let mut targeted: HashSet<(i32, i32)> = HashSet::new();

        for record in &self.records {
            match &record.result {
                CastResult::Hit { x, y } => {
                    hits += 1;
                    targeted.insert((*x, *y));
                }
                CastResult::Exited => exits += 1,
            }
        }

        format!(
            "Directions cast: {}\n\
             Hits: {} ({} distinct cells targeted)\n\
             Exited the grid: {}",
            self.records.len(),
            hits,
            targeted.len(),
            exits
        )
    }
}
