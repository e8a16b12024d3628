//! Text bar chart of completed tasks per day.
//!
//! Bars are scaled so the busiest day gets the configured width; any day with
//! at least one completion gets at least one symbol.
//!
//! ```text
//! Completed tasks by day
//!
//! 2025-01-14 │████████████████████████████████████████ 4
//! 2025-01-15 │██████████ 1
//! ```

use super::config::ChartConfig;
use super::formatter::format_day;
use super::messages::Message;
use chrono::NaiveDate;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub day: NaiveDate,
    pub count: u32,
    pub length: usize,
}

#[derive(Debug, Clone)]
pub struct BarChart {
    bars: Vec<Bar>,
    symbol: String,
}

impl BarChart {
    pub fn new(counts: &[(NaiveDate, u32)], config: &ChartConfig) -> Self {
        let max = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
        let width = config.width.max(1);

        let bars = counts
            .iter()
            .map(|&(day, count)| Bar {
                day,
                count,
                length: scale(count, max, width),
            })
            .collect();

        BarChart {
            bars,
            symbol: config.symbol.clone(),
        }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

fn scale(count: u32, max: u32, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    let scaled = (count as usize * width).div_ceil(max as usize);
    scaled.clamp(1, width)
}

impl Display for BarChart {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.bars.is_empty() {
            return writeln!(f, "{}", Message::NoCompletedTasks);
        }

        writeln!(f, "{}", Message::ChartTitle)?;
        writeln!(f)?;
        for bar in &self.bars {
            writeln!(f, "{} │{} {}", format_day(&bar.day), self.symbol.repeat(bar.length), bar.count)?;
        }
        Ok(())
    }
}
