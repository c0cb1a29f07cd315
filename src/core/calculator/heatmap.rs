//! Heatmap grid model: one cell per day of a 365-day strip, laid out row by
//! row, oldest first.

use crate::config::{Config, HeatmapAnchor};
use crate::models::activity::ActivityLog;
use crate::utils::date::{DAYS_IN_YEAR, add_days, window_start};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Background for days without hours.
pub const EMPTY_COLOR: Rgb = Rgb::new(204, 204, 204);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapOptions {
    pub columns: usize,
    pub cell_size: u32,
    pub padding: u32,
    /// Hours at which a cell reaches full saturation.
    pub full_threshold: u32,
    pub anchor: HeatmapAnchor,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            columns: 30,
            cell_size: 20,
            padding: 2,
            full_threshold: 8,
            anchor: HeatmapAnchor::FirstEntry,
        }
    }
}

impl HeatmapOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            columns: cfg.heatmap_columns.max(1),
            full_threshold: cfg.full_threshold.max(1),
            anchor: cfg.heatmap_anchor,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub x: u32,
    pub y: u32,
    pub date: NaiveDate,
    pub hours: u32,
    pub color: Rgb,
}

/// Light grey for zero, then pastel to saturated green up to `full_threshold`.
pub fn color_for(hours: u32, full_threshold: u32) -> Rgb {
    if hours == 0 {
        return EMPTY_COLOR;
    }

    let intensity = (f64::from(hours) / f64::from(full_threshold.max(1))).min(1.0);
    let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

    Rgb::new(
        channel(0.8 - 0.4 * intensity),
        channel(1.0 - 0.5 * intensity),
        channel(0.8 - 0.4 * intensity),
    )
}

/// A rendered strip. Cheap to copy; iterating it again starts over.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    log: &'a ActivityLog,
    start: NaiveDate,
    opts: HeatmapOptions,
}

impl<'a> Grid<'a> {
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        add_days(self.start, DAYS_IN_YEAR - 1)
    }

    pub fn columns(&self) -> usize {
        self.opts.columns
    }

    pub fn rows(&self) -> usize {
        DAYS_IN_YEAR.div_ceil(self.opts.columns)
    }

    pub fn cells(&self) -> Cells<'a> {
        Cells {
            grid: *self,
            next: 0,
        }
    }

    fn cell(&self, index: usize) -> Cell {
        let row = index / self.opts.columns;
        let col = index % self.opts.columns;
        let step = self.opts.cell_size + self.opts.padding;
        let date = add_days(self.start, index);
        let hours = self.log.hours_on(date);

        Cell {
            index,
            row,
            col,
            x: col as u32 * step,
            y: row as u32 * step,
            date,
            hours,
            color: color_for(hours, self.opts.full_threshold),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cells<'a> {
    grid: Grid<'a>,
    next: usize,
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.next >= DAYS_IN_YEAR {
            return None;
        }
        let cell = self.grid.cell(self.next);
        self.next += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = DAYS_IN_YEAR - self.next.min(DAYS_IN_YEAR);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl<'a> IntoIterator for &Grid<'a> {
    type Item = Cell;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Cells<'a> {
        self.cells()
    }
}

/// Lay out `log` as a 365-cell strip. With `FirstEntry` the strip starts at
/// the earliest logged day; with `Today`, or when nothing is logged, it
/// ends on `today`.
pub fn render_grid(log: &ActivityLog, today: NaiveDate, opts: HeatmapOptions) -> Grid<'_> {
    let start = match opts.anchor {
        HeatmapAnchor::FirstEntry => log.first_date().unwrap_or_else(|| window_start(today)),
        HeatmapAnchor::Today => window_start(today),
    };

    Grid {
        log,
        start,
        opts: HeatmapOptions {
            columns: opts.columns.max(1),
            ..opts
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::parse_date;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn color_scale_saturates_at_threshold() {
        assert_eq!(color_for(0, 8), EMPTY_COLOR);
        assert_eq!(color_for(1, 8), Rgb::new(191, 239, 191));
        assert_eq!(color_for(8, 8), Rgb::new(102, 128, 102));
        assert_eq!(color_for(20, 8), color_for(8, 8));
        assert_ne!(color_for(8, 24), color_for(8, 8));
    }

    #[test]
    fn grid_has_365_cells_in_rows_of_30() {
        let today = d("2025-10-01");
        let log = ActivityLog::new("Reading").unwrap();
        let grid = render_grid(&log, today, HeatmapOptions::default());

        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), DAYS_IN_YEAR);
        assert_eq!(grid.rows(), 13);

        let c = cells[31];
        assert_eq!((c.row, c.col), (1, 1));
        assert_eq!((c.x, c.y), (22, 22));
        assert!(cells.iter().all(|c| c.color == EMPTY_COLOR));
        assert_eq!(cells[364].date, today);
    }

    #[test]
    fn first_entry_anchor_starts_at_earliest_day() {
        let today = d("2025-10-01");
        let mut log = ActivityLog::new("Reading").unwrap();
        log.log_hours(d("2025-09-01"), 4, today).unwrap();
        log.log_hours(today, 2, today).unwrap();

        let grid = render_grid(&log, today, HeatmapOptions::default());
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(grid.start(), d("2025-09-01"));
        assert_eq!(cells[0].hours, 4);
        assert_eq!(cells[30].date, today);
        assert_eq!(cells[30].hours, 2);
    }

    #[test]
    fn today_anchor_ends_on_today() {
        let today = d("2025-10-01");
        let mut log = ActivityLog::new("Reading").unwrap();
        log.log_hours(today, 3, today).unwrap();

        let opts = HeatmapOptions {
            anchor: HeatmapAnchor::Today,
            ..HeatmapOptions::default()
        };
        let grid = render_grid(&log, today, opts);
        let last = grid.cells().last().unwrap();
        assert_eq!(last.date, today);
        assert_eq!(last.hours, 3);
        assert_eq!(grid.end(), today);
    }

    #[test]
    fn grid_can_be_iterated_twice() {
        let today = d("2025-10-01");
        let mut log = ActivityLog::new("Reading").unwrap();
        log.log_hours(today, 3, today).unwrap();
        let grid = render_grid(&log, today, HeatmapOptions::default());

        let first: Vec<Cell> = (&grid).into_iter().collect();
        let second: Vec<Cell> = (&grid).into_iter().collect();
        assert_eq!(first, second);
    }
}
