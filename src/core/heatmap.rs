use crate::config::{Config, HeatmapAnchor};
use crate::core::calculator::heatmap::{Grid, HeatmapOptions, Rgb, color_for, render_grid};
use crate::core::stats::StatsLogic;
use crate::core::{current_activity, open_store};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::{self, iso};
use ansi_term::{Colour, Style};

/// Glyphs from empty to saturated, used without colours.
const GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];

fn glyph(hours: u32, full_threshold: u32) -> char {
    if hours == 0 {
        return GLYPHS[0];
    }
    let full = full_threshold.max(1);
    let step = (hours.min(full) * 4).div_ceil(full) as usize;
    GLYPHS[step.clamp(1, 4)]
}

fn swatch(c: Rgb) -> String {
    Style::new()
        .on(Colour::RGB(c.r, c.g, c.b))
        .paint("  ")
        .to_string()
}

/// Render the grid as text, one line per grid row prefixed by the date of
/// its first cell.
pub fn paint(grid: &Grid<'_>, full_threshold: u32, plain: bool) -> String {
    let mut out = String::new();
    let mut line = String::new();

    for cell in grid {
        if cell.col == 0 {
            line.push_str(&iso(cell.date));
            line.push(' ');
        }

        if plain {
            line.push(glyph(cell.hours, full_threshold));
        } else {
            line.push_str(&swatch(cell.color));
        }

        if cell.col + 1 == grid.columns() {
            out.push_str(&line);
            out.push('\n');
            line.clear();
        }
    }

    if !line.is_empty() {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

pub struct HeatmapLogic;

impl HeatmapLogic {
    pub fn show(cfg: &Config, plain: bool, anchor: Option<HeatmapAnchor>) -> AppResult<()> {
        let today = date::today();
        let store = open_store(cfg, today)?;
        let idx = current_activity(&store, cfg)?;
        let log = store.activity(idx)?;

        let mut opts = HeatmapOptions::from_config(cfg);
        if let Some(a) = anchor {
            opts.anchor = a;
        }

        let grid = render_grid(log, today, opts);

        header(format!(
            "{}: {} → {}",
            log.name(),
            iso(grid.start()),
            iso(grid.end())
        ));
        print!("{}", paint(&grid, opts.full_threshold, plain));

        let legend: String = if plain {
            GLYPHS.iter().collect()
        } else {
            [0, 1, opts.full_threshold / 2, opts.full_threshold]
                .iter()
                .map(|&h| swatch(color_for(h, opts.full_threshold)))
                .collect()
        };
        println!(
            "less {legend} more (full at {} h)",
            opts.full_threshold
        );

        StatsLogic::print_summary(log);
        Ok(())
    }
}
