//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observations: `o`
//! - consecutive observations joined by a `-` line
//!
//! Missing values are skipped; the line bridges over them.

use chrono::NaiveDate;

use crate::domain::TimeSeries;

/// Render a plot of the series' present values against date.
pub fn render_series_plot(series: &TimeSeries, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let Some(origin) = series.first().map(|o| o.date) else {
        return format!("Plot: series {} has no observations\n", series.name());
    };
    let points: Vec<(f64, f64)> = series
        .iter()
        .filter_map(|o| o.value.map(|v| (day_offset(origin, o.date), v)))
        .filter(|(_, v)| v.is_finite())
        .collect();
    if points.is_empty() {
        return format!("Plot: series {} has no values\n", series.name());
    }

    let (x_min, x_max) = x_range(&points);
    let (y_min, y_max) = y_range(&points);
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the line first so points can overlay.
    let mut prev = None;
    for &(x, y) in &points {
        let cell = (map_x(x, x_min, x_max, width), map_y(y, y_min, y_max, height));
        if let Some((x0, y0)) = prev {
            draw_line(&mut grid, x0, y0, cell.0, cell.1, '-');
        }
        prev = Some(cell);
    }
    for &(x, y) in &points {
        grid[map_y(y, y_min, y_max, height)][map_x(x, x_min, x_max, width)] = 'o';
    }

    let first = offset_date(origin, x_min);
    let last = offset_date(origin, x_max);
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: series {} | dates=[{first}, {last}] | y=[{y_min:.4}, {y_max:.4}]\n",
        series.name()
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn day_offset(origin: NaiveDate, date: NaiveDate) -> f64 {
    (date - origin).num_days() as f64
}

fn offset_date(origin: NaiveDate, days: f64) -> NaiveDate {
    origin + chrono::Duration::days(days as i64)
}

fn x_range(points: &[(f64, f64)]) -> (f64, f64) {
    let min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

fn y_range(points: &[(f64, f64)]) -> (f64, f64) {
    let min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    if max > min { (min, max) } else { (min - 0.5, max + 0.5) }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    if x_max <= x_min {
        return 0;
    }
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
