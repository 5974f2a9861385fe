#![forbid(unsafe_code)]

//! Frame drawing: HUD text, bars and a progress bar.
//!
//! Layout, top to bottom: HUD lines, one blank row, the bar area, and a
//! single progress row. Every cell of the frame is overwritten each time, so
//! no clear is needed between frames.
//!
//! Bars use eighth-block glyphs for sub-row height resolution. When there are
//! more bars than columns, columns sample the data; when there are fewer,
//! bars widen.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{BeginSynchronizedUpdate, EndSynchronizedUpdate};
use stepsort_core::controller::{Phase, StepSnapshot};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

const BACKGROUND: Color = rgb(10, 12, 20);
const ACTIVE: Color = rgb(255, 50, 50);
const MARKER: Color = rgb(255, 0, 255);
const DONE: Color = rgb(255, 255, 255);
const LABEL: Color = rgb(100, 255, 255);
const TEXT: Color = rgb(255, 255, 255);
const PROGRESS_FILL: Color = rgb(0, 255, 100);
const PROGRESS_TRACK: Color = rgb(40, 40, 50);

const BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// How a bar should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Plain,
    Settled,
    Active,
    Marker,
    Written,
    Done,
}

/// Role of bar `index` in `snapshot`. Marker beats active beats written
/// beats settled.
#[must_use]
pub fn bar_role(index: usize, snapshot: &StepSnapshot<'_>) -> BarRole {
    if snapshot.sorted {
        return BarRole::Done;
    }
    let hl = &snapshot.highlights;
    if hl.marker == Some(index) {
        BarRole::Marker
    } else if hl.active.contains(&index) {
        BarRole::Active
    } else if hl.written == Some(index) {
        BarRole::Written
    } else if hl.settled.contains(&index) {
        BarRole::Settled
    } else {
        BarRole::Plain
    }
}

/// Blue gradient: taller bars are lighter.
#[must_use]
pub fn gradient(value: u32, max_value: u32) -> Color {
    let ratio = (value as f32 / max_value.max(1) as f32).clamp(0.0, 1.0);
    Color::Rgb {
        r: (30.0 + ratio * 100.0) as u8,
        g: (30.0 + ratio * 200.0) as u8,
        b: (150.0 + ratio * 105.0) as u8,
    }
}

#[must_use]
pub fn role_color(role: BarRole, value: u32, max_value: u32) -> Color {
    match role {
        BarRole::Plain => gradient(value, max_value),
        BarRole::Active => ACTIVE,
        BarRole::Marker => MARKER,
        BarRole::Settled | BarRole::Written | BarRole::Done => DONE,
    }
}

/// Data index shown in column `col` of `width`.
#[must_use]
pub fn column_index(col: u16, width: u16, len: usize) -> Option<usize> {
    if len == 0 || width == 0 || col >= width {
        return None;
    }
    Some(usize::from(col) * len / usize::from(width))
}

/// Bar height in eighths of a row. Non-zero values always get at least one.
#[must_use]
pub fn bar_eighths(value: u32, max_value: u32, rows: u16) -> usize {
    if value == 0 || rows == 0 {
        return 0;
    }
    let capacity = usize::from(rows) * 8;
    let scaled = (u64::from(value) * capacity as u64 + u64::from(max_value.max(1)) / 2)
        / u64::from(max_value.max(1));
    (scaled as usize).clamp(1, capacity)
}

/// Glyph for the cell `row_from_bottom` rows above the base of a bar.
#[must_use]
pub fn cell_glyph(eighths: usize, row_from_bottom: u16) -> char {
    let filled = eighths
        .saturating_sub(usize::from(row_from_bottom) * 8)
        .min(8);
    BLOCKS[filled]
}

/// Filled cells of a progress bar `width` wide.
#[must_use]
pub fn progress_cells(progress: f32, width: u16) -> u16 {
    let cells = (progress.clamp(0.0, 1.0) * f32::from(width)).round() as u16;
    cells.min(width)
}

/// HUD text for the current frame.
#[must_use]
pub fn hud_lines(
    snapshot: &StepSnapshot<'_>,
    delay: Duration,
    tone_hz: Option<f64>,
) -> Vec<String> {
    if matches!(snapshot.phase, Phase::Shuffling { .. }) {
        return vec!["STATUS: Shuffling...".to_string()];
    }

    let kind = snapshot.kind;
    let tone = tone_hz.map_or_else(|| "-".to_string(), |hz| format!("{hz:.0} Hz"));
    vec![
        format!("ALGORITHM:  {}", kind.name()),
        format!("COMPLEXITY: {}", kind.complexity()),
        format!("HOW IT WORKS: {}", kind.description()),
        String::new(),
        format!("Comparisons:  {}", snapshot.metrics.comparisons),
        format!("Swaps:        {}", snapshot.metrics.swaps),
        format!("Real CPU Time:{:.3}ms", snapshot.metrics.elapsed_ms()),
        format!("Delay Added:  {}ms", delay.as_millis()),
        format!("Tone:         {tone}"),
        String::new(),
        "1-5 algorithm   r reshuffle   Up/Down speed   q quit".to_string(),
    ]
}

/// Draw a full frame of `width` x `height` cells.
pub fn draw<W: Write>(
    out: &mut W,
    snapshot: &StepSnapshot<'_>,
    hud: &[String],
    max_value: u32,
    (width, height): (u16, u16),
) -> io::Result<()> {
    if width == 0 || height == 0 {
        return Ok(());
    }
    queue!(out, BeginSynchronizedUpdate, SetBackgroundColor(BACKGROUND))?;

    let hud_rows = (hud.len() as u16).min(height);
    for (row, line) in hud.iter().take(usize::from(hud_rows)).enumerate() {
        let color = if line.contains(':') { LABEL } else { TEXT };
        let text: String = line.chars().take(usize::from(width)).collect();
        let pad = usize::from(width).saturating_sub(text.chars().count());
        queue!(
            out,
            MoveTo(0, row as u16),
            SetForegroundColor(color),
            Print(text),
            Print(" ".repeat(pad))
        )?;
    }

    // One spacer row below the HUD, one progress row at the bottom.
    let top = hud_rows.saturating_add(1).min(height);
    let bottom = height.saturating_sub(1);
    let bar_rows = bottom.saturating_sub(top);
    if top < bottom {
        queue!(
            out,
            MoveTo(0, top - 1),
            Print(" ".repeat(usize::from(width)))
        )?;
    }

    let columns: Vec<Option<(usize, Color)>> = (0..width)
        .map(|col| {
            column_index(col, width, snapshot.data.len()).map(|idx| {
                let value = snapshot.data[idx];
                let color = role_color(bar_role(idx, snapshot), value, max_value);
                (bar_eighths(value, max_value, bar_rows), color)
            })
        })
        .collect();

    for r in 0..bar_rows {
        let row_from_bottom = bar_rows - 1 - r;
        queue!(out, MoveTo(0, top + r))?;
        let mut current: Option<Color> = None;
        for cell in &columns {
            let (glyph, color) = match cell {
                Some((eighths, color)) => (cell_glyph(*eighths, row_from_bottom), *color),
                None => (' ', TEXT),
            };
            if current != Some(color) {
                queue!(out, SetForegroundColor(color))?;
                current = Some(color);
            }
            queue!(out, Print(glyph))?;
        }
    }

    if height > hud_rows {
        let filled = progress_cells(snapshot.progress, width);
        queue!(
            out,
            MoveTo(0, bottom),
            SetBackgroundColor(PROGRESS_FILL),
            Print(" ".repeat(usize::from(filled))),
            SetBackgroundColor(PROGRESS_TRACK),
            Print(" ".repeat(usize::from(width - filled))),
        )?;
    }

    queue!(out, ResetColor, EndSynchronizedUpdate)?;
    out.flush()
}
