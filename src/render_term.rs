use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::{
    error::BmivizResult,
    frames::ChartFrame,
    model::ColorLabel,
    render::{ChartLayout, RenderSettings, RenderSurface},
};

/// Rows redrawn per frame: band strip, bar, axis, legend.
const CHART_ROWS: u16 = 4;

fn term_color(label: ColorLabel) -> Color {
    match label {
        ColorLabel::Yellow => Color::Yellow,
        ColorLabel::Green => Color::Green,
        ColorLabel::Orange => Color::DarkYellow,
        ColorLabel::Red => Color::Red,
    }
}

/// ANSI terminal surface. Draws the chart once, then moves the cursor back up
/// and redraws in place on every subsequent frame.
pub struct TermSurface<W: Write> {
    out: W,
    columns: u16,
    drawn_once: bool,
}

impl<W: Write> TermSurface<W> {
    pub fn new(out: W, settings: &RenderSettings) -> Self {
        Self {
            out,
            // Narrower than this and the axis labels no longer fit.
            columns: settings.columns.max(16),
            drawn_once: false,
        }
    }

    fn col(&self, layout: &ChartLayout, value: f64) -> u16 {
        let t = (value / layout.table.scale_max()).clamp(0.0, 1.0);
        (t * f64::from(self.columns - 1)).round() as u16
    }

    fn draw_strip(&mut self, layout: &ChartLayout) -> io::Result<()> {
        let max = layout.table.scale_max();
        for c in 0..self.columns {
            let value = (f64::from(c) + 0.5) / f64::from(self.columns) * max;
            let band = layout.table.band_for(value);
            queue!(
                self.out,
                SetForegroundColor(term_color(band.color)),
                Print('█')
            )?;
        }
        queue!(self.out, ResetColor, Print('\n'))
    }

    fn draw_bar(&mut self, layout: &ChartLayout, frame: &ChartFrame) -> io::Result<()> {
        let anchor = self.col(layout, frame.bar_anchor);
        let tip = self.col(layout, frame.value);
        let marker = self.col(layout, frame.marker_x);
        let color = term_color(layout.classification.color);

        for c in 0..self.columns {
            if c == marker {
                queue!(self.out, SetForegroundColor(Color::White), Print('●'))?;
            } else if c >= anchor && c <= tip {
                queue!(self.out, SetForegroundColor(color), Print('▓'))?;
            } else {
                queue!(self.out, Print(' '))?;
            }
        }
        queue!(self.out, ResetColor, Print('\n'))
    }

    fn draw_axis(&mut self, layout: &ChartLayout) -> io::Result<()> {
        let width = usize::from(self.columns);
        let mut row = vec![b' '; width];

        let mut bounds = vec![layout.table.bands[0].lower];
        bounds.extend(layout.table.bands.iter().map(|b| b.upper));

        for bound in bounds {
            let label = if bound.fract() == 0.0 {
                format!("{bound:.0}")
            } else {
                format!("{bound:.1}")
            };
            let col = usize::from(self.col(layout, bound));
            let start = col.min(width.saturating_sub(label.len()));
            for (i, byte) in label.bytes().enumerate() {
                row[start + i] = byte;
            }
        }

        queue!(
            self.out,
            Print(String::from_utf8_lossy(&row).into_owned()),
            Print('\n')
        )
    }

    fn draw_legend(&mut self, layout: &ChartLayout) -> io::Result<()> {
        for band in &layout.table.bands {
            queue!(
                self.out,
                SetForegroundColor(term_color(band.color)),
                Print('■'),
                ResetColor,
                Print(format!(" {}  ", band.category))
            )?;
        }
        queue!(
            self.out,
            SetForegroundColor(Color::White),
            Print('●'),
            ResetColor,
            Print(format!(" {}\n", layout.marker_label()))
        )
    }
}

impl TermSurface<io::Stdout> {
    pub fn stdout(settings: &RenderSettings) -> Self {
        Self::new(io::stdout(), settings)
    }
}

impl<W: Write> RenderSurface for TermSurface<W> {
    fn present(&mut self, layout: &ChartLayout, frame: &ChartFrame) -> BmivizResult<()> {
        if self.drawn_once {
            queue!(
                self.out,
                cursor::MoveToPreviousLine(CHART_ROWS),
                Clear(ClearType::FromCursorDown)
            )?;
        } else {
            queue!(self.out, cursor::Hide)?;
        }

        self.draw_strip(layout)?;
        self.draw_bar(layout, frame)?;
        self.draw_axis(layout)?;
        self.draw_legend(layout)?;
        self.out.flush()?;

        self.drawn_once = true;
        Ok(())
    }
}

impl<W: Write> Drop for TermSurface<W> {
    fn drop(&mut self) {
        if self.drawn_once {
            let _ = queue!(self.out, cursor::Show);
            let _ = self.out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::Classifier, core::Measurement, frames::FrameSeq, model::BandTable};

    fn normal_layout() -> ChartLayout {
        let table = BandTable::standard();
        let measurement = Measurement::new(70.0, 175.0).unwrap();
        let classification = Classifier::classify(&table, measurement.bmi()).unwrap();
        ChartLayout::new(table, classification)
    }

    fn present_frames(layout: &ChartLayout, count: usize) -> String {
        let seq = FrameSeq::for_classification(&layout.classification);
        let mut surface = TermSurface::new(Vec::new(), &RenderSettings::default());
        for index in 0..count {
            surface.present(layout, &seq.frame_at(index)).unwrap();
        }
        String::from_utf8_lossy(&surface.out).into_owned()
    }

    #[test]
    fn first_frame_draws_legend_and_marker_label() {
        let out = present_frames(&normal_layout(), 1);
        assert!(out.contains("Underweight"));
        assert!(out.contains("Obese"));
        assert!(out.contains("Your BMI: 22.9"));
    }

    #[test]
    fn axis_labels_include_band_bounds() {
        let out = present_frames(&normal_layout(), 1);
        assert!(out.contains("18.5"));
        assert!(out.contains("70"));
    }

    #[test]
    fn redraw_moves_the_cursor_back_up() {
        let once = present_frames(&normal_layout(), 1);
        let twice = present_frames(&normal_layout(), 2);
        assert!(twice.len() > once.len());
        // Second frame starts with a cursor-up escape, not a fresh page.
        assert!(twice.matches("\u{1b}[4F").count() == 1);
    }

    #[test]
    fn column_mapping_spans_the_scale() {
        let layout = normal_layout();
        let surface = TermSurface::new(Vec::new(), &RenderSettings { columns: 70 });
        assert_eq!(surface.col(&layout, 0.0), 0);
        assert_eq!(surface.col(&layout, 70.0), 69);
        assert_eq!(surface.col(&layout, 35.0), 35);
    }
}
