use crate::{classify::Classification, error::BmivizResult, frames::ChartFrame, model::BandTable};

/// Everything static a surface needs to draw the chart: the band strip, the
/// legend (all four category colors plus the marker entry), and the matched
/// band for the partial bar.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ChartLayout {
    pub table: BandTable,
    pub classification: Classification,
}

impl ChartLayout {
    pub fn new(table: BandTable, classification: Classification) -> Self {
        Self {
            table,
            classification,
        }
    }

    pub fn marker_label(&self) -> String {
        format!("Your BMI: {:.1}", self.classification.bmi)
    }
}

/// A drawing target for the animation loop. Implementations own all mutable
/// drawing state; the core only hands them immutable frame descriptions.
pub trait RenderSurface {
    fn present(&mut self, layout: &ChartLayout, frame: &ChartFrame) -> BmivizResult<()>;
}

#[derive(Clone, Copy, Debug)]
pub enum SurfaceKind {
    Term,
    Null,
}

#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// Terminal chart width in cells.
    pub columns: u16,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { columns: 70 }
    }
}

pub fn create_surface(
    kind: SurfaceKind,
    settings: &RenderSettings,
) -> BmivizResult<Box<dyn RenderSurface>> {
    match kind {
        SurfaceKind::Term => Ok(Box::new(crate::render_term::TermSurface::stdout(settings))),
        SurfaceKind::Null => Ok(Box::new(NullSurface)),
    }
}

/// Output pixels of the CPU rasterizer (RGBA8, row-major).
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Discards every frame; for callers that only want the classification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn present(&mut self, _layout: &ChartLayout, _frame: &ChartFrame) -> BmivizResult<()> {
        Ok(())
    }
}

/// Records every presented frame; test double for the animation loop.
#[derive(Clone, Debug, Default)]
pub struct CaptureSurface {
    pub frames: Vec<ChartFrame>,
}

impl RenderSurface for CaptureSurface {
    fn present(&mut self, _layout: &ChartLayout, frame: &ChartFrame) -> BmivizResult<()> {
        self.frames.push(*frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::Classifier, core::Bmi, frames::FrameSeq};

    fn layout() -> ChartLayout {
        let table = BandTable::standard();
        let classification = Classifier::classify(&table, Bmi(22.857_142_857_142_858)).unwrap();
        ChartLayout::new(table, classification)
    }

    #[test]
    fn marker_label_shows_one_decimal() {
        assert_eq!(layout().marker_label(), "Your BMI: 22.9");
    }

    #[test]
    fn capture_surface_records_presented_frames() {
        let layout = layout();
        let seq = FrameSeq::for_classification(&layout.classification);
        let mut surface = CaptureSurface::default();
        for frame in &seq {
            surface.present(&layout, &frame).unwrap();
        }
        assert_eq!(surface.frames.len(), seq.len());
    }

    #[test]
    fn null_surface_accepts_frames() {
        let layout = layout();
        let frame = FrameSeq::for_classification(&layout.classification).frame_at(0);
        assert!(NullSurface.present(&layout, &frame).is_ok());
    }
}
