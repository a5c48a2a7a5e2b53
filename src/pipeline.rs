use std::time::Duration;

use crate::{
    classify::{Classification, Classifier},
    core::Measurement,
    error::BmivizResult,
    frames::FrameSeq,
    model::BandTable,
    render::{ChartLayout, RenderSurface},
};

/// Pause after each presented frame.
pub const FRAME_DELAY: Duration = Duration::from_millis(20);

#[derive(Clone, Copy, Debug)]
pub struct AnimateOpts {
    pub frame_delay: Duration,
}

impl Default for AnimateOpts {
    fn default() -> Self {
        Self {
            frame_delay: FRAME_DELAY,
        }
    }
}

/// Validate, compute, classify, then present the full sweep on `surface`.
///
/// Fails before any frame is presented when the height is non-positive or the
/// computed BMI is beyond the chart ceiling. Once the sweep starts it runs to
/// completion; there is no cancellation.
#[tracing::instrument(skip(table, surface))]
pub fn compute_and_animate(
    table: &BandTable,
    weight_kg: f64,
    height_cm: f64,
    surface: &mut dyn RenderSurface,
    opts: &AnimateOpts,
) -> BmivizResult<Classification> {
    let measurement = Measurement::new(weight_kg, height_cm)?;
    let classification = Classifier::classify(table, measurement.bmi())?;
    let layout = ChartLayout::new(table.clone(), classification.clone());
    animate(&layout, surface, opts)?;
    Ok(classification)
}

/// The presentation loop on its own, for callers that classified separately.
/// Strictly sequential: present a frame, sleep, repeat.
pub fn animate(
    layout: &ChartLayout,
    surface: &mut dyn RenderSurface,
    opts: &AnimateOpts,
) -> BmivizResult<()> {
    let frames = FrameSeq::for_classification(&layout.classification);
    for frame in &frames {
        surface.present(layout, &frame)?;
        std::thread::sleep(opts.frame_delay);
    }
    Ok(())
}
