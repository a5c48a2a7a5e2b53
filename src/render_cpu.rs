use crate::{
    core::Canvas,
    error::{BmivizError, BmivizResult},
    frames::ChartFrame,
    render::{ChartLayout, FrameRgba},
};

const CLEAR_RGBA: [u8; 4] = [18, 20, 28, 255];
const MARKER_RGBA: [u8; 4] = [235, 235, 235, 255];
/// Partial-bar opacity over the clear color.
const BAR_BLEND: f64 = 0.45;

/// Rasterize one chart frame: band strip across the top, the partial bar and
/// marker below it. Pure pixels; encoding is the caller's concern.
pub fn rasterize(
    layout: &ChartLayout,
    frame: &ChartFrame,
    canvas: Canvas,
) -> BmivizResult<FrameRgba> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(BmivizError::validation("canvas width/height must be > 0"));
    }

    let w = canvas.width as usize;
    let h = canvas.height as usize;
    let scale_max = layout.table.scale_max();

    let mut data = vec![0u8; w * h * 4];
    fill_rect(&mut data, w, 0, w - 1, 0, h, CLEAR_RGBA);

    let strip_y0 = h * 15 / 100;
    let strip_y1 = (h * 40 / 100).max(strip_y0 + 1);
    let bar_y0 = h * 55 / 100;
    let bar_y1 = (h * 85 / 100).max(bar_y0 + 1);

    for band in &layout.table.bands {
        let x0 = x_for(band.lower, scale_max, w);
        let x1 = x_for(band.upper, scale_max, w);
        fill_rect(&mut data, w, x0, x1, strip_y0, strip_y1, band.color.rgba8());
    }

    let bar_rgba = blend(layout.classification.color.rgba8(), CLEAR_RGBA, BAR_BLEND);
    let bar_x0 = x_for(frame.bar_anchor, scale_max, w);
    let bar_x1 = x_for(frame.value, scale_max, w);
    if bar_x1 >= bar_x0 {
        fill_rect(&mut data, w, bar_x0, bar_x1, bar_y0, bar_y1, bar_rgba);
    }

    let marker_x = x_for(frame.marker_x, scale_max, w);
    let marker_y = (bar_y0 + bar_y1) / 2;
    let half = (h / 24).max(2);
    fill_rect(
        &mut data,
        w,
        marker_x.saturating_sub(half),
        (marker_x + half).min(w - 1),
        marker_y.saturating_sub(half),
        (marker_y + half).min(h),
        MARKER_RGBA,
    );

    Ok(FrameRgba {
        width: canvas.width,
        height: canvas.height,
        data,
    })
}

fn x_for(value: f64, scale_max: f64, width: usize) -> usize {
    let t = (value / scale_max).clamp(0.0, 1.0);
    (t * (width - 1) as f64).round() as usize
}

/// `x1` inclusive, `y1` exclusive.
fn fill_rect(
    data: &mut [u8],
    width: usize,
    x0: usize,
    x1: usize,
    y0: usize,
    y1: usize,
    rgba: [u8; 4],
) {
    let x1 = x1.min(width - 1);
    for y in y0..y1 {
        for x in x0..=x1 {
            let i = (y * width + x) * 4;
            data[i..i + 4].copy_from_slice(&rgba);
        }
    }
}

fn blend(fg: [u8; 4], bg: [u8; 4], t: f64) -> [u8; 4] {
    fn mix(fg: u8, bg: u8, t: f64) -> u8 {
        let fg = f64::from(fg);
        let bg = f64::from(bg);
        (bg + (fg - bg) * t).round().clamp(0.0, 255.0) as u8
    }

    [
        mix(fg[0], bg[0], t),
        mix(fg[1], bg[1], t),
        mix(fg[2], bg[2], t),
        255,
    ]
}
