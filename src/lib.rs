#![forbid(unsafe_code)]

pub mod classify;
pub mod core;
pub mod error;
pub mod frames;
pub mod guide;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod render_cpu;
pub mod render_term;

pub use classify::{Classification, Classifier};
pub use core::{Bmi, Canvas, Measurement};
pub use error::{BmivizError, BmivizResult};
pub use frames::{ChartFrame, FRAME_COUNT, FrameIter, FrameSeq};
pub use model::{Band, BandTable, Category, ColorLabel};
pub use pipeline::{AnimateOpts, FRAME_DELAY, animate, compute_and_animate};
pub use render::{
    CaptureSurface, ChartLayout, FrameRgba, NullSurface, RenderSettings, RenderSurface,
    SurfaceKind, create_surface,
};
pub use render_cpu::rasterize;
pub use render_term::TermSurface;
