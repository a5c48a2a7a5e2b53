//! # bmiviz guide
//!
//! End-to-end walkthrough of the crate's architecture. If you are looking for
//! copy/paste commands, start with the CLI's `--help`; if you are implementing
//! new features, start here.
//!
//! ## Core concepts
//!
//! - [`Measurement`](crate::Measurement): one weight/height reading; the only
//!   validated input (height must be > 0)
//! - [`Bmi`](crate::Bmi): the derived value, `weight(kg) / height(m)²`
//! - [`BandTable`](crate::BandTable): four contiguous category bands over the
//!   0..70 scale; constant data, never mutated
//! - [`Classifier`](crate::Classifier): resolves a BMI to its band, or rejects
//!   values beyond the chart ceiling
//! - [`FrameSeq`](crate::FrameSeq): a lazy, restartable sweep of 50 evenly
//!   spaced frame descriptions from the band's lower bound to the value
//! - [`RenderSurface`](crate::RenderSurface): executes frame descriptions;
//!   owns all mutable drawing state
//!
//! The flow is explicitly staged:
//!
//! 1. Validate and compute: [`Measurement::bmi`](crate::Measurement::bmi)
//! 2. Classify: [`Classifier::classify`](crate::Classifier::classify)
//! 3. Present: [`animate`](crate::animate), or both stages together via
//!    [`compute_and_animate`](crate::compute_and_animate)
//!
//! ## Computation is presentation-free (and why)
//!
//! The classification and the frame sequence are plain values: computing them
//! performs no IO and touches no drawing state. Surfaces consume immutable
//! [`ChartFrame`](crate::ChartFrame) descriptions, which keeps the core
//! deterministic and testable — the same inputs always yield the same
//! classification and the same 50 frames, and a test can swap in
//! [`CaptureSurface`](crate::CaptureSurface) to observe the whole sweep.
//!
//! ```rust
//! use bmiviz::{AnimateOpts, BandTable, CaptureSurface, Category, FRAME_COUNT,
//!     compute_and_animate};
//!
//! # fn main() -> bmiviz::BmivizResult<()> {
//! let table = BandTable::standard();
//! let mut surface = CaptureSurface::default();
//! let opts = AnimateOpts { frame_delay: std::time::Duration::ZERO };
//!
//! let result = compute_and_animate(&table, 70.0, 175.0, &mut surface, &opts)?;
//! assert_eq!(result.category, Category::Normal);
//! assert_eq!(surface.frames.len(), FRAME_COUNT);
//! assert_eq!(surface.frames[0].value, result.lower);
//! # Ok(())
//! # }
//! ```
//!
//! ## Surfaces
//!
//! - [`TermSurface`](crate::TermSurface): ANSI terminal chart (band strip,
//!   partial bar + marker, axis, legend) redrawn in place each frame
//! - [`rasterize`](crate::rasterize): CPU pixels for the same chart; the CLI
//!   encodes the result as PNG
//! - [`NullSurface`](crate::NullSurface) / [`CaptureSurface`](crate::CaptureSurface):
//!   discard or record frames
//!
//! ## Failure semantics
//!
//! Both rejections happen before any frame is presented and end the run:
//! a non-positive height is `InvalidInput`, a BMI beyond the top band's upper
//! bound is `ImplausibleValue`. The ceiling and the top band's upper bound are
//! the same value on purpose. A new run starts over cleanly.
