//! The fracture pipeline: replication, clip passes, face stitching and finalization.
//!
//! A fracture runs the following steps, each exposed on its own:
//!
//! 1. [`Fracturer::replicate`] transforms the input triangles and copies them once per cell.
//! 2. For each pass, [`clip_pass`] runs the [`ClipKernel`] of the pass on every triangle,
//!    the outputs are [compacted](compact()) and [`stitch_faces`] closes the cuts.
//! 3. Optionally, [`merge_distant_cells`] gathers the cells far from the impact point.
//! 4. [`finalize`] groups the triangles by cell into centered [`FractureCell`]s.

pub use self::buffers::{EdgeBuffer, Record, TaggedBuffer, TriangleBuffer};
pub use self::cell::{finalize, FractureCell};
pub use self::clip::{clip_triangle, ClipKernel, ClipOutput, Relabel};
pub use self::compact::compact;
pub use self::config::{ExecutionMode, FractureConfig};
pub use self::dispatch::{clip_pass, PassOutput};
pub use self::error::FractureError;
pub use self::fracturer::Fracturer;
pub use self::proximity::merge_distant_cells;
pub use self::stats::{FractureStats, PassStats};
pub use self::stitch::stitch_faces;

mod buffers;
mod cell;
mod clip;
mod compact;
mod config;
mod dispatch;
mod error;
mod fracturer;
mod proximity;
mod stats;
mod stitch;
