use crate::math::Real;

use super::TriangleBuffer;

/// Diagnostics of one clip pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// The index of the pass.
    pub pass: usize,
    /// The number of triangles clipped during this pass.
    pub input_triangles: usize,
    /// The number of triangles kept by the clip kernel, after compaction.
    pub output_triangles: usize,
    /// The number of cut edges, after compaction.
    pub cut_edges: usize,
    /// The number of triangles created to close the cut faces.
    pub stitched_triangles: usize,
    /// The number of triangles of the resulting working set that are degenerate: they have
    /// a non-finite component, or an area not greater than the configured epsilon.
    pub degenerate_triangles: usize,
}

/// Diagnostics of a whole fracture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FractureStats {
    /// The number of input triangles, before replication.
    pub input_triangles: usize,
    /// The number of cells of the pattern.
    pub cell_count: usize,
    /// The statistics of each clip pass, in order.
    pub passes: Vec<PassStats>,
    /// The number of triangles re-tagged by the proximity merge.
    pub merged_triangles: usize,
    /// The number of fragments returned.
    pub output_cells: usize,
}

impl FractureStats {
    /// The total number of triangles of the returned fragments.
    pub fn output_triangles(&self) -> usize {
        self.passes.last().map_or(self.input_triangles * self.cell_count, |p| {
            p.output_triangles + p.stitched_triangles
        })
    }
}

/// Counts the degenerate triangles of `triangles`.
///
/// Non-finite triangles are reported with `log::warn!`, tiny triangles with
/// `log::debug!`. They are never removed.
pub(crate) fn count_degenerate(triangles: &TriangleBuffer, area_epsilon: Real) -> usize {
    let mut count = 0;

    for (i, (cell, tri)) in triangles.iter().enumerate() {
        if !tri.is_finite() {
            log::warn!("Non-finite triangle {} in the cell {}: {:?}", i, cell, tri);
            count += 1;
        } else if tri.area() <= area_epsilon {
            log::debug!("Degenerate triangle {} in the cell {}: {:?}", i, cell, tri);
            count += 1;
        }
    }

    count
}
