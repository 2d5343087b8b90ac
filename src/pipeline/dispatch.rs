//! Execution of a clip pass over a whole working set.

use crate::math::Real;
use crate::shape::{CellTag, EDGE_STRIDE, TRIANGLE_STRIDE};

use super::{ClipKernel, EdgeBuffer, ExecutionMode, TriangleBuffer};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The raw output of a clip pass, before compaction.
///
/// `triangles` has two slots per input triangle and `edges` has one slot per input
/// triangle. Slot `2 * i` and `2 * i + 1` of `triangles`, and slot `i` of `edges`, are
/// written by the invocation for the input triangle `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct PassOutput {
    /// The clipped triangle slots.
    pub triangles: TriangleBuffer,
    /// The cut edge slots.
    pub edges: EdgeBuffer,
}

/// Runs `kernel` on every triangle of `input`.
///
/// Each invocation writes to its own disjoint slots of the output buffers so the
/// invocations can run in any order. The result does not depend on `mode`.
pub fn clip_pass(mode: ExecutionMode, kernel: &ClipKernel, input: &TriangleBuffer) -> PassOutput {
    let len = input.len();
    let mut triangles = TriangleBuffer::deleted(2 * len);
    let mut edges = EdgeBuffer::deleted(len);

    {
        let (tri_cells, tri_payload) = triangles.parts_mut();
        let (edge_cells, edge_payload) = edges.parts_mut();

        let invoke = |i: usize,
                      tri_cells: &mut [CellTag],
                      tri_payload: &mut [Real],
                      edge_cell: &mut CellTag,
                      edge_payload: &mut [Real]| {
            kernel.clip(input.cells()[i], &input.record(i)).write_to(
                tri_cells,
                tri_payload,
                edge_cell,
                edge_payload,
            )
        };

        match mode {
            ExecutionMode::Serial => tri_cells
                .chunks_mut(2)
                .zip(tri_payload.chunks_mut(2 * TRIANGLE_STRIDE))
                .zip(edge_cells.iter_mut())
                .zip(edge_payload.chunks_mut(EDGE_STRIDE))
                .enumerate()
                .for_each(|(i, (((tc, tp), ec), ep))| invoke(i, tc, tp, ec, ep)),
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => tri_cells
                .par_chunks_mut(2)
                .zip(tri_payload.par_chunks_mut(2 * TRIANGLE_STRIDE))
                .zip(edge_cells.par_iter_mut())
                .zip(edge_payload.par_chunks_mut(EDGE_STRIDE))
                .enumerate()
                .for_each(|(i, (((tc, tp), ec), ep))| invoke(i, tc, tp, ec, ep)),
        }
    }

    PassOutput { triangles, edges }
}
