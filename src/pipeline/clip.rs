//! The per-triangle clip kernel.

use crate::math::{HPoint, Real, Vector};
use crate::shape::{cell_index, CellTag, CutEdge, Plane, Triangle, DELETED_CELL, TRIANGLE_STRIDE};

/// Everything one clip invocation writes for one input triangle: two tagged triangle
/// slots and one tagged cut edge slot.
///
/// Unused slots are tagged [`DELETED_CELL`] and carry a zero payload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipOutput {
    /// The two triangle slots.
    pub triangles: [(CellTag, Triangle); 2],
    /// The cut edge slot.
    pub edge: (CellTag, CutEdge),
}

impl ClipOutput {
    fn discarded() -> Self {
        Self {
            triangles: [(DELETED_CELL, Triangle::zeros()); 2],
            edge: (DELETED_CELL, CutEdge::zeros()),
        }
    }

    fn pass_through(cell: CellTag, tri: &Triangle) -> Self {
        let mut out = Self::discarded();
        out.triangles[0] = (cell, *tri);
        out
    }

    /// The non-deleted triangles of this output.
    pub fn kept_triangles(&self) -> impl Iterator<Item = &(CellTag, Triangle)> {
        self.triangles
            .iter()
            .filter(|(cell, _)| *cell != DELETED_CELL)
    }

    /// The cut edge of this output, if the triangle was actually cut.
    pub fn cut_edge(&self) -> Option<&CutEdge> {
        (self.edge.0 != DELETED_CELL).then_some(&self.edge.1)
    }

    /// Writes this output into its slots of the pass buffers.
    ///
    /// `tri_cells` and `tri_payload` are the two triangle slots, `edge_payload` is the
    /// edge slot.
    pub fn write_to(
        &self,
        tri_cells: &mut [CellTag],
        tri_payload: &mut [Real],
        edge_cell: &mut CellTag,
        edge_payload: &mut [Real],
    ) {
        for (k, (cell, tri)) in self.triangles.iter().enumerate() {
            tri_cells[k] = *cell;
            tri.write_to(&mut tri_payload[k * TRIANGLE_STRIDE..(k + 1) * TRIANGLE_STRIDE]);
        }

        *edge_cell = self.edge.0;
        self.edge.1.write_to(edge_payload);
    }
}

/// A reordering of the vertices of a triangle putting the culled ones first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Relabel {
    /// `order[k]` is the index of the original vertex moved to the position `k`.
    pub order: [usize; 3],
    /// Is `order` an odd permutation? If so the relabeled triangle has the opposite
    /// orientation.
    pub flipped: bool,
    /// The number of culled vertices.
    pub culled: usize,
}

impl Relabel {
    /// Stable partition of the vertex indices, culled vertices first.
    pub fn culled_first(culled: [bool; 3]) -> Self {
        let mut order = [0; 3];
        let mut len = 0;

        for pass in [true, false] {
            for (i, c) in culled.iter().enumerate() {
                if *c == pass {
                    order[len] = i;
                    len += 1;
                }
            }
        }

        let inversions = (order[0] > order[1]) as usize
            + (order[0] > order[2]) as usize
            + (order[1] > order[2]) as usize;

        Self {
            order,
            flipped: inversions % 2 == 1,
            culled: culled.iter().filter(|c| **c).count(),
        }
    }
}

// The point where the segment from a culled vertex to a kept vertex crosses the plane.
#[inline]
fn intersect(culled: &HPoint<Real>, kept: &HPoint<Real>, dc: Real, dk: Real) -> HPoint<Real> {
    culled + (kept - culled) * (dc / (dc - dk))
}

/// Clips a triangle tagged `cell` by `plane`.
///
/// The part of the triangle on the kept side of `plane` is returned as zero, one or two
/// triangles with the orientation of the input. If the plane actually cuts the triangle,
/// the cut is returned as a [`CutEdge`] running opposite to the boundary of the kept part,
/// so triangles fanned from it close the cell with a consistent orientation.
pub fn clip_triangle(cell: CellTag, tri: &Triangle, plane: &Plane) -> ClipOutput {
    if plane.is_sentinel() {
        return ClipOutput::pass_through(cell, tri);
    }

    let pts = tri.vertices();
    let depths = pts.map(|pt| plane.depth_h(&pt));
    let relabel = Relabel::culled_first(pts.map(|pt| plane.culls(&pt)));
    let [v0, v1, v2] = relabel.order.map(|i| pts[i]);
    let [d0, d1, d2] = relabel.order.map(|i| depths[i]);

    let mut out = ClipOutput::discarded();

    match relabel.culled {
        0 => return ClipOutput::pass_through(cell, tri),
        1 => {
            let p1 = intersect(&v0, &v1, d0, d1);
            let p2 = intersect(&v0, &v2, d0, d2);

            if relabel.flipped {
                out.triangles = [
                    (cell, Triangle::new(p1, v2, v1)),
                    (cell, Triangle::new(p1, p2, v2)),
                ];
                out.edge = (cell, CutEdge::new(p2, p1));
            } else {
                out.triangles = [
                    (cell, Triangle::new(p1, v1, v2)),
                    (cell, Triangle::new(p1, v2, p2)),
                ];
                out.edge = (cell, CutEdge::new(p1, p2));
            }
        }
        2 => {
            let q0 = intersect(&v0, &v2, d0, d2);
            let q1 = intersect(&v1, &v2, d1, d2);

            if relabel.flipped {
                out.triangles[0] = (cell, Triangle::new(q1, q0, v2));
                out.edge = (cell, CutEdge::new(q0, q1));
            } else {
                out.triangles[0] = (cell, Triangle::new(q1, v2, q0));
                out.edge = (cell, CutEdge::new(q1, q0));
            }
        }
        _ => {}
    }

    out
}

/// The clip kernel of one pass: the plane of every cell for this pass, localized around
/// the fracture center.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipKernel {
    planes: Vec<Plane>,
}

impl ClipKernel {
    /// Builds the kernel of a pass from the plane of each cell for this pass.
    ///
    /// Each plane is moved so that testing a point `p` is the same as testing
    /// `p + fracture_center` against the original plane.
    pub fn new(pass_planes: &[Plane], fracture_center: &Vector<Real>) -> Self {
        let planes = pass_planes
            .iter()
            .map(|plane| {
                if plane.is_sentinel() {
                    *plane
                } else {
                    plane.localized(fracture_center)
                }
            })
            .collect();

        Self { planes }
    }

    /// The number of cells this kernel has a plane for.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.planes.len()
    }

    /// The localized plane of the cell `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not the index of a cell.
    pub fn plane(&self, cell: CellTag) -> &Plane {
        match cell_index(cell).and_then(|i| self.planes.get(i)) {
            Some(plane) => plane,
            None => panic!(
                "The cell tag {} is not valid for a pattern with {} cells.",
                cell,
                self.planes.len()
            ),
        }
    }

    /// Clips a triangle by the plane of its cell.
    #[inline]
    pub fn clip(&self, cell: CellTag, tri: &Triangle) -> ClipOutput {
        clip_triangle(cell, tri, self.plane(cell))
    }
}
