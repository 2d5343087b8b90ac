use crate::math::{HPoint, Real};
use crate::shape::{cell_index, CellTag, Triangle};

use super::{EdgeBuffer, TriangleBuffer};

/// Closes the cut faces of every cell with a fan of triangles.
///
/// The cut edges are grouped by cell. For each cell with at least one edge, the centroid
/// of its edges endpoints is computed and one triangle `(centroid, a, b)` is created per
/// edge `(a, b)`. Cells are processed in increasing order, and edges in their input order
/// inside of a cell.
///
/// This only produces a valid triangulation of the cut face if the face is convex, which
/// is always the case when clipping convex cells.
///
/// # Panics
///
/// Panics if an edge is tagged with something else than a cell index in
/// `0..cell_count`.
pub fn stitch_faces(edges: &EdgeBuffer, cell_count: usize) -> TriangleBuffer {
    let mut buckets = vec![Vec::new(); cell_count];

    for (i, cell) in edges.cells().iter().enumerate() {
        match cell_index(*cell).filter(|c| *c < cell_count) {
            Some(c) => buckets[c].push(i),
            None => panic!(
                "The cut edge {} has the tag {}, which is not a cell index.",
                i, cell
            ),
        }
    }

    let mut result = TriangleBuffer::with_capacity(edges.len());

    for (cell, bucket) in buckets.iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }

        let mut centroid = HPoint::zeros();
        for i in bucket {
            let edge = edges.record(*i);
            centroid += edge.a + edge.b;
        }
        centroid *= 0.5 / bucket.len() as Real;

        for i in bucket {
            let edge = edges.record(*i);
            result.push(cell as CellTag, &Triangle::new(centroid, edge.a, edge.b));
        }
    }

    result
}
