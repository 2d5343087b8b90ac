use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{cell_index, CellTag, MERGED_CELL};

use super::TriangleBuffer;

/// One fragment produced by a fracture: the geometry of a single cell.
///
/// The vertices are stored as a non-indexed triangle soup, expressed relative to the
/// center of the cell bounding box.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct FractureCell {
    /// The cell this fragment comes from, or [`MERGED_CELL`] for the fragment gathering the
    /// geometry of every cell merged by proximity.
    pub cell: CellTag,
    /// The bounding box of the fragment, in the frame of the fracture.
    pub aabb: Aabb,
    /// The center of `aabb`. Adding it to `points` gives back the fracture-frame vertices.
    pub centroid: Point<Real>,
    /// The extents `aabb.maxs - aabb.mins`.
    pub size: Vector<Real>,
    /// Three vertices per triangle, relative to `centroid`.
    pub points: Vec<Point<Real>>,
}

impl FractureCell {
    /// The number of triangles of this fragment.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.points.len() / 3
    }

    /// The sequential index buffer of this fragment: `[3i, 3i + 1, 3i + 2]` for the `i`-th
    /// triangle.
    pub fn indices(&self) -> Vec<[u32; 3]> {
        (0..self.num_triangles() as u32)
            .map(|i| [3 * i, 3 * i + 1, 3 * i + 2])
            .collect()
    }

    /// Iterates through the triangles of this fragment, relative to `centroid`.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [Point<Real>; 3]> + '_ {
        self.points
            .chunks_exact(3)
            .map(|pts| [pts[0], pts[1], pts[2]])
    }

    /// The vertices of this fragment in the frame of the fracture.
    pub fn world_points(&self) -> Vec<Point<Real>> {
        self.points
            .iter()
            .map(|pt| pt + self.centroid.coords)
            .collect()
    }
}

/// Gathers the triangles of each cell into [`FractureCell`]s.
///
/// Triangles are bucketed by tag, [`MERGED_CELL`] first then cells in increasing order.
/// Cells without any triangle produce no fragment.
///
/// # Panics
///
/// Panics if a triangle has a tag lower than [`MERGED_CELL`] (including
/// [`DELETED_CELL`](crate::shape::DELETED_CELL) records left uncompacted), or a tag not
/// lower than `cell_count`.
pub fn finalize(triangles: &TriangleBuffer, cell_count: usize) -> Vec<FractureCell> {
    let mut buckets = vec![Vec::new(); cell_count + 1];

    for (i, tag) in triangles.cells().iter().enumerate() {
        let bucket = match *tag {
            MERGED_CELL => Some(0),
            _ => cell_index(*tag).filter(|c| *c < cell_count).map(|c| c + 1),
        };

        match bucket {
            Some(b) => buckets[b].push(i),
            None => panic!(
                "The triangle {} has the tag {}, which cannot be finalized with {} cells.",
                i, tag, cell_count
            ),
        }
    }

    buckets
        .iter()
        .enumerate()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(b, bucket)| {
            let cell = if b == 0 {
                MERGED_CELL
            } else {
                (b - 1) as CellTag
            };
            let mut points = Vec::with_capacity(bucket.len() * 3);

            for i in bucket {
                points.extend(triangles.record(*i).points());
            }

            let aabb = Aabb::from_points(points.iter().copied());
            let centroid = aabb.center();

            for pt in &mut points {
                *pt -= centroid.coords;
            }

            FractureCell {
                cell,
                aabb,
                centroid,
                size: aabb.extents(),
                points,
            }
        })
        .collect()
}
