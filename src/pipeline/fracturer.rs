use crate::math::{HMatrix, Point, Real, Vector};
use crate::pattern::FracturePattern;
use crate::shape::{CellTag, Plane, Triangle};

use super::{
    clip_pass, finalize, merge_distant_cells, stitch_faces, stats::count_degenerate,
    ClipKernel, FractureCell, FractureConfig, FractureError, FractureStats, PassStats,
    TriangleBuffer,
};

/// Splits triangle soups into the cells of a fracture pattern.
///
/// A `Fracturer` is built once per pattern and can then fracture any number of meshes,
/// possibly from several threads at once: it keeps no state between two calls.
///
/// # Example
///
/// ```
/// use fracture3d::math::{Matrix4, Point, Vector};
/// use fracture3d::pattern::FracturePattern;
/// use fracture3d::pipeline::{FractureConfig, Fracturer};
/// use fracture3d::shape::Plane;
///
/// // The single cell x <= 0.5, y <= 0.5.
/// let pattern = FracturePattern::new(vec![vec![
///     Plane::new(Vector::x(), -0.5),
///     Plane::new(Vector::y(), -0.5),
/// ]])
/// .unwrap();
/// let fracturer = Fracturer::new(pattern, FractureConfig::default()).unwrap();
///
/// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let (cells, stats) = fracturer
///     .fracture_with_stats(&positions, &Matrix4::identity(), &Point::origin())
///     .unwrap();
///
/// assert_eq!(cells.len(), 1);
/// assert_eq!(stats.passes.len(), 2);
/// assert!(cells[0].aabb.maxs.x <= 0.5 && cells[0].aabb.maxs.y <= 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct Fracturer {
    pattern: FracturePattern,
    // The plane of every cell, per pass.
    passes: Vec<Vec<Plane>>,
    config: FractureConfig,
}

static_assertions::assert_impl_all!(Fracturer: Send, Sync);

impl Fracturer {
    /// Prepares the fracture of meshes with `pattern`.
    ///
    /// Fails with [`FractureError::MissingProximityTable`] if proximity merging is enabled
    /// but `pattern` has no proximity table.
    pub fn new(pattern: FracturePattern, config: FractureConfig) -> Result<Self, FractureError> {
        if config.proximity_merge && pattern.proximity().is_none() {
            return Err(FractureError::MissingProximityTable);
        }

        let passes = (0..pattern.depth())
            .map(|pass| pattern.pass_planes(pass))
            .collect();

        Ok(Self {
            pattern,
            passes,
            config,
        })
    }

    /// The fracture pattern.
    #[inline]
    pub fn pattern(&self) -> &FracturePattern {
        &self.pattern
    }

    /// The fracture configuration.
    #[inline]
    pub fn config(&self) -> &FractureConfig {
        &self.config
    }

    /// The number of clip passes run by each fracture.
    #[inline]
    pub fn depth(&self) -> usize {
        self.passes.len()
    }

    /// Fractures a mesh.
    ///
    /// `positions` is a non-indexed triangle soup with three components per vertex.
    /// Every vertex is multiplied by `transform` (as a direction: translations are
    /// ignored). The pattern is then placed with its origin at `impact_point`, in the
    /// frame of the transformed mesh.
    ///
    /// Returns one [`FractureCell`] per cell containing some geometry.
    pub fn fracture(
        &self,
        positions: &[Real],
        transform: &HMatrix<Real>,
        impact_point: &Point<Real>,
    ) -> Result<Vec<FractureCell>, FractureError> {
        self.fracture_with_stats(positions, transform, impact_point)
            .map(|(cells, _)| cells)
    }

    /// Fractures a mesh, also returning diagnostics about each step.
    ///
    /// See [`Fracturer::fracture`].
    pub fn fracture_with_stats(
        &self,
        positions: &[Real],
        transform: &HMatrix<Real>,
        impact_point: &Point<Real>,
    ) -> Result<(Vec<FractureCell>, FractureStats), FractureError> {
        let mut working = self.replicate(positions, transform)?;
        let fracture_center = -impact_point.coords;
        let cell_count = self.pattern.cell_count();
        let mut stats = FractureStats {
            input_triangles: positions.len() / 9,
            cell_count,
            ..FractureStats::default()
        };

        for pass in 0..self.depth() {
            let (next, pass_stats) = self.run_pass(pass, &working, &fracture_center);
            working = next;
            stats.passes.push(pass_stats);
        }

        if self.config.proximity_merge {
            let proximate = self
                .pattern
                .proximity()
                .ok_or(FractureError::MissingProximityTable)?;
            stats.merged_triangles = merge_distant_cells(working.cells_mut(), proximate);
            log::debug!(
                "Proximity merge: {} triangles merged.",
                stats.merged_triangles
            );
        }

        let cells = finalize(&working, cell_count);
        stats.output_cells = cells.len();
        Ok((cells, stats))
    }

    /// Transforms the input triangles and replicates them once per cell.
    ///
    /// The copy of the triangle `t` for the cell `c` is at the index `c * n + t` where `n`
    /// is the number of input triangles, and is tagged with `c`.
    pub fn replicate(
        &self,
        positions: &[Real],
        transform: &HMatrix<Real>,
    ) -> Result<TriangleBuffer, FractureError> {
        if positions.len() % 9 != 0 {
            return Err(FractureError::MalformedVertexStream {
                len: positions.len(),
            });
        }

        let transformed: Vec<Triangle> = positions
            .chunks_exact(9)
            .map(|p| {
                Triangle::from_points(
                    &Point::new(p[0], p[1], p[2]),
                    &Point::new(p[3], p[4], p[5]),
                    &Point::new(p[6], p[7], p[8]),
                )
                .transformed(transform)
            })
            .collect();

        let cell_count = self.pattern.cell_count();
        let mut result = TriangleBuffer::with_capacity(transformed.len() * cell_count);

        for cell in 0..cell_count {
            for tri in &transformed {
                result.push(cell as CellTag, tri);
            }
        }

        Ok(result)
    }

    /// Runs the clip pass `pass` on the working set `working`, and closes the cuts.
    ///
    /// Returns the next working set: the compacted clipped triangles followed by the
    /// stitched triangles.
    pub fn run_pass(
        &self,
        pass: usize,
        working: &TriangleBuffer,
        fracture_center: &Vector<Real>,
    ) -> (TriangleBuffer, PassStats) {
        let cell_count = self.pattern.cell_count();
        let kernel = ClipKernel::new(&self.passes[pass], fracture_center);
        let output = clip_pass(self.config.execution, &kernel, working);

        let mut next = output.triangles.compacted();
        let edges = output.edges.compacted();
        let mut stitched = stitch_faces(&edges, cell_count);

        let mut stats = PassStats {
            pass,
            input_triangles: working.len(),
            output_triangles: next.len(),
            cut_edges: edges.len(),
            stitched_triangles: stitched.len(),
            degenerate_triangles: 0,
        };

        next.append(&mut stitched);
        stats.degenerate_triangles = count_degenerate(&next, self.config.degenerate_area_epsilon);

        log::debug!(
            "Clip pass {}: {} -> {} triangles, {} cut edges, {} degenerate.",
            pass,
            stats.input_triangles,
            next.len(),
            stats.cut_edges,
            stats.degenerate_triangles
        );

        (next, stats)
    }
}
