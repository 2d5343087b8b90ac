//! The fracture pattern asset: convex cells described by their bounding planes.

use crate::math::Real;
use crate::pipeline::FractureError;
use crate::shape::Plane;

/// A set of convex cells, each bounded by an ordered list of planes.
///
/// The `k`-th plane of every cell is applied during the `k`-th clip pass. Cells may have
/// fewer planes than the longest list: the missing entries behave as
/// [`Plane::sentinel`].
///
/// The optional proximity table flags, per cell, whether the cell is close enough to the
/// impact point to stay an individual fragment. It is only read when proximity merging
/// is enabled in the [`FractureConfig`](crate::pipeline::FractureConfig).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FracturePattern {
    cells: Vec<Vec<Plane>>,
    proximity: Option<Vec<bool>>,
}

impl FracturePattern {
    /// Creates a pattern from the plane list of each cell.
    ///
    /// Fails if there is no cell, or if a plane has a non-finite component.
    pub fn new(cells: Vec<Vec<Plane>>) -> Result<Self, FractureError> {
        if cells.is_empty() {
            return Err(FractureError::EmptyPattern);
        }

        for (cell, planes) in cells.iter().enumerate() {
            if let Some(pass) = planes.iter().position(|plane| !plane.is_finite()) {
                return Err(FractureError::NonFinitePlane { cell, pass });
            }
        }

        Ok(Self {
            cells,
            proximity: None,
        })
    }

    /// Creates a pattern from its pass-major packed layout.
    ///
    /// `passes[k][c]` is the `[nx, ny, nz, d]` plane of the cell `c` for the pass `k`. Every
    /// pass must list exactly `cell_count` planes; cells without a plane for that pass use
    /// a zero normal.
    pub fn from_pass_major(
        cell_count: usize,
        passes: &[Vec<[Real; 4]>],
    ) -> Result<Self, FractureError> {
        let mut cells = vec![Vec::with_capacity(passes.len()); cell_count];

        for (pass, planes) in passes.iter().enumerate() {
            if planes.len() != cell_count {
                return Err(FractureError::PassWidthMismatch {
                    pass,
                    expected: cell_count,
                    found: planes.len(),
                });
            }

            for (cell, data) in planes.iter().enumerate() {
                cells[cell].push(Plane::from_array(*data));
            }
        }

        Self::new(cells)
    }

    /// Attaches the per-cell proximity flags used by proximity merging.
    pub fn with_proximity(mut self, proximity: Vec<bool>) -> Result<Self, FractureError> {
        if proximity.len() != self.cells.len() {
            return Err(FractureError::ProximityTableMismatch {
                expected: self.cells.len(),
                found: proximity.len(),
            });
        }

        self.proximity = Some(proximity);
        Ok(self)
    }

    /// The number of cells of this pattern.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The number of clip passes needed: the length of the longest plane list.
    pub fn depth(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// The planes bounding the cell `cell`.
    #[inline]
    pub fn cell_planes(&self, cell: usize) -> &[Plane] {
        &self.cells[cell]
    }

    /// The plane of `cell` for the pass `pass`, or the sentinel past the end of its list.
    #[inline]
    pub fn plane(&self, cell: usize, pass: usize) -> Plane {
        self.cells[cell]
            .get(pass)
            .copied()
            .unwrap_or_else(Plane::sentinel)
    }

    /// The plane of every cell for the pass `pass`, indexed by cell.
    pub fn pass_planes(&self, pass: usize) -> Vec<Plane> {
        (0..self.cell_count())
            .map(|cell| self.plane(cell, pass))
            .collect()
    }

    /// The per-cell proximity flags, if any.
    #[inline]
    pub fn proximity(&self) -> Option<&[bool]> {
        self.proximity.as_deref()
    }
}
