/// The fracture cell a triangle or a cut edge currently belongs to.
///
/// Non-negative values are cell indices in `0..cell_count`. Negative values are reserved:
/// see [`DELETED_CELL`] and [`MERGED_CELL`].
pub type CellTag = i32;

/// Marks an unused or discarded record. It never survives compaction.
pub const DELETED_CELL: CellTag = -1;

/// Marks geometry merged away from its cell by the proximity pass.
///
/// Unlike [`DELETED_CELL`] this geometry is kept, and gathered into a single fragment.
/// It is never tested for proximity again.
pub const MERGED_CELL: CellTag = -2;

/// The cell index designated by `tag`, or `None` for the reserved tags.
#[inline]
pub fn cell_index(tag: CellTag) -> Option<usize> {
    usize::try_from(tag).ok()
}
