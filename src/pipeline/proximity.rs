use crate::shape::{cell_index, CellTag, MERGED_CELL};

/// Re-tags to [`MERGED_CELL`] every record of a cell that is not flagged in `proximate`.
///
/// The reserved tags ([`DELETED_CELL`](crate::shape::DELETED_CELL) and
/// [`MERGED_CELL`]) are left untouched, so merged geometry is never tested again.
/// Returns the number of re-tagged records.
///
/// # Panics
///
/// Panics if a cell index is out of the bounds of `proximate`.
pub fn merge_distant_cells(cells: &mut [CellTag], proximate: &[bool]) -> usize {
    let mut merged = 0;

    for tag in cells.iter_mut() {
        if let Some(cell) = cell_index(*tag) {
            if !proximate[cell] {
                *tag = MERGED_CELL;
                merged += 1;
            }
        }
    }

    merged
}
