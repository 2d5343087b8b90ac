use crate::shape::{CellTag, DELETED_CELL};

/// Removes every record tagged [`DELETED_CELL`] from a pair of parallel tag and payload
/// arrays.
///
/// Each record owns `stride` consecutive payload elements. The surviving records keep
/// their relative order, and every other tag (including the cell `0` and
/// [`MERGED_CELL`](crate::shape::MERGED_CELL)) survives.
///
/// # Panics
///
/// Panics if `stride` is zero, or if `payload.len() != tags.len() * stride`.
pub fn compact<T: Copy>(tags: &[CellTag], payload: &[T], stride: usize) -> (Vec<CellTag>, Vec<T>) {
    assert!(stride > 0, "The record stride must not be zero.");
    assert_eq!(
        payload.len(),
        tags.len() * stride,
        "The payload length must be the number of tags times the record stride."
    );

    let kept = tags.iter().filter(|tag| **tag != DELETED_CELL).count();
    let mut out_tags = Vec::with_capacity(kept);
    let mut out_payload = Vec::with_capacity(kept * stride);

    for (tag, record) in tags.iter().zip(payload.chunks_exact(stride)) {
        if *tag != DELETED_CELL {
            out_tags.push(*tag);
            out_payload.extend_from_slice(record);
        }
    }

    (out_tags, out_payload)
}
