//! Flat, cell-tagged record buffers exchanged between the stages of a fracture.
//!
//! Each buffer is a pair of parallel arrays: one [`CellTag`] per record, and a packed
//! payload of `Real`s with a fixed number of components per record. This is the layout
//! consumed and produced by the clip kernel.

use crate::math::Real;
use crate::shape::{CellTag, CutEdge, Triangle, DELETED_CELL, EDGE_STRIDE, TRIANGLE_STRIDE};
use core::marker::PhantomData;

use super::compact;

/// A record that can be packed into a fixed number of `Real`s.
pub trait Record: Copy {
    /// The number of `Real`s of one packed record.
    const STRIDE: usize;

    /// Reads a record from exactly `STRIDE` packed values.
    fn read(data: &[Real]) -> Self;
    /// Writes this record into exactly `STRIDE` packed values.
    fn write(&self, out: &mut [Real]);
}

impl Record for Triangle {
    const STRIDE: usize = TRIANGLE_STRIDE;

    fn read(data: &[Real]) -> Self {
        Triangle::from_slice(data)
    }

    fn write(&self, out: &mut [Real]) {
        self.write_to(out)
    }
}

impl Record for CutEdge {
    const STRIDE: usize = EDGE_STRIDE;

    fn read(data: &[Real]) -> Self {
        CutEdge::from_slice(data)
    }

    fn write(&self, out: &mut [Real]) {
        self.write_to(out)
    }
}

/// Cell-tagged records stored as a tag array and a packed payload.
///
/// The payload length is always `R::STRIDE` times the number of tags.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedBuffer<R> {
    cells: Vec<CellTag>,
    payload: Vec<Real>,
    _record: PhantomData<R>,
}

/// Cell-tagged triangles.
pub type TriangleBuffer = TaggedBuffer<Triangle>;
/// Cell-tagged cut edges.
pub type EdgeBuffer = TaggedBuffer<CutEdge>;

impl<R: Record> Default for TaggedBuffer<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> TaggedBuffer<R> {
    /// An empty buffer.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            payload: Vec::new(),
            _record: PhantomData,
        }
    }

    /// An empty buffer with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            payload: Vec::with_capacity(capacity * R::STRIDE),
            _record: PhantomData,
        }
    }

    /// A buffer of `len` zeroed records, all tagged [`DELETED_CELL`].
    ///
    /// This is the initial state of the output slots of a clip pass.
    pub fn deleted(len: usize) -> Self {
        Self {
            cells: vec![DELETED_CELL; len],
            payload: vec![0.0; len * R::STRIDE],
            _record: PhantomData,
        }
    }

    /// Builds a buffer from its two parallel arrays.
    ///
    /// # Panics
    ///
    /// Panics if `payload.len() != cells.len() * R::STRIDE`.
    pub fn from_parts(cells: Vec<CellTag>, payload: Vec<Real>) -> Self {
        assert_eq!(
            payload.len(),
            cells.len() * R::STRIDE,
            "The payload length must be the number of tags times the record stride."
        );
        Self {
            cells,
            payload,
            _record: PhantomData,
        }
    }

    /// The number of records, deleted ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Does this buffer have no record at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell tag of each record.
    #[inline]
    pub fn cells(&self) -> &[CellTag] {
        &self.cells
    }

    /// The mutable cell tag of each record.
    ///
    /// Tags can be rewritten freely without breaking the buffer layout.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [CellTag] {
        &mut self.cells
    }

    /// The packed payload.
    #[inline]
    pub fn payload(&self) -> &[Real] {
        &self.payload
    }

    /// Mutable access to both arrays, for kernels writing records in place.
    #[inline]
    pub fn parts_mut(&mut self) -> (&mut [CellTag], &mut [Real]) {
        (&mut self.cells, &mut self.payload)
    }

    /// Consumes this buffer, returning its tag array and its payload.
    pub fn into_parts(self) -> (Vec<CellTag>, Vec<Real>) {
        (self.cells, self.payload)
    }

    /// The `i`-th record.
    #[inline]
    pub fn record(&self, i: usize) -> R {
        R::read(&self.payload[i * R::STRIDE..(i + 1) * R::STRIDE])
    }

    /// Appends a record.
    pub fn push(&mut self, cell: CellTag, record: &R) {
        let start = self.payload.len();
        self.cells.push(cell);
        self.payload.resize(start + R::STRIDE, 0.0);
        record.write(&mut self.payload[start..]);
    }

    /// Moves all the records of `other` to the end of `self`.
    pub fn append(&mut self, other: &mut Self) {
        self.cells.append(&mut other.cells);
        self.payload.append(&mut other.payload);
    }

    /// Iterates through all the `(tag, record)` pairs, deleted ones included.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (CellTag, R)> + '_ {
        self.cells
            .iter()
            .zip(self.payload.chunks_exact(R::STRIDE))
            .map(|(cell, data)| (*cell, R::read(data)))
    }

    /// Removes every record tagged [`DELETED_CELL`], preserving the order of the others.
    pub fn compacted(&self) -> Self {
        let (cells, payload) = compact(&self.cells, &self.payload, R::STRIDE);
        Self::from_parts(cells, payload)
    }
}
