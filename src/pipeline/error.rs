/// Errors reported when a fracture request or a fracture pattern is malformed.
///
/// These are detected before any clipping happens. Broken invariants inside of the
/// pipeline itself (e.g. a record stride mismatch, or a cell tag outside of the pattern)
/// are programming errors and panic instead.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum FractureError {
    /// The vertex stream does not describe a whole number of triangles.
    ///
    /// The input is a non-indexed triangle soup: three coordinates per vertex and three
    /// vertices per triangle, so its length must be a multiple of 9.
    #[error("the vertex stream has {len} components, which is not a multiple of 9")]
    MalformedVertexStream {
        /// The length of the rejected vertex stream.
        len: usize,
    },

    /// The fracture pattern has no cell.
    #[error("the fracture pattern has no cell")]
    EmptyPattern,

    /// A plane of the fracture pattern has a NaN or infinite component.
    #[error("the plane {pass} of the cell {cell} has a non-finite component")]
    NonFinitePlane {
        /// The cell the plane belongs to.
        cell: usize,
        /// The index of the plane in the cell plane list.
        pass: usize,
    },

    /// A pass of a pass-major fracture pattern does not have one plane per cell.
    #[error("the pass {pass} lists {found} planes instead of one for each of the {expected} cells")]
    PassWidthMismatch {
        /// The index of the faulty pass.
        pass: usize,
        /// The number of cells of the pattern.
        expected: usize,
        /// The number of planes listed by the pass.
        found: usize,
    },

    /// The proximity table does not have one flag per cell.
    #[error("the proximity table has {found} entries instead of one for each of the {expected} cells")]
    ProximityTableMismatch {
        /// The number of cells of the pattern.
        expected: usize,
        /// The number of entries of the proximity table.
        found: usize,
    },

    /// Proximity merging is enabled but the pattern has no proximity table.
    #[error("proximity merging is enabled but the fracture pattern has no proximity table")]
    MissingProximityTable,
}
