//! Records exchanged between the stages of the fracture pipeline.

pub use self::cell_tag::{cell_index, CellTag, DELETED_CELL, MERGED_CELL};
pub use self::cut_edge::{CutEdge, EDGE_STRIDE};
pub use self::plane::Plane;
pub use self::triangle::{Triangle, TRIANGLE_STRIDE};

mod cell_tag;
mod cut_edge;
mod plane;
mod triangle;
