use crate::math::{Real, DEFAULT_EPSILON};

/// How the clip kernel invocations of a pass are executed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Every invocation runs on the calling thread, in order.
    Serial,
    /// Invocations are spread over the rayon thread pool.
    #[cfg(feature = "parallel")]
    Parallel,
}

impl Default for ExecutionMode {
    fn default() -> Self {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;
        #[cfg(not(feature = "parallel"))]
        return ExecutionMode::Serial;
    }
}

/// Parameters of a [`Fracturer`](crate::pipeline::Fracturer).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FractureConfig {
    /// How each clip pass is executed.
    pub execution: ExecutionMode,
    /// Re-tag the geometry of the cells that are not flagged as proximate by the pattern
    /// to [`MERGED_CELL`](crate::shape::MERGED_CELL), after the last pass.
    ///
    /// Requires the pattern to carry a proximity table.
    pub proximity_merge: bool,
    /// Triangles with an area smaller than or equal to this are reported as degenerate in
    /// the [`PassStats`](crate::pipeline::PassStats). They are kept in the output.
    pub degenerate_area_epsilon: Real,
}

impl Default for FractureConfig {
    fn default() -> Self {
        Self {
            execution: ExecutionMode::default(),
            proximity_merge: false,
            degenerate_area_epsilon: DEFAULT_EPSILON,
        }
    }
}
