use thiserror::Error;

use super::Axis;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorplanError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("{axis} constraint graph contains a cycle through {}", .unresolved.join(", "))]
    CyclicConstraintGraph {
        axis: Axis,
        unresolved: Vec<String>,
    },

    #[error("block `{id}` has degenerate dimensions {width}x{height}")]
    DegenerateDimensions { id: String, width: i64, height: i64 },

    #[error("{axis} coordinates overflow at block `{id}`")]
    CoordinateOverflow { axis: Axis, id: String },

    #[error("area {width}x{height} overflows")]
    AreaOverflow { width: i64, height: i64 },
}

impl FloorplanError {
    pub(crate) fn area(width: i64, height: i64) -> Result<i64, Self> {
        width
            .checked_mul(height)
            .ok_or(Self::AreaOverflow { width, height })
    }

    pub(crate) fn unknown_block(id: &str, axis: Axis) -> Self {
        Self::MalformedInput(format!("{axis} edge references unknown block `{id}`"))
    }

    pub(crate) fn duplicate_block(id: &str) -> Self {
        Self::MalformedInput(format!("block `{id}` is declared more than once"))
    }
}
