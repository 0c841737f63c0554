use std::fmt;

use crate::layout::{Floorplan, FloorplanError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    pub id: String,
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// Fully parsed floorplan description, before any validation.
///
/// Ids are plain strings here; [`FloorplanInput::build`] resolves them to
/// dense handles and rejects unknown or duplicate ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloorplanInput {
    pub blocks: Vec<BlockSpec>,
    pub horizontal: Vec<EdgeSpec>,
    pub vertical: Vec<EdgeSpec>,
}

impl FloorplanInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_block(&mut self, id: impl Into<String>, width: i64, height: i64) -> &mut Self {
        self.blocks.push(BlockSpec {
            id: id.into(),
            width,
            height,
        });
        self
    }

    pub fn add_horizontal(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.horizontal.push(EdgeSpec::new(from, to));
        self
    }

    pub fn add_vertical(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.vertical.push(EdgeSpec::new(from, to));
        self
    }

    pub fn build(&self) -> Result<Floorplan, FloorplanError> {
        Floorplan::from_input(self)
    }
}
