use std::collections::HashMap;

use crate::ir::{EdgeSpec, FloorplanInput};

use super::{Axis, FloorplanError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    id: String,
    width: i64,
    height: i64,
}

impl Block {
    pub fn new(id: impl Into<String>, width: i64, height: i64) -> Result<Self, FloorplanError> {
        let id = id.into();
        if width <= 0 || height <= 0 {
            return Err(FloorplanError::DegenerateDimensions { id, width, height });
        }
        Ok(Self { id, width, height })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn extent(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Blocks addressed by dense handles, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    blocks: Vec<Block>,
    index: HashMap<String, usize>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, block: Block) -> Result<usize, FloorplanError> {
        if self.index.contains_key(block.id()) {
            return Err(FloorplanError::duplicate_block(block.id()));
        }
        let handle = self.blocks.len();
        self.index.insert(block.id.clone(), handle);
        self.blocks.push(block);
        Ok(handle)
    }

    pub fn handle(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn id(&self, handle: usize) -> &str {
        self.blocks[handle].id()
    }

    pub fn extent(&self, handle: usize, axis: Axis) -> i64 {
        self.blocks[handle].extent(axis)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Far edge of the bounding box along `axis` for the given coordinates.
    pub fn span(&self, coords: &[i64], axis: Axis) -> Result<i64, FloorplanError> {
        let mut span = 0;
        for (block, &coord) in self.blocks.iter().zip(coords) {
            let end = coord.checked_add(block.extent(axis)).ok_or_else(|| {
                FloorplanError::CoordinateOverflow {
                    axis,
                    id: block.id.clone(),
                }
            })?;
            span = span.max(end);
        }
        Ok(span)
    }
}

/// Directed adjacency over block handles.
///
/// Successor lists keep insertion order; that order drives every traversal
/// and therefore the order critical edges are reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintGraph {
    adjacency: Vec<Vec<usize>>,
}

impl ConstraintGraph {
    pub fn with_vertices(count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn successors(&self, from: usize) -> &[usize] {
        &self.adjacency[from]
    }

    pub fn contains(&self, from: usize, to: usize) -> bool {
        self.adjacency[from].contains(&to)
    }

    /// Returns `false` when the edge was already present.
    pub fn add_edge(&mut self, from: usize, to: usize) -> bool {
        if self.contains(from, to) {
            return false;
        }
        self.adjacency[from].push(to);
        true
    }

    pub fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        let list = &mut self.adjacency[from];
        let before = list.len();
        list.retain(|&next| next != to);
        list.len() != before
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, nexts)| nexts.iter().map(move |&to| (from, to)))
    }
}

/// A validated floorplan: the block registry plus both constraint graphs.
#[derive(Debug, Clone)]
pub struct Floorplan {
    registry: BlockRegistry,
    horizontal: ConstraintGraph,
    vertical: ConstraintGraph,
}

impl Floorplan {
    pub fn from_input(input: &FloorplanInput) -> Result<Self, FloorplanError> {
        let mut registry = BlockRegistry::new();
        for spec in &input.blocks {
            registry.insert(Block::new(spec.id.clone(), spec.width, spec.height)?)?;
        }
        let horizontal = build_graph(&registry, &input.horizontal, Axis::Horizontal)?;
        let vertical = build_graph(&registry, &input.vertical, Axis::Vertical)?;
        Ok(Self {
            registry,
            horizontal,
            vertical,
        })
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn graph(&self, axis: Axis) -> &ConstraintGraph {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub fn edge_spec(&self, (from, to): (usize, usize)) -> EdgeSpec {
        EdgeSpec::new(self.registry.id(from), self.registry.id(to))
    }
}

fn build_graph(
    registry: &BlockRegistry,
    edges: &[EdgeSpec],
    axis: Axis,
) -> Result<ConstraintGraph, FloorplanError> {
    let mut graph = ConstraintGraph::with_vertices(registry.len());
    for edge in edges {
        let from = registry
            .handle(&edge.from)
            .ok_or_else(|| FloorplanError::unknown_block(&edge.from, axis))?;
        let to = registry
            .handle(&edge.to)
            .ok_or_else(|| FloorplanError::unknown_block(&edge.to, axis))?;
        graph.add_edge(from, to);
    }
    Ok(graph)
}
