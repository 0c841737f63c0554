use std::collections::VecDeque;

use super::graph::{BlockRegistry, ConstraintGraph};
use super::{Axis, FloorplanError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Longest path from the sources: earliest coordinates.
    Forward,
    /// Longest path to the sinks, measured back from `bound`: latest coordinates.
    Backward { bound: i64 },
}

/// Topological longest-path propagation over a constraint graph.
///
/// Scratch buffers live on the propagator so repeated passes (one per axis
/// and direction, plus two per search trial) do not reallocate.
#[derive(Debug, Default)]
pub struct Propagator {
    degree: Vec<usize>,
    reverse: Vec<Vec<usize>>,
    queue: VecDeque<usize>,
}

impl Propagator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn earliest(
        &mut self,
        graph: &ConstraintGraph,
        registry: &BlockRegistry,
        axis: Axis,
    ) -> Result<Vec<i64>, FloorplanError> {
        self.propagate(graph, registry, axis, Pass::Forward)
    }

    pub fn latest(
        &mut self,
        graph: &ConstraintGraph,
        registry: &BlockRegistry,
        axis: Axis,
        bound: i64,
    ) -> Result<Vec<i64>, FloorplanError> {
        self.propagate(graph, registry, axis, Pass::Backward { bound })
    }

    pub fn propagate(
        &mut self,
        graph: &ConstraintGraph,
        registry: &BlockRegistry,
        axis: Axis,
        pass: Pass,
    ) -> Result<Vec<i64>, FloorplanError> {
        let n = graph.len();
        debug_assert_eq!(n, registry.len(), "graph and registry disagree on vertex count");
        let step = |coord: i64, delta: i64, v: usize| {
            coord
                .checked_add(delta)
                .ok_or_else(|| FloorplanError::CoordinateOverflow {
                    axis,
                    id: registry.id(v).to_string(),
                })
        };
        self.prepare(graph, pass);

        let mut coords: Vec<i64> = match pass {
            Pass::Forward => vec![0; n],
            Pass::Backward { bound } => (0..n)
                .map(|v| step(bound, -registry.extent(v, axis), v))
                .collect::<Result<_, _>>()?,
        };

        self.queue.clear();
        self.queue.extend((0..n).filter(|&v| self.degree[v] == 0));

        let mut settled = 0usize;
        while let Some(current) = self.queue.pop_front() {
            settled += 1;
            let nexts: &[usize] = match pass {
                Pass::Forward => graph.successors(current),
                Pass::Backward { .. } => &self.reverse[current],
            };
            for &next in nexts {
                match pass {
                    Pass::Forward => {
                        let reach =
                            step(coords[current], registry.extent(current, axis), current)?;
                        coords[next] = coords[next].max(reach);
                    }
                    Pass::Backward { .. } => {
                        let reach = step(coords[current], -registry.extent(next, axis), next)?;
                        coords[next] = coords[next].min(reach);
                    }
                }
                self.degree[next] -= 1;
                if self.degree[next] == 0 {
                    self.queue.push_back(next);
                }
            }
        }

        if settled < n {
            let unresolved = (0..n)
                .filter(|&v| self.degree[v] > 0)
                .map(|v| registry.id(v).to_string())
                .collect();
            return Err(FloorplanError::CyclicConstraintGraph { axis, unresolved });
        }
        Ok(coords)
    }

    // Forward passes count in-degrees; backward passes count out-degrees and
    // walk a predecessor list built here.
    fn prepare(&mut self, graph: &ConstraintGraph, pass: Pass) {
        let n = graph.len();
        self.degree.clear();
        self.degree.resize(n, 0);
        match pass {
            Pass::Forward => {
                for (_, to) in graph.edges() {
                    self.degree[to] += 1;
                }
            }
            Pass::Backward { .. } => {
                for list in &mut self.reverse {
                    list.clear();
                }
                self.reverse.resize_with(n, Vec::new);
                for (from, to) in graph.edges() {
                    self.reverse[to].push(from);
                    self.degree[from] += 1;
                }
            }
        }
    }
}
