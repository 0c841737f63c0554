//! Constraint-graph analysis of a floorplan.
//!
//! Both axes run the same longest-path propagation: forward for each block's
//! earliest coordinate, backward (bounded by the forward span) for its latest.
//! Edges whose endpoints have no slack are critical; critical horizontal edges
//! are then tried one at a time as vertical constraints to look for a smaller
//! bounding box.

mod critical;
mod error;
mod graph;
mod ranking;
mod reduction;

pub use critical::critical_edges;
pub use error::FloorplanError;
pub use graph::{Block, BlockRegistry, ConstraintGraph, Floorplan};
pub use ranking::{Pass, Propagator};
pub use reduction::{AreaSearch, Reduction, SearchStats};

use crate::config::ReductionConfig;
use crate::ir::EdgeSpec;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        })
    }
}

/// Feasible placement window of every block along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisWindow {
    pub earliest: Vec<i64>,
    pub latest: Vec<i64>,
    pub span: i64,
}

impl AxisWindow {
    pub fn slack(&self, handle: usize) -> i64 {
        self.latest[handle] - self.earliest[handle]
    }

    pub fn is_tight(&self, handle: usize) -> bool {
        self.slack(handle) == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub horizontal: AxisWindow,
    pub vertical: AxisWindow,
    pub horizontal_critical: Vec<(usize, usize)>,
    pub vertical_critical: Vec<(usize, usize)>,
    pub baseline_area: i64,
    pub reduction: Reduction,
}

impl Analysis {
    pub fn window(&self, axis: Axis) -> &AxisWindow {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub fn critical(&self, axis: Axis) -> &[(usize, usize)] {
        match axis {
            Axis::Horizontal => &self.horizontal_critical,
            Axis::Vertical => &self.vertical_critical,
        }
    }

    pub fn min_area(&self) -> i64 {
        self.reduction.min_area
    }

    /// Resolves handles back to block ids for the output side.
    pub fn result(&self, plan: &Floorplan) -> FloorplanResult {
        let named = |edges: &[(usize, usize)]| -> Vec<EdgeSpec> {
            edges.iter().map(|&edge| plan.edge_spec(edge)).collect()
        };
        FloorplanResult {
            horizontal_critical: named(&self.horizontal_critical),
            vertical_critical: named(&self.vertical_critical),
            baseline_area: self.baseline_area,
            min_area: self.min_area(),
            best_flip: self.reduction.best_flip.map(|edge| plan.edge_spec(edge)),
        }
    }
}

/// What the output side consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorplanResult {
    pub horizontal_critical: Vec<EdgeSpec>,
    pub vertical_critical: Vec<EdgeSpec>,
    pub baseline_area: i64,
    pub min_area: i64,
    pub best_flip: Option<EdgeSpec>,
}

pub fn compute_window(
    propagator: &mut Propagator,
    plan: &Floorplan,
    axis: Axis,
) -> Result<AxisWindow, FloorplanError> {
    let graph = plan.graph(axis);
    let registry = plan.registry();
    let earliest = propagator.earliest(graph, registry, axis)?;
    let span = registry.span(&earliest, axis)?;
    let latest = propagator.latest(graph, registry, axis, span)?;
    Ok(AxisWindow {
        earliest,
        latest,
        span,
    })
}

pub fn analyze(plan: &Floorplan, config: &ReductionConfig) -> Result<Analysis, FloorplanError> {
    let mut propagator = Propagator::new();
    let horizontal = compute_window(&mut propagator, plan, Axis::Horizontal)?;
    let vertical = compute_window(&mut propagator, plan, Axis::Vertical)?;
    let baseline_area = FloorplanError::area(horizontal.span, vertical.span)?;

    let horizontal_critical = critical_edges(
        plan.graph(Axis::Horizontal),
        &horizontal.earliest,
        &horizontal.latest,
    );
    let vertical_critical = critical_edges(
        plan.graph(Axis::Vertical),
        &vertical.earliest,
        &vertical.latest,
    );

    let reduction = if config.enabled {
        AreaSearch::new(plan, &mut propagator).run(
            &horizontal_critical,
            baseline_area,
            config.max_trials,
        )?
    } else {
        let mut reduction = Reduction::baseline(baseline_area);
        reduction.stats.not_tried = horizontal_critical.len();
        reduction
    };

    tracing::info!(
        blocks = plan.registry().len(),
        width = horizontal.span,
        height = vertical.span,
        baseline_area,
        min_area = reduction.min_area,
        horizontal_critical = horizontal_critical.len(),
        vertical_critical = vertical_critical.len(),
        trials = reduction.stats.evaluated,
        "floorplan analyzed"
    );

    Ok(Analysis {
        horizontal,
        vertical,
        horizontal_critical,
        vertical_critical,
        baseline_area,
        reduction,
    })
}
