use serde::Serialize;

use super::graph::{ConstraintGraph, Floorplan};
use super::ranking::Propagator;
use super::{Axis, FloorplanError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub evaluated: usize,
    pub skipped_cyclic: usize,
    pub not_tried: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub min_area: i64,
    /// Horizontal edge whose move to the vertical graph gave `min_area`.
    pub best_flip: Option<(usize, usize)>,
    pub stats: SearchStats,
}

impl Reduction {
    pub(super) fn baseline(area: i64) -> Self {
        Self {
            min_area: area,
            best_flip: None,
            stats: SearchStats::default(),
        }
    }

    fn consider(mut self, area: i64, flip: (usize, usize)) -> Self {
        self.stats.evaluated += 1;
        if area < self.min_area {
            self.min_area = area;
            self.best_flip = Some(flip);
        }
        self
    }
}

/// Single-edge HCG -> VCG moves, each evaluated on its own copy of both graphs.
pub struct AreaSearch<'a> {
    plan: &'a Floorplan,
    propagator: &'a mut Propagator,
    trial_h: ConstraintGraph,
    trial_v: ConstraintGraph,
}

impl<'a> AreaSearch<'a> {
    pub fn new(plan: &'a Floorplan, propagator: &'a mut Propagator) -> Self {
        Self {
            plan,
            propagator,
            trial_h: ConstraintGraph::default(),
            trial_v: ConstraintGraph::default(),
        }
    }

    pub fn run(
        mut self,
        candidates: &[(usize, usize)],
        baseline_area: i64,
        max_trials: Option<usize>,
    ) -> Result<Reduction, FloorplanError> {
        let limit = max_trials.unwrap_or(candidates.len()).min(candidates.len());
        let mut best = Reduction::baseline(baseline_area);
        best.stats.not_tried = candidates.len() - limit;

        for &flip in &candidates[..limit] {
            match self.trial_area(flip) {
                Ok(area) => {
                    tracing::debug!(edge = %self.plan.edge_spec(flip), area, "trial evaluated");
                    best = best.consider(area, flip);
                }
                Err(FloorplanError::CyclicConstraintGraph { unresolved, .. }) => {
                    tracing::debug!(
                        edge = %self.plan.edge_spec(flip),
                        cycle = ?unresolved,
                        "trial skipped: vertical graph would become cyclic"
                    );
                    best.stats.skipped_cyclic += 1;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(best)
    }

    fn trial_area(&mut self, (from, to): (usize, usize)) -> Result<i64, FloorplanError> {
        let plan = self.plan;
        let registry = plan.registry();
        self.trial_h.clone_from(plan.graph(Axis::Horizontal));
        self.trial_v.clone_from(plan.graph(Axis::Vertical));
        self.trial_h.remove_edge(from, to);
        self.trial_v.add_edge(from, to);

        let x = self.propagator.earliest(&self.trial_h, registry, Axis::Horizontal)?;
        let y = self.propagator.earliest(&self.trial_v, registry, Axis::Vertical)?;
        let width = registry.span(&x, Axis::Horizontal)?;
        let height = registry.span(&y, Axis::Vertical)?;
        FloorplanError::area(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::FloorplanInput;

    #[test]
    fn equal_area_flip_is_not_recorded() {
        // Two equal wide blocks: stacking them costs exactly what it saves.
        let mut input = FloorplanInput::new();
        input
            .add_block("A", 4, 1)
            .add_block("B", 4, 1)
            .add_horizontal("A", "B");
        let plan = input.build().unwrap();
        let mut propagator = Propagator::new();
        let reduction = AreaSearch::new(&plan, &mut propagator)
            .run(&[(0, 1)], 8, None)
            .unwrap();
        assert_eq!(reduction.min_area, 8);
        assert_eq!(reduction.best_flip, None);
        assert_eq!(reduction.stats.evaluated, 1);
    }

    #[test]
    fn improving_flip_is_recorded() {
        let mut propagator = Propagator::new();
        let mut input = FloorplanInput::new();
        input
            .add_block("A", 4, 1)
            .add_block("B", 4, 1)
            .add_block("C", 1, 2)
            .add_horizontal("A", "B")
            .add_horizontal("B", "C");
        let plan = input.build().unwrap();
        // Baseline 9 x 2 = 18, moving A->B gives 5 x 2 = 10.
        let reduction = AreaSearch::new(&plan, &mut propagator)
            .run(&[(0, 1), (1, 2)], 18, None)
            .unwrap();
        assert_eq!(reduction.min_area, 10);
        assert_eq!(reduction.best_flip, Some((0, 1)));
        assert_eq!(reduction.stats.evaluated, 2);
    }

    #[test]
    fn cyclic_trial_is_skipped() {
        let mut input = FloorplanInput::new();
        input
            .add_block("A", 3, 1)
            .add_block("B", 3, 1)
            .add_horizontal("A", "B")
            .add_vertical("B", "A");
        let plan = input.build().unwrap();
        let mut propagator = Propagator::new();
        let reduction = AreaSearch::new(&plan, &mut propagator)
            .run(&[(0, 1)], 12, None)
            .unwrap();
        assert_eq!(reduction.min_area, 12);
        assert_eq!(reduction.stats.skipped_cyclic, 1);
        assert_eq!(reduction.stats.evaluated, 0);
    }

    #[test]
    fn trial_cap_limits_work() {
        let mut input = FloorplanInput::new();
        input
            .add_block("A", 4, 1)
            .add_block("B", 4, 1)
            .add_block("C", 1, 2)
            .add_horizontal("A", "B")
            .add_horizontal("B", "C");
        let plan = input.build().unwrap();
        let mut propagator = Propagator::new();
        let reduction = AreaSearch::new(&plan, &mut propagator)
            .run(&[(1, 2), (0, 1)], 18, Some(1))
            .unwrap();
        assert_eq!(reduction.stats.evaluated, 1);
        assert_eq!(reduction.stats.not_tried, 1);
        // Moving B->C alone gives 8 x 3 = 24.
        assert_eq!(reduction.min_area, 18);
        assert_eq!(reduction.best_flip, None);
    }
}
