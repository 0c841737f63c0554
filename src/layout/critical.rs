use super::graph::ConstraintGraph;

/// Edges whose endpoints both have zero slack, in handle order then
/// successor insertion order.
pub fn critical_edges(
    graph: &ConstraintGraph,
    earliest: &[i64],
    latest: &[i64],
) -> Vec<(usize, usize)> {
    let tight = |v: usize| earliest[v] == latest[v];
    graph
        .edges()
        .filter(|&(from, to)| tight(from) && tight(to))
        .collect()
}
