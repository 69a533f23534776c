//! Filter evaluator: which rows pass every active brush.

use std::collections::BTreeSet;

use crate::data::axis::ActiveRange;
use crate::data::dataset::Dataset;

/// Rows of `dataset` whose plot-space position lies inside every active range.
///
/// Membership is tested in plot space, not on raw values. With no active
/// ranges every row is visible.
pub fn compute_visible(dataset: &Dataset, active: &[ActiveRange<'_>]) -> BTreeSet<usize> {
    if active.is_empty() {
        return (0..dataset.row_count()).collect();
    }
    dataset
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            active.iter().all(|r| {
                row.get(r.column)
                    .and_then(|cell| r.scale.to_plot(cell))
                    .is_some_and(|y| r.range.contains(y))
            })
        })
        .map(|(i, _)| i)
        .collect()
}
