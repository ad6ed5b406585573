//! Staggered collapse of engaged cells on pointer release.

use smallvec::SmallVec;

use crate::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggeredShrink {
    pub cell: usize,
    pub delay_ms: f64,
}

pub type ReleasePlan = SmallVec<[StaggeredShrink; 32]>;

/// Order every growing or held cell by activation time (earliest first, ties
/// by grid index) and give the `i`-th one a delay of `i * stagger_ms`.
pub fn plan_release(cells: &[Cell], stagger_ms: f64) -> ReleasePlan {
    let mut engaged: SmallVec<[(f64, usize); 32]> = cells
        .iter()
        .filter(|c| c.phase().is_engaged())
        .map(|c| (c.activated_at(), c.index()))
        .collect();
    engaged.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    let stagger_ms = stagger_ms.max(0.0);
    engaged
        .into_iter()
        .enumerate()
        .map(|(i, (_, cell))| StaggeredShrink {
            cell,
            delay_ms: i as f64 * stagger_ms,
        })
        .collect()
}
