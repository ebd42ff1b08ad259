use super::*;

/// Replays a predetermined list of candidate indices, for tests and recorded boards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedSelector {
    indices: Vec<CellCount>,
}

impl FixedSelector {
    pub fn new(indices: Vec<CellCount>) -> Self {
        Self { indices }
    }
}

impl MineSelector for FixedSelector {
    fn select(&mut self, _candidates: CellCount, count: CellCount) -> Vec<CellCount> {
        self.indices
            .iter()
            .copied()
            .take(usize::from(count))
            .collect()
    }
}
