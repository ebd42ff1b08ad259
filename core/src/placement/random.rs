use rand::prelude::*;

use super::*;

/// Uniform selection driven by a seeded [`SmallRng`], so a seed replays the same board.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: SmallRng,
}

impl RandomSelector {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the wall clock, for games that do not need to be replayed.
    pub fn from_entropy_clock() -> Self {
        use web_time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        log::debug!("seed: {}", seed);
        Self::seed_from_u64(seed)
    }
}

impl MineSelector for RandomSelector {
    fn select(&mut self, candidates: CellCount, count: CellCount) -> Vec<CellCount> {
        let count = count.min(candidates);

        rand::seq::index::sample(&mut self.rng, candidates.into(), count.into())
            .into_iter()
            .map(|index| index as CellCount)
            .collect()
    }
}
