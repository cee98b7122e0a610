use super::*;

/// Generation strategy that lays out one pair per catalog slot, cycling
/// through the pool when the grid needs more pairs than the pool has
/// entries, then applies a uniform shuffle.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: rand::rngs::SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        use rand::prelude::*;
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: &GameConfig) -> Board {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        let pairs = total_cells / 2;
        if total_cells % 2 != 0 {
            // integer division truncates, one grid slot stays without a card
            log::warn!(
                "Grid of {} cells cannot be fully paired, generating {} cards",
                total_cells,
                pairs * 2
            );
        }

        let pool = config.catalog.len();
        let mut pictures = Vec::with_capacity(usize::from(pairs) * 2);
        for i in 0..usize::from(pairs) {
            let id: PictureId = (i % pool).try_into().unwrap();
            pictures.push(id);
            pictures.push(id);
        }
        pictures.shuffle(&mut self.rng);

        log::debug!(
            "Generated board: {} cards, {} pairs, pool of {}",
            pictures.len(),
            pairs,
            pool
        );
        Board { pictures }
    }
}
