use super::{BoardBuilder, TerrainThresholds};
use crate::types::Board;

use rand::Rng;

impl BoardBuilder {
    pub(super) fn assign_terrain<R: Rng + ?Sized>(
        board: &mut Board,
        thresholds: &TerrainThresholds,
        rng: &mut R,
    ) {
        for tile in board.tiles_mut() {
            let r: f64 = rng.random();
            tile.set_terrain(thresholds.classify(r));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algos::{BoardSize, RngHandler};
    use crate::types::Terrain;

    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_zero_draws_are_plain() {
        let mut board = Board::new(BoardSize::new(6).unwrap());
        let mut rng = RngHandler::rng();

        BoardBuilder::assign_terrain(&mut board, &TerrainThresholds::default(), &mut rng);

        assert_eq!(board.terrain_count(Terrain::Plain), 36);
    }

    #[test]
    fn test_single_bucket_thresholds() {
        let mut board = Board::new(BoardSize::new(10).unwrap());
        let mut rng = StdRng::seed_from_u64(7);

        // Everything below 1.0 falls into the LAKE bucket
        let thresholds = TerrainThresholds::new([0.0, 0.0, 0.0, 1.0]).unwrap();
        BoardBuilder::assign_terrain(&mut board, &thresholds, &mut rng);

        assert_eq!(board.terrain_count(Terrain::Lake), 100);
    }

    #[test]
    fn test_distribution_follows_thresholds() {
        let mut board = Board::new(BoardSize::new(317).unwrap());
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let thresholds = TerrainThresholds::new([0.2, 0.35, 0.55, 0.9]).unwrap();

        BoardBuilder::assign_terrain(&mut board, &thresholds, &mut rng);

        let total = board.tiles().len() as f64;
        for (terrain, expected) in Terrain::ALL.iter().zip(thresholds.probabilities()) {
            let observed = board.terrain_count(*terrain) as f64 / total;
            assert!(
                (observed - expected).abs() < 0.01,
                "{} drawn {:.4} of the time, expected {:.4}",
                terrain,
                observed,
                expected
            );
        }
    }
}
