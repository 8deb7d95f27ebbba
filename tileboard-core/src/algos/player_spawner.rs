use crate::types::{Board, Building, Player, PlayerId, Terrain, TileCoord, Unit};

use rand::Rng;
use thiserror::Error;
use tracing::event;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("no unowned non-plain tile left to spawn player {player}")]
    NoEligibleTile { player: PlayerId },
}

/// Gives each player, in order, a random unowned tile that is not PLAIN,
/// stocked with a paddy field and an infantry unit.
///
/// Returns the chosen tile of every player.
pub fn spawn_players<R: Rng + ?Sized>(
    board: &mut Board,
    players: &[Player],
    rng: &mut R,
) -> Result<Vec<TileCoord>, SpawnError> {
    let mut spawns = Vec::with_capacity(players.len());

    for player in players {
        let candidates = board
            .tiles()
            .iter()
            .filter(|tile| tile.terrain() != Terrain::Plain && tile.owner().is_none())
            .map(|tile| tile.coord())
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            return Err(SpawnError::NoEligibleTile { player: player.id });
        }

        let coord = candidates[rng.random_range(0..candidates.len())];
        board.occupy(coord, player.id, Unit::Infantry, Building::Paddy);

        event!(
            tracing::Level::DEBUG,
            "Spawned player {} on tile {} out of {} candidates",
            player.id,
            coord,
            candidates.len()
        );

        spawns.push(coord);
    }

    Ok(spawns)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algos::{BoardSize, RngHandler};

    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_players_avoid_plain_and_owned_tiles() {
        let mut board = Board::new(BoardSize::new(4).unwrap());
        board.tile_mut(3, 0).unwrap().set_terrain(Terrain::Forest);
        board.tile_mut(1, 2).unwrap().set_terrain(Terrain::Lake);
        let mut rng = RngHandler::rng();

        let spawns = spawn_players(&mut board, &Player::default_roster(), &mut rng).unwrap();

        // The zero draw always takes the first candidate in row-major order
        assert_eq!(spawns, vec![TileCoord::new(3, 0), TileCoord::new(1, 2)]);

        let first = board.tile(3, 0).unwrap();
        assert_eq!(first.owner(), Some(1));
        assert_eq!(first.unit(), Some(Unit::Infantry));
        assert_eq!(first.building(), Some(Building::Paddy));
        assert_eq!(first.terrain(), Terrain::Forest);

        assert_eq!(board.tile(1, 2).unwrap().owner(), Some(2));
    }

    #[test]
    fn test_all_plain_board_cannot_spawn() {
        let mut board = Board::new(BoardSize::new(3).unwrap());
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(
            spawn_players(&mut board, &Player::default_roster(), &mut rng),
            Err(SpawnError::NoEligibleTile { player: 1 })
        );
    }

    #[test]
    fn test_second_player_runs_out_of_tiles() {
        let mut board = Board::new(BoardSize::new(2).unwrap());
        board.tile_mut(0, 1).unwrap().set_terrain(Terrain::Mountain);
        let mut rng = StdRng::seed_from_u64(5);

        let result = spawn_players(&mut board, &Player::default_roster(), &mut rng);

        assert_eq!(result, Err(SpawnError::NoEligibleTile { player: 2 }));
        assert_eq!(board.tile(0, 1).unwrap().owner(), Some(1));
    }
}
