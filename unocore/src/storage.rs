//! Storage contract for game and player records, plus an in-memory store.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use tracing::debug;

use crate::{
    error::{Result, StorageError, UnoError},
    game::{Game, GameId, GameStatus},
    player::{Player, PlayerId},
};

/// Persistence collaborator used by [`crate::service::UnoService`].
///
/// Implementations own identifier generation and encoding; the engine only
/// hands over full snapshots.
pub trait GameStore: Send + Sync {
    /// Load the latest snapshot of a game.
    fn fetch_game(&self, game_id: &GameId) -> Result<Game>;

    /// Replace the stored snapshot of `game`.
    fn persist_game(&self, game: &Game) -> Result<()>;

    fn create_player(&self, name: &str) -> Result<Player>;

    /// Create a waiting game with its creator seated.
    fn create_game(&self, name: &str, creator: &PlayerId) -> Result<Game>;

    /// Seat a player at a game that still accepts joins.
    fn join_game(&self, game_id: &GameId, player_id: &PlayerId) -> Result<Game>;

    fn game_exists(&self, game_id: &GameId) -> Result<bool> {
        match self.fetch_game(game_id) {
            Ok(_) => Ok(true),
            Err(UnoError::GameNotFound(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

impl<T> From<PoisonError<T>> for StorageError {
    fn from(_: PoisonError<T>) -> Self {
        StorageError::LockPoisoned
    }
}

/// Keeps every record in process memory. Used by tests and the simulator.
pub struct InMemoryStore {
    games: RwLock<HashMap<GameId, Game>>,
    players: RwLock<HashMap<PlayerId, Player>>,
    max_players: usize,
}

impl InMemoryStore {
    pub fn new(max_players: usize) -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            players: RwLock::new(HashMap::new()),
            max_players,
        }
    }
}

impl GameStore for InMemoryStore {
    fn fetch_game(&self, game_id: &GameId) -> Result<Game> {
        let games = self.games.read().map_err(StorageError::from)?;
        games
            .get(game_id)
            .cloned()
            .ok_or(UnoError::GameNotFound(*game_id))
    }

    fn persist_game(&self, game: &Game) -> Result<()> {
        let mut games = self.games.write().map_err(StorageError::from)?;
        games.insert(game.id, game.clone());
        Ok(())
    }

    fn create_player(&self, name: &str) -> Result<Player> {
        let player = Player::new(PlayerId::new(), name);
        let mut players = self.players.write().map_err(StorageError::from)?;
        players.insert(player.id, player.clone());
        debug!(player = %player.id, name, "Player created");
        Ok(player)
    }

    fn create_game(&self, name: &str, creator: &PlayerId) -> Result<Game> {
        let creator = self
            .players
            .read()
            .map_err(StorageError::from)?
            .get(creator)
            .cloned()
            .ok_or(UnoError::PlayerNotFound(*creator))?;

        let game = Game::new(GameId::new(), name, creator);
        self.persist_game(&game)?;
        debug!(game = %game.id, name, "Game created");
        Ok(game)
    }

    fn join_game(&self, game_id: &GameId, player_id: &PlayerId) -> Result<Game> {
        let player = self
            .players
            .read()
            .map_err(StorageError::from)?
            .get(player_id)
            .cloned()
            .ok_or(UnoError::PlayerNotFound(*player_id))?;

        let mut games = self.games.write().map_err(StorageError::from)?;
        let game = games
            .get_mut(game_id)
            .ok_or(UnoError::GameNotFound(*game_id))?;

        if game.is_participant(player_id) {
            return Ok(game.clone());
        }
        if game.status != GameStatus::Waiting {
            return Err(UnoError::GameNotJoinable(*game_id));
        }
        if game.players.len() >= self.max_players {
            return Err(UnoError::TooManyPlayers);
        }

        game.players.push(player);
        debug!(game = %game_id, player = %player_id, "Player joined");
        Ok(game.clone())
    }
}
