//! Entry points used by a transport layer.
//!
//! Each mutating call fetches the latest snapshot, applies the rules and
//! persists the result while holding the lock of that game, so concurrent
//! requests against one game never interleave their read-modify-write cycles.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use rand::{rngs::StdRng, Rng, SeedableRng};
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::{
    card::Card,
    config::GameConfig,
    error::{Result, StorageError},
    game::{Game, GameId},
    player::{Player, PlayerId},
    storage::GameStore,
    turn::TurnAction,
};

pub struct UnoService<S, R = StdRng> {
    store: S,
    config: GameConfig,
    rng: Mutex<R>,
    game_locks: DashMap<GameId, Arc<Mutex<()>>>,
}

impl<S: GameStore> UnoService<S, StdRng> {
    pub fn new(store: S, config: GameConfig) -> Self {
        Self::with_rng(store, config, StdRng::from_entropy())
    }
}

impl<S: GameStore, R: Rng + Send> UnoService<S, R> {
    pub fn with_rng(store: S, config: GameConfig, rng: R) -> Self {
        Self {
            store,
            config,
            rng: Mutex::new(rng),
            game_locks: DashMap::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_player(&self, name: &str) -> Result<Player> {
        self.store.create_player(name)
    }

    /// Creates the creator's player record and a waiting game seating them.
    pub fn new_game(&self, game_name: &str, creator_name: &str) -> Result<(Game, Player)> {
        let creator = self.store.create_player(creator_name)?;
        let game = self.store.create_game(game_name, &creator.id)?;
        Ok((game, creator))
    }

    pub fn join_game(&self, game_id: &GameId, player_id: &PlayerId) -> Result<Game> {
        self.locked(game_id, || self.store.join_game(game_id, player_id))
    }

    pub fn game_exists(&self, game_id: &GameId) -> Result<bool> {
        self.store.game_exists(game_id)
    }

    pub fn deal(&self, game_id: &GameId) -> Result<Game> {
        self.with_game(game_id, |game, config, rng| game.deal_round(config, rng))
            .map(|(game, ())| game)
    }

    pub fn play_card(&self, game_id: &GameId, player_id: &PlayerId, card: Card) -> Result<Game> {
        self.take_turn(game_id, player_id, TurnAction::Play(card))
    }

    pub fn draw_card(&self, game_id: &GameId, player_id: &PlayerId) -> Result<Game> {
        self.take_turn(game_id, player_id, TurnAction::Draw)
    }

    pub fn call_uno(&self, game_id: &GameId, caller: &PlayerId, target: &PlayerId) -> Result<Game> {
        self.take_turn(game_id, caller, TurnAction::CallUno(*target))
    }

    /// Returns the latest snapshot, recording that `player_id` is still around
    /// and expiring players that went quiet.
    pub fn game_update(&self, game_id: &GameId, player_id: &PlayerId) -> Result<Game> {
        self.locked(game_id, || {
            let mut game = self.store.fetch_game(game_id)?;
            let now = OffsetDateTime::now_utc();
            if game.refresh_activity(player_id, now, self.config.inactivity_timeout) {
                self.store.persist_game(&game)?;
            }
            Ok(game)
        })
    }

    fn take_turn(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        turn_action: TurnAction,
    ) -> Result<Game> {
        let (game, result) = self
            .with_game(game_id, |game, config, rng| {
                game.play_turn(player_id, turn_action, config, rng)
            })
            .map_err(|err| {
                warn!(game = %game_id, player = %player_id, ?turn_action, %err, "Turn rejected");
                err
            })?;

        debug!(game = %game_id, player = %player_id, ?result, "Turn resolved");
        Ok(game)
    }

    /// Runs `action` on the stored snapshot under the game's lock and persists
    /// the outcome. Nothing is persisted if `action` fails.
    fn with_game<T>(
        &self,
        game_id: &GameId,
        action: impl FnOnce(&mut Game, &GameConfig, &mut StdRng) -> Result<T>,
    ) -> Result<(Game, T)> {
        self.locked(game_id, || {
            let mut game = self.store.fetch_game(game_id)?;
            let mut rng = self.fork_rng()?;
            let output = action(&mut game, &self.config, &mut rng)?;
            self.store.persist_game(&game)?;

            Ok((game, output))
        })
    }

    /// Seeds a generator for one action so the shared one is only held briefly.
    fn fork_rng(&self) -> Result<StdRng> {
        let mut rng = self.rng.lock().map_err(StorageError::from)?;
        Ok(StdRng::from_seed(rng.gen()))
    }

    /// Runs `f` holding the lock of `game_id`. The lock entry is dropped once
    /// no other request holds it.
    fn locked<T>(&self, game_id: &GameId, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock = self.game_locks.entry(*game_id).or_default().value().clone();
        let output = match lock.lock() {
            Ok(_guard) => f(),
            Err(err) => Err(StorageError::from(err).into()),
        };
        drop(lock);

        self.game_locks
            .remove_if(game_id, |_, lock| Arc::strong_count(lock) == 1);
        output
    }
}
