use strum_macros::Display;
use thiserror::Error;

use crate::{
    card::Card,
    game::{GameId, GameStatus},
    player::PlayerId,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error("Game {0} not found")]
    GameNotFound(GameId),
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),
    #[error("It is not the turn of player {0}")]
    WrongTurn(PlayerId),
    #[error("Player {0} is not part of this game")]
    NotAParticipant(PlayerId),
    #[error("Cannot play {card}: {reason}")]
    IllegalPlay { card: Card, reason: IllegalPlayReason },
    #[error("Game is {0}, not playing")]
    GameNotPlaying(GameStatus),
    #[error("Game {0} already has a round in progress")]
    RoundInProgress(GameId),
    #[error("Game {0} does not accept new players")]
    GameNotJoinable(GameId),
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum IllegalPlayReason {
    #[strum(to_string = "card is not in hand")]
    NotInHand,
    #[strum(to_string = "card does not match the discard pile")]
    NotPlayable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("store lock was poisoned")]
    LockPoisoned,
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("expected `<color> <value>`, got `{0}`")]
    Format(String),
    #[error("unknown card color `{0}`")]
    Color(String),
    #[error("unknown card value `{0}`")]
    Value(String),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
