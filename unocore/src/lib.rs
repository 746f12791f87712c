//! Rules engine for multiplayer UNO.
//!
//! [`game::Game`] is a plain snapshot; the rule components are implemented on it
//! in their own modules (`dealer`, `draw`, `play`, `callout`, `turn`) and
//! [`service::UnoService`] wraps them with storage and per-game locking.

pub mod card;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod rules;
pub mod service;
pub mod storage;
pub mod turn;

mod callout;
mod dealer;
mod draw;
mod play;

pub use card::{Card, CardColor, CardValue};
pub use config::GameConfig;
pub use error::{IllegalPlayReason, Result, StorageError, UnoError};
pub use game::{Direction, Game, GameId, GameStatus};
pub use player::{Player, PlayerId};
pub use service::UnoService;
pub use storage::{GameStore, InMemoryStore};
pub use turn::{TurnAction, TurnActionResult};
