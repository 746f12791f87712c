use core::fmt;
use std::{fmt::Display, time::Duration};

use strum_macros::Display;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    card::Card,
    error::{Result, UnoError},
    player::{Player, PlayerId},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum GameStatus {
    Waiting,
    Playing,
    Finished,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Direction {
    /// Ascending seat order.
    Forward,
    Backward,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Full snapshot of one game, as fetched from and persisted to a store.
///
/// The top of both piles is the last element.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub creator: PlayerId,
    pub players: Vec<Player>,
    pub current_player: usize,
    pub direction: Direction,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub status: GameStatus,
    /// Name of the winner once a hand has been emptied.
    pub game_over: Option<String>,
}

impl Game {
    pub fn new(id: GameId, name: impl Into<String>, creator: Player) -> Self {
        Self {
            id,
            name: name.into(),
            creator: creator.id,
            players: vec![creator],
            current_player: 0,
            direction: Direction::Forward,
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            status: GameStatus::Waiting,
            game_over: None,
        }
    }

    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| &player.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| &player.id == player_id)
    }

    pub fn is_participant(&self, player_id: &PlayerId) -> bool {
        self.player(player_id).is_some()
    }

    pub fn current_turn_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub fn current_turn_player_id(&self) -> PlayerId {
        self.current_turn_player().id
    }

    pub fn discard_top(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    /// Cards across hands and both piles.
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self
                .players
                .iter()
                .map(Player::cards_count)
                .sum::<usize>()
    }

    pub(crate) fn ensure_playing(&self) -> Result<()> {
        match self.status {
            GameStatus::Playing => Ok(()),
            status => Err(UnoError::GameNotPlaying(status)),
        }
    }

    pub(crate) fn player_index(&self, player_id: &PlayerId) -> Result<usize> {
        self.players
            .iter()
            .position(|player| &player.id == player_id)
            .ok_or(UnoError::NotAParticipant(*player_id))
    }

    /// Seat of `player_id`, provided it is that player's turn.
    pub(crate) fn ensure_current(&self, player_id: &PlayerId) -> Result<usize> {
        let index = self.player_index(player_id)?;
        if index != self.current_player {
            return Err(UnoError::WrongTurn(*player_id));
        }
        Ok(index)
    }

    /// Marks `player_id` as seen at `now` and expires players silent for longer
    /// than `timeout`. Returns whether anything changed.
    pub fn refresh_activity(
        &mut self,
        player_id: &PlayerId,
        now: OffsetDateTime,
        timeout: Duration,
    ) -> bool {
        let mut changed = false;

        for player in &mut self.players {
            if &player.id == player_id {
                player.touch(now);
                changed = true;
            } else if player.is_active {
                if let Some(last_updated) = player.last_updated {
                    if last_updated + timeout < now {
                        player.is_active = false;
                        changed = true;
                    }
                }
            }
        }

        changed
    }
}
