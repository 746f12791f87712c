use rand::Rng;
use tracing::{debug, info};

use crate::{
    card::Card,
    config::GameConfig,
    error::Result,
    game::{Direction, Game, GameStatus},
    player::PlayerId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Play a card; wilds carry the color the player picks.
    Play(Card),
    Draw,
    /// Call Uno on the given player, possibly oneself.
    CallUno(PlayerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
    Drew { card: Card, kept_turn: bool },
    UnoDeclared,
    CalledOut(PlayerId),
    Protected,
    CalloutFailed,
}

impl Game {
    /// Dispatches a single action taken by `player_id`.
    pub fn play_turn<R: Rng + ?Sized>(
        &mut self,
        player_id: &PlayerId,
        turn_action: TurnAction,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<TurnActionResult> {
        match turn_action {
            TurnAction::Play(card) => self.play_card(player_id, card, config, rng),
            TurnAction::Draw => self.draw_for_turn(player_id, rng),
            TurnAction::CallUno(target) => self.call_uno(player_id, &target, config, rng),
        }
    }

    /// Ends the round if the current player has no cards left, otherwise passes
    /// the turn one seat along `direction`. Does nothing once the round is over.
    pub fn advance_turn(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        if self.current_turn_player().has_won() {
            let winner = self.current_turn_player().name.clone();
            info!(game = %self.id, %winner, "Round finished");
            self.game_over = Some(winner);
            self.status = GameStatus::Finished;
            return;
        }

        let count = self.players.len();
        self.current_player = match self.direction {
            Direction::Forward => (self.current_player + 1) % count,
            Direction::Backward if self.current_player == 0 => count - 1,
            Direction::Backward => self.current_player - 1,
        };

        debug!(game = %self.id, current_player = self.current_player, "Turn advanced");
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }
}
