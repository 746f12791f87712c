use rand::Rng;
use tracing::{debug, warn};

use crate::{
    card::{Card, CardValue},
    config::GameConfig,
    error::{IllegalPlayReason, Result, UnoError},
    game::Game,
    player::PlayerId,
    rules,
    turn::TurnActionResult,
};

impl Game {
    /// The current player plays `card` from their hand and its effect resolves.
    ///
    /// A rejected play leaves the game untouched.
    pub fn play_card<R: Rng + ?Sized>(
        &mut self,
        player_id: &PlayerId,
        card: Card,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<TurnActionResult> {
        self.ensure_playing()?;
        let index = self.ensure_current(player_id)?;

        let Some(hand_index) = self.players[index].card_index(&card) else {
            warn!(game = %self.id, player = %player_id, %card, "Card not in hand");
            return Err(UnoError::IllegalPlay {
                card,
                reason: IllegalPlayReason::NotInHand,
            });
        };

        let playable = self
            .discard_top()
            .map_or(true, |top| rules::is_playable(&card, top));
        if !playable {
            warn!(game = %self.id, player = %player_id, %card, "Card does not match discard pile");
            return Err(UnoError::IllegalPlay {
                card,
                reason: IllegalPlayReason::NotPlayable,
            });
        }

        self.players[index].remove_card(hand_index);
        self.discard_pile.push(card);

        debug!(game = %self.id, player = %player_id, %card, "Card played");

        let result = match card.value {
            CardValue::Reverse => {
                self.direction = self.direction.flipped();
                // With two players a reverse hands the turn straight back.
                if self.players.len() == 2 {
                    self.advance_turn();
                }
                self.advance_turn();
                TurnActionResult::Reverse
            }
            CardValue::Skip => {
                self.advance_turn();
                self.advance_turn();
                TurnActionResult::Skip
            }
            CardValue::DrawTwo => {
                self.advance_turn();
                self.force_draw(config.draw_two_count, rng);
                TurnActionResult::DrawTwo
            }
            CardValue::WildDrawFour => {
                self.advance_turn();
                self.force_draw(config.wild_draw_four_count, rng);
                TurnActionResult::WildDrawFour
            }
            CardValue::Wild => {
                self.advance_turn();
                TurnActionResult::Wild
            }
            CardValue::Number(_) => {
                self.advance_turn();
                TurnActionResult::Neutral
            }
        };

        Ok(result)
    }

    /// The player whose turn it now is draws `count` cards and loses the turn.
    fn force_draw<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        if self.is_finished() {
            return;
        }
        self.draw_n(count, rng);
        self.advance_turn();
    }
}
