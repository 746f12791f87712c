use rand::Rng;
use tracing::{debug, warn};

use crate::{
    card::{Card, CardColor},
    deck,
    error::Result,
    game::Game,
    player::PlayerId,
    rules,
    turn::TurnActionResult,
};

impl Game {
    /// Pops the top of the draw pile.
    pub fn draw_top(&mut self) -> Option<Card> {
        self.draw_pile.pop()
    }

    /// Refills an empty draw pile from everything under the discard top,
    /// reshuffled. Does nothing while the draw pile still holds cards.
    ///
    /// With nothing under the top a fresh single deck is added instead, so a
    /// draw can always be served.
    pub fn recycle_discard<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.draw_pile.is_empty() {
            return;
        }
        if self.discard_pile.len() > 1 {
            let top_index = self.discard_pile.len() - 1;
            let mut recycled = self.discard_pile.drain(..top_index).collect::<Vec<_>>();

            // Played wilds go back to being colorless.
            for card in recycled.iter_mut().filter(|card| card.is_wild()) {
                card.color = CardColor::Wild;
            }

            debug!(game = %self.id, cards = recycled.len(), "Recycling discard pile");
            self.draw_pile.extend(deck::shuffle(recycled, rng));
        } else {
            warn!(game = %self.id, "Discard pile exhausted, adding a fresh deck");
            self.draw_pile.extend(deck::build_deck(1, rng));
        }
    }

    /// Draws one card, recycling the discard pile first if the draw pile is empty.
    pub(crate) fn draw_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        loop {
            if let Some(card) = self.draw_top() {
                return card;
            }
            self.recycle_discard(rng);
        }
    }

    pub(crate) fn draw_cards_to_player<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        count: usize,
        rng: &mut R,
    ) {
        for _ in 0..count {
            let card = self.draw_card(rng);
            self.players[index].add_card(card);
        }
    }

    /// Adds `count` cards to the current player's hand.
    pub fn draw_n<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.draw_cards_to_player(self.current_player, count, rng);
    }

    /// The current player draws a single card. The turn passes on unless the
    /// drawn card can be played right away.
    pub fn draw_for_turn<R: Rng + ?Sized>(
        &mut self,
        player_id: &PlayerId,
        rng: &mut R,
    ) -> Result<TurnActionResult> {
        self.ensure_playing()?;
        let index = self.ensure_current(player_id)?;

        let card = self.draw_card(rng);
        self.players[index].add_card(card);

        let kept_turn = self
            .discard_top()
            .map_or(false, |top| rules::is_playable(&card, top));
        if !kept_turn {
            self.advance_turn();
        }

        debug!(game = %self.id, player = %player_id, %card, kept_turn, "Player drew a card");

        Ok(TurnActionResult::Drew { card, kept_turn })
    }
}
