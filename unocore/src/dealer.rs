use rand::Rng;
use tracing::{debug, info, warn};

use crate::{
    card::Card,
    config::GameConfig,
    deck,
    error::{Result, UnoError},
    game::{Direction, Game, GameStatus},
};

impl Game {
    /// Starts a round: fresh shuffled piles, full hands, a random first player
    /// and a plain number card as the first discard.
    pub fn deal_round<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) -> Result<()> {
        if self.status == GameStatus::Playing {
            return Err(UnoError::RoundInProgress(self.id));
        }
        if self.players.len() < config.min_players {
            return Err(UnoError::NotEnoughPlayers);
        }
        if self.players.len() > config.max_players {
            return Err(UnoError::TooManyPlayers);
        }

        self.current_player = rng.gen_range(0..self.players.len());
        self.direction = Direction::Forward;
        self.game_over = None;
        self.discard_pile.clear();
        self.draw_pile = deck::build_deck(config.decks_for_players(self.players.len()), rng);

        for index in 0..self.players.len() {
            self.players[index].take_hand();
            self.draw_cards_to_player(index, config.hand_size, rng);
        }

        let mut seed = self.draw_card(rng);
        while !seed.is_number() {
            debug!(game = %self.id, card = %seed, "Rejected starting card");
            self.draw_pile.push(seed);
            if !self.draw_pile.iter().any(Card::is_number) {
                warn!(game = %self.id, "No number card left to start on, adding a fresh deck");
                self.draw_pile.extend(deck::build_deck(1, rng));
            }
            self.draw_pile = deck::shuffle(std::mem::take(&mut self.draw_pile), rng);
            seed = self.draw_card(rng);
        }
        self.discard_pile.push(seed);
        self.status = GameStatus::Playing;

        info!(
            game = %self.id,
            players = self.players.len(),
            first_player = %self.current_turn_player().name,
            discard = %seed,
            "Round dealt"
        );

        Ok(())
    }
}
