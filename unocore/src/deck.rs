use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, CardValue},
    constants::*,
};

#[derive(Debug, Clone)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// A single unshuffled 108-card deck.
    pub fn new() -> Self {
        Self::with_decks(1)
    }

    /// `count` standard decks concatenated, unshuffled.
    pub fn with_decks(count: usize) -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK * count);

        for _ in 0..count {
            for color in CardColor::iter().filter(|color| !color.is_wild()) {
                // Number Cards
                for number in NUMBER_CARDS_PER_COLOR {
                    cards.push(Card::number(color, *number));
                }

                // Skip Cards
                for _ in 0..SKIP_CARDS_PER_COLOR {
                    cards.push(Card::new(color, CardValue::Skip));
                }

                // Reverse Cards
                for _ in 0..REVERSE_CARDS_PER_COLOR {
                    cards.push(Card::new(color, CardValue::Reverse));
                }

                // Draw Two Cards
                for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                    cards.push(Card::new(color, CardValue::DrawTwo));
                }
            }

            for _ in 0..WILD_CARDS_IN_DECK {
                cards.push(Card::wild());
            }

            for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
                cards.push(Card::wild_draw_four());
            }
        }

        Self(cards)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds `num_decks` decks and returns them as one shuffled pile.
pub fn build_deck<R: Rng + ?Sized>(num_decks: usize, rng: &mut R) -> Vec<Card> {
    let mut deck = Deck::with_decks(num_decks);
    deck.shuffle(rng);
    deck.into_cards()
}

/// Returns a uniformly shuffled permutation of `cards`.
pub fn shuffle<R: Rng + ?Sized>(mut cards: Vec<Card>, rng: &mut R) -> Vec<Card> {
    cards.shuffle(rng);
    cards
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn color_counts(cards: &[Card]) -> HashMap<CardColor, usize> {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(card.color).or_insert(0) += 1;
        }
        counts
    }

    fn sorted_keys(cards: &[Card]) -> Vec<String> {
        let mut keys = cards.iter().map(Card::to_string).collect::<Vec<_>>();
        keys.sort();
        keys
    }

    #[test]
    fn correct_card_count_new_deck() {
        assert_eq!(Deck::new().cards_count(), TOTAL_CARDS_IN_DECK);
    }

    #[test]
    fn single_deck_has_correct_composition() {
        let mut rng = StdRng::seed_from_u64(7);
        let cards = build_deck(1, &mut rng);
        let counts = color_counts(&cards);

        assert_eq!(cards.len(), 108);
        assert_eq!(counts[&CardColor::Red], 25);
        assert_eq!(counts[&CardColor::Blue], 25);
        assert_eq!(counts[&CardColor::Green], 25);
        assert_eq!(counts[&CardColor::Yellow], 25);
        assert_eq!(counts[&CardColor::Wild], 8);

        let zeros = cards
            .iter()
            .filter(|card| card.value == CardValue::Number(0))
            .count();
        assert_eq!(zeros, 4);

        let wild_draw_fours = cards
            .iter()
            .filter(|card| card.value == CardValue::WildDrawFour)
            .count();
        assert_eq!(wild_draw_fours, 4);
    }

    #[test]
    fn multiple_decks_are_concatenated() {
        let mut rng = StdRng::seed_from_u64(11);
        let cards = build_deck(3, &mut rng);
        let counts = color_counts(&cards);

        assert_eq!(cards.len(), 3 * 108);
        assert_eq!(counts[&CardColor::Red], 75);
        assert_eq!(counts[&CardColor::Wild], 24);
    }

    #[test]
    fn shuffle_preserves_composition_and_changes_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let ordered = Deck::new().into_cards();
        let shuffled = shuffle(ordered.clone(), &mut rng);

        assert_eq!(sorted_keys(&ordered), sorted_keys(&shuffled));
        assert_ne!(ordered, shuffled);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let first = build_deck(1, &mut StdRng::seed_from_u64(3));
        let second = build_deck(1, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }
}
