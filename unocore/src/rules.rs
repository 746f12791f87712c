//! Card legality checks.
//!
//! Hands keep wild cards colorless. A wild is played by naming it with the
//! color the player wants, so `red W4` is "in hand" when the hand holds `wild W4`.

use crate::card::Card;

/// Whether `card` may be laid on top of `discard_top`.
pub fn is_playable(card: &Card, discard_top: &Card) -> bool {
    card.is_wild() || card.color == discard_top.color || card.value == discard_top.value
}

/// Whether `hand` holds a card that `card` can be played from.
pub fn is_in_hand(card: &Card, hand: &[Card]) -> bool {
    hand.iter()
        .any(|held| held.value == card.value && (held.color == card.color || card.is_wild()))
}

/// Index of the hand card consumed when playing `card`.
///
/// An exact match wins; otherwise any held card with the same wild value.
pub fn hand_index(card: &Card, hand: &[Card]) -> Option<usize> {
    hand.iter().position(|held| held == card).or_else(|| {
        card.is_wild()
            .then(|| hand.iter().position(|held| held.value == card.value))
            .flatten()
    })
}

/// Hand cards that could be laid on `discard_top` as they are held.
pub fn playable_cards<'a>(
    hand: &'a [Card],
    discard_top: &'a Card,
) -> impl Iterator<Item = &'a Card> + 'a {
    hand.iter().filter(move |card| is_playable(card, discard_top))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, CardValue};

    #[test]
    fn playable_against_red_five() {
        let top = Card::number(CardColor::Red, 5);

        assert!(is_playable(&Card::number(CardColor::Red, 9), &top));
        assert!(is_playable(&Card::number(CardColor::Blue, 5), &top));
        assert!(!is_playable(&Card::number(CardColor::Blue, 9), &top));
        assert!(is_playable(&Card::wild_draw_four(), &top));
        assert!(is_playable(&Card::wild(), &top));
    }

    #[test]
    fn special_cards_match_by_value() {
        let top = Card::new(CardColor::Green, CardValue::Skip);
        assert!(is_playable(&Card::new(CardColor::Yellow, CardValue::Skip), &top));
        assert!(!is_playable(&Card::new(CardColor::Yellow, CardValue::Reverse), &top));
    }

    #[test]
    fn recolored_wild_on_discard_sets_the_color() {
        let top = Card::new(CardColor::Blue, CardValue::Wild);
        assert!(is_playable(&Card::number(CardColor::Blue, 3), &top));
        assert!(!is_playable(&Card::number(CardColor::Red, 3), &top));
    }

    #[test]
    fn colored_cards_must_match_exactly_in_hand() {
        let hand = vec![Card::number(CardColor::Red, 1), Card::wild()];

        assert!(is_in_hand(&Card::number(CardColor::Red, 1), &hand));
        assert!(!is_in_hand(&Card::number(CardColor::Green, 1), &hand));
        assert!(!is_in_hand(&Card::number(CardColor::Red, 2), &hand));
    }

    #[test]
    fn wild_cards_may_be_recolored_from_hand() {
        let hand = vec![Card::number(CardColor::Red, 1), Card::wild()];

        assert!(is_in_hand(&Card::new(CardColor::Yellow, CardValue::Wild), &hand));
        assert!(is_in_hand(&Card::wild(), &hand));
        assert!(!is_in_hand(
            &Card::new(CardColor::Yellow, CardValue::WildDrawFour),
            &hand
        ));
    }

    #[test]
    fn playable_cards_filters_hand() {
        let top = Card::number(CardColor::Red, 5);
        let hand = vec![
            Card::number(CardColor::Blue, 1),
            Card::number(CardColor::Red, 2),
            Card::wild(),
            Card::number(CardColor::Green, 5),
        ];

        let playable = playable_cards(&hand, &top).copied().collect::<Vec<_>>();
        assert_eq!(
            playable,
            vec![
                Card::number(CardColor::Red, 2),
                Card::wild(),
                Card::number(CardColor::Green, 5)
            ]
        );
    }

    #[test]
    fn hand_index_prefers_exact_match() {
        let hand = vec![
            Card::wild(),
            Card::new(CardColor::Green, CardValue::Wild),
            Card::number(CardColor::Red, 4),
        ];

        let green_wild = Card::new(CardColor::Green, CardValue::Wild);
        assert_eq!(hand_index(&green_wild, &hand), Some(1));

        let blue_wild = Card::new(CardColor::Blue, CardValue::Wild);
        assert_eq!(hand_index(&blue_wild, &hand), Some(0));

        assert_eq!(hand_index(&Card::number(CardColor::Red, 4), &hand), Some(2));
        assert_eq!(hand_index(&Card::number(CardColor::Blue, 4), &hand), None);
    }
}
