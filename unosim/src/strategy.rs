use strum::IntoEnumIterator;
use unocore::{rules, Card, CardColor};

/// Picks the card to play from `hand`, naming the color a wild should take.
///
/// Colored cards go first so wilds are saved for when nothing else fits.
pub fn choose_card(hand: &[Card], discard_top: &Card) -> Option<Card> {
    let mut wild = None;

    for card in rules::playable_cards(hand, discard_top) {
        if card.is_wild() {
            wild.get_or_insert(*card);
        } else {
            return Some(*card);
        }
    }

    wild.map(|card| card.recolored(favourite_color(hand)))
}

/// The color the hand holds most of, red when it holds none.
pub fn favourite_color(hand: &[Card]) -> CardColor {
    CardColor::iter()
        .filter(|color| !color.is_wild())
        .max_by_key(|color| hand.iter().filter(|card| card.color == *color).count())
        .filter(|color| hand.iter().any(|card| card.color == *color))
        .unwrap_or(CardColor::Red)
}

#[cfg(test)]
mod tests {
    use unocore::CardValue;

    use super::*;

    #[test]
    fn colored_cards_are_played_before_wilds() {
        let hand = vec![Card::wild(), Card::number(CardColor::Red, 2)];
        let top = Card::number(CardColor::Red, 7);

        assert_eq!(
            choose_card(&hand, &top),
            Some(Card::number(CardColor::Red, 2))
        );
    }

    #[test]
    fn wild_takes_the_most_held_color() {
        let hand = vec![
            Card::wild_draw_four(),
            Card::number(CardColor::Blue, 2),
            Card::number(CardColor::Blue, 3),
            Card::number(CardColor::Green, 3),
        ];
        let top = Card::number(CardColor::Red, 7);

        assert_eq!(
            choose_card(&hand, &top),
            Some(Card::new(CardColor::Blue, CardValue::WildDrawFour))
        );
    }

    #[test]
    fn nothing_to_play() {
        let hand = vec![Card::number(CardColor::Blue, 2)];
        let top = Card::number(CardColor::Red, 7);
        assert_eq!(choose_card(&hand, &top), None);
    }

    #[test]
    fn lone_wild_defaults_to_red() {
        assert_eq!(favourite_color(&[Card::wild()]), CardColor::Red);
    }
}
