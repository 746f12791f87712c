use strum::EnumCount;

use crate::card::CardColor;

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const SKIP_CARDS_PER_COLOR: u8 = 2;
pub(crate) const REVERSE_CARDS_PER_COLOR: u8 = 2;
pub(crate) const DRAW_TWO_CARDS_PER_COLOR: u8 = 2;

// Wild is a color of its own but never gets a suit of colored cards.
pub(crate) const SUIT_COUNT: usize = CardColor::COUNT - 1;

pub(crate) const CARDS_PER_COLOR: u8 = NUMBER_CARDS_PER_COLOR.len() as u8
    + SKIP_CARDS_PER_COLOR
    + REVERSE_CARDS_PER_COLOR
    + DRAW_TWO_CARDS_PER_COLOR;

pub(crate) const WILD_CARDS_IN_DECK: u8 = 4;
pub(crate) const WILD_DRAW_FOUR_CARDS_IN_DECK: u8 = 4;

pub const TOTAL_CARDS_IN_DECK: usize = CARDS_PER_COLOR as usize * SUIT_COUNT
    + WILD_CARDS_IN_DECK as usize
    + WILD_DRAW_FOUR_CARDS_IN_DECK as usize;
