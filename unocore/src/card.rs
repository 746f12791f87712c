use core::fmt;
use std::{fmt::Display, str::FromStr};

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::error::ParseCardError;

#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl CardColor {
    pub fn is_wild(&self) -> bool {
        matches!(self, CardColor::Wild)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardValue {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardValue {
    /// Wild values may be recolored when played and match any discard top.
    pub fn is_wild(&self) -> bool {
        matches!(self, CardValue::Wild | CardValue::WildDrawFour)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, CardValue::Number(_))
    }
}

impl Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardValue::Number(number) => write!(f, "{number}"),
            CardValue::Skip => write!(f, "S"),
            CardValue::Reverse => write!(f, "R"),
            CardValue::DrawTwo => write!(f, "D2"),
            CardValue::Wild => write!(f, "W"),
            CardValue::WildDrawFour => write!(f, "W4"),
        }
    }
}

impl FromStr for CardValue {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(CardValue::Skip),
            "R" => Ok(CardValue::Reverse),
            "D2" => Ok(CardValue::DrawTwo),
            "W" => Ok(CardValue::Wild),
            "W4" => Ok(CardValue::WildDrawFour),
            _ => match s.as_bytes() {
                [digit @ b'0'..=b'9'] => Ok(CardValue::Number(digit - b'0')),
                _ => Err(ParseCardError::Value(s.to_string())),
            },
        }
    }
}

/// A card as held in a hand or lying on a pile.
///
/// Wild cards sit in the deck and in hands with [`CardColor::Wild`]; the player
/// picks a real color when playing one, so the discard pile may hold e.g. `red W4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub color: CardColor,
    pub value: CardValue,
}

impl Card {
    pub fn new(color: CardColor, value: CardValue) -> Self {
        Self { color, value }
    }

    pub fn number(color: CardColor, number: u8) -> Self {
        debug_assert!(number <= 9, "no number card shows {number}");
        Self::new(color, CardValue::Number(number))
    }

    pub fn wild() -> Self {
        Self::new(CardColor::Wild, CardValue::Wild)
    }

    pub fn wild_draw_four() -> Self {
        Self::new(CardColor::Wild, CardValue::WildDrawFour)
    }

    pub fn is_wild(&self) -> bool {
        self.value.is_wild()
    }

    pub fn is_number(&self) -> bool {
        self.value.is_number()
    }

    /// Same card with a chosen color, used when playing a wild.
    pub fn recolored(self, color: CardColor) -> Self {
        Self { color, ..self }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(color), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseCardError::Format(s.to_string()));
        };

        let color = color
            .parse::<CardColor>()
            .map_err(|_| ParseCardError::Color(color.to_string()))?;
        let value = value.parse::<CardValue>()?;

        Ok(Card::new(color, value))
    }
}
