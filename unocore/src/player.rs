use core::fmt;
use std::fmt::Display;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::{card::Card, rules};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    pub is_active: bool,
    pub last_updated: Option<OffsetDateTime>,
    /// Set by declaring Uno on oneself; shields a one-card hand from a call.
    pub protection: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            is_active: false,
            last_updated: None,
            protection: false,
        }
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    /// Index of the hand card that `card` would be played from.
    pub fn card_index(&self, card: &Card) -> Option<usize> {
        rules::hand_index(card, &self.hand)
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        self.protection = false;
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.protection = false;
        self.hand.remove(index)
    }

    pub fn uno(&mut self) {
        self.protection = true;
    }

    pub(crate) fn take_hand(&mut self) -> Vec<Card> {
        self.protection = false;
        std::mem::take(&mut self.hand)
    }

    /// Records activity from this player at `now`.
    pub fn touch(&mut self, now: OffsetDateTime) {
        self.is_active = true;
        self.last_updated = Some(now);
    }
}
