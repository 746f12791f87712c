use std::time::Duration;

/// Table rules shared by every game a service runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,
    /// Cards drawn by a one-card player caught without declaring Uno.
    pub uno_penalty: usize,
    /// Cards drawn by a caller whose Uno call had no valid target.
    pub false_call_penalty: usize,
    pub draw_two_count: usize,
    pub wild_draw_four_count: usize,
    pub min_players: usize,
    pub max_players: usize,
    /// Each started group of this many players adds one deck to the draw pile.
    pub players_per_deck: usize,
    /// Players not heard from for longer than this are marked inactive.
    pub inactivity_timeout: Duration,
}

impl GameConfig {
    pub fn decks_for_players(&self, player_count: usize) -> usize {
        let per_deck = self.players_per_deck.max(1);
        ((player_count + per_deck - 1) / per_deck).max(1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            uno_penalty: 4,
            false_call_penalty: 1,
            draw_two_count: 2,
            wild_draw_four_count: 4,
            min_players: 2,
            max_players: 10,
            players_per_deck: 1,
            inactivity_timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_deck_per_player_by_default() {
        let config = GameConfig::default();
        assert_eq!(config.decks_for_players(2), 2);
        assert_eq!(config.decks_for_players(5), 5);
    }

    #[test]
    fn decks_scale_with_players_per_deck() {
        let config = GameConfig {
            players_per_deck: 4,
            ..GameConfig::default()
        };
        assert_eq!(config.decks_for_players(1), 1);
        assert_eq!(config.decks_for_players(4), 1);
        assert_eq!(config.decks_for_players(5), 2);
        assert_eq!(config.decks_for_players(10), 3);
    }
}
