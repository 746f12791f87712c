use rand::Rng;
use tracing::{debug, info};

use crate::{
    config::GameConfig, error::Result, game::Game, player::PlayerId, turn::TurnActionResult,
};

impl Game {
    /// `caller` declares Uno on `target`, who may be the caller themself.
    ///
    /// A one-card target without protection either becomes protected (self call)
    /// or draws the Uno penalty. Calling a target that does not hold exactly one
    /// card costs the caller the false-call penalty. Calls are not bound to turns.
    pub fn call_uno<R: Rng + ?Sized>(
        &mut self,
        caller: &PlayerId,
        target: &PlayerId,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<TurnActionResult> {
        self.ensure_playing()?;
        let caller_index = self.player_index(caller)?;
        let target_index = self.player_index(target)?;

        let called = &mut self.players[target_index];
        if called.cards_count() != 1 {
            debug!(game = %self.id, %caller, %target, "Uno call without a valid target");
            self.draw_cards_to_player(caller_index, config.false_call_penalty, rng);
            return Ok(TurnActionResult::CalloutFailed);
        }

        if called.protection {
            return Ok(TurnActionResult::Protected);
        }

        if caller_index == target_index {
            called.uno();
            debug!(game = %self.id, player = %caller, "Player declared Uno");
            return Ok(TurnActionResult::UnoDeclared);
        }

        info!(game = %self.id, %caller, %target, "Player caught without declaring Uno");
        self.draw_cards_to_player(target_index, config.uno_penalty, rng);
        Ok(TurnActionResult::CalledOut(*target))
    }
}
