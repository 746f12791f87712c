use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use color_eyre::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;
use unocore::{Game, GameId, GameStatus, InMemoryStore, PlayerId, UnoError, UnoService};

use crate::{config::SimConfig, strategy};

pub type Service = UnoService<InMemoryStore>;

/// Chance that a player remembers to declare Uno on themself.
const DECLARE_CHANCE: f64 = 0.8;
/// Chance that a player notices an opponent who forgot to declare.
const CALLOUT_CHANCE: f64 = 0.3;

/// Plays one seat until the round ends or the table runs out of turns.
pub async fn run_player(
    service: Arc<Service>,
    game_id: GameId,
    player_id: PlayerId,
    turns: Arc<AtomicUsize>,
    config: SimConfig,
    seed: u64,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);

    loop {
        let snapshot = service.game_update(&game_id, &player_id)?;
        if snapshot.status != GameStatus::Playing
            || turns.load(Ordering::Relaxed) >= config.max_turns
        {
            return Ok(());
        }

        let exposed = snapshot
            .players
            .iter()
            .find(|player| player.id != player_id && player.cards_count() == 1 && !player.protection);
        if let Some(target) = exposed {
            if rng.gen_bool(CALLOUT_CHANCE) {
                tolerate(service.call_uno(&game_id, &player_id, &target.id))?;
            }
        }

        if snapshot.current_turn_player_id() == player_id {
            if let Some(game) = take_turn(&service, &snapshot, &player_id)? {
                turns.fetch_add(1, Ordering::Relaxed);
                declare_if_needed(&service, &game, &player_id, &mut rng)?;
            }
        }

        tokio::time::sleep(config.think_time).await;
    }
}

fn take_turn(service: &Service, snapshot: &Game, player_id: &PlayerId) -> Result<Option<Game>> {
    let hand = &snapshot.current_turn_player().hand;
    let choice = snapshot
        .discard_top()
        .and_then(|top| strategy::choose_card(hand, top));

    let result = match choice {
        Some(card) => service.play_card(&snapshot.id, player_id, card),
        None => service.draw_card(&snapshot.id, player_id),
    };
    tolerate(result)
}

fn declare_if_needed(
    service: &Service,
    game: &Game,
    player_id: &PlayerId,
    rng: &mut StdRng,
) -> Result<()> {
    let Some(me) = game.player(player_id) else {
        return Ok(());
    };
    if game.status == GameStatus::Playing
        && me.cards_count() == 1
        && !me.protection
        && rng.gen_bool(DECLARE_CHANCE)
    {
        tolerate(service.call_uno(&game.id, player_id, player_id))?;
    }
    Ok(())
}

/// Errors caused by another seat acting first are expected at a busy table.
fn tolerate(result: unocore::Result<Game>) -> Result<Option<Game>> {
    match result {
        Ok(game) => Ok(Some(game)),
        Err(
            err @ (UnoError::WrongTurn(_)
            | UnoError::IllegalPlay { .. }
            | UnoError::GameNotPlaying(_)),
        ) => {
            debug!(%err, "Lost a race with another player");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
