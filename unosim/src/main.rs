mod config;
mod strategy;
mod table;

use std::sync::{atomic::AtomicUsize, Arc};

use color_eyre::Result;
use futures::future::join_all;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use unocore::{GameConfig, GameStore, InMemoryStore, UnoService};

use crate::config::SimConfig;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SimConfig::from_env()?;
    let rules = GameConfig::default();
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, players = config.players, "Starting simulation");

    let service = Arc::new(UnoService::with_rng(
        InMemoryStore::new(rules.max_players),
        rules,
        StdRng::seed_from_u64(seed),
    ));

    let (game, host) = service.new_game("simulation", "Player 1")?;
    let mut player_ids = vec![host.id];
    for seat in 2..=config.players {
        let player = service.create_player(&format!("Player {seat}"))?;
        service.join_game(&game.id, &player.id)?;
        player_ids.push(player.id);
    }

    let dealt = service.deal(&game.id)?;
    info!(
        game = %dealt.id,
        first_player = %dealt.current_turn_player().name,
        "Round dealt"
    );

    let turns = Arc::new(AtomicUsize::new(0));
    let seats = player_ids.iter().enumerate().map(|(index, player_id)| {
        tokio::spawn(table::run_player(
            service.clone(),
            game.id,
            *player_id,
            turns.clone(),
            config.clone(),
            seed.wrapping_add(index as u64 + 1),
        ))
    });

    for seat in join_all(seats).await {
        seat??;
    }

    let finished = service.store().fetch_game(&game.id)?;
    let turns = turns.load(std::sync::atomic::Ordering::Relaxed);
    match &finished.game_over {
        Some(winner) => info!(%winner, turns, "Game over"),
        None => warn!(turns, "Stopped without a winner"),
    }
    for player in &finished.players {
        info!(
            player = %player.name,
            cards = player.cards_count(),
            active = player.is_active,
            "Final hand"
        );
    }

    Ok(())
}
