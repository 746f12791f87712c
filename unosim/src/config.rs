use std::{env::var, str::FromStr, time::Duration};

use color_eyre::{eyre::WrapErr, Result};

/// Simulator settings, read from the environment.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub players: usize,
    pub seed: Option<u64>,
    pub max_turns: usize,
    pub think_time: Duration,
}

impl SimConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            players: read_var("UNO_PLAYERS")?.unwrap_or(4),
            seed: read_var("UNO_SEED")?,
            max_turns: read_var("UNO_MAX_TURNS")?.unwrap_or(500),
            think_time: Duration::from_millis(read_var("UNO_THINK_MS")?.unwrap_or(2)),
        })
    }
}

fn read_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .wrap_err_with(|| format!("Invalid value `{value}` for `{name}`")),
        Err(_) => Ok(None),
    }
}
