//! devcon line-driven host.
//!
//! Embeds a console session in a plain terminal. Each stdin line is typed
//! into the console and submitted; lines starting with `\` press named keys
//! instead (`\up`, `\down`, `\tab`, `\toggle`, `\bs`, `\enter`), and a line
//! ending in `\tab` types its text and then asks for completion. The
//! process log stream is mirrored into the transcript.

mod input;
mod render;

use std::io::{self, BufRead};

use anyhow::Result;
use devcon_terminal::{
    CommandRegistry, ConsoleConfig, ConsoleLogger, ConsoleSession, Key, log_channel,
    register_builtins,
};
use log::LevelFilter;

use render::Renderer;

fn main() -> Result<()> {
    let env_logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).build();
    let max_level = env_logger.filter().max(LevelFilter::Info);
    let (log_tx, log_rx) = log_channel();
    ConsoleLogger::new(log_tx.clone(), LevelFilter::Info)
        .with_inner(Box::new(env_logger))
        .install(max_level)?;

    let config = load_config()?;
    log::info!(
        "Starting devcon (history {}, completion after {} chars)",
        config.history_capacity,
        config.autocomplete_min_chars,
    );

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);

    let mut session = ConsoleSession::with_log_channel(config, registry, (log_tx, log_rx))?;
    session.handle_key(Key::Backquote.into());

    let mut renderer = Renderer::new();
    let mut out = io::stdout().lock();
    renderer.flush(&session, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match input::line_to_keys(&line) {
            Ok(keys) => {
                for key in keys {
                    session.handle_key(key);
                }
            },
            Err(e) => log::warn!("{e}"),
        }
        session.poll();
        renderer.flush(&session, &mut out)?;
        if session.quit_requested() {
            break;
        }
    }

    log::info!("devcon shut down cleanly");
    Ok(())
}

/// Config path from the first CLI argument or `DEVCON_CONFIG`, else defaults.
fn load_config() -> Result<ConsoleConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DEVCON_CONFIG").ok());
    match path {
        Some(path) => {
            log::info!("Loading config from {path}");
            Ok(ConsoleConfig::load(&path)?)
        },
        None => Ok(ConsoleConfig::default()),
    }
}
