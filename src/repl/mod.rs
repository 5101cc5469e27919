//! REPL Module
//!
//! Interactive command loop for the Pokedex.
//!
//! # Commands
//! - `help` - List the available commands
//! - `exit` - Leave the Pokedex
//! - `map` / `mapb` - Page forward and back through location areas
//! - `explore <area>` - List the Pokemon found in a location area

mod session;

pub use session::{Command, Outcome, Session, COMMANDS};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::pokeapi::PokeSource;

/// Prompt printed before every command.
pub const PROMPT: &str = "pokedex > ";

/// Reads commands from `input` until `exit` or end of input, writing the
/// prompt and each command's output to `output`.
///
/// A failing command is reported on `output` and the loop continues. Only
/// I/O errors on `input`/`output` end the loop early. The session's caches
/// are closed before returning either way.
pub async fn run<S, R, W>(session: &mut Session<S>, input: R, mut output: W) -> anyhow::Result<()>
where
    S: PokeSource,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let result = read_loop(session, input, &mut output).await;

    let stats = session.cache_stats().await;
    info!(
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        hit_rate = stats.hit_rate(),
        "Session finished"
    );
    session.close().await;
    result
}

async fn read_loop<S, R, W>(session: &mut Session<S>, input: R, output: &mut W) -> anyhow::Result<()>
where
    S: PokeSource,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            output.write_all(b"\n").await?;
            return Ok(());
        };

        let (text, exit) = match session.execute(&line).await {
            Ok(Outcome::Continue(text)) => (text, false),
            Ok(Outcome::Exit(text)) => (text, true),
            Err(err) => {
                warn!(command = line.trim(), error = %err, "Command failed");
                (vec![format!("Error: {:#}", err)], false)
            }
        };

        for text_line in text {
            output.write_all(text_line.as_bytes()).await?;
            output.write_all(b"\n").await?;
        }
        if exit {
            return Ok(());
        }
    }
}
