//! The interactive command loop.
//!
//! Reads one line at a time, answers it through [`ContactBot`] and writes the
//! reply, until an exit command or the end of input.

pub mod command;
pub mod handlers;

pub use command::{parse_input, Command};
pub use handlers::{ContactBot, Flow, Reply};

use crate::services::ContactService;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run the bot over the given input and output streams.
///
/// Returns once the user exits or `input` is exhausted. Only I/O failures on
/// the streams are returned as errors; command failures are written to
/// `output` as messages.
pub fn run_bot<S, R, W>(bot: &mut ContactBot<S>, mut input: R, mut output: W) -> Result<()>
where
    S: ContactService,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME).context("Failed to write welcome message")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT).context("Failed to write prompt")?;
        output.flush().context("Failed to flush output")?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read command")?;
        if read == 0 {
            // Keep the next shell prompt off the bot prompt line.
            writeln!(output).context("Failed to write output")?;
            tracing::info!("Input closed, stopping");
            break;
        }

        // A line that is not UTF-8 is still just a command to answer.
        let line = String::from_utf8_lossy(&buf);
        let reply = bot.handle_line(&line);
        writeln!(output, "{}", reply.message).context("Failed to write reply")?;

        if reply.flow == Flow::Exit {
            tracing::info!("Exit requested");
            break;
        }
    }

    output.flush().context("Failed to flush output")?;
    Ok(())
}
