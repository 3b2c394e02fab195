//! Line-oriented game loop over any async reader/writer pair.
//!
//! `main` drives it with stdin/stdout; tests drive it with in-memory buffers.

use anyhow::{anyhow, Result};
use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::game::commands::{GameSession, SessionSummary};

#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    pub prompt: String,
    pub show_banner: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_banner: true,
        }
    }
}

/// Run `session` until it ends or input is exhausted, returning the summary.
pub async fn run_console<R, W>(
    session: &mut GameSession,
    reader: R,
    writer: &mut W,
    options: &ConsoleOptions,
) -> Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let opening = if options.show_banner {
        session.welcome()
    } else {
        session.look()
    };
    write_block(writer, &opening).await?;

    let mut lines = reader.lines();
    while !session.is_over() {
        writer
            .write_all(options.prompt.as_bytes())
            .await
            .map_err(|e| anyhow!("Failed to write prompt: {}", e))?;
        writer.flush().await?;

        let line = match lines
            .next_line()
            .await
            .map_err(|e| anyhow!("Failed to read input: {}", e))?
        {
            Some(line) => line,
            None => {
                // EOF ends the session quietly
                let goodbye = session.texts().resolve("ui.goodbye", &[]);
                write_block(writer, &format!("\n{}", goodbye)).await?;
                break;
            }
        };

        let reply = session.process(&line);
        write_block(writer, &reply.message).await?;
    }

    let summary = session.summary();
    info!(
        target: "station_escape::session",
        "session.end outcome={} score={} hazards={} commands={} unknown={} blocked={}",
        summary.state,
        summary.score,
        summary.hazards,
        summary.stats.commands,
        summary.stats.unknown_commands,
        summary.stats.blocked_moves
    );
    Ok(summary)
}

async fn write_block<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .await
        .map_err(|e| anyhow!("Failed to write output: {}", e))?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::commands::SessionState;
    use crate::game::rules::Rules;
    use crate::game::text::TextCatalog;

    fn session() -> GameSession {
        GameSession::orbital_station(Rules::default(), Box::new(TextCatalog::new()))
    }

    #[tokio::test]
    async fn test_full_run_over_buffers() {
        let mut s = session();
        let input: &[u8] = b"pick up tool\nuse tool\neast\npick up crystal\nwin\nlook\n";
        let mut out = Vec::new();
        let summary = run_console(&mut s, input, &mut out, &ConsoleOptions::default())
            .await
            .unwrap();

        assert_eq!(summary.state, SessionState::Won);
        assert_eq!(summary.score, 110);
        assert_eq!(summary.stats.commands, 5);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== MAINTENANCE TUNNELS ==="));
        assert!(text.contains("Final Score: 110"));
        // the trailing "look" is never read
        assert_eq!(text.matches("> ").count(), 5);
    }

    #[tokio::test]
    async fn test_eof_ends_session() {
        let mut s = session();
        let input: &[u8] = b"status\n";
        let mut out = Vec::new();
        let options = ConsoleOptions {
            prompt: "$ ".into(),
            show_banner: false,
        };
        let summary = run_console(&mut s, input, &mut out, &options).await.unwrap();

        assert_eq!(summary.state, SessionState::Playing);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("=== MAINTENANCE TUNNELS ==="));
        assert!(text.contains("(SCORE: 0 | HAZARDS: 0)"));
        assert!(text.trim_end().ends_with("Thanks for playing!"));
    }
}
