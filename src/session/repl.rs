//! Read-Eval-Print Loop
//!
//! The session reads lines from a queue fed by a background stdin reader,
//! handles the built-in commands itself and sends everything else to the
//! server.
//!
//! ## Built-in Commands
//!
//! - `help`: print the help text
//! - `quit` / `exit`: leave the session
//! - `clear`: clear the terminal
//!
//! Built-ins never reach the server.

use crate::connection::{Connection, ConnectionError};
use crate::protocol::tokenize;
use crate::render::{render_decode_error, render_reply};
use std::io::{BufRead, Write};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

/// Printed at startup and on `help`
pub const HELP: &str = "use \"help\" for helping\n\
use \"quit\" or \"exit\" to quit\n\
use \"clear\" to clear screen\n\
response format is `(type)\\nvalue`\n";

/// Prompt shown before each line of input
pub const PROMPT: &str = ">> ";

/// Printed when the session ends on request
pub const FAREWELL: &str = "quitted";

/// Moves the cursor home and erases the screen
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// What the loop does after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive session bound to one server connection.
pub struct Session<W, S = TcpStream> {
    conn: Connection<S>,
    out: W,
}

impl<W, S> Session<W, S>
where
    W: Write,
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Creates a session printing to `out`.
    pub fn new(conn: Connection<S>, out: W) -> Self {
        Self { conn, out }
    }

    /// Consumes the session and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until `quit`, end of input or Ctrl+C.
    ///
    /// Only connection and terminal failures end the session with an error;
    /// a reply that does not decode is printed as an error and the loop goes
    /// on.
    pub async fn run(&mut self, mut lines: mpsc::Receiver<String>) -> Result<(), SessionError> {
        self.out.write_all(HELP.as_bytes())?;

        loop {
            self.out.write_all(PROMPT.as_bytes())?;
            self.out.flush()?;

            let line = tokio::select! {
                line = lines.recv() => line,
                _ = signal::ctrl_c() => {
                    debug!("Interrupted");
                    None
                }
            };

            let Some(line) = line else {
                writeln!(self.out)?;
                writeln!(self.out, "{}", FAREWELL)?;
                return Ok(());
            };

            if self.handle_line(&line).await? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Handles one line of input.
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow, SessionError> {
        match line.trim() {
            "quit" | "exit" => {
                writeln!(self.out, "{}", FAREWELL)?;
                return Ok(Flow::Quit);
            }
            "clear" => self.out.write_all(CLEAR_SCREEN.as_bytes())?,
            "help" => self.out.write_all(HELP.as_bytes())?,
            "" => {}
            input => self.execute(input).await?,
        }

        Ok(Flow::Continue)
    }

    /// Sends a command and prints its rendered reply.
    async fn execute(&mut self, input: &str) -> Result<(), SessionError> {
        let tokens = tokenize(input);
        let Some(command) = tokens.first() else {
            return Ok(());
        };
        debug!(command = %command, args = tokens.len() - 1, "Sending command");

        let reply = self.conn.request(&tokens).await?;

        let text = match render_reply(&reply) {
            Ok((kind, text)) => {
                trace!(kind = %kind, bytes = reply.len(), "Rendered reply");
                text
            }
            Err(e) => {
                warn!(error = %e, bytes = reply.len(), "Malformed reply");
                render_decode_error(&e)
            }
        };

        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Starts a background thread that forwards lines from `input` to the
/// returned queue.
///
/// The queue holds one line, so the reader stays at most one line ahead of
/// the session. It closes when input ends or the session drops the
/// receiver.
pub fn spawn_line_reader<R>(input: R) -> mpsc::Receiver<String>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);

    std::thread::spawn(move || {
        for line in input.lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read input");
                    break;
                }
            }
        }
    });

    rx
}

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Talking to the server failed
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// Writing to the terminal failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
