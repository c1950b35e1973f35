//! Interactive Session Module
//!
//! This module implements the loop the user types into. It ties the
//! tokenizer, the connection and the renderer together.
//!
//! ## Architecture
//!
//! ```text
//!  stdin thread                      main task
//! ┌─────────────┐   mpsc(1)   ┌──────────────────────┐
//! │ read lines  │────────────>│ select!              │<── Ctrl+C
//! └─────────────┘             │   built-in? handle   │
//!                             │   else tokenize      │
//!                             └─────────┬────────────┘
//!                                       │
//!                                       ▼
//!                             ┌──────────────────────┐
//!                             │ Connection::request  │
//!                             └─────────┬────────────┘
//!                                       │ reply bytes
//!                                       ▼
//!                             ┌──────────────────────┐
//!                             │ decode + render      │──> stdout
//!                             └──────────────────────┘
//! ```
//!
//! One request is in flight at a time; the next prompt appears only after
//! the previous reply has been printed.

pub mod repl;

// Re-export the session types
pub use repl::{spawn_line_reader, Flow, Session, SessionError, HELP, PROMPT};
