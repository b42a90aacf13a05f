//! Terminal client for the Ping grid game.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Game state machine: handshake, turn gating, snapshots, HUD |
//! | [`dispatch`] | Routes input events to session handlers |
//! | [`console`] | Parses stdin commands into input events |
//! | [`terminal`] | Text renderer for the board and HUD |
//! | [`transport`] | WebSocket connect and the socket/console event loop |
//! | [`bridge`] | Wire type to board type conversions |
//! | [`config`] | CLI flags and environment settings |
//! | [`error`] | Fatal client errors |

pub mod bridge;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod error;
pub mod session;
pub mod terminal;
pub mod transport;
