// src/server/mod.rs

//! Registry layer root module.
//!
//! This module is the only gateway callers use to reach a game:
//! - Game identifiers
//! - The lock-guarded game registry
//! - Caller-level actions, responses and events
//! - Read-only snapshots
//! - Error payloads for request/response callers

pub mod types;
pub mod registry;
pub mod messages;
pub mod snapshot;
pub mod error_payload;


pub use types::GameId;
pub use registry::GameRegistry;
pub use messages::{ActionResponse, CreateGameRequest, CreateGameResponse, GameAction, GameEvent};
pub use snapshot::GameSnapshot;
