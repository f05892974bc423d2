//! Game-master engine for Lantern text adventures.
//!
//! A static, cyclic scene graph is explored one free-text turn at a time.
//! Each turn is resolved to a declared choice or a risky free action (a d20
//! check), applied to the player's session state, and narrated as plain
//! prose suitable for speech synthesis.

/// Configuration for an adventure session.
pub mod config;
/// The built-in "Lantern Crossroads" adventure.
pub mod content;
/// Error types for the fiction engine.
pub mod error;
/// Narration templates and scene rendering.
pub mod narrator;
/// Free-text action resolution.
pub mod parser;
/// Per-player session state.
pub mod player;
/// Scenes, choices, effects and the scene graph.
pub mod scene;
/// Adventure session facade used by the host.
pub mod session;
/// Applies resolved actions to session state.
pub mod tracker;

pub use config::AdventureConfig;
pub use error::{FictionError, FictionResult};
pub use narrator::{TRAILING_PROMPT, render_scene};
pub use parser::{MatchRule, ResolvedAction, resolve_action};
pub use player::{PlayerState, Transition};
pub use scene::{Choice, Effect, GraphIssue, Scene, SceneGraph};
pub use session::{AdventureSession, WorldState};
