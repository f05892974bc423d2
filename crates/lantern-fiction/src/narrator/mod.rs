//! Narration templates and scene rendering.
//!
//! Everything here is deterministic prose for speech synthesis; every
//! narration the player hears ends with [`TRAILING_PROMPT`].

mod templates;

pub use templates::{
    FALLBACK_DESCRIPTION, TRAILING_PROMPT, describe_scene, ensure_prompt, format_journal,
    narrate_check, narrate_choice, narrate_opening, narrate_restart, narrate_unresolved,
    render_scene,
};
