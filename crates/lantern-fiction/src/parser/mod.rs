//! Free-text action resolution.

mod keywords;
mod resolver;

pub use keywords::DANGER_ADJUSTMENT;
pub use resolver::{MatchRule, ResolvedAction, resolve_action};
