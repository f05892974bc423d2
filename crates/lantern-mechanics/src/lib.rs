//! Dice and ability checks for the Lantern game master.
//!
//! Provides the d20 roll, the five fixed attributes with their
//! d20-style modifiers, and the graded check resolver that decides how a
//! risky free-form action turns out.

pub mod attribute;
pub mod check;
pub mod dice;
pub mod error;

pub use attribute::{Attribute, Attributes, attribute_modifier};
pub use check::{CheckResult, DEFAULT_DIFFICULTY, Tier, resolve_check, resolve_roll};
pub use dice::{D20, roll_d20, roll_die};
pub use error::MechError;
