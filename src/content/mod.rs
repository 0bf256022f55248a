//! Static study content compiled into the binary.
//!
//! - [`library`] - The category/topic tree shown on the library screen
//! - [`scenarios`] - The courtroom role-play catalog
//! - [`texts`] - Persona instructions, greetings and fixed UI strings
//!
//! Everything here is `'static` and read-only for the lifetime of the process.

pub mod library;
pub mod scenarios;
pub mod texts;

pub use library::{Category, Subtopic, Topic, LIBRARY};
pub use scenarios::{Difficulty, Scenario, SCENARIOS};
