//! Screen state containers.
//!
//! - [`ChatPanel`]: transcript, input and loading flag of one chat
//! - [`LibraryState`]: category/topic selection of the Learn screen
//! - [`SimulationState`]: scenario catalog and the running hearing

pub mod chat;
pub mod library;
pub mod simulation;

pub use chat::{ChatId, ChatMode, ChatPanel};
pub use library::LibraryState;
pub use simulation::SimulationState;
