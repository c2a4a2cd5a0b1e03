// State management module.
// Handles navigation, list selection, and the in-app console log.

#![allow(dead_code)]

pub mod console;
pub mod navigation;
pub mod session;

pub use console::{ConsoleLevel, ConsoleState};
pub use navigation::{Screen, ScreenStack};
pub use session::{SelectableList, SessionState};
