//! Top-level interactive menu.

mod choice;
mod controller;

pub use choice::MenuChoice;
pub use controller::{Flow, MenuController};
