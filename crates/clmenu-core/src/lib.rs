//! **clmenu-core** — style engine for terminal menus.
//!
//! This crate provides the types a menu renderer draws with: validated
//! terminal colours, the terminal capability source, and [`MenuStyle`],
//! which derives box geometry and ANSI escape codes from its configuration.

pub mod colour;
pub mod config;
pub mod error;
pub mod style;
pub mod terminal;

pub use colour::{ColourValue, NamedColour};
pub use config::{ColourSpec, MarginSpec, StyleConfig};
pub use error::StyleError;
pub use style::MenuStyle;
pub use terminal::{FixedTerminal, Terminal};
