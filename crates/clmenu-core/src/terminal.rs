//! The [`Terminal`] capability source consumed by [`MenuStyle`](crate::MenuStyle).

use std::fmt;

/// What a style needs to know about the terminal it renders into.
pub trait Terminal: fmt::Debug {
    /// Width of the terminal in columns.
    fn width(&self) -> i32;

    /// Number of colours the terminal can display (8, 256, ...).
    fn colour_support(&self) -> u16;
}

/// A terminal with fixed, caller-supplied capabilities.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedTerminal {
    pub width: i32,
    pub colours: u16,
}

impl FixedTerminal {
    /// Create a terminal `width` columns wide supporting `colours` colours.
    pub const fn new(width: i32, colours: u16) -> Self {
        Self { width, colours }
    }
}

impl Default for FixedTerminal {
    fn default() -> Self {
        Self::new(80, 8)
    }
}

impl Terminal for FixedTerminal {
    fn width(&self) -> i32 {
        self.width
    }

    fn colour_support(&self) -> u16 {
        self.colours
    }
}
