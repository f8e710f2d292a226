//! Errors raised while configuring a [`MenuStyle`](crate::MenuStyle).

use std::fmt;

/// Errors that can occur when validating colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A 256-colour index outside `0..=255`.
    InvalidColourCode(i32),
    /// A colour name that is not one of the eight terminal colours or `default`.
    InvalidColourName(String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColourCode(code) => write!(f, "Invalid colour code: {code}"),
            Self::InvalidColourName(name) => write!(f, "Invalid colour name: {name}"),
        }
    }
}

impl std::error::Error for StyleError {}
