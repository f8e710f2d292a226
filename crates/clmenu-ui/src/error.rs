//! Errors raised by menu entries.

use std::fmt;

use crate::item::ItemKind;

/// Errors that can occur when building or querying menu entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// An entry of this kind cannot be a column of a split item.
    IllegalChildType(ItemKind),
    /// `operation` makes no sense for an entry of this kind.
    UnsupportedOperation {
        operation: &'static str,
        kind: ItemKind,
    },
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalChildType(kind) => write!(f, "Cannot add a {kind} to a split item"),
            Self::UnsupportedOperation { operation, kind } => {
                write!(f, "{operation} is not supported on: {kind}")
            }
        }
    }
}

impl std::error::Error for ItemError {}
