//! Menu entries for clmenu: static, selectable, ascii art, line break and
//! split items, plus the column layout of split rows.

mod error;
mod item;
mod split;
pub mod text;

pub use error::ItemError;
pub use item::{
    AsciiArtItem, ItemKind, LineBreakItem, MenuItem, SelectAction, SelectableItem, StaticItem,
};
pub use split::SplitItem;
