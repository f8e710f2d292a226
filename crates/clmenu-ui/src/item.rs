use std::fmt;
use std::rc::Rc;

use crate::error::ItemError;
use crate::split::SplitItem;

/// The concrete variant of a [`MenuItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Static,
    Selectable,
    AsciiArt,
    LineBreak,
    Split,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Static => "static item",
            Self::Selectable => "selectable item",
            Self::AsciiArt => "ascii art item",
            Self::LineBreak => "line break item",
            Self::Split => "split item",
        })
    }
}

/// Callback run when a selectable entry is invoked.
///
/// Two actions are equal when they share the same callback.
#[derive(Clone)]
pub struct SelectAction(Rc<dyn Fn()>);

impl SelectAction {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Run the callback.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for SelectAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SelectAction(..)")
    }
}

impl PartialEq for SelectAction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Fixed text that cannot be selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticItem {
    text: String,
}

impl StaticItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Text the user can select to run an action.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectableItem {
    text: String,
    action: SelectAction,
    show_item_extra: bool,
}

impl SelectableItem {
    pub fn new(text: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self {
            text: text.into(),
            action: SelectAction::new(action),
            show_item_extra: false,
        }
    }

    pub fn action(&self) -> &SelectAction {
        &self.action
    }
}

/// Pre-drawn ASCII art, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArtItem {
    text: String,
}

impl AsciiArtItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A separator row made of a repeated break character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBreakItem {
    break_char: String,
    lines: usize,
}

impl LineBreakItem {
    /// A separator drawn with `break_char`, one line high.
    pub fn new(break_char: impl Into<String>) -> Self {
        Self {
            break_char: break_char.into(),
            lines: 1,
        }
    }

    /// Set how many lines the separator spans (builder).
    pub fn with_lines(mut self, lines: usize) -> Self {
        self.lines = lines;
        self
    }

    pub fn lines(&self) -> usize {
        self.lines
    }
}

/// A single entry in a menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuItem {
    Static(StaticItem),
    Selectable(SelectableItem),
    AsciiArt(AsciiArtItem),
    LineBreak(LineBreakItem),
    Split(SplitItem),
}

impl MenuItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Static(_) => ItemKind::Static,
            Self::Selectable(_) => ItemKind::Selectable,
            Self::AsciiArt(_) => ItemKind::AsciiArt,
            Self::LineBreak(_) => ItemKind::LineBreak,
            Self::Split(_) => ItemKind::Split,
        }
    }

    /// Whether this entry is laid out as a single block of text.
    ///
    /// Only simple entries may be columns of a [`SplitItem`].
    pub fn is_simple(&self) -> bool {
        matches!(self, Self::Static(_) | Self::Selectable(_))
    }

    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split(_))
    }

    /// Whether the entry can take the selection. A split can when any of
    /// its columns can.
    pub fn can_select(&self) -> bool {
        match self {
            Self::Selectable(_) => true,
            Self::Split(split) => split.can_select(),
            _ => false,
        }
    }

    /// The entry's display text.
    ///
    /// A split has no single text and returns
    /// [`ItemError::UnsupportedOperation`].
    pub fn text(&self) -> Result<&str, ItemError> {
        match self {
            Self::Static(item) => Ok(item.text.as_str()),
            Self::Selectable(item) => Ok(item.text.as_str()),
            Self::AsciiArt(item) => Ok(item.text.as_str()),
            Self::LineBreak(item) => Ok(item.break_char.as_str()),
            Self::Split(_) => Err(ItemError::UnsupportedOperation {
                operation: "text",
                kind: ItemKind::Split,
            }),
        }
    }

    /// The action run when this entry is invoked, if any.
    pub fn select_action(&self) -> Option<&SelectAction> {
        match self {
            Self::Selectable(item) => Some(&item.action),
            _ => None,
        }
    }

    /// Show the item extra glyph after this entry. Ignored by entries that
    /// cannot show one.
    pub fn show_item_extra(&mut self) {
        if let Self::Selectable(item) = self {
            item.show_item_extra = true;
        }
    }

    pub fn hide_item_extra(&mut self) {
        if let Self::Selectable(item) = self {
            item.show_item_extra = false;
        }
    }

    pub fn shows_item_extra(&self) -> bool {
        match self {
            Self::Selectable(item) => item.show_item_extra,
            _ => false,
        }
    }
}

impl From<StaticItem> for MenuItem {
    fn from(item: StaticItem) -> Self {
        Self::Static(item)
    }
}

impl From<SelectableItem> for MenuItem {
    fn from(item: SelectableItem) -> Self {
        Self::Selectable(item)
    }
}

impl From<AsciiArtItem> for MenuItem {
    fn from(item: AsciiArtItem) -> Self {
        Self::AsciiArt(item)
    }
}

impl From<LineBreakItem> for MenuItem {
    fn from(item: LineBreakItem) -> Self {
        Self::LineBreak(item)
    }
}

impl From<SplitItem> for MenuItem {
    fn from(item: SplitItem) -> Self {
        Self::Split(item)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn kinds_and_capabilities() {
        let items: Vec<MenuItem> = vec![
            StaticItem::new("s").into(),
            SelectableItem::new("sel", || {}).into(),
            AsciiArtItem::new("( ︶︿︶)_╭∩╮").into(),
            LineBreakItem::new("*").into(),
            SplitItem::default().into(),
        ];
        let kinds: Vec<_> = items.iter().map(MenuItem::kind).collect();
        assert_eq!(
            kinds,
            [
                ItemKind::Static,
                ItemKind::Selectable,
                ItemKind::AsciiArt,
                ItemKind::LineBreak,
                ItemKind::Split
            ]
        );
        let simple: Vec<_> = items.iter().map(MenuItem::is_simple).collect();
        assert_eq!(simple, [true, true, false, false, false]);
        let selectable: Vec<_> = items.iter().map(MenuItem::can_select).collect();
        assert_eq!(selectable, [false, true, false, false, false]);
    }

    #[test]
    fn text() {
        assert_eq!(MenuItem::from(StaticItem::new("One")).text(), Ok("One"));
        assert_eq!(MenuItem::from(LineBreakItem::new("-")).text(), Ok("-"));
        let err = MenuItem::from(SplitItem::default()).text().unwrap_err();
        assert_eq!(err.to_string(), "text is not supported on: split item");
    }

    #[test]
    fn select_action_runs_callback() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let item = MenuItem::from(SelectableItem::new("Go", move || {
            counter.set(counter.get() + 1)
        }));

        let action = item.select_action().unwrap();
        action.invoke();
        action.invoke();
        assert_eq!(hits.get(), 2);

        assert!(MenuItem::from(StaticItem::new("x")).select_action().is_none());
    }

    #[test]
    fn actions_compare_by_identity() {
        let a = SelectableItem::new("a", || {});
        let b = SelectableItem::new("a", || {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn item_extra_only_on_selectable() {
        let mut item = MenuItem::from(SelectableItem::new("a", || {}));
        item.show_item_extra();
        assert!(item.shows_item_extra());
        item.hide_item_extra();
        assert!(!item.shows_item_extra());

        let mut item = MenuItem::from(StaticItem::new("a"));
        item.show_item_extra();
        assert!(!item.shows_item_extra());
    }

    #[test]
    fn line_break_lines() {
        assert_eq!(LineBreakItem::new("=").lines(), 1);
        assert_eq!(LineBreakItem::new("=").with_lines(3).lines(), 3);
    }
}
