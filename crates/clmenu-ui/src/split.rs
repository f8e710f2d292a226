use clmenu_core::MenuStyle;

use crate::error::ItemError;
use crate::item::MenuItem;
use crate::text;

/// A menu row split into side-by-side columns, one per child entry.
///
/// Children must be simple entries (see [`MenuItem::is_simple`]); every
/// mutation checks the whole batch first and leaves the split untouched
/// when any entry is rejected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitItem {
    items: Vec<MenuItem>,
    selected_item_index: Option<usize>,
}

impl SplitItem {
    /// Create a split pre-seeded with `items`.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, ItemError> {
        check_children(&items)?;
        Ok(Self {
            items,
            selected_item_index: None,
        })
    }

    pub fn add_item(&mut self, item: MenuItem) -> Result<(), ItemError> {
        check_children(std::slice::from_ref(&item))?;
        self.items.push(item);
        Ok(())
    }

    pub fn add_items(&mut self, items: Vec<MenuItem>) -> Result<(), ItemError> {
        check_children(&items)?;
        self.items.extend(items);
        Ok(())
    }

    /// Replace all children.
    pub fn set_items(&mut self, items: Vec<MenuItem>) -> Result<(), ItemError> {
        check_children(&items)?;
        self.items = items;
        Ok(())
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Mark the child at `index` as the active column.
    pub fn set_selected_item_index(&mut self, index: usize) {
        self.selected_item_index = Some(index);
    }

    pub fn clear_selected_item_index(&mut self) {
        self.selected_item_index = None;
    }

    pub fn selected_item_index(&self) -> Option<usize> {
        self.selected_item_index
    }

    /// Whether any column can take the selection.
    pub fn can_select(&self) -> bool {
        self.items.iter().any(MenuItem::can_select)
    }

    /// Lay the children out as columns and return the printed rows.
    ///
    /// Each child gets `content_width / n` columns. Selectable children are
    /// prefixed with the style's marker, the selected one only when `focused`
    /// is set. Every line is space-padded to the column width; children with
    /// fewer lines are filled with blank columns.
    pub fn rows(&self, style: &MenuStyle, focused: bool) -> Vec<String> {
        if self.items.is_empty() {
            return Vec::new();
        }

        let content_width = usize::try_from(style.content_width()).unwrap_or(0);
        let column_width = content_width / self.items.len();

        let columns: Vec<Vec<String>> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let selected = focused && self.selected_item_index == Some(i);
                column(item, style, selected, column_width)
            })
            .collect();

        let row_count = columns.iter().map(Vec::len).max().unwrap_or(0);
        let blank = " ".repeat(column_width);
        let rows: Vec<String> = (0..row_count)
            .map(|r| {
                columns
                    .iter()
                    .map(|lines| lines.get(r).map_or(blank.as_str(), String::as_str))
                    .collect()
            })
            .collect();

        log::trace!(
            "split item laid out {} rows of {} columns, {column_width} wide",
            rows.len(),
            columns.len()
        );
        rows
    }
}

/// The padded lines of one column.
fn column(item: &MenuItem, style: &MenuStyle, selected: bool, width: usize) -> Vec<String> {
    // Children are never splits, so text is always available.
    let body = item.text().unwrap_or_default();
    let content = if item.can_select() {
        format!("{} {body}", style.marker(selected))
    } else {
        body.to_string()
    };

    text::lines(&content)
        .into_iter()
        .map(|line| text::pad_to_width(line, width))
        .collect()
}

fn check_children(items: &[MenuItem]) -> Result<(), ItemError> {
    match items.iter().find(|item| !item.is_simple()) {
        Some(item) => {
            log::debug!("rejected {} as a split item column", item.kind());
            Err(ItemError::IllegalChildType(item.kind()))
        }
        None => Ok(()),
    }
}
