//! [`MenuStyle`]: box geometry, colours and the glyphs a menu is drawn with.

use unicode_width::UnicodeWidthStr;

use crate::colour::{self, ColourValue, NamedColour};
use crate::error::StyleError;
use crate::terminal::Terminal;

pub const DEFAULT_WIDTH: i32 = 100;
pub const DEFAULT_MARGIN: i32 = 2;
pub const DEFAULT_PADDING: i32 = 2;
pub const DEFAULT_FG: NamedColour = NamedColour::White;
pub const DEFAULT_BG: NamedColour = NamedColour::Blue;
pub const DEFAULT_SELECTED_MARKER: &str = "●";
pub const DEFAULT_UNSELECTED_MARKER: &str = "○";
pub const DEFAULT_ITEM_EXTRA: &str = "✔";
pub const DEFAULT_TITLE_SEPARATOR: &str = "=";

const COLOURS_RESET_CODE: &str = "\x1b[0m";
const INVERTED_COLOURS_SET_CODE: &str = "\x1b[7m";
const INVERTED_COLOURS_UNSET_CODE: &str = "\x1b[27m";

/// Geometry and colour configuration of a menu box.
///
/// ```text
/// |<- margin ->|<- padding ->|<-- content width -->|<- padding ->|
///              |<------------------ width ------------------->|
/// ```
///
/// The margin positions the whole box inside the terminal; the padding
/// spaces the content inside the box. Content width never depends on the
/// margin.
#[derive(Debug)]
pub struct MenuStyle {
    terminal: Box<dyn Terminal>,
    fg: ColourValue,
    bg: ColourValue,
    width: i32,
    margin: i32,
    padding: i32,
    margin_auto: bool,
    selected_marker: String,
    unselected_marker: String,
    item_extra: String,
    displays_extra: bool,
    title_separator: String,
}

impl MenuStyle {
    /// Create a style with the default colours, glyphs and geometry, bound
    /// to `terminal`.
    pub fn new(terminal: impl Terminal + 'static) -> Self {
        let mut style = Self {
            terminal: Box::new(terminal),
            fg: ColourValue::Named(DEFAULT_FG),
            bg: ColourValue::Named(DEFAULT_BG),
            width: 0,
            margin: DEFAULT_MARGIN,
            padding: DEFAULT_PADDING,
            margin_auto: false,
            selected_marker: DEFAULT_SELECTED_MARKER.to_string(),
            unselected_marker: DEFAULT_UNSELECTED_MARKER.to_string(),
            item_extra: DEFAULT_ITEM_EXTRA.to_string(),
            displays_extra: false,
            title_separator: DEFAULT_TITLE_SEPARATOR.to_string(),
        };
        style.set_width(DEFAULT_WIDTH);
        style
    }

    // -- Terminal --

    /// The terminal this style reads its width and colour support from.
    pub fn terminal(&self) -> &dyn Terminal {
        self.terminal.as_ref()
    }

    /// Bind a different terminal and recompute the geometry against it.
    ///
    /// Colours already set keep their resolved value.
    pub fn set_terminal(&mut self, terminal: impl Terminal + 'static) {
        self.terminal = Box::new(terminal);
        self.set_width(self.width);
    }

    // -- Colours --

    pub fn fg(&self) -> ColourValue {
        self.fg
    }

    pub fn bg(&self) -> ColourValue {
        self.bg
    }

    /// Set a named foreground colour.
    pub fn set_fg(&mut self, colour: NamedColour) {
        self.fg = ColourValue::Named(colour);
    }

    /// Set a named background colour.
    pub fn set_bg(&mut self, colour: NamedColour) {
        self.bg = ColourValue::Named(colour);
    }

    /// Set the foreground from a 256-colour index, falling back to
    /// `fallback` on terminals with fewer colours.
    pub fn set_fg_code(
        &mut self,
        code: i32,
        fallback: Option<NamedColour>,
    ) -> Result<(), StyleError> {
        self.fg = colour::resolve(code, fallback, self.terminal.colour_support())?;
        Ok(())
    }

    /// Set the background from a 256-colour index, falling back to
    /// `fallback` on terminals with fewer colours.
    pub fn set_bg_code(
        &mut self,
        code: i32,
        fallback: Option<NamedColour>,
    ) -> Result<(), StyleError> {
        self.bg = colour::resolve(code, fallback, self.terminal.colour_support())?;
        Ok(())
    }

    /// Escape sequence switching to this style's colours, foreground first.
    pub fn colours_set_code(&self) -> String {
        format!("\x1b[{};{}m", self.fg.fg_params(), self.bg.bg_params())
    }

    pub fn colours_reset_code(&self) -> &'static str {
        COLOURS_RESET_CODE
    }

    pub fn inverted_colours_set_code(&self) -> &'static str {
        INVERTED_COLOURS_SET_CODE
    }

    pub fn inverted_colours_unset_code(&self) -> &'static str {
        INVERTED_COLOURS_UNSET_CODE
    }

    // -- Geometry --

    pub fn width(&self) -> i32 {
        self.width
    }

    /// Set the total box width.
    ///
    /// The width is clamped to `0..=terminal width`. With auto margin
    /// enabled the margin is recomputed to keep the box centred.
    pub fn set_width(&mut self, width: i32) {
        let terminal_width = self.terminal.width();
        let mut width = width.max(0);
        if width > terminal_width {
            log::warn!("menu width {width} exceeds terminal width {terminal_width}, clamping");
            width = terminal_width.max(0);
        }
        self.width = width;
        if self.margin_auto {
            self.calculate_margin_auto();
        }
    }

    pub fn margin(&self) -> i32 {
        self.margin
    }

    /// Set the margin explicitly.
    ///
    /// Auto margin, if enabled, stays enabled and takes over again on the
    /// next width change.
    pub fn set_margin(&mut self, margin: i32) {
        self.margin = margin;
    }

    /// Centre the box in the terminal, now and after every width change.
    pub fn set_margin_auto(&mut self) {
        self.margin_auto = true;
        self.calculate_margin_auto();
    }

    pub fn margin_auto(&self) -> bool {
        self.margin_auto
    }

    pub fn padding(&self) -> i32 {
        self.padding
    }

    pub fn set_padding(&mut self, padding: i32) {
        self.padding = padding;
    }

    /// Columns available for content: `width - 2 * padding`.
    pub fn content_width(&self) -> i32 {
        self.width - self.padding * 2
    }

    /// Columns left on the right of the box after `len` columns of content.
    pub fn right_hand_padding(&self, len: i32) -> i32 {
        self.width - self.margin - len
    }

    fn calculate_margin_auto(&mut self) {
        self.margin = (self.terminal.width() - self.width) / 2;
        log::debug!(
            "auto margin recomputed to {} (terminal {}, width {})",
            self.margin,
            self.terminal.width(),
            self.width
        );
    }

    // -- Glyphs --

    /// The marker drawn before a selectable entry.
    pub fn marker(&self, selected: bool) -> &str {
        if selected {
            &self.selected_marker
        } else {
            &self.unselected_marker
        }
    }

    pub fn selected_marker(&self) -> &str {
        &self.selected_marker
    }

    pub fn set_selected_marker(&mut self, marker: impl Into<String>) {
        self.selected_marker = marker.into();
    }

    pub fn unselected_marker(&self) -> &str {
        &self.unselected_marker
    }

    pub fn set_unselected_marker(&mut self, marker: impl Into<String>) {
        self.unselected_marker = marker.into();
    }

    pub fn item_extra(&self) -> &str {
        &self.item_extra
    }

    pub fn set_item_extra(&mut self, extra: impl Into<String>) {
        self.item_extra = extra.into();
    }

    /// Whether entries reserve room for the item extra glyph.
    pub fn displays_extra(&self) -> bool {
        self.displays_extra
    }

    pub fn set_displays_extra(&mut self, displays_extra: bool) {
        self.displays_extra = displays_extra;
    }

    pub fn title_separator(&self) -> &str {
        &self.title_separator
    }

    pub fn set_title_separator(&mut self, separator: impl Into<String>) {
        self.title_separator = separator.into();
    }

    /// The title separator repeated across the content width.
    pub fn title_separator_line(&self) -> String {
        let glyph_width = self.title_separator.width().max(1);
        let count = usize::try_from(self.content_width()).unwrap_or(0) / glyph_width;
        self.title_separator.repeat(count)
    }
}
