//! Declarative [`StyleConfig`] for building a [`MenuStyle`].

use crate::colour::NamedColour;
use crate::error::StyleError;
use crate::style::{self, MenuStyle};
use crate::terminal::Terminal;

/// How a colour is requested in a [`StyleConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColourSpec {
    /// One of the eight terminal colours.
    Named(NamedColour),
    /// A 256-colour index with an optional fallback for 8-colour terminals.
    Indexed {
        code: i32,
        fallback: Option<NamedColour>,
    },
}

/// How the box margin is requested in a [`StyleConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarginSpec {
    Fixed(i32),
    /// Centre the box in the terminal.
    Auto,
}

/// Configuration for a [`MenuStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleConfig {
    /// Foreground colour.
    pub fg: ColourSpec,
    /// Background colour.
    pub bg: ColourSpec,
    /// Total box width.
    pub width: i32,
    pub margin: MarginSpec,
    pub padding: i32,
    pub selected_marker: String,
    pub unselected_marker: String,
    pub item_extra: String,
    pub displays_extra: bool,
    pub title_separator: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fg: ColourSpec::Named(style::DEFAULT_FG),
            bg: ColourSpec::Named(style::DEFAULT_BG),
            width: style::DEFAULT_WIDTH,
            margin: MarginSpec::Fixed(style::DEFAULT_MARGIN),
            padding: style::DEFAULT_PADDING,
            selected_marker: style::DEFAULT_SELECTED_MARKER.to_string(),
            unselected_marker: style::DEFAULT_UNSELECTED_MARKER.to_string(),
            item_extra: style::DEFAULT_ITEM_EXTRA.to_string(),
            displays_extra: false,
            title_separator: style::DEFAULT_TITLE_SEPARATOR.to_string(),
        }
    }
}

impl MenuStyle {
    /// Build a style from `config`, bound to `terminal`.
    ///
    /// Colours are validated against the terminal's colour support; the
    /// first invalid one is returned as the error.
    pub fn from_config(
        config: &StyleConfig,
        terminal: impl Terminal + 'static,
    ) -> Result<Self, StyleError> {
        let mut style = MenuStyle::new(terminal);

        match config.fg {
            ColourSpec::Named(c) => style.set_fg(c),
            ColourSpec::Indexed { code, fallback } => style.set_fg_code(code, fallback)?,
        }
        match config.bg {
            ColourSpec::Named(c) => style.set_bg(c),
            ColourSpec::Indexed { code, fallback } => style.set_bg_code(code, fallback)?,
        }

        style.set_padding(config.padding);
        style.set_width(config.width);
        match config.margin {
            MarginSpec::Fixed(m) => style.set_margin(m),
            MarginSpec::Auto => style.set_margin_auto(),
        }

        style.set_selected_marker(config.selected_marker.as_str());
        style.set_unselected_marker(config.unselected_marker.as_str());
        style.set_item_extra(config.item_extra.as_str());
        style.set_displays_extra(config.displays_extra);
        style.set_title_separator(config.title_separator.as_str());
        Ok(style)
    }
}
