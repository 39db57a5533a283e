//! Styles of the data table.
//!
//! [`TableStyles::from_theme`] applies one [`Theme`] to the header, the
//! borders and the highlighted row. The remaining styles are theme
//! independent; override any field after construction to customize.

use crate::theme::Theme;
use lipgloss_extras::prelude::*;

/// Styles for every part of the table.
#[derive(Debug, Clone)]
pub struct TableStyles {
    /// Title above the table.
    pub title: Style,
    /// Header cells.
    pub header: Style,
    /// Header cell with column focus.
    pub header_focused: Style,
    /// Sort arrow in the header.
    pub sort_indicator: Style,
    /// Body cells.
    pub cell: Style,
    /// The highlighted row.
    pub selected_row: Style,
    /// Separator lines.
    pub border: Style,
    /// The `⋮` row menu trigger.
    pub menu_trigger: Style,
    /// Frame of an open row menu.
    pub menu: Style,
    /// Menu entry under the cursor.
    pub menu_selected: Style,
    /// Menu entry that can't be used for this row.
    pub menu_disabled: Style,
    /// Destructive menu entries.
    pub menu_destructive: Style,
    /// Filter label.
    pub filter_label: Style,
    /// Filter value.
    pub filter_value: Style,
    /// Filter with focus.
    pub filter_focused: Style,
    /// "Clear all" hint.
    pub clear_all: Style,
    /// Empty state icon.
    pub empty_icon: Style,
    /// Empty state message.
    pub empty_message: Style,
    /// Empty state call to action.
    pub empty_action: Style,
    /// Text next to the loading spinner.
    pub loading: Style,
    /// Row count under the table.
    pub status_bar: Style,
    /// Block around the page links.
    pub pagination: Style,
    /// Block around the help line.
    pub help: Style,
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::from_theme(Theme::Default)
    }
}

impl TableStyles {
    /// Styles for `theme`.
    pub fn from_theme(theme: Theme) -> Self {
        let colors = theme.colors();
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let danger = AdaptiveColor {
            Light: "#DC2626",
            Dark: "#F87171",
        };

        Self {
            title: Style::new()
                .bold(true)
                .foreground(Color::from("230"))
                .background(Color::from("62"))
                .padding(0, 1, 0, 1),
            header: Style::new()
                .bold(true)
                .foreground(colors.header_fg.clone())
                .background(colors.header_bg.clone()),
            header_focused: Style::new()
                .bold(true)
                .underline(true)
                .foreground(colors.header_fg)
                .background(colors.header_bg),
            sort_indicator: Style::new().bold(true),
            cell: Style::new(),
            selected_row: Style::new().bold(true).background(colors.hover),
            border: Style::new().foreground(colors.border),
            menu_trigger: Style::new().foreground(subdued.clone()),
            menu: Style::new()
                .border_style(lipgloss_extras::lipgloss::normal_border())
                .padding(0, 1, 0, 1),
            menu_selected: Style::new().reverse(true),
            menu_disabled: Style::new().faint(true),
            menu_destructive: Style::new().foreground(danger),
            filter_label: Style::new().foreground(subdued.clone()),
            filter_value: Style::new().bold(true),
            filter_focused: Style::new().bold(true).underline(true),
            clear_all: Style::new().foreground(subdued.clone()).underline(true),
            empty_icon: Style::new(),
            empty_message: Style::new().foreground(subdued.clone()),
            empty_action: Style::new().foreground(Color::from("62")).bold(true),
            loading: Style::new().foreground(subdued.clone()),
            status_bar: Style::new().foreground(subdued),
            pagination: Style::new().padding_left(1),
            help: Style::new().padding(1, 0, 0, 1),
        }
    }
}
