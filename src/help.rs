//! Key binding help line shown under the table.
//!
//! Renders a [`KeyMap`] either as a single line (`short_help`) or as aligned
//! columns (`full_help`), truncating with an ellipsis when a width is set.
//! Disabled bindings are skipped, so the help always reflects what the
//! component will actually respond to in its current state.

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Truncation marker.
    pub ellipsis: Style,
    /// Key label in the short view.
    pub short_key: Style,
    /// Description in the short view.
    pub short_desc: Style,
    /// Separator between short entries.
    pub short_separator: Style,
    /// Key label in the full view.
    pub full_key: Style,
    /// Description in the full view.
    pub full_desc: Style,
    /// Gap between full view columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// Help view state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Show the full multi-column help instead of the short line.
    pub show_all: bool,
    /// Maximum width; 0 disables truncation.
    pub width: usize,
    /// Separator between short help entries.
    pub short_separator: String,
    /// Separator between full help columns.
    pub full_separator: String,
    /// Marker appended when entries are cut off.
    pub ellipsis: String,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Help view with default styles and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the help for `keymap` in the current mode.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line: `key desc • key desc`.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut out = String::new();
        let mut total_width = 0;
        for binding in bindings.into_iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = binding.help();
            let entry = format!(
                "{sep}{} {}",
                self.styles.short_key.clone().inline(true).render(&help.key),
                self.styles.short_desc.clone().inline(true).render(&help.desc)
            );
            let entry_width = lipgloss::width_visible(&entry);

            if let Some(tail) = self.overflow_tail(total_width, entry_width) {
                out.push_str(&tail);
                break;
            }
            total_width += entry_width;
            out.push_str(&entry);
        }
        out
    }

    /// Renders groups of bindings as side-by-side columns.
    pub fn full_help_view(&self, groups: Vec<Vec<&Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        let mut columns: Vec<String> = Vec::new();
        let mut total_width = 0;
        for group in groups {
            let rows: Vec<String> = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    format!(
                        "{} {}",
                        self.styles.full_key.clone().inline(true).render(&help.key),
                        self.styles.full_desc.clone().inline(true).render(&help.desc)
                    )
                })
                .collect();
            if rows.is_empty() {
                continue;
            }

            let column = rows.join("\n");
            let sep_width = if columns.is_empty() {
                0
            } else {
                lipgloss::width_visible(&separator)
            };
            let column_width = column
                .lines()
                .map(|line| lipgloss::width_visible(line))
                .max()
                .unwrap_or(0)
                + sep_width;
            if let Some(tail) = self.overflow_tail(total_width, column_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }
            total_width += column_width;
            columns.push(column);
        }

        let mut parts: Vec<&str> = Vec::new();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(column.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    // Some(tail) when the next item would overflow; the tail is the ellipsis
    // if it still fits, otherwise empty.
    fn overflow_tail(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles.ellipsis.clone().inline(true).render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) <= self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    struct Keys {
        up: Binding,
        down: Binding,
        hidden: Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.up, &self.hidden, &self.down]
        }

        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.up, &self.down], vec![&self.hidden]]
        }
    }

    fn keys() -> Keys {
        let mut hidden = Binding::new(vec![KeyCode::Char('x')]).with_help("x", "hidden");
        hidden.set_enabled(false);
        Keys {
            up: Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            down: Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            hidden,
        }
    }

    #[test]
    fn test_short_help_skips_disabled() {
        let help = Model::new();
        let plain = lipgloss::strip_ansi(&help.view(&keys()));
        assert_eq!(plain, "↑ up • ↓ down");
    }

    #[test]
    fn test_short_help_truncates() {
        let help = Model::new().with_width(8);
        let plain = lipgloss::strip_ansi(&help.view(&keys()));
        assert!(plain.starts_with("↑ up"));
        assert!(plain.ends_with('…'));
        assert!(!plain.contains("down"));
    }

    #[test]
    fn test_full_help_drops_empty_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let plain = lipgloss::strip_ansi(&help.view(&keys()));
        assert!(plain.contains("up"));
        assert!(plain.contains("down"));
        assert!(!plain.contains("hidden"));
    }
}
