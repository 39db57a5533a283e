//! View composition for the data table.
//!
//! Top to bottom: title, toolbar (search box, filters, clear-all hint),
//! body (loading placeholder, empty state or header plus rows), row menu,
//! delete dialog, status and page links, help.

use super::model::Model;
use super::types::{ActionVariant, Align, MenuEntry};
use crate::record::Record;
use lipgloss_extras::lipgloss;
use unicode_width::UnicodeWidthChar;

const MAX_AUTO_WIDTH: usize = 40;
const COLUMN_GAP: &str = "  ";
const MENU_TRIGGER: &str = "⋮";
const ROW_MARKER: &str = "›";

/// Cuts `s` to at most `width` terminal cells, ending in `…` when cut.
fn truncate(s: &str, width: usize) -> String {
    if lipgloss::width_visible(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let plain = lipgloss::strip_ansi(s);
    let mut out = String::new();
    let mut used = 0;
    for c in plain.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Pads `s` to `width` cells according to `align`.
fn pad(s: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(lipgloss::width_visible(s));
    match align {
        Align::Left => format!("{s}{}", " ".repeat(gap)),
        Align::Right => format!("{}{s}", " ".repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{s}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}

fn fit(s: &str, width: usize, align: Align) -> String {
    pad(&truncate(s, width), width, align)
}

impl<R: Record + Clone + Send + Sync + 'static> Model<R> {
    /// Renders the table.
    pub fn view(&self) -> String {
        let rows = self.projection().rows;
        let mut sections = Vec::new();

        if let Some(title) = &self.title {
            sections.push(self.styles.title.render(title));
        }
        let toolbar = self.view_toolbar();
        if !toolbar.is_empty() {
            sections.push(toolbar);
        }

        sections.push(self.view_body(&rows));

        if let Some(menu) = self.view_menu() {
            sections.push(menu);
        }
        if self.confirm.is_confirming() {
            sections.push(self.confirm.view());
        }
        if let Some(footer) = self.view_footer(rows.len()) {
            sections.push(footer);
        }
        if self.show_help {
            sections.push(self.styles.help.render(&self.help.view(self)));
        }
        sections.join("\n")
    }

    fn view_toolbar(&self) -> String {
        let mut parts = Vec::new();
        if self.searchable {
            parts.push(self.search.view());
        }
        if self.filterable {
            for (i, spec) in self.filter_specs.iter().enumerate() {
                let selection = self.filters.get(&spec.key);
                let value = spec
                    .label_for(selection)
                    .unwrap_or_else(|| "All".to_string());
                let value_style = if i == self.filter_focus {
                    &self.styles.filter_focused
                } else {
                    &self.styles.filter_value
                };
                parts.push(format!(
                    "{} {}",
                    self.styles.filter_label.render(&format!("{}:", spec.label)),
                    value_style.render(&value)
                ));
            }
        }
        if self.clear_all_visible() {
            let hint = format!("✕ Clear all ({})", self.keymap.clear_all.help().key);
            parts.push(self.styles.clear_all.render(&hint));
        }
        parts.join("   ")
    }

    fn view_body(&self, rows: &[usize]) -> String {
        if self.loading {
            return format!(
                "{} {}",
                self.spinner.view(),
                self.styles.loading.render("Loading...")
            );
        }
        if rows.is_empty() {
            return self.view_empty();
        }

        let widths = self.column_widths(rows);
        let with_menu = self.has_row_menu();
        let mut lines = vec![self.view_header(&widths, with_menu)];
        let rule_width: usize = widths.iter().sum::<usize>()
            + COLUMN_GAP.len() * widths.len().saturating_sub(1)
            + 2
            + if with_menu { 2 } else { 0 };
        lines.push(self.styles.border.render(&"─".repeat(rule_width)));

        for (pos, &idx) in rows.iter().enumerate() {
            lines.push(self.view_row(pos, &self.records()[idx], &widths, with_menu));
        }
        lines.join("\n")
    }

    fn column_widths(&self, rows: &[usize]) -> Vec<usize> {
        self.columns
            .iter()
            .map(|col| {
                if let Some(w) = col.width {
                    return w;
                }
                // Room for the sort arrow.
                let header = lipgloss::width_visible(&col.header) + 2;
                let widest = rows
                    .iter()
                    .map(|&i| lipgloss::width_visible(&col.cell_text(&self.records()[i])))
                    .max()
                    .unwrap_or(0);
                header.max(widest).min(MAX_AUTO_WIDTH)
            })
            .collect()
    }

    fn view_header(&self, widths: &[usize], with_menu: bool) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (col, &w))| {
                let sortable = col.is_sortable(self.sortable);
                let mut text = col.header.clone();
                if let Some(sort) = self.sort.as_ref().filter(|s| s.key == col.key) {
                    text = format!("{text} {}", sort.direction.indicator());
                }
                let cell = fit(&text, w, col.align);
                let style = match &col.header_style {
                    Some(style) => style,
                    None if sortable && i == self.column_focus => &self.styles.header_focused,
                    None => &self.styles.header,
                };
                style.render(&cell)
            })
            .collect();
        let gap = self.styles.header.render(COLUMN_GAP);
        let trailer = if with_menu { "  " } else { "" };
        format!("  {}{trailer}", cells.join(gap.as_str()))
    }

    fn view_row(&self, pos: usize, record: &R, widths: &[usize], with_menu: bool) -> String {
        let selected = pos == self.cursor;
        let cells: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .map(|(col, &w)| {
                let cell = fit(&col.cell_text(record), w, col.align);
                match &col.cell_style {
                    Some(style) => style.render(&cell),
                    None => cell,
                }
            })
            .collect();

        let marker = if selected { ROW_MARKER } else { " " };
        let mut line = format!("{marker} {}", cells.join(COLUMN_GAP));
        if with_menu {
            line.push(' ');
            line.push_str(&self.styles.menu_trigger.render(MENU_TRIGGER));
        }
        if selected {
            self.styles.selected_row.render(&line)
        } else {
            self.styles.cell.render(&line)
        }
    }

    fn view_empty(&self) -> String {
        let mut lines = vec![
            self.styles.empty_icon.render(&self.empty_state.icon),
            self.styles.empty_message.render(&self.empty_state.message),
        ];
        if self.on_add.is_some() {
            let label = self
                .empty_state
                .action_label
                .clone()
                .unwrap_or_else(|| "Add New".to_string());
            let hint = format!("[{}] {label}", self.keymap.add.help().key);
            lines.push(self.styles.empty_action.render(&hint));
        }
        lines.join("\n")
    }

    fn view_menu(&self) -> Option<String> {
        let menu = self.menu?;
        let record = self.records().get(menu.record)?;
        let lines: Vec<String> = self
            .menu_entries()
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let (text, destructive, disabled) = match entry {
                    MenuEntry::Action(a) => {
                        let action = &self.actions[a];
                        (
                            action.display_label(),
                            action.variant == ActionVariant::Destructive,
                            action.is_disabled(record),
                        )
                    }
                    MenuEntry::Separator => {
                        return self.styles.border.render("────────");
                    }
                    MenuEntry::Delete => ("🗑 Delete".to_string(), true, false),
                };
                let style = if disabled {
                    &self.styles.menu_disabled
                } else if i == menu.cursor {
                    &self.styles.menu_selected
                } else if destructive {
                    &self.styles.menu_destructive
                } else {
                    &self.styles.cell
                };
                style.render(&text)
            })
            .collect();
        Some(self.styles.menu.render(&lines.join("\n")))
    }

    fn view_footer(&self, rows_on_page: usize) -> Option<String> {
        if self.loading || rows_on_page == 0 {
            return None;
        }
        let filtered = self.filtered_total();
        let total = self.paginator.total_items(filtered);
        let start = if self.paginator.enabled {
            self.paginator
                .page()
                .saturating_sub(1)
                .saturating_mul(self.paginator.page_size())
                .saturating_add(1)
        } else {
            1
        };
        let end = start.saturating_add(rows_on_page - 1);
        let mut footer = self
            .styles
            .status_bar
            .render(&format!("Showing {start}-{end} of {total}"));

        if self.paginator.visible(filtered, rows_on_page, self.loading) {
            footer.push_str(
                &self
                    .styles
                    .pagination
                    .render(&self.paginator.view(filtered)),
            );
        }
        Some(footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Backend Engineer", 8), "Backend…");
        assert_eq!(truncate("abc", 0), "");
        // Wide characters count double.
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_pad_alignment() {
        assert_eq!(pad("ab", 5, Align::Left), "ab   ");
        assert_eq!(pad("ab", 5, Align::Right), "   ab");
        assert_eq!(pad("ab", 5, Align::Center), " ab  ");
        assert_eq!(fit("abcdef", 4, Align::Right), "abc…");
    }
}
