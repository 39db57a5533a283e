//! Key bindings of the data table.
//!
//! ## Rows
//!
//! - **Cursor**: `↑/k`, `↓/j`
//! - **Open row**: `enter`
//! - **Row menu**: `.` or `a`, then `↑/↓`, `enter`, `esc`
//! - **Delete**: `d` (asks for confirmation)
//!
//! ## Query
//!
//! - **Search**: `/` to focus, `enter` or `esc` to leave the box
//! - **Sort**: `tab`/`shift+tab` pick a column, `s` cycles asc → desc → off
//! - **Filters**: `F` picks a filter, `f` cycles its options
//! - **Clear all**: `c`
//!
//! ## Table
//!
//! - **Pages**: `←/h/pgup`, `→/l/pgdown`
//! - **Add**: `n`; **Refresh**: `r`; **Help**: `?`

use crate::key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for the data table.
#[derive(Debug, Clone)]
pub struct TableKeyMap {
    /// Move the row cursor up.
    pub row_up: key::Binding,
    /// Move the row cursor down.
    pub row_down: key::Binding,
    /// Activate the highlighted row.
    pub open_row: key::Binding,
    /// Open the highlighted row's action menu.
    pub open_menu: key::Binding,
    /// Run the highlighted menu entry.
    pub menu_select: key::Binding,
    /// Close the menu.
    pub menu_close: key::Binding,
    /// Ask to delete the highlighted row.
    pub delete: key::Binding,
    /// Focus the search box.
    pub search: key::Binding,
    /// Leave the search box.
    pub search_done: key::Binding,
    /// Focus the next column header.
    pub next_column: key::Binding,
    /// Focus the previous column header.
    pub prev_column: key::Binding,
    /// Cycle the sort of the focused column.
    pub sort: key::Binding,
    /// Focus the next filter.
    pub next_filter: key::Binding,
    /// Cycle the focused filter's option.
    pub cycle_filter: key::Binding,
    /// Reset search, filters and sort.
    pub clear_all: key::Binding,
    /// Add a record.
    pub add: key::Binding,
    /// Reload the data.
    pub refresh: key::Binding,
    /// Toggle the full help.
    pub help: key::Binding,
}

impl Default for TableKeyMap {
    fn default() -> Self {
        Self {
            row_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            row_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            open_row: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "open"),
            open_menu: key::Binding::new(vec![KeyCode::Char('.'), KeyCode::Char('a')])
                .with_help("./a", "actions"),
            menu_select: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
            menu_close: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "close menu"),
            delete: key::Binding::new(vec![KeyCode::Char('d')]).with_help("d", "delete"),
            search: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            search_done: key::Binding::new(vec![KeyCode::Enter, KeyCode::Esc])
                .with_help("enter/esc", "done"),
            next_column: key::Binding::new(vec![KeyCode::Tab]).with_help("tab", "next column"),
            prev_column: key::Binding::new(vec![
                (KeyCode::BackTab, KeyModifiers::NONE),
                (KeyCode::BackTab, KeyModifiers::SHIFT),
            ])
            .with_help("shift+tab", "prev column"),
            sort: key::Binding::new(vec![KeyCode::Char('s')]).with_help("s", "sort"),
            next_filter: key::Binding::new(vec![KeyCode::Char('F')]).with_help("F", "next filter"),
            cycle_filter: key::Binding::new(vec![KeyCode::Char('f')]).with_help("f", "filter"),
            clear_all: key::Binding::new(vec![KeyCode::Char('c')]).with_help("c", "clear all"),
            add: key::Binding::new(vec![KeyCode::Char('n')]).with_help("n", "add"),
            refresh: key::Binding::new(vec![KeyCode::Char('r')]).with_help("r", "refresh"),
            help: key::Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::KeyMsg;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_shift_tab_variants() {
        let keys = TableKeyMap::default();
        assert!(keys.prev_column.matches(&press(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert!(keys.prev_column.matches(&press(KeyCode::BackTab, KeyModifiers::NONE)));
        assert!(!keys.next_column.matches(&press(KeyCode::BackTab, KeyModifiers::NONE)));
    }

    #[test]
    fn test_filter_keys_are_case_sensitive() {
        let keys = TableKeyMap::default();
        assert!(keys.next_filter.matches(&press(KeyCode::Char('F'), KeyModifiers::SHIFT)));
        assert!(!keys.next_filter.matches(&press(KeyCode::Char('f'), KeyModifiers::NONE)));
        assert!(keys.cycle_filter.matches(&press(KeyCode::Char('f'), KeyModifiers::NONE)));
    }
}
