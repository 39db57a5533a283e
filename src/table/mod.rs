//! Data table: search, column filters, sortable headers, pagination, row
//! actions and a delete confirmation, over any [`Record`] type.
//!
//! ## Rendering pipeline
//!
//! Each render derives the visible rows from the records and the UI state:
//!
//! 1. search: keep records where some search key contains the query
//! 2. filters: keep records whose field strictly equals each active selection
//! 3. sort: stable, by the raw field of the sorted column
//! 4. page: slice in client mode; server mode shows the records as given
//!
//! The loading placeholder wins over the empty state, which wins over rows.
//!
//! ## Side effects
//!
//! The table never talks to a backend. Handlers attached with `on_delete`,
//! `on_add`, `on_refresh`, `on_row_click`, `on_page_change` and the row
//! [`Action`]s return an optional [`Cmd`]; `update` and the programmatic
//! operations hand that command back to the caller. Row links are opened
//! through a [`Navigator`].
//!
//! ## Query changes and paging
//!
//! Changing the search text, a filter or the sort (including "clear all")
//! returns to page 1 and notifies the page handler if the page changed.
//!
//! [`Record`]: crate::record::Record

mod keys;
mod model;
mod pipeline;
mod rendering;
mod style;
mod types;


pub use keys::TableKeyMap;
pub use model::Model;
pub use pipeline::{project, Projection, Query};
pub use style::TableStyles;
pub use types::{
    Action, ActionVariant, Align, Column, EmptyState, MenuEntry, MsgNavigator, NavigateMsg,
    Navigator,
};

use crate::confirm::Decision;
use crate::key::{self, KeyMap};
use crate::record::Record;
use crate::spinner;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

impl<R: Record + Clone + Send + Sync + 'static> KeyMap for Model<R> {
    fn short_help(&self) -> Vec<&key::Binding> {
        if self.confirm.is_confirming() {
            return self.confirm.keymap.short_help();
        }
        if self.menu.is_some() {
            return vec![
                &self.keymap.row_up,
                &self.keymap.row_down,
                &self.keymap.menu_select,
                &self.keymap.menu_close,
            ];
        }
        if self.search.focused() {
            return vec![&self.keymap.search_done];
        }

        let mut bindings = vec![&self.keymap.row_up, &self.keymap.row_down];
        if self.rows_clickable() {
            bindings.push(&self.keymap.open_row);
        }
        if self.has_row_menu() {
            bindings.push(&self.keymap.open_menu);
        }
        if self.searchable {
            bindings.push(&self.keymap.search);
        }
        if self.sortable {
            bindings.push(&self.keymap.sort);
        }
        if self.filterable && !self.filter_specs.is_empty() {
            bindings.push(&self.keymap.cycle_filter);
        }
        if self.clear_all_visible() {
            bindings.push(&self.keymap.clear_all);
        }
        bindings.push(&self.keymap.help);
        bindings
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        let mut rows = vec![&self.keymap.row_up, &self.keymap.row_down];
        if self.rows_clickable() {
            rows.push(&self.keymap.open_row);
        }
        if self.has_row_menu() {
            rows.push(&self.keymap.open_menu);
        }
        if self.has_delete() {
            rows.push(&self.keymap.delete);
        }

        let mut query = Vec::new();
        if self.searchable {
            query.push(&self.keymap.search);
        }
        if self.sortable {
            query.extend([&self.keymap.next_column, &self.keymap.prev_column, &self.keymap.sort]);
        }
        if self.filterable && !self.filter_specs.is_empty() {
            query.extend([&self.keymap.next_filter, &self.keymap.cycle_filter]);
        }
        query.push(&self.keymap.clear_all);

        let mut table = Vec::new();
        if self.paginator.enabled {
            table.extend([&self.paginator.keymap.prev_page, &self.paginator.keymap.next_page]);
        }
        if self.on_add.is_some() {
            table.push(&self.keymap.add);
        }
        if self.has_refresh() {
            table.push(&self.keymap.refresh);
        }
        table.push(&self.keymap.help);

        vec![rows, query, table]
    }
}

impl<R: Record + Clone + Send + Sync + 'static> Model<R> {
    /// Handles a message.
    ///
    /// Spinner ticks animate the loading placeholder. Key presses go, in
    /// order of precedence, to the delete dialog, the open row menu, the
    /// focused search box, then the table's own bindings.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.downcast_ref::<spinner::TickMsg>().is_some() {
            return if self.loading {
                self.spinner.update(&msg)
            } else {
                None
            };
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.confirm.is_confirming() {
            return match self.confirm.handle_key(key_msg)? {
                Decision::Confirmed(record) => self.run_delete(&record),
                Decision::Cancelled => {
                    tracing::debug!("delete cancelled");
                    None
                }
            };
        }
        if self.menu.is_some() {
            return self.handle_menu_key(key_msg);
        }
        if self.search.focused() {
            return self.handle_search_key(key_msg);
        }
        self.handle_table_key(key_msg)
    }

    fn handle_menu_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.menu_close.matches(key_msg) {
            self.close_menu();
        } else if self.keymap.row_up.matches(key_msg) {
            self.move_menu_cursor(-1);
        } else if self.keymap.row_down.matches(key_msg) {
            self.move_menu_cursor(1);
        } else if self.keymap.menu_select.matches(key_msg) {
            return self.activate_menu_entry();
        }
        None
    }

    fn handle_search_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.search_done.matches(key_msg) {
            self.search.blur();
            return None;
        }
        if self.search.handle_key(key_msg) {
            return self.search_changed();
        }
        None
    }

    fn handle_table_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.row_up.matches(key_msg) {
            self.move_cursor(-1);
        } else if self.keymap.row_down.matches(key_msg) {
            self.move_cursor(1);
        } else if self.keymap.open_row.matches(key_msg) {
            return self.click_row();
        } else if self.keymap.open_menu.matches(key_msg) {
            self.open_menu();
        } else if self.keymap.delete.matches(key_msg) {
            self.request_delete();
        } else if self.keymap.search.matches(key_msg) {
            self.focus_search();
        } else if self.keymap.next_column.matches(key_msg) {
            self.focus_column(1);
        } else if self.keymap.prev_column.matches(key_msg) {
            self.focus_column(-1);
        } else if self.keymap.sort.matches(key_msg) {
            let key = self.focused_column()?.to_string();
            return self.toggle_sort(&key);
        } else if self.keymap.next_filter.matches(key_msg) {
            self.focus_next_filter();
        } else if self.keymap.cycle_filter.matches(key_msg) {
            return self.cycle_filter();
        } else if self.keymap.clear_all.matches(key_msg) {
            return self.clear_all();
        } else if self.keymap.add.matches(key_msg) {
            return self.add();
        } else if self.keymap.refresh.matches(key_msg) {
            return self.refresh();
        } else if self.keymap.help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
        } else if let Some(page) = self.paginator.handle_key(key_msg, self.filtered_total()) {
            return self.change_page(page);
        }
        None
    }
}
