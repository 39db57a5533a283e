//! Data table state and operations.

use super::keys::TableKeyMap;
use super::pipeline::{self, Projection, Query};
use super::style::TableStyles;
use super::types::{
    Action, Column, EmptyState, Handler, KeyFn, LinkFn, MenuEntry, MsgNavigator, Navigator,
    PageHandler, RecordHandler,
};
use crate::config::TableConfig;
use crate::confirm;
use crate::error::Result;
use crate::filter::{ActiveFilters, FilterSelection, FilterSpec};
use crate::help;
use crate::paginator::{self, PaginationMode};
use crate::record::Record;
use crate::search;
use crate::sort::{self, SortState};
use crate::spinner;
use crate::theme::Theme;
use crate::Component;
use bubbletea_rs::Cmd;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct MenuState {
    // Index into `records`.
    pub(super) record: usize,
    // Index into the menu entries; never a separator.
    pub(super) cursor: usize,
}

/// A searchable, filterable, sortable, paginated table of records.
///
/// The table owns the records it was last given and the UI state around
/// them (search text, filters, sort, page, cursor, open menu, pending
/// delete). Everything it shows is derived from those on each render.
/// Interactions call the handlers attached by the caller and return the
/// commands they produce; the table performs no I/O itself.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datatable::table::{Action, Column, Model};
/// use bubbletea_datatable::filter::FilterSpec;
/// use serde_json::json;
///
/// let mut table = Model::new(
///     vec![
///         Column::new("title", "Title"),
///         Column::new("status", "Status"),
///     ],
///     |r: &serde_json::Value| r["id"].to_string(),
/// )
/// .with_search(vec!["title".into()])
/// .with_filters(vec![FilterSpec::new("status", "Status")
///     .with_option("open", "Open")
///     .with_option("closed", "Closed")])
/// .with_pagination(10)
/// .with_actions(vec![Action::new("Edit", |_| None)])
/// .on_delete(|_| None);
///
/// table.set_records(vec![
///     json!({"id": 1, "title": "Backend Engineer", "status": "open"}),
///     json!({"id": 2, "title": "Data Analyst", "status": "closed"}),
/// ]);
/// table.set_search("engineer");
/// assert_eq!(table.visible_rows().len(), 1);
/// ```
pub struct Model<R> {
    records: Vec<R>,
    pub(super) columns: Vec<Column<R>>,
    pub(super) actions: Vec<Action<R>>,
    row_key: KeyFn<R>,

    /// Heading above the table.
    pub title: Option<String>,
    /// Text and icon shown when there are no rows.
    pub empty_state: EmptyState,
    /// Key bindings.
    pub keymap: TableKeyMap,
    /// Help view.
    pub help: help::Model,
    /// Whether the help line is drawn.
    pub show_help: bool,
    /// Styles; set from the theme, adjustable afterwards.
    pub styles: TableStyles,

    pub(super) searchable: bool,
    search_keys: Vec<String>,
    pub(super) search: search::Model,
    pub(super) filterable: bool,
    pub(super) filter_specs: Vec<FilterSpec>,
    pub(super) filters: ActiveFilters,
    pub(super) filter_focus: usize,
    pub(super) sortable: bool,
    pub(super) sort: Option<SortState>,
    pub(super) column_focus: usize,
    pub(super) paginator: paginator::Model,
    pub(super) loading: bool,
    pub(super) spinner: spinner::Model,
    theme: Theme,

    on_delete: Option<RecordHandler<R>>,
    pub(super) on_add: Option<Handler>,
    on_refresh: Option<Handler>,
    on_row_click: Option<RecordHandler<R>>,
    on_page_change: Option<PageHandler>,
    navigator: Box<dyn Navigator>,
    row_link: Option<LinkFn<R>>,

    pub(super) confirm: confirm::Model<R>,
    pub(super) menu: Option<MenuState>,
    pub(super) cursor: usize,
}

impl<R: Record + Clone + Send + Sync + 'static> Model<R> {
    /// Table with `columns`, identifying records with `row_key`.
    ///
    /// Starts without search, filters or pagination, with sorting enabled
    /// and the default theme.
    pub fn new(
        columns: Vec<Column<R>>,
        row_key: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            records: Vec::new(),
            columns,
            actions: Vec::new(),
            row_key: Box::new(row_key),
            title: None,
            empty_state: EmptyState::default(),
            keymap: TableKeyMap::default(),
            help: help::Model::new(),
            show_help: true,
            styles: TableStyles::default(),
            searchable: false,
            search_keys: Vec::new(),
            search: search::Model::new(),
            filterable: true,
            filter_specs: Vec::new(),
            filters: ActiveFilters::new(),
            filter_focus: 0,
            sortable: true,
            sort: None,
            column_focus: 0,
            paginator: paginator::Model::disabled(),
            loading: false,
            spinner: spinner::Model::new(),
            theme: Theme::Default,
            on_delete: None,
            on_add: None,
            on_refresh: None,
            on_row_click: None,
            on_page_change: None,
            navigator: Box::new(MsgNavigator),
            row_link: None,
            confirm: confirm::Model::new(),
            menu: None,
            cursor: 0,
        }
    }

    /// Applies a validated [`TableConfig`].
    ///
    /// Fails if the configuration names unknown columns, repeats keys or
    /// asks for a zero page size.
    pub fn try_with_config(mut self, config: TableConfig) -> Result<Self> {
        let keys: Vec<&str> = self.columns.iter().map(|c| c.key.as_str()).collect();
        config.validate(&keys)?;

        self.title = config.title;
        self.searchable = config.searchable;
        self.search_keys = config.search_keys;
        self.search.placeholder = config.search_placeholder;
        self.filterable = config.filterable;
        self.filter_specs = config.filters;
        self.sortable = config.sortable;
        self.paginator = match config.pagination {
            Some(p) => paginator::Model::new(p.page_size).with_mode(p.mode),
            None => paginator::Model::disabled(),
        };
        self.empty_state.message = config.empty_message;
        self.empty_state.icon = config.empty_icon;
        self.empty_state.action_label = config.add_label;
        self.show_help = config.show_help;
        Ok(self.with_theme(config.theme))
    }

    /// Enables search over `keys` (builder pattern).
    pub fn with_search(mut self, keys: Vec<String>) -> Self {
        self.searchable = true;
        self.search_keys = keys;
        self
    }

    /// Sets the search placeholder (builder pattern).
    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search.placeholder = placeholder.into();
        self
    }

    /// Declares filters (builder pattern).
    pub fn with_filters(mut self, filters: Vec<FilterSpec>) -> Self {
        self.filter_specs = filters;
        self
    }

    /// Turns filtering on or off (builder pattern).
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Turns header sorting on or off (builder pattern).
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Client-side pagination with `page_size` rows per page (builder pattern).
    pub fn with_pagination(mut self, page_size: usize) -> Self {
        self.paginator = paginator::Model::new(page_size);
        self
    }

    /// Server-side pagination over `total_count` remote records (builder pattern).
    pub fn with_server_pagination(mut self, page_size: usize, total_count: usize) -> Self {
        self.paginator = paginator::Model::new(page_size)
            .with_mode(PaginationMode::Server { total_count });
        self
    }

    /// Sets the row actions (builder pattern).
    pub fn with_actions(mut self, actions: Vec<Action<R>>) -> Self {
        self.actions = actions;
        self
    }

    /// Sets the title (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the theme and derives the styles from it (builder pattern).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self.styles = TableStyles::from_theme(theme);
        self
    }

    /// Sets the empty state (builder pattern).
    pub fn with_empty_state(mut self, empty_state: EmptyState) -> Self {
        self.empty_state = empty_state;
        self
    }

    /// Attaches the delete handler, run after confirmation (builder pattern).
    pub fn on_delete(mut self, f: impl Fn(&R) -> Option<Cmd> + Send + Sync + 'static) -> Self {
        self.on_delete = Some(Box::new(f));
        self
    }

    /// Attaches the add handler (builder pattern).
    pub fn on_add(mut self, f: impl Fn() -> Option<Cmd> + Send + Sync + 'static) -> Self {
        self.on_add = Some(Box::new(f));
        self
    }

    /// Attaches the refresh handler (builder pattern).
    pub fn on_refresh(mut self, f: impl Fn() -> Option<Cmd> + Send + Sync + 'static) -> Self {
        self.on_refresh = Some(Box::new(f));
        self
    }

    /// Attaches the row click handler (builder pattern).
    pub fn on_row_click(mut self, f: impl Fn(&R) -> Option<Cmd> + Send + Sync + 'static) -> Self {
        self.on_row_click = Some(Box::new(f));
        self
    }

    /// Attaches the page change handler (builder pattern).
    pub fn on_page_change(mut self, f: impl Fn(usize) -> Option<Cmd> + Send + Sync + 'static) -> Self {
        self.on_page_change = Some(Box::new(f));
        self
    }

    /// Links rows to paths, opened through the navigator (builder pattern).
    pub fn with_row_link(
        mut self,
        f: impl Fn(&R) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.row_link = Some(Box::new(f));
        self
    }

    /// Replaces the default [`MsgNavigator`] (builder pattern).
    pub fn with_navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Box::new(navigator);
        self
    }

    // ---- data -----------------------------------------------------------

    /// All records, in the order they were given.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Replaces the records.
    ///
    /// The highlighted row stays on the same record when it is still on
    /// the page. In client mode a page past the new end is pulled back to
    /// the last page, which notifies the page change handler.
    pub fn set_records(&mut self, records: Vec<R>) -> Option<Cmd> {
        let selected = self.selected_key();
        self.records = records;
        self.menu = None;
        tracing::debug!(count = self.records.len(), "records replaced");

        let mut cmd = None;
        if self.paginator.enabled && self.paginator.mode == PaginationMode::Client {
            let total = self.filtered_total();
            let target = self.paginator.page().clamp(1, self.paginator.total_pages(total));
            cmd = self.change_page(target);
        }

        let rows = self.projection().rows;
        self.cursor = selected
            .and_then(|key| rows.iter().position(|&i| (self.row_key)(&self.records[i]) == key))
            .unwrap_or_else(|| self.cursor.min(rows.len().saturating_sub(1)));
        cmd
    }

    /// Identity of `record` as given by the key extractor.
    pub fn row_key(&self, record: &R) -> String {
        (self.row_key)(record)
    }

    /// Whether the loading placeholder is shown.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Shows or hides the loading placeholder. Starting returns the
    /// spinner's first tick.
    pub fn set_loading(&mut self, loading: bool) -> Option<Cmd> {
        let started = loading && !self.loading;
        self.loading = loading;
        if loading {
            self.menu = None;
        }
        started.then(|| self.spinner.tick())
    }

    /// Updates the remote total in server mode; ignored in client mode.
    pub fn set_total_count(&mut self, total_count: usize) {
        if let PaginationMode::Server { .. } = self.paginator.mode {
            self.paginator.mode = PaginationMode::Server { total_count };
        }
    }

    /// Current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.paginator.page()
    }

    /// Sets the current page without notifying the page change handler.
    pub fn set_current_page(&mut self, page: usize) {
        self.paginator.set_page(page);
        self.cursor = 0;
        self.menu = None;
    }

    /// Page state.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Maximum width of the help line; 0 disables truncation.
    pub fn set_width(&mut self, width: usize) {
        self.help.width = width;
    }

    // ---- projection -----------------------------------------------------

    fn query(&self) -> Query<'_> {
        Query {
            search: self.searchable.then(|| self.search.value()),
            search_keys: &self.search_keys,
            filters: self.filterable.then_some(&self.filters),
            sort: if self.sortable { self.sort.as_ref() } else { None },
        }
    }

    /// Rows on the current page and the filtered total.
    pub fn projection(&self) -> Projection {
        pipeline::project(&self.records, &self.query(), &self.paginator)
    }

    /// Records on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<&R> {
        self.projection()
            .rows
            .into_iter()
            .map(|i| &self.records[i])
            .collect()
    }

    /// Number of local records left after search and filtering.
    pub fn filtered_total(&self) -> usize {
        let unpaged = paginator::Model::disabled();
        pipeline::project(&self.records, &self.query(), &unpaged).filtered_total
    }

    /// Number of records paged over: the filtered count in client mode, the
    /// remote total in server mode.
    pub fn total_items(&self) -> usize {
        self.paginator.total_items(self.filtered_total())
    }

    /// Number of pages.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.filtered_total())
    }

    /// Position of the highlighted row on the page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn selected_index(&self) -> Option<usize> {
        self.projection().rows.get(self.cursor).copied()
    }

    /// The highlighted record.
    pub fn selected_record(&self) -> Option<&R> {
        self.selected_index().map(|i| &self.records[i])
    }

    /// Identity of the highlighted record.
    pub fn selected_key(&self) -> Option<String> {
        self.selected_record().map(|r| (self.row_key)(r))
    }

    /// Moves the row cursor by `delta`, staying on the page.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.projection().rows.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    // ---- search, filters, sort -------------------------------------------

    /// Current search text.
    pub fn search_value(&self) -> &str {
        self.search.value()
    }

    /// Replaces the search text. A change sends the table back to page 1.
    pub fn set_search(&mut self, text: impl Into<String>) -> Option<Cmd> {
        let text = text.into();
        if text == self.search.value() {
            return None;
        }
        self.search.set_value(text);
        self.search_changed()
    }

    pub(super) fn search_changed(&mut self) -> Option<Cmd> {
        tracing::debug!(query = %self.search.value(), "search changed");
        self.reset_page()
    }

    /// Declared filters.
    pub fn filter_specs(&self) -> &[FilterSpec] {
        &self.filter_specs
    }

    /// Current selections.
    pub fn active_filters(&self) -> &ActiveFilters {
        &self.filters
    }

    /// Selection of the filter on `key`.
    pub fn filter_selection(&self, key: &str) -> &FilterSelection {
        self.filters.get(key)
    }

    /// Sets the filter on `key`. A change sends the table back to page 1.
    ///
    /// Keys without a declared filter are ignored.
    pub fn set_filter(&mut self, key: &str, selection: FilterSelection) -> Option<Cmd> {
        if !self.filter_specs.iter().any(|s| s.key == key) {
            tracing::debug!(key, "no filter declared for key");
            return None;
        }
        if self.filters.get(key) == &selection {
            return None;
        }
        tracing::debug!(key, selection = ?selection, "filter changed");
        self.filters.set(key, selection);
        self.reset_page()
    }

    /// Advances the focused filter to its next option.
    pub fn cycle_filter(&mut self) -> Option<Cmd> {
        if !self.filterable {
            return None;
        }
        let spec = self.filter_specs.get(self.filter_focus)?;
        let key = spec.key.clone();
        let next = spec.next_selection(self.filters.get(&key));
        self.set_filter(&key, next)
    }

    /// Moves filter focus to the next declared filter.
    pub fn focus_next_filter(&mut self) {
        if !self.filter_specs.is_empty() {
            self.filter_focus = (self.filter_focus + 1) % self.filter_specs.len();
        }
    }

    /// Active sort, if any.
    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Cycles the sort of column `key`: ascending, descending, off.
    ///
    /// Does nothing for unknown or non-sortable columns. A change sends the
    /// table back to page 1.
    pub fn toggle_sort(&mut self, key: &str) -> Option<Cmd> {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.key == key && c.is_sortable(self.sortable));
        if !sortable {
            tracing::trace!(key, "column is not sortable");
            return None;
        }
        self.sort = sort::next_sort(self.sort.as_ref(), key);
        tracing::debug!(
            key,
            direction = ?self.sort.as_ref().map(|s| s.direction),
            "sort changed"
        );
        self.reset_page()
    }

    /// Moves column focus by `delta`, wrapping around.
    pub fn focus_column(&mut self, delta: isize) {
        let len = self.columns.len() as isize;
        if len > 0 {
            self.column_focus = (self.column_focus as isize + delta).rem_euclid(len) as usize;
        }
    }

    /// Key of the focused column.
    pub fn focused_column(&self) -> Option<&str> {
        self.columns.get(self.column_focus).map(|c| c.key.as_str())
    }

    /// Whether there is anything for "clear all" to reset.
    pub fn clear_all_visible(&self) -> bool {
        !self.search.value().is_empty() || self.filters.is_active() || self.sort.is_some()
    }

    /// Resets search, filters and sort in one step.
    pub fn clear_all(&mut self) -> Option<Cmd> {
        if !self.clear_all_visible() {
            return None;
        }
        self.search.reset();
        self.filters.clear();
        self.sort = None;
        tracing::debug!("search, filters and sort cleared");
        self.reset_page()
    }

    // ---- pages ----------------------------------------------------------

    /// Selects `page`, clamped into range, and notifies the page handler.
    pub fn select_page(&mut self, page: usize) -> Option<Cmd> {
        let target = self.paginator.select(page, self.filtered_total())?;
        self.change_page(target)
    }

    /// Moves to the next page, if there is one.
    pub fn next_page(&mut self) -> Option<Cmd> {
        let target = self.paginator.next(self.filtered_total())?;
        self.change_page(target)
    }

    /// Moves to the previous page, if there is one.
    pub fn prev_page(&mut self) -> Option<Cmd> {
        let target = self.paginator.prev(self.filtered_total())?;
        self.change_page(target)
    }

    pub(super) fn change_page(&mut self, page: usize) -> Option<Cmd> {
        let from = self.paginator.page();
        if page == from {
            return None;
        }
        self.paginator.set_page(page);
        self.cursor = 0;
        self.menu = None;
        tracing::debug!(from, to = page, "page changed");
        self.on_page_change.as_ref().and_then(|f| f(page))
    }

    fn reset_page(&mut self) -> Option<Cmd> {
        self.cursor = 0;
        self.menu = None;
        self.change_page(1)
    }

    // ---- rows -----------------------------------------------------------

    /// Whether the highlighted row responds to activation.
    pub fn rows_clickable(&self) -> bool {
        self.on_row_click.is_some() || self.row_link.is_some()
    }

    /// Activates the highlighted row.
    ///
    /// Runs the row click handler; without one, opens the row's link
    /// through the navigator.
    pub fn click_row(&self) -> Option<Cmd> {
        if self.loading {
            return None;
        }
        let record = self.selected_record()?;
        if let Some(on_click) = &self.on_row_click {
            tracing::debug!(row = %(self.row_key)(record), "row clicked");
            return on_click(record);
        }
        let path = self.row_link.as_ref().and_then(|link| link(record))?;
        tracing::debug!(path = %path, "navigating");
        self.navigator.navigate(&path)
    }

    /// Whether rows get an action menu.
    pub fn has_row_menu(&self) -> bool {
        !self.actions.is_empty() || self.on_delete.is_some()
    }

    /// Entries of a row menu: the actions, then a separator and the delete
    /// entry when a delete handler is attached.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        let mut entries: Vec<MenuEntry> = (0..self.actions.len()).map(MenuEntry::Action).collect();
        if self.on_delete.is_some() {
            if !entries.is_empty() {
                entries.push(MenuEntry::Separator);
            }
            entries.push(MenuEntry::Delete);
        }
        entries
    }

    /// Opens the highlighted row's menu. Returns true if it opened.
    pub fn open_menu(&mut self) -> bool {
        if self.loading || !self.has_row_menu() {
            return false;
        }
        let Some(record) = self.selected_index() else {
            return false;
        };
        self.menu = Some(MenuState { record, cursor: 0 });
        true
    }

    /// Closes the row menu.
    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    /// Whether a row menu is open.
    pub fn menu_open(&self) -> bool {
        self.menu.is_some()
    }

    /// Entry under the menu cursor.
    pub fn menu_selection(&self) -> Option<MenuEntry> {
        let menu = self.menu?;
        self.menu_entries().get(menu.cursor).copied()
    }

    /// Moves the menu cursor by `delta`, skipping separators.
    pub fn move_menu_cursor(&mut self, delta: isize) {
        let entries = self.menu_entries();
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        let mut pos = menu.cursor as isize;
        loop {
            pos += delta;
            if pos < 0 || pos >= entries.len() as isize {
                return;
            }
            if entries[pos as usize].selectable() {
                menu.cursor = pos as usize;
                return;
            }
        }
    }

    /// Runs the entry under the menu cursor.
    ///
    /// Actions run with the menu's record and close the menu; a disabled
    /// action does nothing and leaves the menu open. The delete entry opens
    /// the confirmation dialog.
    pub fn activate_menu_entry(&mut self) -> Option<Cmd> {
        let menu = self.menu?;
        let entry = self.menu_entries().get(menu.cursor).copied()?;
        let record = self.records.get(menu.record)?;
        match entry {
            MenuEntry::Action(i) => {
                let action = self.actions.get(i)?;
                if action.is_disabled(record) {
                    tracing::debug!(action = %action.label, "ignored disabled action");
                    return None;
                }
                tracing::debug!(
                    action = %action.label,
                    row = %(self.row_key)(record),
                    "action invoked"
                );
                let cmd = action.invoke(record);
                self.menu = None;
                cmd
            }
            MenuEntry::Delete => {
                let record = record.clone();
                self.menu = None;
                self.request_delete_record(record);
                None
            }
            MenuEntry::Separator => None,
        }
    }

    // ---- delete -----------------------------------------------------------

    /// Opens the delete confirmation for the highlighted row.
    pub fn request_delete(&mut self) -> bool {
        if self.loading || self.on_delete.is_none() {
            return false;
        }
        match self.selected_record().cloned() {
            Some(record) => {
                self.request_delete_record(record);
                true
            }
            None => false,
        }
    }

    /// Opens the delete confirmation for `record`, replacing any pending one.
    pub fn request_delete_record(&mut self, record: R) {
        if self.on_delete.is_none() {
            return;
        }
        tracing::debug!(row = %(self.row_key)(&record), "delete requested");
        self.confirm.request(record);
    }

    /// Record awaiting delete confirmation.
    pub fn delete_target(&self) -> Option<&R> {
        self.confirm.target()
    }

    /// Confirms the pending delete, running the delete handler once.
    pub fn confirm_delete(&mut self) -> Option<Cmd> {
        let record = self.confirm.confirm()?;
        self.run_delete(&record)
    }

    /// Dismisses the pending delete.
    pub fn cancel_delete(&mut self) {
        if self.confirm.cancel() {
            tracing::debug!("delete cancelled");
        }
    }

    pub(super) fn run_delete(&self, record: &R) -> Option<Cmd> {
        tracing::debug!(row = %(self.row_key)(record), "delete confirmed");
        self.on_delete.as_ref().and_then(|f| f(record))
    }

    // ---- add / refresh ----------------------------------------------------

    /// Runs the add handler.
    pub fn add(&self) -> Option<Cmd> {
        let f = self.on_add.as_ref()?;
        tracing::debug!("add requested");
        f()
    }

    /// Runs the refresh handler.
    pub fn refresh(&self) -> Option<Cmd> {
        let f = self.on_refresh.as_ref()?;
        tracing::debug!("refresh requested");
        f()
    }

    pub(super) fn has_refresh(&self) -> bool {
        self.on_refresh.is_some()
    }

    pub(super) fn has_delete(&self) -> bool {
        self.on_delete.is_some()
    }

    // ---- search focus -----------------------------------------------------

    /// Focuses the search box, if search is enabled.
    pub fn focus_search(&mut self) {
        if self.searchable {
            self.search.focus();
        }
    }

    /// Whether the search box has focus.
    pub fn search_focused(&self) -> bool {
        self.search.focused()
    }
}
