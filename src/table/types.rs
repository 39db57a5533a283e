//! Declarations a table is built from: columns, row actions, empty-state
//! text and the navigation seam.

use crate::record::Record;
use bubbletea_rs::{Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::fmt;

/// Custom cell renderer.
pub type RenderFn<R> = Box<dyn Fn(&R) -> String + Send + Sync>;
/// Handler receiving a record, returning the side effect to run.
pub type RecordHandler<R> = Box<dyn Fn(&R) -> Option<Cmd> + Send + Sync>;
/// Handler without arguments (add, refresh).
pub type Handler = Box<dyn Fn() -> Option<Cmd> + Send + Sync>;
/// Handler receiving the newly selected 1-based page.
pub type PageHandler = Box<dyn Fn(usize) -> Option<Cmd> + Send + Sync>;
/// Extracts the stable identity of a record.
pub type KeyFn<R> = Box<dyn Fn(&R) -> String + Send + Sync>;
/// Maps a record to the path its row links to.
pub type LinkFn<R> = Box<dyn Fn(&R) -> Option<String> + Send + Sync>;
/// Decides per record whether an action is unavailable.
pub type PredicateFn<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

/// A table column.
///
/// Cells show `record.field(key)` unless a renderer is attached. Sorting
/// always uses the raw field under `key`, so a column with a synthetic key
/// and a custom renderer sorts as if every value were null.
pub struct Column<R> {
    /// Record field this column shows and sorts by.
    pub key: String,
    /// Header text.
    pub header: String,
    /// `Some(false)` opts the column out of sorting.
    pub sortable: Option<bool>,
    /// Fixed width in cells; `None` fits the content.
    pub width: Option<usize>,
    /// Alignment of header and cells.
    pub align: Align,
    /// Extra style for the header cell.
    pub header_style: Option<Style>,
    /// Extra style for body cells.
    pub cell_style: Option<Style>,
    render: Option<RenderFn<R>>,
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}

impl<R: Record> Column<R> {
    /// Column showing the field `key` under `header`.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: None,
            width: None,
            align: Align::Left,
            header_style: None,
            cell_style: None,
            render: None,
        }
    }

    /// Attaches a custom cell renderer (builder pattern).
    pub fn with_render(mut self, render: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Opts the column in or out of sorting (builder pattern).
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = Some(sortable);
        self
    }

    /// Fixes the column width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the alignment (builder pattern).
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Sets the header style (builder pattern).
    pub fn with_header_style(mut self, style: Style) -> Self {
        self.header_style = Some(style);
        self
    }

    /// Sets the cell style (builder pattern).
    pub fn with_cell_style(mut self, style: Style) -> Self {
        self.cell_style = Some(style);
        self
    }

    /// Text of this column's cell for `record`.
    pub fn cell_text(&self, record: &R) -> String {
        match &self.render {
            Some(render) => render(record),
            None => record.field(&self.key).to_string(),
        }
    }

    /// Whether the header sorts, given the table-wide switch.
    pub fn is_sortable(&self, table_sortable: bool) -> bool {
        table_sortable && self.sortable != Some(false)
    }
}

/// Visual weight of an action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionVariant {
    /// Regular entry.
    #[default]
    Default,
    /// Drawn in the danger color.
    Destructive,
}

/// An entry in a row's action menu.
pub struct Action<R> {
    /// Menu text.
    pub label: String,
    /// Optional glyph before the label.
    pub icon: Option<String>,
    /// Visual weight.
    pub variant: ActionVariant,
    on_click: RecordHandler<R>,
    disabled: Option<PredicateFn<R>>,
}

impl<R> fmt::Debug for Action<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("variant", &self.variant)
            .field("conditionally_disabled", &self.disabled.is_some())
            .finish()
    }
}

impl<R> Action<R> {
    /// Action invoking `on_click` with the row's record.
    pub fn new(
        label: impl Into<String>,
        on_click: impl Fn(&R) -> Option<Cmd> + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            icon: None,
            variant: ActionVariant::Default,
            on_click: Box::new(on_click),
            disabled: None,
        }
    }

    /// Sets the icon (builder pattern).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Marks the action destructive (builder pattern).
    pub fn destructive(mut self) -> Self {
        self.variant = ActionVariant::Destructive;
        self
    }

    /// Disables the action for records matching `predicate` (builder pattern).
    pub fn with_disabled(mut self, predicate: impl Fn(&R) -> bool + Send + Sync + 'static) -> Self {
        self.disabled = Some(Box::new(predicate));
        self
    }

    /// Whether the action is unavailable for `record`.
    pub fn is_disabled(&self, record: &R) -> bool {
        self.disabled.as_ref().is_some_and(|p| p(record))
    }

    /// Menu text including the icon.
    pub fn display_label(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{icon} {}", self.label),
            None => self.label.clone(),
        }
    }

    pub(crate) fn invoke(&self, record: &R) -> Option<Cmd> {
        (self.on_click)(record)
    }
}

/// What the table shows when there is nothing to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Glyph above the message.
    pub icon: String,
    /// Message text.
    pub message: String,
    /// Call to action, shown when an add handler is attached.
    pub action_label: Option<String>,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            icon: "📭".to_string(),
            message: "No data available".to_string(),
            action_label: None,
        }
    }
}

/// Entries of an open row menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// The action at this index.
    Action(usize),
    /// Divider before the delete entry.
    Separator,
    /// Opens the delete confirmation.
    Delete,
}

impl MenuEntry {
    pub(crate) fn selectable(self) -> bool {
        !matches!(self, MenuEntry::Separator)
    }
}

/// Turns a path into the command that navigates there.
///
/// The table never routes by itself; activating a linked row hands the
/// path to the navigator and returns whatever command it produces.
pub trait Navigator: Send + Sync {
    /// Command navigating to `path`.
    fn navigate(&self, path: &str) -> Option<Cmd>;
}

/// Emitted by [`MsgNavigator`] for the host application to route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigateMsg {
    /// Destination path.
    pub path: String,
}

/// Navigator that emits a [`NavigateMsg`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgNavigator;

impl Navigator for MsgNavigator {
    fn navigate(&self, path: &str) -> Option<Cmd> {
        let path = path.to_string();
        Some(Box::pin(async move { Some(Box::new(NavigateMsg { path }) as Msg) }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_column_default_and_custom_render() {
        let plain: Column<serde_json::Value> = Column::new("salary", "Salary");
        let custom = Column::new("salary", "Salary")
            .with_render(|r: &serde_json::Value| format!("${}", r.field("salary")));
        let row = json!({"salary": 5000});
        assert_eq!(plain.cell_text(&row), "5000");
        assert_eq!(custom.cell_text(&row), "$5000");
        assert_eq!(plain.cell_text(&json!({})), "");
    }

    #[test]
    fn test_effective_sortability() {
        let col: Column<serde_json::Value> = Column::new("a", "A");
        assert!(col.is_sortable(true));
        assert!(!col.is_sortable(false));
        let off: Column<serde_json::Value> = Column::new("a", "A").sortable(false);
        assert!(!off.is_sortable(true));
    }

    #[test]
    fn test_action_disabled_predicate() {
        let action: Action<serde_json::Value> = Action::new("Close", |_: &serde_json::Value| None)
            .with_icon("✕")
            .with_disabled(|r| r.field("status").to_string() == "closed");
        assert!(action.is_disabled(&json!({"status": "closed"})));
        assert!(!action.is_disabled(&json!({"status": "open"})));
        assert_eq!(action.display_label(), "✕ Close");
    }

    #[tokio::test]
    async fn test_msg_navigator_emits_path() {
        let cmd = MsgNavigator.navigate("/jobs/7").expect("command");
        let msg = cmd.await.expect("message");
        let nav = msg.downcast_ref::<NavigateMsg>().expect("navigate msg");
        assert_eq!(nav.path, "/jobs/7");
    }
}
