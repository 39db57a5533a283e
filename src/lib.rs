#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-datatable/")]

//! # bubbletea-datatable
//!
//! A data table component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: search, enumerated column filters, sortable headers,
//! client or server pagination, per-row action menus and a delete
//! confirmation, over any record type.
//!
//! ## Overview
//!
//! The table is generic over a [`Record`](record::Record), anything that can
//! hand out a field by key. JSON objects are records out of the box. Columns
//! name the fields to show, filters name the fields to constrain, and the
//! table derives the visible rows from the records and its own UI state on
//! every render.
//!
//! The table performs no I/O. Deleting, adding, refreshing, opening a row
//! and changing pages call handlers supplied by the application, and the
//! commands they return are handed back from `update`.
//!
//! ## Quick start
//!
//! ```rust
//! use bubbletea_datatable::prelude::*;
//! use serde_json::json;
//!
//! let mut table = DataTable::new(
//!     vec![
//!         Column::new("title", "Title"),
//!         Column::new("company", "Company"),
//!         Column::new("status", "Status")
//!             .with_render(|r: &serde_json::Value| status_badge(&r.field("status").to_string()).render()),
//!     ],
//!     |r: &serde_json::Value| r["id"].to_string(),
//! )
//! .with_title("Jobs")
//! .with_search(vec!["title".into(), "company".into()])
//! .with_filters(vec![FilterSpec::new("status", "Status")
//!     .with_option("open", "Open")
//!     .with_option("closed", "Closed")])
//! .with_pagination(10)
//! .on_delete(|_job| None);
//!
//! table.set_records(vec![
//!     json!({"id": 1, "title": "Backend Engineer", "company": "Acme", "status": "open"}),
//!     json!({"id": 2, "title": "Data Analyst", "company": "Globex", "status": "closed"}),
//! ]);
//!
//! table.set_filter("status", FilterSelection::Only("open".into()));
//! assert_eq!(table.visible_rows().len(), 1);
//! let _screen = table.view();
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_datatable::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     table: DataTable<serde_json::Value>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut table = DataTable::new(
//!             vec![Column::new("name", "Name")],
//!             |r: &serde_json::Value| r["id"].to_string(),
//!         );
//!         let cmd = table.set_loading(true);
//!         (Self { table }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(nav) = msg.downcast_ref::<NavigateMsg>() {
//!             let _ = &nav.path;
//!             return None;
//!         }
//!         self.table.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.table.view()
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`table`] | The data table |
//! | [`record`], [`value`] | Record abstraction and field values |
//! | [`search`], [`filter`], [`sort`] | The query stages |
//! | [`paginator`] | Page state and page links |
//! | [`confirm`] | Delete confirmation dialog |
//! | [`badge`], [`datefmt`] | Cell helpers for status codes and dates |
//! | [`config`], [`theme`] | Declarative configuration and color themes |
//! | [`key`], [`help`], [`spinner`] | Key bindings, help line, loading spinner |

pub mod badge;
pub mod config;
pub mod confirm;
pub mod datefmt;
pub mod error;
pub mod filter;
pub mod help;
pub mod key;
pub mod paginator;
pub mod record;
pub mod search;
pub mod sort;
pub mod spinner;
pub mod table;
pub mod theme;
pub mod value;

use bubbletea_rs::Cmd;

/// Components that take keyboard focus.
///
/// The search box is the only focusable part of the table; the table routes
/// key presses to it while it is focused.
///
/// ```rust
/// use bubbletea_datatable::prelude::*;
///
/// let mut search = SearchInput::new();
/// assert!(!search.focused());
/// search.focus();
/// assert!(search.focused());
/// search.blur();
/// assert!(!search.focused());
/// ```
pub trait Component {
    /// Gives the component focus, returning a command to run if it needs one.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use badge::{status_badge, Badge, BadgeVariant, Status};
pub use config::{PaginationConfig, TableConfig};
pub use confirm::{Decision, DeleteState, Model as ConfirmDialog};
pub use datefmt::{format_date, parse_date};
pub use error::{Error, Result};
pub use filter::{ActiveFilters, FilterOption, FilterSelection, FilterSpec};
pub use help::Model as HelpModel;
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use paginator::{Model as Paginator, PaginationMode};
pub use record::Record;
pub use search::Model as SearchInput;
pub use sort::{SortDirection, SortState};
pub use spinner::{Model as Spinner, TickMsg as SpinnerTickMsg};
pub use table::Model as DataTable;
pub use table::{Action, ActionVariant, Align, Column, EmptyState, NavigateMsg, Navigator};
pub use theme::Theme;
pub use value::Value;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_datatable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::badge::{status_badge, Badge, BadgeVariant, Status};
    pub use crate::config::{PaginationConfig, TableConfig};
    pub use crate::datefmt::format_date;
    pub use crate::error::{Error, Result};
    pub use crate::filter::{FilterSelection, FilterSpec};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::paginator::PaginationMode;
    pub use crate::record::Record;
    pub use crate::search::Model as SearchInput;
    pub use crate::sort::{SortDirection, SortState};
    pub use crate::table::Model as DataTable;
    pub use crate::table::{
        Action, ActionVariant, Align, Column, EmptyState, MsgNavigator, NavigateMsg, Navigator,
    };
    pub use crate::theme::Theme;
    pub use crate::value::Value;
    pub use crate::Component;
}
