//! Page state and the page-link control under the table.
//!
//! Pages are 1-based. The paginator knows whether the rows it is given are
//! the complete result set ([`PaginationMode::Client`], sliced here) or a
//! single page fetched remotely ([`PaginationMode::Server`], never sliced).
//! Page links are windowed: first, last and the current page with its
//! neighbours, with gaps in between.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use lipgloss_extras::prelude::*;
use serde::{Deserialize, Serialize};

/// Where the rows being paginated come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// The table holds the full result set and slices it per page.
    #[default]
    Client,
    /// The table holds one page; `total_count` is the remote total.
    Server {
        /// Number of records across all remote pages.
        total_count: usize,
    },
}

/// How the control is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// `‹ Prev  1 … 4 5 6 … 20  Next ›`
    #[default]
    Links,
    /// `5/20`
    Arabic,
    /// `○ ○ ● ○` (one dot per page, for short tables).
    Dots,
}

/// One slot in the windowed page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A selectable page number.
    Page(usize),
    /// Elided pages.
    Gap,
}

/// Key bindings for page navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// Styles for the link control.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The current page number.
    pub active_page: Style,
    /// Other page numbers.
    pub inactive_page: Style,
    /// Prev/Next when they can't be used.
    pub disabled: Style,
    /// Prev/Next when usable.
    pub nav: Style,
    /// The `…` gap marker.
    pub gap: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            active_page: Style::new().bold(true).reverse(true),
            inactive_page: Style::new().foreground(AdaptiveColor {
                Light: "#847A85",
                Dark: "#979797",
            }),
            disabled: Style::new().faint(true),
            nav: Style::new(),
            gap: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
        }
    }
}

/// Pagination state.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datatable::paginator::{Model, PageItem};
///
/// let mut pages = Model::new(10);
/// assert_eq!(pages.total_pages(95), 10);
///
/// pages.set_page(2);
/// assert_eq!(pages.slice_bounds(25), (10, 20));
///
/// pages.set_page(10);
/// assert_eq!(
///     pages.page_items(95),
///     vec![
///         PageItem::Page(1),
///         PageItem::Gap,
///         PageItem::Page(6),
///         PageItem::Page(7),
///         PageItem::Page(8),
///         PageItem::Page(9),
///         PageItem::Page(10),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Whether pagination applies at all.
    pub enabled: bool,
    /// Client- or server-side paging.
    pub mode: PaginationMode,
    /// Drawing style.
    pub paginator_type: Type,
    /// Pages shown on each side of the current one.
    pub siblings: usize,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
    /// Styles.
    pub styles: Styles,
    page_size: usize,
    page: usize,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: PaginationMode::Client,
            paginator_type: Type::Links,
            siblings: 1,
            keymap: PaginatorKeyMap::default(),
            styles: Styles::default(),
            page_size: 10,
            page: 1,
        }
    }
}

impl Model {
    /// Enabled client-side paginator with `page_size` rows per page (minimum 1).
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// A paginator that shows every row on one page.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Sets the mode (builder pattern).
    pub fn with_mode(mut self, mode: PaginationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the drawing style (builder pattern).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sets rows per page; values below 1 become 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Sets the current page as given; 0 is read as 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Number of records being paged over.
    ///
    /// In client mode that's the number of rows left after search and
    /// filtering; in server mode the remote total.
    pub fn total_items(&self, local_len: usize) -> usize {
        match self.mode {
            PaginationMode::Client => local_len,
            PaginationMode::Server { total_count } => total_count,
        }
    }

    /// Number of pages, at least 1.
    pub fn total_pages(&self, local_len: usize) -> usize {
        self.total_items(local_len).div_ceil(self.page_size).max(1)
    }

    /// Clamps the current page into `1..=total_pages`. Returns true if it moved.
    pub fn clamp(&mut self, local_len: usize) -> bool {
        let clamped = self.page.clamp(1, self.total_pages(local_len));
        let moved = clamped != self.page;
        self.page = clamped;
        moved
    }

    /// Slice of the local rows that belong on the current page.
    ///
    /// Server mode and disabled pagination keep every local row.
    pub fn slice_bounds(&self, local_len: usize) -> (usize, usize) {
        if !self.enabled || matches!(self.mode, PaginationMode::Server { .. }) {
            return (0, local_len);
        }
        let start = (self.page - 1).saturating_mul(self.page_size).min(local_len);
        let end = start.saturating_add(self.page_size).min(local_len);
        (start, end)
    }

    /// True on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// True on (or past) the last page.
    pub fn on_last_page(&self, local_len: usize) -> bool {
        self.page >= self.total_pages(local_len)
    }

    /// Whether the control should be drawn.
    ///
    /// Only when enabled, when there is more than one page of records, when
    /// nothing is loading and when the current page has rows.
    pub fn visible(&self, local_len: usize, rows_on_page: usize, loading: bool) -> bool {
        self.enabled && self.total_items(local_len) > self.page_size && !loading && rows_on_page > 0
    }

    /// Target of a page selection: `page` clamped into range, or `None` if it
    /// equals the current page.
    pub fn select(&self, page: usize, local_len: usize) -> Option<usize> {
        let target = page.clamp(1, self.total_pages(local_len));
        (target != self.page).then_some(target)
    }

    /// Target of Prev, or `None` on the first page.
    pub fn prev(&self, local_len: usize) -> Option<usize> {
        if self.on_first_page() {
            return None;
        }
        self.select(self.page - 1, local_len)
    }

    /// Target of Next, or `None` on the last page.
    pub fn next(&self, local_len: usize) -> Option<usize> {
        if self.on_last_page(local_len) {
            return None;
        }
        self.select(self.page + 1, local_len)
    }

    /// Maps a key press to a page target without changing state.
    pub fn update(&self, msg: &Msg, local_len: usize) -> Option<usize> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        self.handle_key(key_msg, local_len)
    }

    pub(crate) fn handle_key(&self, key_msg: &KeyMsg, local_len: usize) -> Option<usize> {
        if !self.enabled {
            return None;
        }
        if self.keymap.next_page.matches(key_msg) {
            self.next(local_len)
        } else if self.keymap.prev_page.matches(key_msg) {
            self.prev(local_len)
        } else {
            None
        }
    }

    /// Windowed list of page links for the current page.
    pub fn page_items(&self, local_len: usize) -> Vec<PageItem> {
        let total = self.total_pages(local_len);
        let current = self.page.clamp(1, total);
        let s = self.siblings;
        // first + last + current + siblings + two gaps
        let slots = 2 * s + 5;
        if total <= slots {
            return (1..=total).map(PageItem::Page).collect();
        }

        let left = current.saturating_sub(s).max(2);
        let right = current.saturating_add(s).min(total - 1);
        let left_gap = left > 2;
        let right_gap = right < total - 1;

        let mut items = Vec::with_capacity(slots);
        match (left_gap, right_gap) {
            (false, true) => {
                items.extend((1..=3 + 2 * s).map(PageItem::Page));
                items.push(PageItem::Gap);
                items.push(PageItem::Page(total));
            }
            (true, false) => {
                items.push(PageItem::Page(1));
                items.push(PageItem::Gap);
                items.extend((total - (2 + 2 * s)..=total).map(PageItem::Page));
            }
            _ => {
                items.push(PageItem::Page(1));
                items.push(PageItem::Gap);
                items.extend((left..=right).map(PageItem::Page));
                items.push(PageItem::Gap);
                items.push(PageItem::Page(total));
            }
        }
        items
    }

    /// Renders the control.
    pub fn view(&self, local_len: usize) -> String {
        match self.paginator_type {
            Type::Links => self.links_view(local_len),
            Type::Arabic => format!("{}/{}", self.page, self.total_pages(local_len)),
            Type::Dots => self.dots_view(local_len),
        }
    }

    fn links_view(&self, local_len: usize) -> String {
        let prev_style = if self.on_first_page() {
            &self.styles.disabled
        } else {
            &self.styles.nav
        };
        let next_style = if self.on_last_page(local_len) {
            &self.styles.disabled
        } else {
            &self.styles.nav
        };

        let mut parts = vec![prev_style.render("‹ Prev")];
        for item in self.page_items(local_len) {
            parts.push(match item {
                PageItem::Page(p) if p == self.page => {
                    self.styles.active_page.render(&format!(" {p} "))
                }
                PageItem::Page(p) => self.styles.inactive_page.render(&p.to_string()),
                PageItem::Gap => self.styles.gap.render("…"),
            });
        }
        parts.push(next_style.render("Next ›"));
        parts.join(" ")
    }

    fn dots_view(&self, local_len: usize) -> String {
        (1..=self.total_pages(local_len))
            .map(|p| if p == self.page { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn pages(items: &[PageItem]) -> String {
        items
            .iter()
            .map(|i| match i {
                PageItem::Page(p) => p.to_string(),
                PageItem::Gap => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_client_slicing() {
        let mut m = Model::new(10);
        m.set_page(2);
        assert_eq!(m.slice_bounds(25), (10, 20));
        m.set_page(3);
        assert_eq!(m.slice_bounds(25), (20, 25));
        // Past the end yields an empty slice rather than panicking.
        m.set_page(9);
        assert_eq!(m.slice_bounds(25), (25, 25));
    }

    #[test]
    fn test_server_mode_never_slices() {
        let mut m = Model::new(10).with_mode(PaginationMode::Server { total_count: 95 });
        m.set_page(4);
        assert_eq!(m.slice_bounds(10), (0, 10));
        assert_eq!(m.total_pages(10), 10);
        assert!(!m.on_last_page(10));
    }

    #[test]
    fn test_disabled_keeps_everything() {
        let m = Model::disabled();
        assert_eq!(m.slice_bounds(42), (0, 42));
        assert!(!m.visible(42, 42, false));
    }

    #[test]
    fn test_visibility_rules() {
        let m = Model::new(10);
        assert!(m.visible(11, 10, false));
        assert!(!m.visible(10, 10, false));
        assert!(!m.visible(11, 10, true));
        assert!(!m.visible(11, 0, false));
    }

    #[test]
    fn test_prev_next_gating() {
        let mut m = Model::new(10);
        assert_eq!(m.prev(30), None);
        assert_eq!(m.next(30), Some(2));
        m.set_page(3);
        assert_eq!(m.next(30), None);
        assert_eq!(m.prev(30), Some(2));
    }

    #[test]
    fn test_select_clamps() {
        let m = Model::new(10);
        assert_eq!(m.select(99, 30), Some(3));
        assert_eq!(m.select(0, 30), None);
        assert_eq!(m.select(1, 30), None);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut m = Model::new(10);
        m.set_page(5);
        assert!(m.clamp(12));
        assert_eq!(m.page(), 2);
        assert!(!m.clamp(12));
        assert!(m.clamp(0) || m.page() == 1);
        assert_eq!(m.page(), 1);
    }

    #[test]
    fn test_windowed_links() {
        let mut m = Model::new(10);
        assert_eq!(pages(&m.page_items(70)), "1 2 3 4 5 6 7");
        assert_eq!(pages(&m.page_items(200)), "1 2 3 4 5 … 20");
        m.set_page(10);
        assert_eq!(pages(&m.page_items(200)), "1 … 9 10 11 … 20");
        m.set_page(19);
        assert_eq!(pages(&m.page_items(200)), "1 … 16 17 18 19 20");
        m.set_page(4);
        assert_eq!(pages(&m.page_items(200)), "1 … 3 4 5 … 20");
    }

    #[test]
    fn test_window_size_is_bounded() {
        let mut m = Model::new(1);
        for page in [1, 2, 500, 9_999, 10_000] {
            m.set_page(page);
            assert!(m.page_items(10_000).len() <= 2 * m.siblings + 5);
        }
    }

    #[test]
    fn test_key_navigation() {
        let m = Model::new(10);
        let right: Msg = Box::new(KeyMsg {
            key: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
        });
        let left: Msg = Box::new(KeyMsg {
            key: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(m.update(&right, 30), Some(2));
        assert_eq!(m.update(&left, 30), None);
    }

    #[test]
    fn test_views() {
        let mut m = Model::new(10).with_type(Type::Arabic);
        m.set_page(2);
        assert_eq!(m.view(50), "2/5");
        m.paginator_type = Type::Dots;
        assert_eq!(m.view(50), "○ ● ○ ○ ○");
        m.paginator_type = Type::Links;
        let plain = lipgloss_extras::lipgloss::strip_ansi(&m.view(50));
        assert!(plain.starts_with("‹ Prev"));
        assert!(plain.ends_with("Next ›"));
        assert!(plain.contains(" 2 "));
    }

    #[test]
    fn test_mode_serde() {
        let mode: PaginationMode =
            serde_json::from_str(r#"{"server":{"total_count":120}}"#).expect("mode");
        assert_eq!(mode, PaginationMode::Server { total_count: 120 });
        let mode: PaginationMode = serde_json::from_str(r#""client""#).expect("mode");
        assert_eq!(mode, PaginationMode::Client);
    }
}
