//! Delete confirmation.
//!
//! Deleting a row is two steps: a request stores a copy of the record and
//! opens the dialog, then the user either confirms (the stored copy is
//! handed back exactly once) or cancels. A second request while the dialog
//! is open replaces the stored record.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Where the confirmation flow is.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteState<R> {
    /// No deletion pending.
    Idle,
    /// Waiting for the user to confirm deleting this record.
    Confirming(R),
}

/// Outcome of a key press while the dialog is open.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision<R> {
    /// The user confirmed; carries the record to delete.
    Confirmed(R),
    /// The user dismissed the dialog.
    Cancelled,
}

/// Key bindings of the dialog.
#[derive(Debug, Clone)]
pub struct ConfirmKeyMap {
    /// Confirm. Default keys: 'y', Enter
    pub confirm: key::Binding,
    /// Cancel. Default keys: 'n', Esc
    pub cancel: key::Binding,
}

impl Default for ConfirmKeyMap {
    fn default() -> Self {
        Self {
            confirm: key::new_binding(vec![
                key::with_keys_str(&["y", "enter"]),
                key::with_help("y", "delete"),
            ]),
            cancel: key::new_binding(vec![
                key::with_keys_str(&["n", "esc"]),
                key::with_help("n/esc", "cancel"),
            ]),
        }
    }
}

impl KeyMapTrait for ConfirmKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.confirm, &self.cancel]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.confirm, &self.cancel]]
    }
}

/// Dialog styles.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Frame around the dialog.
    pub frame: Style,
    /// Dialog title.
    pub title: Style,
    /// Body text.
    pub message: Style,
    /// The destructive button.
    pub confirm_button: Style,
    /// The cancel button.
    pub cancel_button: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            frame: Style::new()
                .border_style(lipgloss::normal_border())
                .border_foreground(Color::from("#DC2626"))
                .padding(0, 1, 0, 1),
            title: Style::new().bold(true),
            message: Style::new().foreground(AdaptiveColor {
                Light: "#4B5563",
                Dark: "#D1D5DB",
            }),
            confirm_button: Style::new()
                .foreground(Color::from("#FFFFFF"))
                .background(Color::from("#DC2626"))
                .padding(0, 1, 0, 1),
            cancel_button: Style::new().reverse(true).padding(0, 1, 0, 1),
        }
    }
}

/// Delete confirmation dialog.
///
/// ```rust
/// use bubbletea_datatable::confirm::Model;
///
/// let mut dialog: Model<&str> = Model::new();
/// dialog.request("first");
/// dialog.request("second");
/// assert_eq!(dialog.confirm(), Some("second"));
/// assert_eq!(dialog.confirm(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Model<R> {
    /// Dialog title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Label of the destructive button.
    pub confirm_label: String,
    /// Label of the cancel button.
    pub cancel_label: String,
    /// Key bindings.
    pub keymap: ConfirmKeyMap,
    /// Styles.
    pub styles: Styles,
    state: DeleteState<R>,
}

impl<R> Default for Model<R> {
    fn default() -> Self {
        Self {
            title: "Confirm Deletion".to_string(),
            message: "Are you sure you want to delete this item? This action cannot be undone."
                .to_string(),
            confirm_label: "Delete".to_string(),
            cancel_label: "Cancel".to_string(),
            keymap: ConfirmKeyMap::default(),
            styles: Styles::default(),
            state: DeleteState::Idle,
        }
    }
}

impl<R> Model<R> {
    /// Idle dialog with default text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &DeleteState<R> {
        &self.state
    }

    /// True while the dialog is open.
    pub fn is_confirming(&self) -> bool {
        matches!(self.state, DeleteState::Confirming(_))
    }

    /// Record awaiting confirmation.
    pub fn target(&self) -> Option<&R> {
        match &self.state {
            DeleteState::Confirming(r) => Some(r),
            DeleteState::Idle => None,
        }
    }

    /// Opens the dialog for `record`, replacing any pending target.
    pub fn request(&mut self, record: R) {
        self.state = DeleteState::Confirming(record);
    }

    /// Closes the dialog without deleting. Returns true if it was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_confirming();
        self.state = DeleteState::Idle;
        was_open
    }

    /// Closes the dialog and hands back the record to delete.
    pub fn confirm(&mut self) -> Option<R> {
        match std::mem::replace(&mut self.state, DeleteState::Idle) {
            DeleteState::Confirming(r) => Some(r),
            DeleteState::Idle => None,
        }
    }

    /// Handles a key press while the dialog is open.
    pub fn update(&mut self, msg: &Msg) -> Option<Decision<R>> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        self.handle_key(key_msg)
    }

    pub(crate) fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Decision<R>> {
        if !self.is_confirming() {
            return None;
        }
        if self.keymap.confirm.matches(key_msg) {
            return self.confirm().map(Decision::Confirmed);
        }
        if self.keymap.cancel.matches(key_msg) {
            self.cancel();
            return Some(Decision::Cancelled);
        }
        None
    }

    /// Renders the dialog, or nothing when idle.
    pub fn view(&self) -> String {
        if !self.is_confirming() {
            return String::new();
        }
        let buttons = format!(
            "{}  {}",
            self.styles.cancel_button.render(&self.cancel_label),
            self.styles.confirm_button.render(&self.confirm_label)
        );
        let body = [
            self.styles.title.render(&self.title),
            String::new(),
            self.styles.message.render(&self.message),
            String::new(),
            buttons,
        ]
        .join("\n");
        self.styles.frame.render(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_confirm_hands_back_target_once() {
        let mut dialog = Model::new();
        assert!(!dialog.is_confirming());
        dialog.request(7_u32);
        assert_eq!(dialog.target(), Some(&7));
        assert_eq!(dialog.update(&key(KeyCode::Char('y'))), Some(Decision::Confirmed(7)));
        assert_eq!(dialog.state(), &DeleteState::Idle);
        assert_eq!(dialog.update(&key(KeyCode::Char('y'))), None);
    }

    #[test]
    fn test_cancel_drops_target() {
        let mut dialog = Model::new();
        dialog.request("job-1".to_string());
        assert_eq!(dialog.update(&key(KeyCode::Esc)), Some(Decision::Cancelled));
        assert!(dialog.target().is_none());
        assert!(!dialog.cancel());
    }

    #[test]
    fn test_request_replaces_target() {
        let mut dialog = Model::new();
        dialog.request(1);
        dialog.request(2);
        assert_eq!(dialog.confirm(), Some(2));
    }

    #[test]
    fn test_other_keys_keep_dialog_open() {
        let mut dialog = Model::new();
        dialog.request(1);
        assert_eq!(dialog.update(&key(KeyCode::Char('x'))), None);
        assert!(dialog.is_confirming());
    }

    #[test]
    fn test_view_only_when_open() {
        let mut dialog: Model<i32> = Model::new();
        assert!(dialog.view().is_empty());
        dialog.request(1);
        let plain = lipgloss::strip_ansi(&dialog.view());
        assert!(plain.contains("Confirm Deletion"));
        assert!(plain.contains("Delete"));
        assert!(plain.contains("Cancel"));
    }
}
