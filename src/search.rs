//! Search box and the free-text matcher behind it.
//!
//! The input is a minimal single-line editor (grapheme-aware cursor,
//! backspace/delete, home/end, `ctrl+u` to clear). Matching is a plain
//! case-insensitive substring test over a set of record fields: no
//! tokenization and no fuzzy scoring.

use crate::record::Record;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

/// Reports whether `record` matches `query`.
///
/// The query is trimmed; an empty query matches everything. Otherwise at
/// least one of `keys` must display-coerce to a string containing the query,
/// ignoring case.
///
/// ```rust
/// use bubbletea_datatable::search::matches;
/// use serde_json::json;
///
/// let keys = vec!["name".to_string()];
/// assert!(matches(&json!({"name": "Alpha"}), &keys, "AL"));
/// assert!(!matches(&json!({"name": "beta"}), &keys, "AL"));
/// assert!(matches(&json!({"name": "beta"}), &keys, "   "));
/// ```
pub fn matches<R: Record>(record: &R, keys: &[String], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    matches_lowered(record, keys, &needle)
}

/// Same as [`matches`] for a query that is already trimmed and lowercased.
pub(crate) fn matches_lowered<R: Record>(record: &R, keys: &[String], needle: &str) -> bool {
    keys.iter()
        .any(|key| record.field(key).to_string().to_lowercase().contains(needle))
}

/// Single-line search input.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text shown before the input.
    pub prompt: String,
    /// Text shown while the input is empty.
    pub placeholder: String,
    /// Style of the prompt.
    pub prompt_style: Style,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Style of the character under the cursor.
    pub cursor_style: Style,
    value: String,
    // Cursor position in graphemes.
    pos: usize,
    focus: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            prompt: "Search: ".to_string(),
            placeholder: "Search...".to_string(),
            prompt_style: Style::new().bold(true),
            placeholder_style: Style::new().faint(true),
            cursor_style: Style::new().reverse(true),
            value: String::new(),
            pos: 0,
            focus: false,
        }
    }
}

impl Model {
    /// Empty, unfocused input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder (builder pattern).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.pos = self.len();
    }

    /// Cursor position, in graphemes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Clears the text.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    fn len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn byte_offset(&self, grapheme: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.pos);
        self.value.insert(at, c);
        // A combining mark may merge into the previous grapheme.
        self.pos = self.value[..at + c.len_utf8()].graphemes(true).count();
    }

    fn delete_before(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        let start = self.byte_offset(self.pos - 1);
        let end = self.byte_offset(self.pos);
        self.value.replace_range(start..end, "");
        self.pos -= 1;
        true
    }

    fn delete_at(&mut self) -> bool {
        if self.pos >= self.len() {
            return false;
        }
        let start = self.byte_offset(self.pos);
        let end = self.byte_offset(self.pos + 1);
        self.value.replace_range(start..end, "");
        true
    }

    /// Handles a key press while focused. Returns true if the text changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        if !self.focus {
            return false;
        }
        let Some(key) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };
        self.handle_key(key)
    }

    pub(crate) fn handle_key(&mut self, key: &KeyMsg) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.key {
            KeyCode::Char('u') if ctrl => {
                let changed = !self.value.is_empty();
                self.reset();
                changed
            }
            KeyCode::Char('a') if ctrl => {
                self.pos = 0;
                false
            }
            KeyCode::Char('e') if ctrl => {
                self.pos = self.len();
                false
            }
            KeyCode::Char(c) if !ctrl => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => self.delete_before(),
            KeyCode::Delete => self.delete_at(),
            KeyCode::Left => {
                self.pos = self.pos.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.pos = (self.pos + 1).min(self.len());
                false
            }
            KeyCode::Home => {
                self.pos = 0;
                false
            }
            KeyCode::End => {
                self.pos = self.len();
                false
            }
            _ => false,
        }
    }

    /// Renders the prompt and text, with the cursor when focused.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);
        if self.value.is_empty() {
            let placeholder = self.placeholder_style.render(&self.placeholder);
            if self.focus {
                return format!("{prompt}{}{placeholder}", self.cursor_style.render(" "));
            }
            return format!("{prompt}{placeholder}");
        }
        if !self.focus {
            return format!("{prompt}{}", self.value);
        }

        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let before: String = graphemes[..self.pos].concat();
        let (under, after) = if self.pos < graphemes.len() {
            (graphemes[self.pos], graphemes[self.pos + 1..].concat())
        } else {
            (" ", String::new())
        };
        format!("{prompt}{before}{}{after}", self.cursor_style.render(under))
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.pos = self.len();
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
