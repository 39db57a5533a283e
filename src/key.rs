//! Type-safe key bindings shared by every component in this crate.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es under a single help entry.
//! Components keep their bindings in a key map struct and implement [`KeyMap`]
//! so the [`help`](crate::help) component can render them.
//!
//! ```rust
//! use bubbletea_datatable::key::{self, Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! let sort = Binding::new(vec![KeyCode::Char('s')]).with_help("s", "sort column");
//! let quit = key::new_binding(vec![
//!     key::with_keys_str(&["ctrl+c", "q"]),
//!     key::with_help("q", "quit"),
//! ]);
//!
//! struct Keys { sort: Binding, quit: Binding }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.sort, &self.quit]
//!     }
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.sort], vec![&self.quit]]
//!     }
//! }
//!
//! let keys = Keys { sort, quit };
//! assert_eq!(keys.short_help().len(), 2);
//! ```

use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl KeyPress {
    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        if self.mods == msg.modifiers {
            return true;
        }
        // Terminals report SHIFT alongside upper-case characters.
        self.mods.is_empty()
            && matches!(self.code, KeyCode::Char(_))
            && msg.modifiers == KeyModifiers::SHIFT
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↑/k"`.
    pub key: String,
    /// What the key does, e.g. `"up"`.
    pub desc: String,
}

/// A set of key presses that trigger the same action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible to [`KeyPress`].
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help entry (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Replaces the keys of this binding.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// Returns the key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help entry.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are hidden from help output.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Option applied by [`new_binding`].
pub enum BindingOpt {
    /// Sets the key presses.
    Keys(Vec<KeyPress>),
    /// Sets the help entry.
    Help(Help),
    /// Starts the binding disabled.
    Disabled,
}

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys = keys,
            BindingOpt::Help(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Sets the keys of a binding built with [`new_binding`].
pub fn with_keys<K: Into<KeyPress>>(keys: Vec<K>) -> BindingOpt {
    BindingOpt::Keys(keys.into_iter().map(Into::into).collect())
}

/// Sets the keys from strings such as `"ctrl+c"`, `"pgdown"` or `"G"`.
///
/// Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().filter_map(|k| parse_key_str(k)).collect())
}

/// Sets the help entry of a binding built with [`new_binding`].
pub fn with_help(key: impl Into<String>, desc: impl Into<String>) -> BindingOpt {
    BindingOpt::Help(Help {
        key: key.into(),
        desc: desc.into(),
    })
}

/// Starts a binding built with [`new_binding`] disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Parses a key description like `"ctrl+c"`, `"shift+tab"` or `"enter"`.
pub fn parse_key_str(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut parts: Vec<&str> = s.split('+').collect();
    // "+" on its own is a valid key.
    let last = if s.ends_with("++") || s == "+" {
        parts.truncate(parts.len().saturating_sub(2));
        "+"
    } else {
        parts.pop()?
    };
    for m in parts {
        match m.to_ascii_lowercase().as_str() {
            "ctrl" => mods |= KeyModifiers::CONTROL,
            "alt" => mods |= KeyModifiers::ALT,
            "shift" => mods |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match last.to_ascii_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" if mods.contains(KeyModifiers::SHIFT) => {
            mods.remove(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdown" | "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = last.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(KeyPress { code, mods })
}

/// Reports whether a message is a key press matching any of the bindings.
pub fn matches(msg: &Msg, bindings: &[&Binding]) -> bool {
    msg.downcast_ref::<KeyMsg>()
        .is_some_and(|key_msg| matches_binding(key_msg, bindings))
}

/// Reports whether a key message matches any of the bindings.
pub fn matches_binding(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Key bindings a component exposes to the help view.
///
/// `short_help` feeds the single-line view; `full_help` returns columns of
/// related bindings for the expanded view.
pub trait KeyMap {
    /// Bindings for the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
