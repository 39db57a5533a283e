//! Loading spinner.
//!
//! The table shows this while its `loading` flag is set. Ticks are tagged
//! with the spinner's id and a sequence number so a tick scheduled by an
//! earlier loading phase can't double the animation speed of a later one.
//!
//! ```rust
//! use bubbletea_datatable::spinner::{Model, DOT};
//!
//! let mut spinner = Model::new().with_spinner(DOT.clone());
//! let msg: bubbletea_rs::Msg = Box::new(spinner.tick_msg());
//! assert!(spinner.update(&msg).is_some());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Animation frames and their rate.
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Frames to cycle through.
    pub frames: Vec<String>,
    /// Delay between frames.
    pub fps: Duration,
}

impl Spinner {
    /// Creates a spinner from frames and a frame delay.
    pub fn new(frames: Vec<String>, fps: Duration) -> Self {
        Self { frames, fps }
    }
}

fn frames(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// `| / - \`
pub static LINE: Lazy<Spinner> =
    Lazy::new(|| Spinner::new(frames(&["|", "/", "-", "\\"]), Duration::from_millis(100)));

/// Braille dots, the default loading indicator.
pub static DOT: Lazy<Spinner> = Lazy::new(|| {
    Spinner::new(
        frames(&["⣾ ", "⣽ ", "⣻ ", "⢿ ", "⡿ ", "⣟ ", "⣯ ", "⣷ "]),
        Duration::from_millis(100),
    )
});

/// Compact braille dots.
pub static MINI_DOT: Lazy<Spinner> = Lazy::new(|| {
    Spinner::new(
        frames(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        Duration::from_millis(83),
    )
});

/// Delivered to [`Model::update`] to advance one frame.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the spinner this tick belongs to.
    pub id: i64,
    tag: i64,
}

/// Spinner state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Frames and timing.
    pub spinner: Spinner,
    /// Style applied to the current frame.
    pub style: Style,
    frame: usize,
    id: i64,
    tag: i64,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// A [`DOT`] spinner with a fresh id.
    pub fn new() -> Self {
        Self {
            spinner: DOT.clone(),
            style: Style::new().foreground(Color::from("205")),
            frame: 0,
            id: next_id(),
            tag: 0,
        }
    }

    /// Sets the frames (builder pattern).
    pub fn with_spinner(mut self, spinner: Spinner) -> Self {
        self.spinner = spinner;
        self.frame = 0;
        self
    }

    /// Sets the style (builder pattern).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Unique id of this spinner.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// A tick message for the current sequence number.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Command delivering the next tick after one frame delay.
    pub fn tick(&self) -> Cmd {
        let msg = self.tick_msg();
        bubbletea_tick(self.spinner.fps, move |_| Box::new(msg.clone()) as Msg)
    }

    /// Advances on a matching tick and schedules the next one.
    ///
    /// Ticks addressed to another spinner, or carrying a stale sequence
    /// number, are dropped.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;
        if tick.id > 0 && tick.id != self.id {
            return None;
        }
        if tick.tag > 0 && tick.tag != self.tag {
            return None;
        }

        self.frame = (self.frame + 1) % self.spinner.frames.len().max(1);
        self.tag += 1;
        Some(self.tick())
    }

    /// Current frame, styled.
    pub fn view(&self) -> String {
        match self.spinner.frames.get(self.frame) {
            Some(frame) => self.style.render(frame),
            None => String::new(),
        }
    }
}
