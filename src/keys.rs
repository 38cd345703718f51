//! Keybinding definitions for locscope
//!
//! All keybindings are defined here so the help panel and the status bar
//! stay in sync with input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (quit)
/// Note: Accept both 'c' and 'C' for terminal compatibility
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application (or close help)
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Toggle help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Clear the brush region (or close help)
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Time control keys
// =============================================================================

/// Step time bound back (vim style)
pub const TIME_BACK: KeyCode = KeyCode::Char('h');

/// Step time bound back (arrow key)
pub const TIME_BACK_ARROW: KeyCode = KeyCode::Left;

/// Step time bound forward (vim style)
pub const TIME_FORWARD: KeyCode = KeyCode::Char('l');

/// Step time bound forward (arrow key)
pub const TIME_FORWARD_ARROW: KeyCode = KeyCode::Right;

/// Jump back ten steps
pub const TIME_BACK_FAST: KeyCode = KeyCode::Char('H');

/// Jump forward ten steps
pub const TIME_FORWARD_FAST: KeyCode = KeyCode::Char('L');

/// Move the time bound to the first commit
pub const TIME_START: KeyCode = KeyCode::Home;

/// Move the time bound to the last commit
pub const TIME_END: KeyCode = KeyCode::End;

/// Check if key steps time back (h or ←)
pub fn is_time_back(code: KeyCode) -> bool {
    matches!(code, TIME_BACK | TIME_BACK_ARROW)
}

/// Check if key steps time forward (l or →)
pub fn is_time_forward(code: KeyCode) -> bool {
    matches!(code, TIME_FORWARD | TIME_FORWARD_ARROW)
}

// =============================================================================
// Narrative keys
// =============================================================================

/// Scroll narrative up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Scroll narrative up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Scroll narrative down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Scroll narrative down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Scroll narrative one page up
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Scroll narrative one page down
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Close help",
    },
    KeyBindEntry {
        key: "Ctrl+c",
        description: "Quit",
    },
    KeyBindEntry {
        key: "?",
        description: "Toggle help",
    },
];

/// Time control key bindings for help display
pub const TIME_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "h/l",
        description: "Time bound back/forward",
    },
    KeyBindEntry {
        key: "H/L",
        description: "Ten steps back/forward",
    },
    KeyBindEntry {
        key: "Home/End",
        description: "First/last commit",
    },
];

/// Narrative key bindings for help display
pub const NARRATIVE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Scroll down/up",
    },
    KeyBindEntry {
        key: "PgDn/PgUp",
        description: "Page down/up",
    },
    KeyBindEntry {
        key: "Wheel",
        description: "Scroll (over the story)",
    },
];

/// Scatter plot bindings for help display
pub const PLOT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Hover",
        description: "Show commit details",
    },
    KeyBindEntry {
        key: "Drag",
        description: "Select commits",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Clear selection",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_TIME: KeyHint = KeyHint {
    key: "h/l",
    label: "Time",
    color: Color::Yellow,
};
pub const HINT_SCROLL: KeyHint = KeyHint {
    key: "j/k",
    label: "Story",
    color: Color::Blue,
};
pub const HINT_BRUSH: KeyHint = KeyHint {
    key: "Drag",
    label: "Select",
    color: Color::Magenta,
};
pub const HINT_CLEAR: KeyHint = KeyHint {
    key: "Esc",
    label: "Clear",
    color: Color::Magenta,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_CLOSE: KeyHint = KeyHint {
    key: "q/?",
    label: "Close",
    color: Color::Red,
};

/// Context for dynamic hint selection
#[derive(Default)]
pub struct HintContext {
    /// A brush region is set
    pub has_brush: bool,
    /// Help overlay is open
    pub help_visible: bool,
}

/// Get the appropriate hints for the current context.
pub fn current_hints(ctx: &HintContext) -> Vec<KeyHint> {
    if ctx.help_visible {
        return vec![HINT_CLOSE];
    }
    let mut hints = vec![HINT_HELP, HINT_TIME, HINT_SCROLL];
    hints.push(if ctx.has_brush { HINT_CLEAR } else { HINT_BRUSH });
    hints.push(HINT_QUIT);
    hints
}
