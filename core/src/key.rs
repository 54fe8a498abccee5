//! Classification of raw input characters into keypad events.

/// Send key: ends decoding.
pub const TERMINATOR: char = '#';
/// Star key: deletes the last decoded letter.
pub const BACKSPACE: char = '*';
/// Pause between two groups on the same key.
pub const SEPARATOR: char = ' ';

/// Key event types the decoder reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Digit key press ('0'..='9')
    Press(char),
    /// Explicit pause, closes the open group
    Separator,
    /// Star key
    Backspace,
    /// Hash key
    Terminator,
    /// Anything else; skipped without touching the open group
    Ignored(char),
}

impl KeyEvent {
    /// Classify a single input character. Total over `char`.
    pub fn from_char(ch: char) -> Self {
        match ch {
            TERMINATOR => KeyEvent::Terminator,
            BACKSPACE => KeyEvent::Backspace,
            SEPARATOR => KeyEvent::Separator,
            '0'..='9' => KeyEvent::Press(ch),
            other => KeyEvent::Ignored(other),
        }
    }
}

impl From<char> for KeyEvent {
    fn from(ch: char) -> Self {
        Self::from_char(ch)
    }
}
