//! Keyboard Events
//!
//! Key events as the page sees them: a legacy character code plus the tag
//! of the element that had focus when the key was hit.

/// Keyboard event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEventType {
    KeyDown,
    KeyUp,
}

/// Keyboard event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub event_type: KeyboardEventType,
    /// Legacy `which`/`keyCode` value
    pub key_code: u32,
    /// Lowercased tag name of the event target
    pub target_tag: String,
}

impl KeyboardEvent {
    /// Create a new keyboard event
    pub fn new(event_type: KeyboardEventType, key_code: u32, target_tag: &str) -> Self {
        Self {
            event_type,
            key_code,
            target_tag: target_tag.to_ascii_lowercase(),
        }
    }

    /// Build the event a physical key press for `c` would produce.
    ///
    /// Key events report letters by their uppercase code (`n` is 78), so
    /// ASCII letters are uppercased; every other char keeps its code point.
    pub fn from_char(event_type: KeyboardEventType, c: char, target_tag: &str) -> Self {
        Self::new(event_type, c.to_ascii_uppercase() as u32, target_tag)
    }

    /// Key code decoded to a lowercase character
    pub fn decoded_char(&self) -> Option<char> {
        decode_key_code(self.key_code)
    }
}

/// Decode a key code the way `String.fromCharCode(code).toLowerCase()` does.
///
/// The code is truncated to a UTF-16 unit; lone surrogates decode to `None`.
pub fn decode_key_code(code: u32) -> Option<char> {
    let unit = code & 0xFFFF;
    char::from_u32(unit)?.to_lowercase().next()
}
