//! Dispatcher profiles
//!
//! Two variants of the shortcut handler exist in the wild. Each is a named
//! profile here rather than a merged behaviour.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::KeyboardEventType;

/// Which key event the dispatcher listens to, and what it does with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Key-down handler: skipped while an `<input>` has focus; handles
    /// `n`, `h` and heading digits.
    #[default]
    KeyDown,
    /// Key-up handler: only fires when focus is on `<body>`; handles `n` only.
    KeyUp,
}

impl Profile {
    /// The event kind this profile is attached to
    pub fn event_type(self) -> KeyboardEventType {
        match self {
            Self::KeyDown => KeyboardEventType::KeyDown,
            Self::KeyUp => KeyboardEventType::KeyUp,
        }
    }

    /// Whether a key event targeting `tag` is handled at all
    pub fn accepts_target(self, tag: &str) -> bool {
        match self {
            Self::KeyDown => !tag.eq_ignore_ascii_case("input"),
            Self::KeyUp => tag.eq_ignore_ascii_case("body"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown profile name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown profile `{0}` (expected `keydown` or `keyup`)")]
pub struct ParseProfileError(String);

impl FromStr for Profile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keydown" => Ok(Self::KeyDown),
            "keyup" => Ok(Self::KeyUp),
            _ => Err(ParseProfileError(s.to_string())),
        }
    }
}
