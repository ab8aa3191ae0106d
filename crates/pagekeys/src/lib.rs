//! pagekeys - keyboard shortcuts for listing pages
//!
//! A [`ShortcutDispatcher`] reads an explicit page ([`PageState`]) and turns
//! single keystrokes into navigations:
//!
//! - `n` opens the add page,
//! - `h` goes home,
//! - `1`-`9` follow the Nth heading link of the listing.
//!
//! Typing into a text input never triggers a shortcut, and loading a page
//! moves focus to its auto-focus element.
//!
//! # Example
//! ```rust
//! use pagekeys::{ShortcutDispatcher, Tab};
//!
//! let html = r#"<table class="torrents"><tr class="torrentheadings"></tr>
//!     <tr><td><a class="torrentheading" href="/t/1">one</a></td></tr></table>"#;
//! let mut tab = Tab::open(html, "http://localhost/", ShortcutDispatcher::default()).unwrap();
//! let nav = tab.press('1').unwrap().unwrap();
//! assert_eq!(tab.location().href(), "http://localhost/t/1");
//! assert_eq!(nav.target, "/t/1");
//! ```

mod config;
mod dispatcher;
mod key;
mod location;
mod page;
mod profile;
mod tab;

pub use config::{ConfigError, PageLayout, Routes, ShortcutConfig};
pub use dispatcher::{Navigation, ShortcutAction, ShortcutDispatcher};
pub use key::{decode_key_code, KeyboardEvent, KeyboardEventType};
pub use location::{Location, LocationError, Navigator};
pub use page::PageState;
pub use profile::{ParseProfileError, Profile};
pub use tab::{Tab, TabError};

// Re-export the page model for callers building documents by hand
pub use pagekeys_dom as dom;
pub use pagekeys_html as html;
