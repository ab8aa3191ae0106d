//! Tab - one loaded page with shortcuts attached
//!
//! Ties together a parsed document, its location and a dispatcher, and
//! replays key presses the way a browser tab would deliver them.

use pagekeys_dom::Document;
use pagekeys_html::{HtmlParser, ParseError};

use crate::{KeyboardEvent, Location, LocationError, Navigation, PageState, ShortcutDispatcher};

/// Tab error
#[derive(Debug, thiserror::Error)]
pub enum TabError {
    #[error("failed to load page: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Location(#[from] LocationError),
}

/// A loaded page with its shortcut dispatcher
pub struct Tab {
    document: Document,
    location: Location,
    dispatcher: ShortcutDispatcher,
    /// Set once a shortcut navigated away; the document is stale after that
    navigated: Option<Navigation>,
}

impl Tab {
    /// Load `html` as the page at `url` and run the page-ready hook
    pub fn open(html: &str, url: &str, dispatcher: ShortcutDispatcher) -> Result<Self, TabError> {
        let location = Location::new(url)?;
        let mut document = HtmlParser::new().parse_with_url(html, location.href())?;

        let focused = dispatcher.on_ready(&mut document);
        tracing::debug!(url = %location.href(), focused, "Page ready");

        Ok(Self {
            document,
            location,
            dispatcher,
            navigated: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn dispatcher(&self) -> &ShortcutDispatcher {
        &self.dispatcher
    }

    /// The navigation that replaced this page, if any
    pub fn navigated(&self) -> Option<&Navigation> {
        self.navigated.as_ref()
    }

    /// Move focus to the element with `id`, like clicking into it
    pub fn focus_id(&mut self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(node) => self.document.focus(node),
            None => false,
        }
    }

    /// Drop focus back to the page body, like clicking the background
    pub fn blur(&mut self) {
        self.document.blur();
    }

    /// Press and release `c` with focus wherever it currently is.
    ///
    /// Only the event kind the dispatcher listens to is delivered.
    pub fn press(&mut self, c: char) -> Result<Option<Navigation>, TabError> {
        let event = self.document.key_event(self.dispatcher.profile().event_type(), c);
        self.dispatch(&event)
    }

    /// Deliver an arbitrary key event to the page
    pub fn dispatch(&mut self, event: &KeyboardEvent) -> Result<Option<Navigation>, TabError> {
        if self.navigated.is_some() {
            tracing::trace!("Key ignored: page already unloaded");
            return Ok(None);
        }

        let navigation = self
            .dispatcher
            .handle_key(&self.document, event, &mut self.location)?;
        if let Some(navigation) = &navigation {
            self.navigated = Some(navigation.clone());
        }
        Ok(navigation)
    }
}
