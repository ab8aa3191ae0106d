//! Shortcut dispatch
//!
//! Maps one keystroke on a page to at most one navigation. Anything the page
//! does not support (no focus target, no listing, a digit past the last
//! heading) is a silent no-op.

use crate::{KeyboardEvent, Navigator, PageLayout, PageState, Profile, Routes, ShortcutConfig};

/// What a shortcut asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// `n`
    AddPage,
    /// `h`
    Home,
    /// A digit; holds the 1-based heading position
    Heading(usize),
}

/// A navigation decided by the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub action: ShortcutAction,
    /// URL to assign to the location, possibly relative
    pub target: String,
}

/// Keyboard shortcut dispatcher
#[derive(Debug, Clone, Default)]
pub struct ShortcutDispatcher {
    profile: Profile,
    layout: PageLayout,
    routes: Routes,
}

impl ShortcutDispatcher {
    /// Dispatcher with the default page layout and routes
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn from_config(config: ShortcutConfig) -> Self {
        Self {
            profile: config.profile,
            layout: config.layout,
            routes: config.routes,
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    /// Page-ready hook: focus the auto-focus element if the page has one.
    ///
    /// Returns whether focus moved.
    pub fn on_ready<P: PageState>(&self, page: &mut P) -> bool {
        match page.element_by_id(&self.layout.autofocus_id) {
            Some(target) => page.focus(target),
            None => false,
        }
    }

    /// Decide what a key event should do, without doing it
    pub fn resolve<P: PageState>(&self, page: &P, event: &KeyboardEvent) -> Option<Navigation> {
        if event.event_type != self.profile.event_type() {
            return None;
        }
        if !self.profile.accepts_target(&event.target_tag) {
            tracing::trace!(target_tag = %event.target_tag, "Key ignored: focus guard");
            return None;
        }
        let key = event.decoded_char().filter(|c| !c.is_whitespace())?;

        let navigation = match self.profile {
            Profile::KeyDown => self.resolve_key_down(page, key),
            Profile::KeyUp => (key == 'n').then(|| self.add_page()),
        };
        if navigation.is_none() {
            tracing::trace!(%key, profile = %self.profile, "Key has no shortcut");
        }
        navigation
    }

    /// Resolve a key event and carry out the navigation it asks for
    pub fn handle_key<P, N>(
        &self,
        page: &P,
        event: &KeyboardEvent,
        navigator: &mut N,
    ) -> Result<Option<Navigation>, N::Error>
    where
        P: PageState,
        N: Navigator,
    {
        let Some(navigation) = self.resolve(page, event) else {
            return Ok(None);
        };
        tracing::debug!(action = ?navigation.action, to = %navigation.target, "Shortcut fired");
        navigator.navigate(&navigation.target)?;
        Ok(Some(navigation))
    }

    fn resolve_key_down<P: PageState>(&self, page: &P, key: char) -> Option<Navigation> {
        match key {
            'n' => Some(self.add_page()),
            'h' => Some(Navigation {
                action: ShortcutAction::Home,
                target: self.routes.home.clone(),
            }),
            _ => {
                let digit = key.to_digit(10)? as usize;
                if !page.has_class(&self.layout.listing_class) {
                    return None;
                }
                self.heading(page, digit)
            }
        }
    }

    /// Heading link at 1-based `position`
    fn heading<P: PageState>(&self, page: &P, position: usize) -> Option<Navigation> {
        let index = position.checked_sub(1)?;
        let headings = page.find_in(&self.layout.container_class, &self.layout.heading_class);
        let Some(&heading) = headings.get(index) else {
            tracing::trace!(position, available = headings.len(), "No heading at position");
            return None;
        };
        let Some(href) = page.attribute(heading, "href") else {
            tracing::warn!(position, "Heading link has no href");
            return None;
        };
        Some(Navigation {
            action: ShortcutAction::Heading(position),
            target: href.to_string(),
        })
    }

    fn add_page(&self) -> Navigation {
        Navigation {
            action: ShortcutAction::AddPage,
            target: self.routes.add.clone(),
        }
    }
}
