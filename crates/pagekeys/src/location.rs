//! Location API
//!
//! The `window.location` side of navigation: assigning a target replaces the
//! current page with a full load of the new URL.

use url::Url;

/// Location error
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Anything that can carry out a navigation
pub trait Navigator {
    type Error;

    /// Load `target`, which may be relative to the current page
    fn navigate(&mut self, target: &str) -> Result<(), Self::Error>;
}

/// Location state
#[derive(Debug, Clone)]
pub struct Location {
    url: Url,
    /// Every URL loaded, the initial one first
    history: Vec<Url>,
}

impl Location {
    pub fn new(url_str: &str) -> Result<Self, LocationError> {
        let url = Url::parse(url_str).map_err(|source| LocationError::InvalidUrl {
            url: url_str.to_string(),
            source,
        })?;
        Ok(Self {
            history: vec![url.clone()],
            url,
        })
    }

    /// Full URL
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Set href (navigate).
    ///
    /// Relative targets resolve against the current URL.
    pub fn assign(&mut self, target: &str) -> Result<(), LocationError> {
        let next = self.url.join(target).map_err(|source| LocationError::InvalidUrl {
            url: target.to_string(),
            source,
        })?;
        tracing::info!(from = %self.url, to = %next, "Navigating");
        self.history.push(next.clone());
        self.url = next;
        Ok(())
    }

    /// Pathname
    pub fn pathname(&self) -> &str {
        self.url.path()
    }

    /// URLs loaded in this location, oldest first
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(Url::as_str)
    }

    /// Number of navigations since the initial load
    pub fn navigations(&self) -> usize {
        self.history.len() - 1
    }
}

impl Navigator for Location {
    type Error = LocationError;

    fn navigate(&mut self, target: &str) -> Result<(), LocationError> {
        self.assign(target)
    }
}
