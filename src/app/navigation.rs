//! Current-page selection, owned by the shell and fed to the router

use crate::error::UnknownPageError;
use crate::pages::{PageEntry, PageRegistry};
use crate::sink::DisplaySink;
use tracing::{debug, warn};

pub struct Navigator {
    registry: PageRegistry,
    current: &'static str,
}

impl Navigator {
    /// Start on `configured` if it names a page, otherwise on the first page
    pub fn new(registry: PageRegistry, configured: Option<&str>) -> Self {
        let current = match configured.map(|name| registry.resolve(name)) {
            Some(Ok(entry)) => entry.name,
            Some(Err(e)) => {
                warn!(error = %e, "Configured start page is unknown, using default");
                registry.default_entry().name
            }
            None => registry.default_entry().name,
        };
        debug!(page = current, "Initial page");
        Self { registry, current }
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn current(&self) -> &'static str {
        self.current
    }

    /// Switch to `name`. An unknown name leaves the current page in place.
    /// Returns whether the page changed.
    pub fn select(&mut self, name: &str) -> Result<bool, UnknownPageError> {
        let entry = self.registry.resolve(name)?;
        if entry.name == self.current {
            return Ok(false);
        }
        debug!(from = self.current, to = entry.name, "Page selected");
        self.current = entry.name;
        Ok(true)
    }

    /// Move `delta` places through the sidebar order. Returns whether the page changed.
    pub fn step(&mut self, delta: isize) -> bool {
        match self.registry.step(self.current, delta) {
            Ok(entry) if entry.name != self.current => {
                debug!(from = self.current, to = entry.name, "Page stepped");
                self.current = entry.name;
                true
            }
            Ok(_) => false,
            Err(e) => {
                warn!(error = %e, "Current page missing from registry");
                false
            }
        }
    }

    pub fn render(&self, sink: &mut dyn DisplaySink) -> Result<&PageEntry, UnknownPageError> {
        self.registry.render(self.current, sink)
    }
}
