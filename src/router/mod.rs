//! Page routing module.
//!
//! Maps the current page of a session to exactly one page handler.

mod error;

pub use error::RouterError;

use crate::error::AppError;
use crate::pages::{self, Document, PageView, RenderContext};
use crate::state::{NavigationState, Page, StateError};
use log::*;

/// Oversees dispatch from the navigation state to a page handler.
///
#[derive(Clone)]
pub struct Router {
    handlers: Vec<&'static dyn PageView>,
}

impl Default for Router {
    fn default() -> Self {
        Router {
            handlers: vec![
                &pages::overview::PAGE,
                &pages::cloud::PAGE,
                &pages::local::PAGE,
                &pages::architecture::PAGE,
            ],
        }
    }
}

impl Router {
    /// Return a router with a custom set of handlers.
    ///
    pub fn with_handlers(handlers: Vec<&'static dyn PageView>) -> Self {
        Router { handlers }
    }

    /// Return the handler registered for the page.
    ///
    pub fn handler_for(&self, page: Page) -> Result<&'static dyn PageView, RouterError> {
        self.handlers
            .iter()
            .copied()
            .find(|handler| handler.page() == page)
            .ok_or(RouterError::MissingPageHandler(page))
    }

    /// Render whatever page the navigation state points at.
    ///
    pub fn render(
        &self,
        nav: &NavigationState,
        ctx: &RenderContext,
    ) -> Result<Document, RouterError> {
        let page = nav.current();
        let handler = self.handler_for(page)?;
        debug!("Rendering page '{}'...", page);
        Ok(handler.render(ctx))
    }

    /// Set the page and render it straight away, so a caller never holds a
    /// document for a page other than the current one.
    ///
    pub fn navigate_to<P>(
        &self,
        nav: &mut NavigationState,
        page: P,
        ctx: &RenderContext,
    ) -> Result<Document, AppError>
    where
        P: TryInto<Page>,
        StateError: From<P::Error>,
    {
        let from = nav.current();
        nav.set(page)?;
        info!("Navigating from '{}' to '{}'", from, nav.current());
        Ok(self.render(nav, ctx)?)
    }
}
