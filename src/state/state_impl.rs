use super::navigation::{Focus, NavigationState, Page};
use super::StateError;
use crate::config::Config;
use crate::content::Locale;
use crate::error::AppError;
use crate::logger::LogBuffer;
use crate::pages::{Document, RenderContext};
use crate::router::Router;
use crate::tables::Tables;
use crate::ui::Theme;
use log::*;
use ratatui::widgets::ListState;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lines moved by a page-up or page-down.
///
pub const PAGE_SCROLL: u16 = 10;

/// Houses everything one session shows and reacts to.
///
pub struct State {
    nav: NavigationState,
    router: Router,
    tables: Arc<Tables>,
    locale: Locale,
    theme: Theme,
    focus: Focus,
    sidebar: ListState,
    document: Document,
    scroll: u16,
    content_height: usize,
    viewport_height: usize,
    log_visible: bool,
    log: LogBuffer,
    images_dir: PathBuf,
}

impl State {
    /// Return a new session on the Overview page, already rendered.
    ///
    pub fn new(tables: Arc<Tables>, config: &Config, log: LogBuffer) -> Result<State, AppError> {
        Self::with_router(Router::default(), tables, config, log)
    }

    /// Same as `new` but dispatching through the given router.
    ///
    pub fn with_router(
        router: Router,
        tables: Arc<Tables>,
        config: &Config,
        log: LogBuffer,
    ) -> Result<State, AppError> {
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', falling back to default",
                config.theme_name
            );
            Theme::default()
        });
        let nav = NavigationState::default();
        let document = router.render(
            &nav,
            &RenderContext {
                strings: config.locale.strings(),
                tables: &tables,
            },
        )?;
        let mut sidebar = ListState::default();
        sidebar.select(Some(nav.current().index()));
        Ok(State {
            nav,
            router,
            tables,
            locale: config.locale,
            theme,
            focus: Focus::Sidebar,
            sidebar,
            document,
            scroll: 0,
            content_height: 0,
            viewport_height: 0,
            log_visible: false,
            log,
            images_dir: config.images_dir.clone(),
        })
    }

    pub fn current_page(&self) -> Page {
        self.nav.current()
    }

    /// Return the document of the current page.
    ///
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    pub fn log_buffer(&self) -> &LogBuffer {
        &self.log
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    /// Move to the page and render it. On failure the previous page and
    /// document stay in place. The sidebar mirrors the page either way.
    ///
    pub fn navigate_to<P>(&mut self, page: P, trigger: &str) -> Result<(), AppError>
    where
        P: TryInto<Page>,
        StateError: From<P::Error>,
    {
        let previous = self.nav.clone();
        let ctx = RenderContext {
            strings: self.locale.strings(),
            tables: &self.tables,
        };
        let result = match self.router.navigate_to(&mut self.nav, page, &ctx) {
            Ok(document) => {
                debug!("Navigation triggered by {}", trigger);
                self.document = document;
                self.scroll = 0;
                Ok(())
            }
            Err(e) => {
                self.nav = previous;
                Err(e)
            }
        };
        self.sidebar.select(Some(self.nav.current().index()));
        result
    }

    /// Render the current page again, keeping the scroll position.
    ///
    pub fn rerender(&mut self) -> Result<(), AppError> {
        let ctx = RenderContext {
            strings: self.locale.strings(),
            tables: &self.tables,
        };
        self.document = self.router.render(&self.nav, &ctx)?;
        Ok(())
    }

    pub fn sidebar_selected(&self) -> Option<usize> {
        self.sidebar.selected()
    }

    pub fn sidebar_state(&mut self) -> &mut ListState {
        &mut self.sidebar
    }

    /// Bring the page in line with the sidebar. The sidebar value wins and
    /// the page is rendered again. Returns whether anything changed.
    ///
    pub fn reconcile_sidebar(&mut self) -> Result<bool, AppError> {
        match self.sidebar.selected() {
            Some(index) if index != self.nav.current().index() => {
                self.navigate_to(index, "sidebar")?;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => {
                self.sidebar.select(Some(self.nav.current().index()));
                Ok(false)
            }
        }
    }

    /// Select the next sidebar row, wrapping around, and follow it.
    ///
    pub fn select_sidebar_next(&mut self) -> Result<(), AppError> {
        let index = (self.nav.current().index() + 1) % Page::ALL.len();
        self.sidebar.select(Some(index));
        self.reconcile_sidebar().map(|_| ())
    }

    /// Select the previous sidebar row, wrapping around, and follow it.
    ///
    pub fn select_sidebar_prev(&mut self) -> Result<(), AppError> {
        let count = Page::ALL.len();
        let index = (self.nav.current().index() + count - 1) % count;
        self.sidebar.select(Some(index));
        self.reconcile_sidebar().map(|_| ())
    }

    /// Follow the button of the current page. Returns false when the page
    /// has no button.
    ///
    pub fn press_button(&mut self) -> Result<bool, AppError> {
        let target = self.document.buttons().next().map(|(_, target)| target);
        match target {
            Some(target) => {
                self.navigate_to(target, "button")?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Jump to the page at the raw sidebar position.
    ///
    pub fn jump_to(&mut self, index: usize) -> Result<(), AppError> {
        self.navigate_to(index, "hotkey")
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Record how many screen rows the wrapped page takes and how many are
    /// visible, so scrolling stops once the last row is on screen.
    ///
    pub fn set_content_height(&mut self, rows: usize, viewport: usize) -> &mut Self {
        self.content_height = rows;
        self.viewport_height = viewport;
        self.scroll = self.scroll.min(self.max_scroll());
        self
    }

    fn max_scroll(&self) -> u16 {
        let max = self.content_height.saturating_sub(self.viewport_height);
        u16::try_from(max).unwrap_or(u16::MAX)
    }

    pub fn scroll_down(&mut self, lines: u16) -> &mut Self {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
        self
    }

    pub fn scroll_up(&mut self, lines: u16) -> &mut Self {
        self.scroll = self.scroll.saturating_sub(lines);
        self
    }

    pub fn scroll_top(&mut self) -> &mut Self {
        self.scroll = 0;
        self
    }

    /// Switch to the other language and render the page again.
    ///
    pub fn toggle_locale(&mut self) -> Result<(), AppError> {
        self.locale = self.locale.toggle();
        info!("Switched locale to '{}'", self.locale);
        self.rerender()
    }

    pub fn cycle_theme(&mut self) -> &mut Self {
        self.theme = self.theme.next();
        info!("Switched theme to '{}'", self.theme.name);
        self
    }

    pub fn toggle_focus(&mut self) -> &mut Self {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Page,
            Focus::Page => Focus::Sidebar,
        };
        self
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }
}
