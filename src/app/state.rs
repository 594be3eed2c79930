//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use crate::config::AppConfig;
use crate::core::deck::Deck;
use crate::core::page::PageId;
use crate::ui::page_view::HitZone;
use crate::ui::scroll_view::ScrollView;

/// Per-page view state, kept while the page is hidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageViewState {
    pub scroll: ScrollView,
    /// Keyboard focus, as an index into the page's buttons.
    pub focus: Option<usize>,
}

/// Top-level application state.
pub struct AppState {
    /// All pages and which one is raised.
    pub deck: Deck,
    /// Scroll and focus per page, indexed by [`PageId::index`].
    pub views: [PageViewState; 5],
    /// Chrome hidden (terminal counterpart of fullscreen).
    pub presentation: bool,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// User-configurable keybindings and display settings.
    pub config: AppConfig,
    /// Buttons visible after the last draw, in screen coordinates.
    pub hit_zones: Vec<HitZone>,
}

impl AppState {
    pub fn new(deck: Deck, config: AppConfig) -> Self {
        Self {
            deck,
            views: [PageViewState::default(); 5],
            presentation: false,
            should_quit: false,
            status_message: None,
            config,
            hit_zones: Vec::new(),
        }
    }

    pub fn active(&self) -> PageId {
        self.deck.active()
    }

    pub fn active_view(&self) -> &PageViewState {
        &self.views[self.active().index()]
    }

    pub fn active_view_mut(&mut self) -> &mut PageViewState {
        let idx = self.active().index();
        &mut self.views[idx]
    }

    /// Raise `page`.  Hit zones from the previous page are dropped so a click
    /// before the next draw cannot reach a hidden button.
    pub fn show(&mut self, page: PageId) {
        self.deck.show(page);
        self.hit_zones.clear();
        self.status_message = None;
    }
}
