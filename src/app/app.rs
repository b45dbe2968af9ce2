// Core app structure and view lifecycle

mod eframe_impl;

use super::views::{sample_articles, sample_games, sample_mods, view_graph, Article, Game, ModEntry, ViewKind};
use crate::config::DeckConfig;
use crate::input::InputMethodDetector;
use crate::ui::focus::{DirectionalNavigator, FocusController, FocusRingStyle, NavigatorSettings};

/// Everything that lives exactly as long as one view is on screen
pub struct ActiveView {
    pub kind: ViewKind,
    pub focus: FocusController,
    pub navigator: DirectionalNavigator,
    /// The view was opened from its tab; the tab takes focus on first draw
    pub focus_tab: bool,
    /// Right stick scroll waiting to be applied to the content area
    pub pending_scroll: f32,
    /// Focus moved by keys or gamepad; bring the focused element into view
    pub scroll_to_focus: bool,
}

impl ActiveView {
    pub fn new(kind: ViewKind, items: usize, settings: NavigatorSettings, focus_tab: bool) -> Self {
        let mut navigator = DirectionalNavigator::new(settings);
        navigator.start();
        tracing::debug!("view: entering {}", kind.title());
        Self {
            kind,
            focus: FocusController::new(view_graph(kind, items)),
            navigator,
            focus_tab,
            pending_scroll: 0.0,
            scroll_to_focus: false,
        }
    }
}

pub struct DeckApp {
    pub options: DeckConfig,
    /// Whether views may open gamepads
    pub gamepad: bool,
    pub ring: FocusRingStyle,
    /// Outlives views: the input method carries across view switches
    pub detector: InputMethodDetector,
    pub view: ActiveView,
    pub status: String,

    pub games: Vec<Game>,
    pub articles: Vec<Article>,
    pub mods: Vec<ModEntry>,
}

impl DeckApp {
    pub fn new(options: DeckConfig, gamepad: bool) -> Self {
        let games = sample_games();
        let settings = NavigatorSettings::from_config(&options, gamepad);
        let view = ActiveView::new(ViewKind::Library, games.len(), settings, false);

        Self {
            ring: FocusRingStyle::from_config(&options.focus_ring),
            options,
            gamepad,
            detector: InputMethodDetector::new(),
            view,
            status: String::new(),
            games,
            articles: sample_articles(),
            mods: sample_mods(),
        }
    }

    pub fn item_count(&self, kind: ViewKind) -> usize {
        match kind {
            ViewKind::Library => self.games.len(),
            ViewKind::News => self.articles.len(),
            ViewKind::Mods => self.mods.len(),
        }
    }

    /// Tear down the current view's focus store and navigator and build new ones
    pub fn switch_view(&mut self, kind: ViewKind, from_tab: bool) {
        if kind == self.view.kind {
            return;
        }
        // Buttons still held (the Back that caused this switch) stay held
        let held = self.view.navigator.take_held();
        // Release the old view's controllers before the new view opens them
        self.view.navigator.stop();
        let settings = NavigatorSettings {
            announce_existing: false,
            ..NavigatorSettings::from_config(&self.options, self.gamepad)
        };
        let mut next = ActiveView::new(kind, self.item_count(kind), settings, from_tab);
        next.navigator.keep_held(held);
        let old = std::mem::replace(&mut self.view, next);
        tracing::info!("view: {} -> {}", old.kind.title(), kind.title());
    }
}
