//! Views, their sample content and their hand-authored navigation graphs
//!
//! Every view shares the tab bar along the top. Content keys are
//! `game:N`, `news:N` and `mod:N:install` / `mod:N:details`.

use std::collections::HashSet;

use crate::ui::focus::{FocusKey, NavDirection, NavigationEdges, ViewGraph};

/// Games per row in the library grid
pub const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Library,
    News,
    Mods,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Library, ViewKind::News, ViewKind::Mods];

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Library => "Library",
            ViewKind::News => "News",
            ViewKind::Mods => "Mods",
        }
    }

    pub fn tab_key(self) -> FocusKey {
        FocusKey::new(format!("tab:{}", self.title().to_lowercase()))
    }
}

// =============================================================================
// Sample content
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub title: &'static str,
    pub genre: &'static str,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub headline: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModEntry {
    pub name: &'static str,
    pub author: &'static str,
    pub installed: bool,
}

pub fn sample_games() -> Vec<Game> {
    [
        ("Hollow Sunday", "Metroidvania"),
        ("Brass Tides", "Naval strategy"),
        ("Pocket Orbit", "Puzzle"),
        ("Kiln & Kettle", "Crafting"),
        ("Night Bus 9", "Adventure"),
        ("Gravel Kings", "Racing"),
    ]
    .into_iter()
    .map(|(title, genre)| Game {
        title,
        genre,
        favorite: false,
    })
    .collect()
}

pub fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            headline: "Controller layouts now remappable",
            summary: "Per-device layout overrides can be set in settings.json.",
        },
        Article {
            headline: "Hollow Sunday 1.2 released",
            summary: "New boss rush mode and a reworked map screen.",
        },
        Article {
            headline: "Weekend sale: racing games",
            summary: "Gravel Kings and friends are discounted until Monday.",
        },
        Article {
            headline: "Modding spotlight",
            summary: "Three community mods that change how Brass Tides plays.",
        },
        Article {
            headline: "Handheld mode tips",
            summary: "Right stick scrolls long pages. B always goes back.",
        },
    ]
}

pub fn sample_mods() -> Vec<ModEntry> {
    vec![
        ModEntry {
            name: "HD Texture Pack",
            author: "ferrous",
            installed: true,
        },
        ModEntry {
            name: "Quieter Engines",
            author: "moth",
            installed: false,
        },
        ModEntry {
            name: "Extra Save Slots",
            author: "quill",
            installed: false,
        },
        ModEntry {
            name: "Colorblind Palettes",
            author: "aster",
            installed: true,
        },
    ]
}

// =============================================================================
// Focus keys
// =============================================================================

pub fn game_key(index: usize) -> FocusKey {
    FocusKey::new(format!("game:{index}"))
}

pub fn article_key(index: usize) -> FocusKey {
    FocusKey::new(format!("news:{index}"))
}

pub fn mod_install_key(index: usize) -> FocusKey {
    FocusKey::new(format!("mod:{index}:install"))
}

pub fn mod_details_key(index: usize) -> FocusKey {
    FocusKey::new(format!("mod:{index}:details"))
}

/// Index of the game a `game:N` key points at
pub fn game_index(key: &FocusKey) -> Option<usize> {
    key.as_str().strip_prefix("game:")?.parse().ok()
}

/// Index of the mod a `mod:N:...` key points at
pub fn mod_index(key: &FocusKey) -> Option<usize> {
    key.as_str().strip_prefix("mod:")?.split(':').next()?.parse().ok()
}

fn tab_keys() -> Vec<FocusKey> {
    ViewKind::ALL.iter().map(|v| v.tab_key()).collect()
}

/// Every key the view draws, given how many content items it has
pub fn view_keys(kind: ViewKind, items: usize) -> HashSet<FocusKey> {
    let mut keys: HashSet<FocusKey> = tab_keys().into_iter().collect();
    for i in 0..items {
        match kind {
            ViewKind::Library => {
                keys.insert(game_key(i));
            }
            ViewKind::News => {
                keys.insert(article_key(i));
            }
            ViewKind::Mods => {
                keys.insert(mod_install_key(i));
                keys.insert(mod_details_key(i));
            }
        }
    }
    keys
}

// =============================================================================
// Graphs
// =============================================================================

pub fn view_graph(kind: ViewKind, items: usize) -> ViewGraph {
    match kind {
        ViewKind::Library => library_graph(items),
        ViewKind::News => news_graph(items),
        ViewKind::Mods => mods_graph(items),
    }
}

/// Tab bar over a grid; each tab drops into the grid column below it
fn library_graph(games: usize) -> ViewGraph {
    let mut edges = NavigationEdges::new().row(tab_keys().as_slice());

    for (column, tab) in tab_keys().into_iter().enumerate().take(games.min(GRID_COLUMNS)) {
        edges = edges.link(tab, NavDirection::Down, game_key(column));
    }
    for i in 0..games {
        let last_in_row = i % GRID_COLUMNS == GRID_COLUMNS - 1;
        if !last_in_row && i + 1 < games {
            edges = edges.link(game_key(i), NavDirection::Right, game_key(i + 1));
        }
        if i + GRID_COLUMNS < games {
            edges = edges.link(game_key(i), NavDirection::Down, game_key(i + GRID_COLUMNS));
        }
    }

    with_default(edges, games > 0, game_key(0), ViewKind::Library)
}

/// Tab bar over a single column of articles
fn news_graph(articles: usize) -> ViewGraph {
    let column: Vec<FocusKey> = (0..articles).map(article_key).collect();
    let mut edges = NavigationEdges::new()
        .row(tab_keys().as_slice())
        .column(column.as_slice());
    if articles > 0 {
        for tab in tab_keys() {
            edges = edges.edge(tab, NavDirection::Down, article_key(0));
        }
        edges = edges.edge(article_key(0), NavDirection::Up, ViewKind::News.tab_key());
    }

    with_default(edges, articles > 0, article_key(0), ViewKind::News)
}

/// Tab bar over rows of [install, details] buttons
fn mods_graph(mods: usize) -> ViewGraph {
    let installs: Vec<FocusKey> = (0..mods).map(mod_install_key).collect();
    let details: Vec<FocusKey> = (0..mods).map(mod_details_key).collect();
    let mut edges = NavigationEdges::new()
        .row(tab_keys().as_slice())
        .column(installs.as_slice())
        .column(details.as_slice());
    for i in 0..mods {
        edges = edges.link(mod_install_key(i), NavDirection::Right, mod_details_key(i));
    }
    if mods > 0 {
        for tab in tab_keys() {
            edges = edges.edge(tab, NavDirection::Down, mod_install_key(0));
        }
        edges = edges
            .edge(mod_install_key(0), NavDirection::Up, ViewKind::Mods.tab_key())
            .edge(mod_details_key(0), NavDirection::Up, ViewKind::Mods.tab_key());
    }

    with_default(edges, mods > 0, mod_install_key(0), ViewKind::Mods)
}

/// Empty views start on their own tab
fn with_default(edges: NavigationEdges, has_content: bool, first: FocusKey, kind: ViewKind) -> ViewGraph {
    let default_key = if has_content { first } else { kind.tab_key() };
    ViewGraph::new(edges, default_key)
}
