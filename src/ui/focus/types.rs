//! Focus and navigation types for gamepad/keyboard UI navigation

use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Keys
// =============================================================================

/// Opaque identifier for one focusable element in the current view
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FocusKey(String);

impl FocusKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FocusKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for FocusKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for FocusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Navigation types
// =============================================================================

/// Direction of navigation input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

impl NavDirection {
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Navigation intents after device-specific mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavInput {
    Direction(NavDirection),
    /// Activate the focused element (A / cross / Enter)
    Activate,
    Back,
    /// Secondary action on the focused element
    Alt,
    /// Context menu for the focused element
    Context,
    /// Scroll the content area; negative is up
    Scroll(f32),
}

/// Up/down/left/right neighbors of one key. Missing entries are dead ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborSet {
    pub up: Option<FocusKey>,
    pub down: Option<FocusKey>,
    pub left: Option<FocusKey>,
    pub right: Option<FocusKey>,
}

impl NeighborSet {
    pub fn get(&self, direction: NavDirection) -> Option<&FocusKey> {
        match direction {
            NavDirection::Up => self.up.as_ref(),
            NavDirection::Down => self.down.as_ref(),
            NavDirection::Left => self.left.as_ref(),
            NavDirection::Right => self.right.as_ref(),
        }
    }

    pub fn set(&mut self, direction: NavDirection, key: FocusKey) {
        let slot = match direction {
            NavDirection::Up => &mut self.up,
            NavDirection::Down => &mut self.down,
            NavDirection::Left => &mut self.left,
            NavDirection::Right => &mut self.right,
        };
        *slot = Some(key);
    }
}

/// Static adjacency map for one view, authored by hand.
///
/// Edges may name keys no element renders; following one simply moves focus
/// to a key that shows no ring until such an element mounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationEdges {
    map: HashMap<FocusKey, NeighborSet>,
}

impl NavigationEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-way edge
    pub fn edge(mut self, from: impl Into<FocusKey>, direction: NavDirection, to: impl Into<FocusKey>) -> Self {
        self.insert(from.into(), direction, to.into());
        self
    }

    /// Two-way edge: `from` -> `to` in `direction`, and back in the opposite direction
    pub fn link(mut self, from: impl Into<FocusKey>, direction: NavDirection, to: impl Into<FocusKey>) -> Self {
        let (from, to) = (from.into(), to.into());
        self.insert(to.clone(), direction.opposite(), from.clone());
        self.insert(from, direction, to);
        self
    }

    /// Link consecutive keys left/right
    pub fn row<K: Into<FocusKey> + Clone>(mut self, keys: &[K]) -> Self {
        for pair in keys.windows(2) {
            self = self.link(pair[0].clone(), NavDirection::Right, pair[1].clone());
        }
        self
    }

    /// Link consecutive keys up/down
    pub fn column<K: Into<FocusKey> + Clone>(mut self, keys: &[K]) -> Self {
        for pair in keys.windows(2) {
            self = self.link(pair[0].clone(), NavDirection::Down, pair[1].clone());
        }
        self
    }

    pub fn insert(&mut self, from: FocusKey, direction: NavDirection, to: FocusKey) {
        self.map.entry(from).or_default().set(direction, to);
    }

    pub fn neighbor(&self, key: &FocusKey, direction: NavDirection) -> Option<&FocusKey> {
        self.map.get(key).and_then(|set| set.get(direction))
    }
}

/// Everything the focus store needs to know about a view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewGraph {
    pub edges: NavigationEdges,
    /// Focused when the view's controller is created
    pub default_key: Option<FocusKey>,
}

impl ViewGraph {
    pub fn new(edges: NavigationEdges, default_key: impl Into<FocusKey>) -> Self {
        Self {
            edges,
            default_key: Some(default_key.into()),
        }
    }
}
