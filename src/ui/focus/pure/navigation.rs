// Graph traversal over a view's navigation edges (pure functions)

use std::collections::{HashSet, VecDeque};

use crate::ui::focus::types::{FocusKey, NavDirection, NavigationEdges};

const ALL_DIRECTIONS: [NavDirection; 4] = [
    NavDirection::Up,
    NavDirection::Down,
    NavDirection::Left,
    NavDirection::Right,
];

/// Where focus moves from `focused` in `direction`.
/// None means stay put: nothing focused, or no edge that way (no wraparound).
pub fn next_focus<'a>(
    edges: &'a NavigationEdges,
    focused: Option<&FocusKey>,
    direction: NavDirection,
) -> Option<&'a FocusKey> {
    focused.and_then(|key| edges.neighbor(key, direction))
}

/// Every key reachable from `start` by following edges
pub fn reachable_from(edges: &NavigationEdges, start: &FocusKey) -> HashSet<FocusKey> {
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start.clone()]);

    while let Some(key) = queue.pop_front() {
        for direction in ALL_DIRECTIONS {
            if let Some(next) = edges.neighbor(&key, direction) {
                if seen.insert(next.clone()) {
                    queue.push_back(next.clone());
                }
            }
        }
    }

    seen
}

/// Edges whose target is not among `known` keys, as (from, direction, to).
/// These are legal dead transitions; views use this to catch typos.
pub fn unknown_targets(
    edges: &NavigationEdges,
    known: &HashSet<FocusKey>,
) -> Vec<(FocusKey, NavDirection, FocusKey)> {
    let mut out = Vec::new();
    for from in known {
        for direction in ALL_DIRECTIONS {
            if let Some(to) = edges.neighbor(from, direction) {
                if !known.contains(to) {
                    out.push((from.clone(), direction, to.clone()));
                }
            }
        }
    }
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}
