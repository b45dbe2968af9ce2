//! Focus store for one view
//!
//! A [`FocusController`] owns the focused key and the view's static
//! adjacency map. It is created with the view and dropped with it, so focus
//! never leaks between views. Focusable elements only read it, except for
//! the mount/activation hooks they call while drawing.

use std::collections::HashSet;

use crate::ui::focus::pure::navigation::next_focus;
use crate::ui::focus::types::{FocusKey, NavDirection, ViewGraph};

#[derive(Debug, Default)]
pub struct FocusController {
    graph: ViewGraph,
    focused: Option<FocusKey>,
    /// Bumped on every actual focus change
    generation: u64,
    /// Elements drawn last frame
    mounted: HashSet<FocusKey>,
    /// Elements drawn so far this frame
    seen: HashSet<FocusKey>,
    activation_pending: bool,
}

impl FocusController {
    /// Focus starts on the graph's default key, if it has one
    pub fn new(graph: ViewGraph) -> Self {
        let focused = graph.default_key.clone();
        Self {
            graph,
            focused,
            ..Self::default()
        }
    }

    pub fn focused(&self) -> Option<&FocusKey> {
        self.focused.as_ref()
    }

    pub fn is_focused(&self, key: &FocusKey) -> bool {
        self.focused.as_ref() == Some(key)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Make `key` the focused key. No check that anything renders it.
    pub fn set_focus(&mut self, key: FocusKey) {
        if self.focused.as_ref() == Some(&key) {
            return;
        }
        tracing::debug!(
            "focus: {} -> {}",
            self.focused.as_ref().map_or("<none>", |k| k.as_str()),
            key
        );
        self.focused = Some(key);
        self.generation += 1;
        // A pending activation belonged to the element we just left
        self.activation_pending = false;
    }

    /// Follow the focused key's edge in `direction`. Returns true if focus moved.
    pub fn navigate(&mut self, direction: NavDirection) -> bool {
        let Some(next) = next_focus(&self.graph.edges, self.focused.as_ref(), direction).cloned()
        else {
            tracing::trace!("focus: no {:?} edge from {:?}", direction, self.focused);
            return false;
        };
        self.set_focus(next);
        true
    }

    /// Swap in a rebuilt adjacency map; focus is kept
    pub fn replace_graph(&mut self, graph: ViewGraph) {
        self.graph = graph;
    }

    // =========================================================================
    // Element registry
    // =========================================================================

    pub fn begin_frame(&mut self) {
        self.seen.clear();
    }

    /// Called by each focusable element while drawing. On first mount an
    /// `active` element takes focus. Returns true if this is the first frame
    /// the element is drawn.
    pub fn mount(&mut self, key: &FocusKey, active: bool) -> bool {
        self.seen.insert(key.clone());
        let newly_mounted = !self.mounted.contains(key);
        if newly_mounted {
            self.mounted.insert(key.clone());
            if active {
                self.set_focus(key.clone());
            }
        }
        newly_mounted
    }

    /// Finish the frame; returns keys that were not drawn this frame.
    /// Unmounting never clears the focused key, but it does drop a pending
    /// activation nobody drew.
    pub fn end_frame(&mut self) -> Vec<FocusKey> {
        if self.activation_pending
            && !self.focused.as_ref().is_some_and(|k| self.seen.contains(k))
        {
            self.activation_pending = false;
        }
        let mut unmounted: Vec<FocusKey> = self.mounted.difference(&self.seen).cloned().collect();
        unmounted.sort();
        for key in &unmounted {
            self.mounted.remove(key);
            if self.is_focused(key) {
                tracing::debug!("focus: focused element {} unmounted; keeping focus", key);
            }
        }
        unmounted
    }

    pub fn is_mounted(&self, key: &FocusKey) -> bool {
        self.mounted.contains(key)
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Ask the focused element to activate on its next draw. Only armed when
    /// the focused key was drawn last frame; returns whether it was armed.
    pub fn request_activation(&mut self) -> bool {
        let armed = self.focused.as_ref().is_some_and(|k| self.mounted.contains(k));
        if armed {
            self.activation_pending = true;
        } else {
            tracing::trace!("focus: activation ignored, {:?} is not mounted", self.focused);
        }
        armed
    }

    /// Consume a pending activation if `key` is the focused element
    pub fn take_activation(&mut self, key: &FocusKey) -> bool {
        if self.activation_pending && self.is_focused(key) {
            self.activation_pending = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::focus::types::NavigationEdges;

    fn k(s: &str) -> FocusKey {
        FocusKey::from(s)
    }

    fn abc() -> FocusController {
        let edges = NavigationEdges::new()
            .edge("A", NavDirection::Down, "B")
            .edge("B", NavDirection::Up, "A")
            .edge("B", NavDirection::Down, "C")
            .edge("C", NavDirection::Up, "B");
        FocusController::new(ViewGraph::new(edges, "A"))
    }

    #[test]
    fn default_key_is_focused_on_creation() {
        assert_eq!(abc().focused(), Some(&k("A")));
    }

    #[test]
    fn down_down_down_stops_at_c() {
        let mut focus = abc();
        assert!(focus.navigate(NavDirection::Down));
        assert_eq!(focus.focused(), Some(&k("B")));
        assert!(focus.navigate(NavDirection::Down));
        assert_eq!(focus.focused(), Some(&k("C")));
        assert!(!focus.navigate(NavDirection::Down));
        assert_eq!(focus.focused(), Some(&k("C")));
    }

    #[test]
    fn missing_edge_leaves_focus_unchanged() {
        let mut focus = abc();
        let before = focus.generation();
        for direction in [NavDirection::Up, NavDirection::Left, NavDirection::Right] {
            assert!(!focus.navigate(direction));
        }
        assert_eq!(focus.focused(), Some(&k("A")));
        assert_eq!(focus.generation(), before);
    }

    #[test]
    fn set_focus_is_idempotent() {
        let mut focus = abc();
        focus.set_focus(k("B"));
        let generation = focus.generation();
        focus.set_focus(k("B"));
        assert_eq!(focus.generation(), generation);
        assert_eq!(focus.focused(), Some(&k("B")));
    }

    #[test]
    fn set_focus_accepts_unknown_keys() {
        let mut focus = abc();
        focus.set_focus(k("nowhere"));
        assert_eq!(focus.focused(), Some(&k("nowhere")));
        // No edges out of an unknown key
        assert!(!focus.navigate(NavDirection::Up));
    }

    #[test]
    fn no_default_key_means_navigation_is_noop() {
        let edges = NavigationEdges::new().edge("A", NavDirection::Down, "B");
        let mut focus = FocusController::new(ViewGraph {
            edges,
            default_key: None,
        });
        assert_eq!(focus.focused(), None);
        assert!(!focus.navigate(NavDirection::Down));
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn active_element_takes_focus_on_first_mount_only() {
        let mut focus = abc();
        focus.begin_frame();
        assert!(focus.mount(&k("C"), true));
        focus.end_frame();
        assert_eq!(focus.focused(), Some(&k("C")));

        focus.set_focus(k("A"));
        focus.begin_frame();
        assert!(!focus.mount(&k("C"), true));
        focus.end_frame();
        assert_eq!(focus.focused(), Some(&k("A")));
    }

    #[test]
    fn unmounting_other_element_keeps_focus() {
        let mut focus = abc();
        focus.begin_frame();
        focus.mount(&k("A"), false);
        focus.mount(&k("B"), false);
        focus.end_frame();

        focus.begin_frame();
        focus.mount(&k("A"), false);
        let unmounted = focus.end_frame();

        assert_eq!(unmounted, vec![k("B")]);
        assert_eq!(focus.focused(), Some(&k("A")));
        assert!(!focus.is_mounted(&k("B")));
    }

    #[test]
    fn unmounting_focused_element_keeps_key() {
        let mut focus = abc();
        focus.begin_frame();
        focus.mount(&k("A"), false);
        focus.end_frame();

        focus.begin_frame();
        assert_eq!(focus.end_frame(), vec![k("A")]);
        assert_eq!(focus.focused(), Some(&k("A")));
    }

    fn mount_all(focus: &mut FocusController, keys: &[&str]) {
        focus.begin_frame();
        for key in keys {
            focus.mount(&k(key), false);
        }
        focus.end_frame();
    }

    #[test]
    fn activation_goes_to_focused_element_once() {
        let mut focus = abc();
        mount_all(&mut focus, &["A", "B"]);
        assert!(focus.request_activation());
        assert!(!focus.take_activation(&k("B")));
        assert!(focus.take_activation(&k("A")));
        assert!(!focus.take_activation(&k("A")));
    }

    #[test]
    fn moving_focus_drops_pending_activation() {
        let mut focus = abc();
        mount_all(&mut focus, &["A", "B"]);
        focus.request_activation();
        focus.navigate(NavDirection::Down);
        assert!(!focus.take_activation(&k("B")));
    }

    #[test]
    fn stale_focused_key_does_not_arm_activation() {
        let mut focus = abc();
        mount_all(&mut focus, &["B"]);
        // "A" is focused but was never drawn
        assert!(!focus.request_activation());

        // An element mounting later with that key gets nothing
        focus.begin_frame();
        focus.mount(&k("A"), false);
        assert!(!focus.take_activation(&k("A")));
        focus.end_frame();
    }

    #[test]
    fn undrawn_focused_element_drops_pending_activation() {
        let mut focus = abc();
        mount_all(&mut focus, &["A"]);
        assert!(focus.request_activation());

        // "A" is not drawn this frame, so the request expires
        mount_all(&mut focus, &["B"]);
        focus.begin_frame();
        focus.mount(&k("A"), false);
        assert!(!focus.take_activation(&k("A")));
    }

    #[test]
    fn replacing_graph_keeps_focus() {
        let mut focus = abc();
        focus.navigate(NavDirection::Down);
        let edges = NavigationEdges::new().edge("B", NavDirection::Right, "D");
        focus.replace_graph(ViewGraph::new(edges, "A"));
        assert_eq!(focus.focused(), Some(&k("B")));
        assert!(focus.navigate(NavDirection::Right));
        assert_eq!(focus.focused(), Some(&k("D")));
    }
}
