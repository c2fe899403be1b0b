use tracing::debug;

use crate::ui::message::ViewRoute;

/// Browser-style history: a stack of routes and a cursor into it.
#[derive(Debug, Clone)]
pub struct Router {
    stack: Vec<ViewRoute>,
    cursor: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(ViewRoute::Home)
    }
}

impl Router {
    pub fn new(initial: ViewRoute) -> Self {
        Self {
            stack: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &ViewRoute {
        &self.stack[self.cursor]
    }

    /// Drops any forward entries and appends `route`. Navigating to the
    /// current route changes nothing.
    pub fn navigate_to(&mut self, route: ViewRoute) {
        if *self.current() == route {
            return;
        }
        self.stack.truncate(self.cursor + 1);
        debug!(route = ?route, "navigate_to");
        self.stack.push(route);
        self.cursor = self.stack.len() - 1;
    }

    pub fn go_back(&mut self) {
        if self.can_go_back() {
            self.cursor -= 1;
        }
    }

    pub fn go_forward(&mut self) {
        if self.can_go_forward() {
            self.cursor += 1;
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.stack.len()
    }

    pub fn stack(&self) -> &[ViewRoute] {
        &self.stack
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(id: &str) -> ViewRoute {
        ViewRoute::Playlist(id.to_string())
    }

    #[test]
    fn starts_at_home_with_no_history() {
        let router = Router::default();
        assert_eq!(router.current(), &ViewRoute::Home);
        assert!(!router.can_go_back());
        assert!(!router.can_go_forward());
    }

    #[test]
    fn back_then_forward_round_trips() {
        let mut router = Router::default();
        router.navigate_to(ViewRoute::Search);
        assert!(router.can_go_back());

        router.go_back();
        assert_eq!(router.current(), &ViewRoute::Home);
        assert!(router.can_go_forward());

        router.go_forward();
        assert_eq!(router.current(), &ViewRoute::Search);
        assert!(!router.can_go_forward());
    }

    #[test]
    fn navigating_to_current_is_idempotent() {
        let mut router = Router::default();
        router.navigate_to(playlist("a"));
        router.navigate_to(playlist("a"));
        assert_eq!(router.stack().len(), 2);
        assert_eq!(router.cursor(), 1);
    }

    #[test]
    fn fresh_navigation_discards_forward_entries() {
        let mut router = Router::default();
        router.navigate_to(playlist("a"));
        router.navigate_to(playlist("b"));
        router.go_back();
        router.go_back();
        router.navigate_to(playlist("c"));

        assert_eq!(router.stack(), &[ViewRoute::Home, playlist("c")]);
        assert_eq!(router.cursor(), 1);
        assert!(!router.can_go_forward());
    }

    #[test]
    fn moves_at_the_edges_are_noops() {
        let mut router = Router::default();
        router.go_back();
        router.go_forward();
        assert_eq!(router.cursor(), 0);
        assert_eq!(router.current(), &ViewRoute::Home);
    }
}
