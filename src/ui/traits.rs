use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::ui::{context::AppContext, message::AppMessage, state::AppState};

pub trait View {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext);

    /// Returns a message when the key means something outside the view.
    fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &mut AppState,
        ctx: &AppContext,
    ) -> Option<AppMessage>;

    /// While true, plain keys go to the view instead of the global bindings.
    fn captures_input(&self) -> bool {
        false
    }
}
