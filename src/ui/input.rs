use crate::ui::message::{AppMessage, ViewRoute};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Left, KeyModifiers::ALT) => Some(AppMessage::GoBack),
            (KeyCode::Right, KeyModifiers::ALT) => Some(AppMessage::GoForward),
            (KeyCode::Char('q'), _) => Some(AppMessage::ToggleQueue),
            (KeyCode::Char(' '), _) => Some(AppMessage::TogglePlayPause),
            (KeyCode::Char('n'), _) => Some(AppMessage::NextTrack),
            (KeyCode::Char('p'), _) => Some(AppMessage::PreviousTrack),
            (KeyCode::Char('+'), _) => Some(AppMessage::VolumeUp),
            (KeyCode::Char('='), _) => Some(AppMessage::VolumeUp),
            (KeyCode::Char('-'), _) => Some(AppMessage::VolumeDown),
            (KeyCode::Char('H'), _) => Some(AppMessage::SeekBackward),
            (KeyCode::Char('L'), _) => Some(AppMessage::SeekForward),
            (KeyCode::Char('r'), _) => Some(AppMessage::ToggleRepeat),
            (KeyCode::Char('s'), _) => Some(AppMessage::ToggleShuffle),
            (KeyCode::Char('y'), _) => Some(AppMessage::ToggleLyrics),
            (KeyCode::Char('c'), _) => Some(AppMessage::OpenGenerator),
            (KeyCode::Esc, _) | (KeyCode::Char('['), _) => Some(AppMessage::GoBack),
            (KeyCode::Char(']'), _) => Some(AppMessage::GoForward),
            (KeyCode::Char('1'), _) => Some(AppMessage::NavigateTo(ViewRoute::Home)),
            (KeyCode::Char('2'), _) => Some(AppMessage::NavigateTo(ViewRoute::Search)),
            (KeyCode::Char('3'), _) => Some(AppMessage::NavigateTo(ViewRoute::Library)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_quits_plain_c_creates() {
        assert!(matches!(
            InputHandler::handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppMessage::Quit)
        ));
        assert!(matches!(
            InputHandler::handle_key(key(KeyCode::Char('c'))),
            Some(AppMessage::OpenGenerator)
        ));
    }

    #[test]
    fn number_keys_navigate() {
        assert!(matches!(
            InputHandler::handle_key(key(KeyCode::Char('2'))),
            Some(AppMessage::NavigateTo(ViewRoute::Search))
        ));
        assert!(InputHandler::handle_key(key(KeyCode::Char('x'))).is_none());
    }
}
