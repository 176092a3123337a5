//! Crossterm key translation.
//!
//! Global shortcuts are resolved here, before the core's line editor sees
//! anything: Ctrl+L clears the screen from anywhere, Ctrl+C/Ctrl+Q quit,
//! and Alt+1 through Alt+9 toggle the nth visible detail section. Everything
//! else maps onto the core [`KeyInput`] line-editing keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termfolio_core::{AppEvent, KeyInput};

/// Translate one key press into an app event, if it means anything.
pub fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'q') => Some(AppEvent::Quit),
            KeyCode::Char('l') => Some(AppEvent::ClearScreen),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char(c) = key.code
            && let Some(digit) = c.to_digit(10)
            && digit >= 1
        {
            let index = usize::try_from(digit - 1).unwrap_or(0);
            return Some(AppEvent::ToggleSection(index));
        }
        return None;
    }

    let input = match key.code {
        KeyCode::Enter => KeyInput::Enter,
        KeyCode::Up => KeyInput::Up,
        KeyCode::Down => KeyInput::Down,
        KeyCode::Tab => KeyInput::Tab,
        KeyCode::Backspace => KeyInput::Backspace,
        KeyCode::Char(c) => KeyInput::Char(c),
        _ => return None,
    };
    Some(AppEvent::Key(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_l_clears_the_screen() {
        let event = map_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert!(matches!(event, Some(AppEvent::ClearScreen)));
    }

    #[test]
    fn ctrl_c_and_ctrl_q_quit() {
        for c in ['c', 'q'] {
            let event = map_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
            assert!(matches!(event, Some(AppEvent::Quit)));
        }
    }

    #[test]
    fn alt_digit_toggles_section_by_ordinal() {
        let event = map_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::ALT));
        assert!(matches!(event, Some(AppEvent::ToggleSection(2))));
    }

    #[test]
    fn alt_zero_is_ignored() {
        assert!(map_key(KeyEvent::new(KeyCode::Char('0'), KeyModifiers::ALT)).is_none());
    }

    #[test]
    fn line_editing_keys_pass_through() {
        assert!(matches!(plain_mapped(KeyCode::Enter), AppEvent::Key(KeyInput::Enter)));
        assert!(matches!(plain_mapped(KeyCode::Tab), AppEvent::Key(KeyInput::Tab)));
        assert!(matches!(plain_mapped(KeyCode::Up), AppEvent::Key(KeyInput::Up)));
        assert!(matches!(plain_mapped(KeyCode::Char('s')), AppEvent::Key(KeyInput::Char('s'))));
    }

    #[test]
    fn shifted_characters_keep_their_case() {
        let event = map_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));
        assert!(matches!(event, Some(AppEvent::Key(KeyInput::Char('S')))));
    }

    #[test]
    fn unhandled_keys_are_ignored() {
        assert!(map_key(plain(KeyCode::Esc)).is_none());
        assert!(map_key(plain(KeyCode::F(5))).is_none());
    }

    fn plain_mapped(code: KeyCode) -> AppEvent {
        map_key(plain(code)).unwrap()
    }
}
