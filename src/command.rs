use crate::game::Arrow;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Move(Arrow),
}

impl Command {
    /// Map a key event to a command, ignoring whether it's a press or a
    /// release
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Esc) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => {
                Some(Command::Move(Arrow::Up))
            }
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => {
                Some(Command::Move(Arrow::Down))
            }
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => {
                Some(Command::Move(Arrow::Left))
            }
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => {
                Some(Command::Move(Arrow::Right))
            }
            _ => None,
        }
    }
}
