//! Maps terminal events onto game actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::difficulty::Difficulty;
use crate::game::{Action, Mode};

pub fn action_for_event(event: &Event, mode: Mode) -> Option<Action> {
    match event {
        Event::Key(key) => action_for_key(key, mode),
        Event::Mouse(mouse) => action_for_mouse(mouse),
        _ => None,
    }
}

pub fn action_for_key(key: &KeyEvent, mode: Mode) -> Option<Action> {
    // Some platforms report releases and repeats as well.
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => return Some(Action::Jump),
        KeyCode::Char('s') => return Some(Action::ToggleMute),
        KeyCode::Char('q') => return Some(Action::Quit),
        _ => {}
    }

    match mode {
        Mode::Idle => match key.code {
            KeyCode::Enter => Some(Action::Start),
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        Mode::DifficultySelect => match key.code {
            KeyCode::Char('1') | KeyCode::Char('e') => Some(Action::Select(Difficulty::Easy)),
            KeyCode::Char('2') | KeyCode::Char('m') => Some(Action::Select(Difficulty::Medium)),
            KeyCode::Char('3') | KeyCode::Char('h') => Some(Action::Select(Difficulty::Hard)),
            KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            _ => None,
        },
        Mode::Playing => match key.code {
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        Mode::GameOver => match key.code {
            KeyCode::Char('r') | KeyCode::Enter => Some(Action::Retry),
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
    }
}

/// A left click anywhere on the play surface flaps.
pub fn action_for_mouse(mouse: &MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Jump),
        _ => None,
    }
}
