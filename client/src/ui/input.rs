use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::Intent;
use crate::ui::layout::column_at;

pub fn map_key(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'c') => Some(Intent::Quit),
            _ => None,
        };
    }
    let intent = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Intent::Quit,
        KeyCode::Left | KeyCode::Char('h') => Intent::CursorLeft,
        KeyCode::Right | KeyCode::Char('l') => Intent::CursorRight,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => Intent::DropSelected,
        KeyCode::Char(ch @ '1'..='7') => Intent::DropInColumn(ch as usize - '1' as usize),
        KeyCode::Char('p') => Intent::CycleEnginePlayer,
        KeyCode::Char('a') => Intent::ToggleAlgorithm,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char(']') => Intent::RaiseDifficulty,
        KeyCode::Char('-') | KeyCode::Char('[') => Intent::LowerDifficulty,
        KeyCode::Char('r') => Intent::Reset,
        _ => return None,
    };
    Some(intent)
}

/// Left click on a board cell drops into its column.
pub fn map_mouse(mouse: MouseEvent, area: Rect) -> Option<Intent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            column_at(area, mouse.column, mouse.row).map(Intent::DropInColumn)
        }
        _ => None,
    }
}
