use super::mode::Mode;
use super::state::AppState;
use crate::ui::layout::{hit_test, Hit, HeaderControl, RowAction};
use crate::utils::cursor::{set_mouse_cursor, PointerShape};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return Ok(());
    }

    if state.show_help {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                state.help_scroll = state.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                state.help_scroll = state.help_scroll.saturating_add(1);
            }
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                state.show_help = false;
                state.help_scroll = 0;
            }
            _ => {}
        }
        return Ok(());
    }

    match state.mode {
        Mode::Navigate => handle_navigate_mode(key, state),
        Mode::Insert => handle_insert_mode(key, state),
    }
    Ok(())
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) {
    let hovered = state.board.hovered_index();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => state.hover_next(),
        KeyCode::Char('k') | KeyCode::Up => state.hover_prev(),
        KeyCode::Char(' ') => {
            if let Some(index) = hovered {
                state.toggle_selected(index);
            }
        }
        KeyCode::Char('x') | KeyCode::Enter => {
            if let Some(index) = hovered {
                state.run_row_action(index, RowAction::Toggle);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(index) = hovered {
                state.run_row_action(index, RowAction::Delete);
            }
        }
        KeyCode::Char('a') => state.run_header_control(HeaderControl::SelectAll),
        KeyCode::Char('X') => state.run_header_control(HeaderControl::MarkDone),
        KeyCode::Char('U') => state.run_header_control(HeaderControl::Undo),
        KeyCode::Char('D') => state.run_header_control(HeaderControl::DeleteSelected),
        KeyCode::Char('i') | KeyCode::Char('n') | KeyCode::Char('/') => {
            state.mode = Mode::Insert;
        }
        KeyCode::Char('?') => state.show_help = true,
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        _ => {}
    }
}

fn handle_insert_mode(key: KeyEvent, state: &mut AppState) {
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => state.submit_input(),
        KeyCode::Esc | KeyCode::Tab => state.mode = Mode::Navigate,
        KeyCode::Backspace => state.input.backspace(),
        KeyCode::Delete => state.input.delete(),
        KeyCode::Left if alt => state.input.move_word_left(),
        KeyCode::Right if alt => state.input.move_word_right(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        KeyCode::Char('a') if ctrl => state.input.move_home(),
        KeyCode::Char('e') if ctrl => state.input.move_end(),
        KeyCode::Char(c) if !ctrl => state.input.insert_char(c),
        _ => {}
    }
}

pub fn handle_mouse_event(mouse: MouseEvent, state: &mut AppState) -> Result<()> {
    if state.show_help {
        match mouse.kind {
            MouseEventKind::ScrollUp => state.help_scroll = state.help_scroll.saturating_sub(3),
            MouseEventKind::ScrollDown => state.help_scroll = state.help_scroll.saturating_add(3),
            _ => {}
        }
        return Ok(());
    }

    let hit = hit_test(
        &state.layout,
        &state.board,
        state.list_state.offset(),
        mouse.column,
        mouse.row,
    );

    match mouse.kind {
        MouseEventKind::Moved => {
            state.hover_row(hit.row());
            update_pointer_shape(state, hit.is_actionable());
        }
        MouseEventKind::ScrollUp => state.hover_prev(),
        MouseEventKind::ScrollDown => state.hover_next(),
        MouseEventKind::Down(MouseButton::Left) => handle_click(hit, state),
        _ => {}
    }
    Ok(())
}

fn handle_click(hit: Hit, state: &mut AppState) {
    match hit {
        Hit::Input => state.mode = Mode::Insert,
        Hit::Header(control) => state.run_header_control(control),
        Hit::RowCheckbox(index) => {
            state.toggle_selected(index);
            state.hover_row(Some(index));
        }
        Hit::RowAction(index, action) => state.run_row_action(index, action),
        Hit::Row(index) => state.hover_row(Some(index)),
        Hit::Nothing => {}
    }
}

fn update_pointer_shape(state: &mut AppState, actionable: bool) {
    let wanted = if actionable {
        PointerShape::Pointer
    } else {
        PointerShape::Default
    };
    if state.pointer_shape != wanted {
        set_mouse_cursor(wanted);
        state.pointer_shape = wanted;
    }
}
