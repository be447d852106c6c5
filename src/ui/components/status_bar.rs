use crate::app::mode::Mode;
use crate::app::state::StatusKind;
use crate::app::AppState;
use crate::utils::unicode::display_width;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    if let Some(message) = state.visible_status_message() {
        let bg = match message.kind {
            StatusKind::Info => state.theme.status_message_bg,
            StatusKind::Error => state.theme.error_message_bg,
        };
        render_status_message(f, &message.text, bg, area);
        return;
    }

    let tasks = state.board.tasks();
    let mut left_content = format!(
        " {} | {} tasks, {} done",
        state.mode,
        tasks.len(),
        tasks.done_count()
    );
    let selected = state.board.selection().len();
    if selected > 0 {
        left_content.push_str(&format!(", {selected} selected"));
    }

    let nav_hint = nav_hint(state);
    let version_text = format!("v{VERSION}");

    // " {left} {hint}{padding} {version} "
    let used = display_width(&left_content) + nav_hint.len() + version_text.len() + 3;
    let padding = (area.width as usize).saturating_sub(used);

    let status_line = format!(
        "{} {}{:padding$} {} ",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding
    );

    let style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(status_line, style)])),
        area,
    );
}

fn nav_hint(state: &AppState) -> &'static str {
    match state.mode {
        Mode::Insert => "Enter add  Esc rows",
        Mode::Navigate if state.board.bulk_controls().any_bulk_action() => "X/U/D bulk  ? help",
        Mode::Navigate => "? help  q quit",
    }
}

fn render_status_message(f: &mut Frame, message: &str, bg: Color, area: Rect) {
    let display_message = format!(" {message} ");

    let style = Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let padding = (area.width as usize).saturating_sub(display_width(&display_message));
    let status_line = format!("{}{:padding$}", display_message, "", padding = padding);

    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(status_line, style)])),
        area,
    );
}
