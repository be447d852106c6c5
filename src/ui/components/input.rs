use crate::app::mode::Mode;
use crate::app::AppState;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Add a new task";

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let focused = state.mode == Mode::Insert;

    let border_style = if focused {
        Style::default().fg(theme.checkbox)
    } else {
        Style::default().fg(theme.placeholder)
    };

    let content = if state.input.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(theme.placeholder))
    } else {
        Span::styled(state.input.as_str(), Style::default().fg(theme.foreground))
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_col = state.input.cursor_column();
    // Keep the cursor in view on long input.
    let scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

    let field = Paragraph::new(Line::from(content))
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    f.render_widget(field, area);

    if focused && area.width > 2 && area.height > 2 {
        let x = area.x + 1 + (cursor_col - scroll) as u16;
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}
