pub mod header;
pub mod input;
pub mod status_bar;
pub mod task_list;

use crate::app::AppState;
use crate::ui::layout::ViewLayout;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, state: &mut AppState) {
    let layout = ViewLayout::new(f.area());
    state.layout = layout;

    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(state.theme.background)
                .fg(state.theme.foreground),
        ),
        f.area(),
    );

    let title = Paragraph::new(Line::from(Span::styled(
        "Todo List",
        Style::default()
            .fg(state.theme.title)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, layout.title);

    input::render(f, state, layout.input);

    if state.board.is_empty() {
        render_empty_state(f, state, layout.body);
    } else {
        header::render(f, state, layout.header);
        task_list::render(f, state, layout.list);
    }

    status_bar::render(f, state, layout.status);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_empty_state(f: &mut Frame, state: &AppState, area: Rect) {
    let message = Paragraph::new(Line::from(Span::styled(
        state.empty_message.as_str(),
        Style::default().fg(state.theme.empty_state),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    let height = area.height.min(3);
    f.render_widget(message, Rect { height, ..area });
}

fn help_lines(state: &AppState) -> Vec<Line<'static>> {
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(state.theme.foreground);
    let section_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let section = |title: &str| Line::from(Span::styled(format!("  ── {title} ──"), section_style));
    let entry = |keys: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("    {keys:<16}"), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    vec![
        section("Text Field"),
        entry("Enter", "Add task"),
        entry("Esc / Tab", "Leave the text field"),
        entry("Alt+← / Alt+→", "Move by word"),
        entry("Ctrl+a / Ctrl+e", "Start / end of line"),
        Line::from(""),
        section("Rows"),
        entry("j / ↓  k / ↑", "Move hover"),
        entry("Space", "Select / deselect hovered task"),
        entry("x / Enter", "Mark hovered task done / undo"),
        entry("d / Delete", "Delete hovered task"),
        Line::from(""),
        section("Selection"),
        entry("a", "Select all / uncheck all"),
        entry("X", "Mark selected done"),
        entry("U", "Undo selected"),
        entry("D", "Delete selected"),
        Line::from(""),
        section("Other"),
        entry("i / n / /", "Focus the text field"),
        entry("?", "Toggle this help"),
        entry("q / Esc", "Quit"),
    ]
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let lines = help_lines(state);
    let area = centered_rect(80, 80, f.area());
    let inner_height = area.height.saturating_sub(2);
    let max_scroll = (lines.len() as u16).saturating_sub(inner_height);

    let help = Paragraph::new(lines)
        .scroll((state.help_scroll.min(max_scroll), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .title_bottom(Line::from(" ↑↓ scroll • Esc close ").centered())
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
