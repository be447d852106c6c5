use crate::app::AppState;
use crate::ui::layout::{header_gap, header_segments, HeaderControl};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Select-all toggle followed by whichever bulk controls apply to the selection.
pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let gap = " ".repeat(header_gap() as usize);

    let mut spans = Vec::new();
    for (i, (control, text)) in header_segments(&state.board.bulk_controls())
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::raw(gap.clone()));
        }
        let style = match control {
            HeaderControl::SelectAll => Style::default().fg(theme.checkbox),
            HeaderControl::Undo => Style::default()
                .fg(theme.action_undo)
                .add_modifier(Modifier::BOLD),
            HeaderControl::MarkDone => Style::default()
                .fg(theme.action_done)
                .add_modifier(Modifier::BOLD),
            HeaderControl::DeleteSelected => Style::default()
                .fg(theme.action_delete)
                .add_modifier(Modifier::BOLD),
        };
        spans.push(Span::styled(text, style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
