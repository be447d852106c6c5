use crate::app::AppState;
use crate::todo::Task;
use crate::ui::layout::{row_action_labels, row_actions_width, RowAction, CHECKBOX_WIDTH};
use crate::ui::theme::Theme;
use crate::utils::unicode::{display_width, truncate_to_width};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect) {
    state.sync_list_state();
    let hovered = state.board.hovered_index();
    let width = area.width as usize;

    let items: Vec<ListItem> = state
        .board
        .tasks()
        .items
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let selected = state.board.selection().contains(task.id);
            ListItem::new(render_row(
                task,
                selected,
                hovered == Some(i),
                width,
                &state.theme,
            ))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(state.theme.hover_bg));
    f.render_stateful_widget(list, area, &mut state.list_state);
}

fn render_row<'a>(
    task: &'a Task,
    selected: bool,
    hovered: bool,
    width: usize,
    theme: &Theme,
) -> Line<'a> {
    let checkbox = if selected { "[x]" } else { "[ ]" };
    let mut spans = vec![
        Span::styled(checkbox, Style::default().fg(theme.checkbox)),
        Span::raw(" "),
    ];

    let label_style = if task.done {
        Style::default()
            .fg(theme.done)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.foreground)
    };

    if !hovered {
        let room = width.saturating_sub(CHECKBOX_WIDTH as usize);
        spans.push(Span::styled(truncate_to_width(&task.label, room), label_style));
        return Line::from(spans);
    }

    let actions_width = row_actions_width(task.done) as usize;
    let room = width.saturating_sub(CHECKBOX_WIDTH as usize + actions_width + 1);
    let label = truncate_to_width(&task.label, room);
    let padding = width
        .saturating_sub(CHECKBOX_WIDTH as usize + display_width(&label) + actions_width);

    spans.push(Span::styled(label, label_style));
    spans.push(Span::raw(" ".repeat(padding)));

    for (i, (action, text)) in row_action_labels(task.done).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let color = match action {
            RowAction::Toggle if task.done => theme.action_undo,
            RowAction::Toggle => theme.action_done,
            RowAction::Delete => theme.action_delete,
        };
        spans.push(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_plain_row() {
        let task = Task::new("Buy milk".to_string());
        let line = render_row(&task, false, false, 30, &Theme::default());
        assert_eq!(line_text(&line), "[ ] Buy milk");
    }

    #[test]
    fn test_selected_row_checkbox() {
        let task = Task::new("Buy milk".to_string());
        let line = render_row(&task, true, false, 30, &Theme::default());
        assert!(line_text(&line).starts_with("[x] "));
    }

    #[test]
    fn test_done_row_is_crossed_out() {
        let mut task = Task::new("Buy milk".to_string());
        task.done = true;
        let line = render_row(&task, false, false, 30, &Theme::default());
        assert!(line.spans[2].style.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_hovered_row_actions_flush_right() {
        let task = Task::new("Buy milk".to_string());
        let line = render_row(&task, false, true, 40, &Theme::default());
        let text = line_text(&line);

        assert_eq!(display_width(&text), 40);
        assert!(text.ends_with("[✓ done] [✗ delete]"));
    }

    #[test]
    fn test_hovered_row_truncates_long_label() {
        let task = Task::new("a very long task label that cannot fit".to_string());
        let line = render_row(&task, false, true, 40, &Theme::default());
        let text = line_text(&line);

        assert_eq!(display_width(&text), 40);
        assert!(text.contains('…'));
        assert!(text.ends_with("[✗ delete]"));
    }
}
