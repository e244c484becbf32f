use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, default_style, done_style, priority_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the focus queue pane
pub fn render_queue_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .queue
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Line::raw(
            "No focus tasks yet. Press 'a' to queue some deep work.",
        ))])
    } else {
        List::new(items)
    };

    let list = list.block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Focus Queue ", title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for a queued task
/// Format: [x] Write report  (25 min est) [high]
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    spans.push(Span::raw(checkbox.to_string()));

    if task.completed {
        spans.push(Span::styled(task.text.clone(), done_style()));
    } else {
        spans.push(Span::raw(task.text.clone()));
        spans.push(Span::styled(
            format!("  ({} min est)", task.estimated_length_min),
            border_style(),
        ));
    }

    spans.push(Span::raw(" ".to_string()));
    spans.push(Span::styled(
        format!("[{}]", task.priority.label()),
        priority_style(task.priority),
    ));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;

    #[test]
    fn test_create_task_line() {
        let task = Task::new(1, "Test task".to_string(), Priority::High, 25);
        let line = create_task_line(&task);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Test task"));
        assert!(line_str.contains("[high]"));
        assert!(line_str.contains("25 min est"));
    }

    #[test]
    fn test_completed_task_line_drops_estimate() {
        let mut task = Task::new(1, "Done task".to_string(), Priority::Low, 90);
        task.completed = true;
        let line = create_task_line(&task);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("[x]"));
        assert!(!line_str.contains("min est"));
    }
}
