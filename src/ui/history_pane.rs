use crate::app::AppState;
use crate::domain::SessionRecord;
use crate::ui::styles::{border_style, default_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// How many recent sessions the pane shows
const VISIBLE_RECORDS: usize = 10;

/// Render the recent-sessions pane
pub fn render_history_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .records()
        .iter()
        .take(VISIBLE_RECORDS)
        .map(|record| ListItem::new(create_record_line(record)))
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Line::raw("No sessions completed yet."))])
    } else {
        List::new(items)
    };

    let list = list.block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Recent Sessions ", title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for a history record
/// Format: Write report  25 min · Full session · 08/23 14:05
fn create_record_line(record: &SessionRecord) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::styled(record.task.clone(), default_style()));
    spans.push(Span::raw(format!("  {} min", record.actual_duration_min)));

    let share = match record.percent_of_planned() {
        Some(percent) => format!(" · {}% of planned", percent),
        None => " · Full session".to_string(),
    };
    spans.push(Span::styled(share, hint_style()));

    if let Some(at) = record.completed_at_local() {
        spans.push(Span::styled(
            format!(" · {}", at.format("%m/%d %H:%M")),
            hint_style(),
        ));
    }

    Line::from(spans)
}
