use crate::app::AppState;
use crate::ui::styles::{border_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the stats row: sessions today, tasks ready, average session
pub fn render_stats_pane(f: &mut Frame, app: &AppState, completed_today: u32, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let average = match app.average_session() {
        Some(minutes) => format!("{} min", minutes),
        None => "N/A".to_string(),
    };

    render_stat(f, columns[0], " Sessions Today ", &completed_today.to_string());
    render_stat(f, columns[1], " Tasks Ready ", &app.queue.ready_count().to_string());
    render_stat(f, columns[2], " Avg Session ", &average);
}

fn render_stat(f: &mut Frame, area: Rect, title: &str, value: &str) {
    let paragraph = Paragraph::new(Line::raw(value.to_string())).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title.to_string(), title_style())),
    );
    f.render_widget(paragraph, area);
}
